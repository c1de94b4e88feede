use std::rc::Rc;

use gloo::events::EventListener;
use inkwell_overlay::{
  DismissFn,
  HostAction,
  HostInput,
  HostLayer,
  HostModel,
  ModalService,
  OverlayConfig,
  OverlayId,
  ScrollLock,
  ScrollSurface,
  SharedModalStack
};
use wasm_bindgen::JsCast;
use web_sys::{
  KeyboardEvent,
  MouseEvent
};
use yew::{
  Callback,
  Html,
  classes,
  function_component,
  hook,
  html,
  use_context,
  use_effect_with,
  use_force_update,
  use_mut_ref
};

/// The app-wide modal stack plus the
/// overlay settings it is rendered
/// with. Provided once by the root.
#[derive(Clone, PartialEq)]
pub struct ModalContext {
  pub stack:  SharedModalStack<Html>,
  pub config: Rc<OverlayConfig>
}

impl ModalContext {
  pub fn new(
    config: OverlayConfig
  ) -> Self {
    Self {
      stack:  SharedModalStack::new(),
      config: Rc::new(config)
    }
  }

  pub fn host(&self) -> HostModel {
    HostModel::new(
      (*self.config).clone()
    )
  }
}

impl ModalService<Html> for ModalContext {
  fn push(
    &self,
    content: Html,
    on_dismiss: Option<DismissFn>
  ) -> OverlayId {
    self.stack.push(content, on_dismiss)
  }

  fn close_top(&self) {
    self.stack.close_top();
  }

  fn close_all(&self) {
    self.stack.close_all();
  }

  fn is_any_open(&self) -> bool {
    self.stack.is_any_open()
  }
}

#[hook]
pub fn use_modal() -> ModalContext {
  use_context::<ModalContext>()
    .unwrap_or_else(|| {
      tracing::error!(
        "ModalContext missing; using \
         a detached stack"
      );
      ModalContext::new(
        OverlayConfig::default()
      )
    })
}

struct BodyScroll;

impl ScrollSurface for BodyScroll {
  fn set_scroll_locked(
    &mut self,
    locked: bool
  ) {
    let Some(body) = web_sys::window()
      .and_then(|window| {
        window.document()
      })
      .and_then(|document| {
        document.body()
      })
    else {
      return;
    };

    let style = body.style();
    let result = if locked {
      style.set_property(
        "overflow", "hidden"
      )
    } else {
      style
        .remove_property("overflow")
        .map(|_| ())
    };
    if let Err(error) = result {
      tracing::warn!(
        ?error,
        locked,
        "failed updating body scroll"
      );
    }
  }
}

#[function_component(ModalHost)]
pub fn modal_host() -> Html {
  let modal = use_modal();
  let rerender = use_force_update();
  let scroll_lock =
    use_mut_ref(ScrollLock::new);

  {
    let rerender = rerender.clone();
    use_effect_with(
      modal.clone(),
      move |modal| {
        let subscription =
          modal.stack.subscribe(move || {
            rerender.force_update()
          });
        move || drop(subscription)
      }
    );
  }

  {
    use_effect_with(
      modal.clone(),
      move |modal| {
        let modal = modal.clone();
        let listener =
          web_sys::window().map(|window| {
            EventListener::new(
              &window,
              "keydown",
              move |event| {
                let Some(event) = event
                  .dyn_ref::<KeyboardEvent>()
                else {
                  return;
                };
                if event.key() != "Escape" {
                  return;
                }
                let action = modal
                  .host()
                  .handle(
                    &modal.stack,
                    HostInput::Escape
                  );
                if action
                  == HostAction::CloseTop
                {
                  event.prevent_default();
                }
              }
            )
          });
        move || drop(listener)
      }
    );
  }

  {
    let lock_wanted = modal.config.lock_scroll
      && modal.stack.is_any_open();
    let scroll_lock = scroll_lock.clone();
    use_effect_with(
      lock_wanted,
      move |lock_wanted| {
        scroll_lock
          .borrow_mut()
          .sync(*lock_wanted, &mut BodyScroll);
        || ()
      }
    );
  }

  {
    use_effect_with((), move |_| {
      move || {
        scroll_lock
          .borrow_mut()
          .sync(false, &mut BodyScroll);
      }
    });
  }

  let entries = modal.stack.snapshot();
  if entries.is_empty() {
    return html! {};
  }
  let ids: Vec<OverlayId> = entries
    .iter()
    .map(|(id, _)| *id)
    .collect();
  let layers = modal.host().layers(&ids);

  html! {
      <div class="modal-host">
          {
              for layers
                  .into_iter()
                  .zip(entries)
                  .map(|(layer, (_, content))| render_layer(&modal, layer, content))
          }
      </div>
  }
}

fn render_layer(
  modal: &ModalContext,
  layer: HostLayer,
  content: Html
) -> Html {
  let on_backdrop = {
    let modal = modal.clone();
    let id = layer.id;
    Callback::from(move |_: MouseEvent| {
      modal.host().handle(
        &modal.stack,
        HostInput::BackdropClick(id)
      );
    })
  };
  let buried = !layer.interactive;
  let style = if buried {
    format!(
      "z-index:{};pointer-events:none;",
      layer.z_index
    )
  } else {
    format!("z-index:{};", layer.z_index)
  };

  html! {
      <div
          key={layer.id.get().to_string()}
          class={classes!("modal-backdrop", buried.then_some("buried"))}
          style={style}
          inert={buried}
          aria-hidden={buried.then_some("true")}
          onclick={on_backdrop}
      >
          <div
              class="modal"
              role="dialog"
              aria-modal="true"
              onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
          >
              { content }
          </div>
      </div>
  }
}
