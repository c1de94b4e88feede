use gloo::timers::callback::Timeout;
use inkwell_overlay::{
  ModalService,
  OverlayId,
  PromptLatch
};
use yew::{
  AttrValue,
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  hook,
  html,
  use_context
};

use crate::components::{
  Button,
  ButtonVariant,
  DialogFrame
};
use crate::modal::{
  ModalContext,
  use_modal
};

#[derive(
  Clone, Copy, PartialEq, Eq, Debug,
)]
pub enum NoticeKind {
  Success,
  Error
}

impl NoticeKind {
  fn title(self) -> &'static str {
    match self {
      | NoticeKind::Success => "Done",
      | NoticeKind::Error => "Something went wrong"
    }
  }
}

/// Success and error notices. One latch
/// per kind, so a burst of identical
/// reports shows a single dialog.
#[derive(Clone, PartialEq)]
pub struct NoticeCenter {
  modal:   ModalContext,
  success: PromptLatch,
  error:   PromptLatch
}

impl NoticeCenter {
  pub fn new(
    modal: ModalContext
  ) -> Self {
    Self {
      modal,
      success: PromptLatch::new(
        "notice-success"
      ),
      error: PromptLatch::new(
        "notice-error"
      )
    }
  }

  /// Shows a success notice that closes
  /// itself after the configured delay
  /// if it is still the top dialog.
  pub fn success(
    &self,
    message: impl Into<String>
  ) -> Option<OverlayId> {
    let id = self.show(
      &self.success,
      NoticeKind::Success,
      message.into()
    )?;
    self.schedule_auto_dismiss(id);
    Some(id)
  }

  pub fn error(
    &self,
    message: impl Into<String>
  ) -> Option<OverlayId> {
    let message = message.into();
    tracing::warn!(%message, "showing error notice");
    self.show(
      &self.error,
      NoticeKind::Error,
      message
    )
  }

  fn show(
    &self,
    latch: &PromptLatch,
    kind: NoticeKind,
    message: String
  ) -> Option<OverlayId> {
    latch.show(&self.modal, move || {
      html! {
          <NoticeDialog kind={kind} message={message} />
      }
    })
  }

  fn schedule_auto_dismiss(
    &self,
    id: OverlayId
  ) {
    let delay =
      self.modal.config.notice_auto_dismiss_ms;
    if delay == 0 {
      return;
    }
    let stack = self.modal.stack.downgrade();
    Timeout::new(delay, move || {
      let Some(stack) = stack.upgrade()
      else {
        return;
      };
      if stack.top_id() == Some(id) {
        tracing::debug!(overlay_id = %id, "auto-dismissing notice");
        stack.close_top();
      }
    })
    .forget();
  }
}

#[hook]
pub fn use_notices() -> NoticeCenter {
  let modal = use_modal();
  use_context::<NoticeCenter>()
    .unwrap_or_else(|| {
      tracing::error!(
        "NoticeCenter missing; notices \
         use a local latch"
      );
      NoticeCenter::new(modal)
    })
}

#[derive(Properties, PartialEq)]
struct NoticeDialogProps {
  kind:    NoticeKind,
  message: AttrValue
}

#[function_component(NoticeDialog)]
fn notice_dialog(
  props: &NoticeDialogProps
) -> Html {
  let modal = use_modal();
  let on_ok = Callback::from(
    move |_: MouseEvent| modal.close_top()
  );
  let variant = match props.kind {
    | NoticeKind::Success => {
      ButtonVariant::Primary
    }
    | NoticeKind::Error => {
      ButtonVariant::Danger
    }
  };

  let footer = html! {
      <Button label="OK" variant={variant} onclick={on_ok} />
  };

  html! {
      <DialogFrame title={props.kind.title()} small={true} footer={footer}>
          <div>{ props.message.clone() }</div>
      </DialogFrame>
  }
}
