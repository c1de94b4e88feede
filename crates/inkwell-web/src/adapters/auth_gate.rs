use inkwell_overlay::{
  ModalService,
  OverlayId,
  PromptLatch
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  function_component,
  hook,
  html,
  use_state
};
use yew_router::prelude::use_navigator;

use crate::app::{
  Route,
  use_session
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

/// Login-required prompt in front of
/// actions that need a writer.
#[derive(Clone)]
pub struct AuthGate {
  modal:     ModalContext,
  latch:     PromptLatch,
  signed_in: bool
}

#[hook]
pub fn use_auth_gate() -> AuthGate {
  let modal = use_modal();
  let session = use_session();
  let latch = use_state(|| {
    PromptLatch::new("login-required")
  });
  let signed_in = session
    .as_ref()
    .is_some_and(|handle| handle.is_some());

  AuthGate {
    modal,
    latch: (*latch).clone(),
    signed_in
  }
}

impl AuthGate {
  /// Runs `action` for a signed-in
  /// writer, otherwise asks them to log
  /// in. Returns whether `action` ran.
  pub fn guard<F>(&self, action: F) -> bool
  where
    F: FnOnce()
  {
    if self.signed_in {
      action();
      return true;
    }
    self.prompt();
    false
  }

  pub fn prompt(&self) -> Option<OverlayId> {
    self.latch.show(&self.modal, || {
      html! { <LoginRequiredDialog /> }
    })
  }
}

#[function_component(LoginRequiredDialog)]
fn login_required_dialog() -> Html {
  let modal = use_modal();
  let navigator = use_navigator();

  let on_later = {
    let modal = modal.clone();
    Callback::from(move |_: MouseEvent| {
      modal.close_top()
    })
  };
  let on_login =
    Callback::from(move |_: MouseEvent| {
      // The whole flow that needed the
      // login ends here.
      modal.close_all();
      if let Some(navigator) = &navigator {
        navigator.push(&Route::Login);
      }
    });

  let footer = html! {
      <>
          <Button label="Later" onclick={on_later} />
          <Button label="Log in" variant={ButtonVariant::Primary} onclick={on_login} />
      </>
  };

  html! {
      <DialogFrame title="Login required" small={true} footer={footer}>
          <div>{ "You need to be logged in to write or change diary entries." }</div>
      </DialogFrame>
  }
}
