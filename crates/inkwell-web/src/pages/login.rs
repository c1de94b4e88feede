use web_sys::HtmlInputElement;
use yew::{
  Callback,
  Html,
  InputEvent,
  MouseEvent,
  TargetCast,
  function_component,
  html,
  use_state
};
use yew_router::prelude::use_navigator;

use crate::adapters::notice::use_notices;
use crate::app::{
  Route,
  ui_debug,
  use_session
};
use crate::components::{
  Button,
  ButtonVariant
};
use crate::storage::save_session;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
  let name = use_state(String::new);
  let session = use_session();
  let notices = use_notices();
  let navigator = use_navigator();

  let on_name = {
    let name = name.clone();
    Callback::from(move |e: InputEvent| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      name.set(input.value());
    })
  };

  let on_submit = {
    let name = name.clone();
    Callback::from(move |_: MouseEvent| {
      let trimmed = name.trim().to_string();
      if trimmed.is_empty() {
        notices.error("Enter a name to log in.");
        return;
      }
      ui_debug("action.login", &trimmed);
      if let Err(message) =
        save_session(&trimmed)
      {
        notices.error(message);
        return;
      }
      if let Some(session) = &session {
        session.set(Some(trimmed.clone()));
      }
      if let Some(navigator) = &navigator {
        navigator.push(&Route::Diary);
      }
      notices.success(format!(
        "Welcome, {trimmed}."
      ));
    })
  };

  html! {
      <section class="panel login">
          <h2>{ "Log in" }</h2>
          <div class="field">
              <label>{ "Name" }</label>
              <input
                  value={(*name).clone()}
                  oninput={on_name}
                  placeholder="Who is writing?"
              />
          </div>
          <Button label="Log in" variant={ButtonVariant::Primary} onclick={on_submit} />
      </section>
  }
}
