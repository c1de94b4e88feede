use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};
use yew_router::prelude::{
  Link,
  use_navigator
};

use crate::adapters::notice::use_notices;
use crate::app::{
  Route,
  ThemeMode,
  use_session
};
use crate::components::Button;
use crate::storage::clear_session;

#[derive(Properties, PartialEq)]
pub struct AppHeaderProps {
  pub theme:           ThemeMode,
  pub on_toggle_theme: Callback<MouseEvent>
}

#[function_component(AppHeader)]
pub fn app_header(
  props: &AppHeaderProps
) -> Html {
  let session = use_session();
  let notices = use_notices();
  let navigator = use_navigator();

  let signed_in = session
    .as_ref()
    .and_then(|handle| (**handle).clone());

  let on_logout = {
    let session = session.clone();
    Callback::from(move |_: MouseEvent| {
      clear_session();
      if let Some(session) = &session {
        session.set(None);
      }
      tracing::info!("signed out");
      notices.success("Signed out.");
      if let Some(navigator) = &navigator {
        navigator.push(&Route::Diary);
      }
    })
  };

  let theme_label = match props.theme {
    | ThemeMode::Day => "Night mode",
    | ThemeMode::Night => "Day mode"
  };

  html! {
      <header class="topbar">
          <Link<Route> to={Route::Diary}>
              <span class="brand">{ "Inkwell" }</span>
          </Link<Route>>
          <div class="actions">
              <Button label={theme_label} onclick={props.on_toggle_theme.clone()} />
              {
                  match signed_in {
                      Some(name) => html! {
                          <>
                              <span class="badge">{ name }</span>
                              <Button label="Log out" onclick={on_logout} />
                          </>
                      },
                      None => html! {
                          <Link<Route> to={Route::Login}>
                              <span class="btn ok">{ "Log in" }</span>
                          </Link<Route>>
                      }
                  }
              }
          </div>
      </header>
  }
}
