use gloo::console::log;
use inkwell_overlay::OverlayConfig;
use uuid::Uuid;
use yew::{
  Callback,
  ContextProvider,
  Html,
  MouseEvent,
  UseStateHandle,
  classes,
  function_component,
  hook,
  html,
  use_context,
  use_effect_with,
  use_state
};
use yew_router::prelude::{
  BrowserRouter,
  Routable,
  Switch
};

use crate::adapters::notice::NoticeCenter;
use crate::components::AppHeader;
use crate::modal::{
  ModalContext,
  ModalHost
};
use crate::pages::{
  DiaryDetailPage,
  DiaryListPage,
  LoginPage,
  NotFoundPage
};
use crate::storage::{
  load_session,
  load_theme_mode,
  save_theme_mode
};

const OVERLAY_CONFIG_TOML: &str =
  include_str!("../assets/inkwell.toml");

#[derive(
  Clone, Routable, PartialEq, Debug,
)]
pub enum Route {
  #[at("/")]
  Diary,
  #[at("/diary/:id")]
  Entry { id: Uuid },
  #[at("/login")]
  Login,
  #[not_found]
  #[at("/404")]
  NotFound
}

#[derive(
  Clone, Copy, PartialEq, Eq, Debug,
)]
pub enum ThemeMode {
  Day,
  Night
}

impl ThemeMode {
  pub fn storage_value(
    self
  ) -> &'static str {
    match self {
      | ThemeMode::Day => "day",
      | ThemeMode::Night => "night"
    }
  }

  pub fn class(self) -> &'static str {
    match self {
      | ThemeMode::Day => "theme-day",
      | ThemeMode::Night => "theme-night"
    }
  }

  pub fn toggled(self) -> Self {
    match self {
      | ThemeMode::Day => ThemeMode::Night,
      | ThemeMode::Night => ThemeMode::Day
    }
  }
}

/// Name of the signed-in writer, if
/// any.
pub type SessionHandle =
  UseStateHandle<Option<String>>;

#[hook]
pub fn use_session() -> Option<SessionHandle>
{
  use_context::<SessionHandle>()
}

fn switch(route: Route) -> Html {
  match route {
    | Route::Diary => {
      html! { <DiaryListPage /> }
    }
    | Route::Entry { id } => {
      html! { <DiaryDetailPage id={id} /> }
    }
    | Route::Login => {
      html! { <LoginPage /> }
    }
    | Route::NotFound => {
      html! { <NotFoundPage /> }
    }
  }
}

#[function_component(App)]
pub fn app() -> Html {
  let modal = use_state(|| {
    ModalContext::new(
      OverlayConfig::load_or_default(
        OVERLAY_CONFIG_TOML
      )
    )
  });
  let notices = {
    let modal = (*modal).clone();
    use_state(move || {
      NoticeCenter::new(modal)
    })
  };
  let session = use_state(load_session);
  let theme = use_state(load_theme_mode);

  {
    use_effect_with((), move |_| {
      ui_debug(
        "app.mounted",
        "frontend mounted and modal \
         stack created"
      );
      || ()
    });
  }

  {
    use_effect_with(*theme, move |theme| {
      save_theme_mode(*theme);
      tracing::debug!(
        theme = theme.storage_value(),
        "persisted theme"
      );
      || ()
    });
  }

  let on_toggle_theme = {
    let theme = theme.clone();
    Callback::from(move |_: MouseEvent| {
      theme.set(theme.toggled())
    })
  };

  html! {
      <ContextProvider<ModalContext> context={(*modal).clone()}>
          <ContextProvider<NoticeCenter> context={(*notices).clone()}>
              <ContextProvider<SessionHandle> context={session.clone()}>
                  <BrowserRouter>
                      <div class={classes!("app", theme.class())}>
                          <AppHeader theme={*theme} on_toggle_theme={on_toggle_theme} />
                          <main class="content">
                              <Switch<Route> render={switch} />
                          </main>
                      </div>
                      <ModalHost />
                  </BrowserRouter>
              </ContextProvider<SessionHandle>>
          </ContextProvider<NoticeCenter>>
      </ContextProvider<ModalContext>>
  }
}

pub(crate) fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
