use yew::{
  Html,
  function_component,
  html
};
use yew_router::prelude::Link;

use crate::app::Route;
use crate::components::EmptyState;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
  html! {
      <EmptyState message="Page not found.">
          <Link<Route> to={Route::Diary}>{ "Back to the diary" }</Link<Route>>
      </EmptyState>
  }
}
