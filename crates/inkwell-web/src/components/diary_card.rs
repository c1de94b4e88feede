use inkwell_shared::DiaryEntry;
use yew::{
  Html,
  Properties,
  classes,
  function_component,
  html
};
use yew_router::prelude::Link;

use crate::app::Route;

const PREVIEW_CHARS: usize = 120;

#[derive(Properties, PartialEq)]
pub struct DiaryCardProps {
  pub entry: DiaryEntry
}

#[function_component(DiaryCard)]
pub fn diary_card(
  props: &DiaryCardProps
) -> Html {
  let entry = &props.entry;
  let created = entry
    .created_at
    .format("%Y-%m-%d")
    .to_string();

  html! {
      <Link<Route> classes={classes!("row", "diary-card")} to={Route::Entry { id: entry.id }}>
          <div>
              <div style="font-weight:700;">{ &entry.title }</div>
              <div class="preview">{ preview(&entry.body, PREVIEW_CHARS) }</div>
          </div>
          <div style="display:flex;gap:6px;">
              <span class={format!("badge mood-{}", entry.mood.key())}>{ entry.mood.label() }</span>
              <span class="badge">{ created }</span>
          </div>
      </Link<Route>>
  }
}

fn preview(
  body: &str,
  max_chars: usize
) -> String {
  let body = body.trim();
  if body.chars().count() <= max_chars {
    return body.to_string();
  }
  let cut: String =
    body.chars().take(max_chars).collect();
  format!("{}…", cut.trim_end())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn short_bodies_are_kept_whole() {
    assert_eq!(preview(" hi ", 10), "hi");
  }

  #[test]
  fn long_bodies_are_cut_on_char_boundary()
  {
    let body = "오늘은 ".repeat(10);
    let cut = preview(&body, 5);
    assert_eq!(cut, "오늘은 오…");
  }
}
