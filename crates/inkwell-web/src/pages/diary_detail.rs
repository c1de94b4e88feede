use inkwell_shared::DiaryEntry;
use uuid::Uuid;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html,
  use_state
};
use yew_router::prelude::Link;

use crate::adapters::auth_gate::use_auth_gate;
use crate::adapters::delete_confirm::use_delete_confirm;
use crate::adapters::write_flow::use_write_flow;
use crate::app::{
  Route,
  ui_debug
};
use crate::components::{
  Button,
  ButtonVariant,
  EmptyState
};
use crate::storage::find_entry;

#[derive(Properties, PartialEq)]
pub struct DiaryDetailPageProps {
  pub id: Uuid
}

#[function_component(DiaryDetailPage)]
pub fn diary_detail_page(
  props: &DiaryDetailPageProps
) -> Html {
  let entry = {
    let id = props.id;
    use_state(move || find_entry(id))
  };
  let auth_gate = use_auth_gate();
  let write = use_write_flow();
  let delete = use_delete_confirm();

  let Some(current) = (*entry).clone() else {
    return html! {
        <EmptyState message="This entry could not be found.">
            <Link<Route> to={Route::Diary}>{ "Back to the diary" }</Link<Route>>
        </EmptyState>
    };
  };

  let on_edit = {
    let auth_gate = auth_gate.clone();
    let entry = entry.clone();
    let current = current.clone();
    Callback::from(move |_: MouseEvent| {
      ui_debug(
        "button.edit.click",
        &current.id.to_string()
      );
      let entry = entry.clone();
      auth_gate.guard(|| {
        write.open_edit(
          &current,
          Callback::from(
            move |saved: DiaryEntry| {
              entry.set(Some(saved))
            }
          )
        );
      });
    })
  };

  let on_delete = {
    let current = current.clone();
    Callback::from(move |_: MouseEvent| {
      ui_debug(
        "button.delete.click",
        &current.id.to_string()
      );
      auth_gate.guard(|| {
        delete.request(&current);
      });
    })
  };

  let created = current
    .created_at
    .format("%Y-%m-%d %H:%M")
    .to_string();
  let edited = (current.updated_at
    != current.created_at)
    .then(|| {
      current
        .updated_at
        .format("%Y-%m-%d %H:%M")
        .to_string()
    });

  html! {
      <article class="panel diary-detail">
          <div class="toolbar">
              <Link<Route> to={Route::Diary}>{ "← Diary" }</Link<Route>>
              <div style="display:flex;gap:6px;">
                  <Button label="Edit" onclick={on_edit} />
                  <Button label="Delete" variant={ButtonVariant::Danger} onclick={on_delete} />
              </div>
          </div>
          <h2>{ &current.title }</h2>
          <div style="display:flex;gap:6px;">
              <span class={format!("badge mood-{}", current.mood.key())}>{ current.mood.label() }</span>
              <span class="badge">{ created }</span>
              {
                  match edited {
                      | Some(edited) => html! { <span class="badge">{ format!("edited {edited}") }</span> },
                      | None => html! {}
                  }
              }
          </div>
          <div class="diary-body">
              { for current.body.lines().map(|line| html! { <p>{ line }</p> }) }
          </div>
      </article>
  }
}
