use inkwell_shared::DiaryEntry;
use yew::{
  Callback,
  Html,
  MouseEvent,
  function_component,
  html,
  use_state
};

use crate::adapters::auth_gate::use_auth_gate;
use crate::adapters::write_flow::use_write_flow;
use crate::app::ui_debug;
use crate::components::{
  Button,
  ButtonVariant,
  DiaryCard,
  EmptyState
};
use crate::storage::load_entries;

#[function_component(DiaryListPage)]
pub fn diary_list_page() -> Html {
  let entries = use_state(load_entries);
  let auth_gate = use_auth_gate();
  let write = use_write_flow();

  let on_write = {
    let entries = entries.clone();
    Callback::from(move |_: MouseEvent| {
      ui_debug(
        "button.write.click",
        "write click fired"
      );
      let entries = entries.clone();
      auth_gate.guard(|| {
        write.open_new(Callback::from(
          move |_: DiaryEntry| {
            entries.set(load_entries())
          }
        ));
      });
    })
  };

  let list = if entries.is_empty() {
    html! {
        <EmptyState message="Nothing written yet. Your first entry starts here." />
    }
  } else {
    html! {
        <div class="list">
            {
                for entries.iter().map(|entry| html! {
                    <DiaryCard key={entry.id.to_string()} entry={entry.clone()} />
                })
            }
        </div>
    }
  };

  html! {
      <section class="diary-list">
          <div class="toolbar">
              <h2>{ "Diary" }</h2>
              <Button label="Write" variant={ButtonVariant::Primary} onclick={on_write} />
          </div>
          { list }
      </section>
  }
}
