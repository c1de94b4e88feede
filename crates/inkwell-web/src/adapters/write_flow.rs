use inkwell_overlay::{
  ModalService,
  OverlayId,
  PromptLatch
};
use inkwell_shared::{
  DiaryDraft,
  DiaryEntry,
  DraftError,
  Mood
};
use uuid::Uuid;
use web_sys::{
  HtmlInputElement,
  HtmlSelectElement,
  HtmlTextAreaElement
};
use yew::{
  Callback,
  Event,
  Html,
  InputEvent,
  MouseEvent,
  Properties,
  TargetCast,
  function_component,
  hook,
  html,
  use_state
};

use crate::adapters::notice::use_notices;
use crate::app::ui_debug;
use crate::components::{
  Button,
  ButtonVariant,
  DialogFrame
};
use crate::modal::{
  ModalContext,
  use_modal
};
use crate::storage::{
  create_entry,
  update_entry
};

/// Write / edit dialog with a discard
/// confirmation layered on top of it.
#[derive(Clone)]
pub struct WriteFlow {
  modal: ModalContext,
  latch: PromptLatch
}

#[hook]
pub fn use_write_flow() -> WriteFlow {
  let modal = use_modal();
  let latch = use_state(|| {
    PromptLatch::new("write-entry")
  });
  WriteFlow {
    modal,
    latch: (*latch).clone()
  }
}

impl WriteFlow {
  pub fn open_new(
    &self,
    on_saved: Callback<DiaryEntry>
  ) -> Option<OverlayId> {
    self.open(
      None,
      DiaryDraft::default(),
      on_saved
    )
  }

  pub fn open_edit(
    &self,
    entry: &DiaryEntry,
    on_saved: Callback<DiaryEntry>
  ) -> Option<OverlayId> {
    self.open(
      Some(entry.id),
      DiaryDraft::from_entry(entry),
      on_saved
    )
  }

  fn open(
    &self,
    editing: Option<Uuid>,
    initial: DiaryDraft,
    on_saved: Callback<DiaryEntry>
  ) -> Option<OverlayId> {
    self.latch.show(&self.modal, move || {
      html! {
          <WriteDialog editing={editing} initial={initial} on_saved={on_saved} />
      }
    })
  }
}

/// Leaving with unsaved text asks first;
/// an untouched or still-empty draft
/// closes straight away.
fn needs_discard_confirm(
  initial: &DiaryDraft,
  current: &DiaryDraft
) -> bool {
  if current == initial {
    return false;
  }
  !(initial.is_blank() && current.is_blank())
}

#[derive(Properties, PartialEq)]
struct WriteDialogProps {
  editing:  Option<Uuid>,
  initial:  DiaryDraft,
  on_saved: Callback<DiaryEntry>
}

#[function_component(WriteDialog)]
fn write_dialog(
  props: &WriteDialogProps
) -> Html {
  let modal = use_modal();
  let notices = use_notices();
  let draft = {
    let initial = props.initial.clone();
    use_state(move || initial)
  };
  let errors =
    use_state(Vec::<DraftError>::new);
  let discard_latch = use_state(|| {
    PromptLatch::new("discard-draft")
  });

  let on_title = {
    let draft = draft.clone();
    Callback::from(move |e: InputEvent| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      let mut next = (*draft).clone();
      next.title = input.value();
      draft.set(next);
    })
  };

  let on_body = {
    let draft = draft.clone();
    Callback::from(move |e: InputEvent| {
      let input: HtmlTextAreaElement =
        e.target_unchecked_into();
      let mut next = (*draft).clone();
      next.body = input.value();
      draft.set(next);
    })
  };

  let on_mood = {
    let draft = draft.clone();
    Callback::from(move |e: Event| {
      let select: HtmlSelectElement =
        e.target_unchecked_into();
      let Some(mood) =
        Mood::from_key(&select.value())
      else {
        return;
      };
      let mut next = (*draft).clone();
      next.mood = mood;
      draft.set(next);
    })
  };

  let on_cancel = {
    let modal = modal.clone();
    let draft = draft.clone();
    let initial = props.initial.clone();
    let discard_latch =
      (*discard_latch).clone();
    Callback::from(move |_: MouseEvent| {
      if needs_discard_confirm(
        &initial, &draft
      ) {
        discard_latch.show(&modal, || {
          html! { <DiscardDraftDialog /> }
        });
      } else {
        modal.close_top();
      }
    })
  };

  let on_save = {
    let draft = draft.clone();
    let errors = errors.clone();
    let editing = props.editing;
    let on_saved = props.on_saved.clone();
    Callback::from(move |_: MouseEvent| {
      ui_debug(
        "button.save.click",
        "save click fired"
      );
      if let Err(found) = draft.validate() {
        errors.set(found);
        return;
      }
      errors.set(Vec::new());

      let result = match editing {
        | Some(id) => update_entry(id, &draft),
        | None => create_entry(&draft)
      };
      match result {
        | Ok(entry) => {
          // Closes the editor and anything
          // stacked over it.
          modal.close_all();
          on_saved.emit(entry);
          notices.success(if editing.is_some() {
            "Entry updated."
          } else {
            "Entry saved."
          });
        }
        | Err(message) => {
          notices.error(message);
        }
      }
    })
  };

  let title = if props.editing.is_some() {
    "Edit entry"
  } else {
    "Write entry"
  };

  let footer = html! {
      <>
          <Button label="Cancel" onclick={on_cancel} />
          <Button label="Save" variant={ButtonVariant::Primary} onclick={on_save} />
      </>
  };

  html! {
      <DialogFrame title={title} footer={footer}>
          <div class="field">
              <label>{ "Title" }</label>
              <input
                  value={draft.title.clone()}
                  oninput={on_title}
                  placeholder="What happened today?"
              />
          </div>
          <div class="field">
              <label>{ "Mood" }</label>
              <select onchange={on_mood}>
                  {
                      for Mood::ALL.into_iter().map(|mood| html! {
                          <option value={mood.key()} selected={mood == draft.mood}>
                              { mood.label() }
                          </option>
                      })
                  }
              </select>
          </div>
          <div class="field">
              <label>{ "Entry" }</label>
              <textarea
                  value={draft.body.clone()}
                  oninput={on_body}
                  rows="10"
              />
          </div>
          {
              if errors.is_empty() {
                  html! {}
              } else {
                  html! {
                      <ul class="field-errors">
                          { for errors.iter().map(|error| html! { <li>{ error.to_string() }</li> }) }
                      </ul>
                  }
              }
          }
      </DialogFrame>
  }
}

#[function_component(DiscardDraftDialog)]
fn discard_draft_dialog() -> Html {
  let modal = use_modal();

  let on_continue = {
    let modal = modal.clone();
    Callback::from(move |_: MouseEvent| {
      modal.close_top()
    })
  };
  let on_discard =
    Callback::from(move |_: MouseEvent| {
      ui_debug(
        "action.write.discard",
        "discarding draft"
      );
      modal.close_all()
    });

  let footer = html! {
      <>
          <Button label="Continue editing" onclick={on_continue} />
          <Button label="Discard" variant={ButtonVariant::Danger} onclick={on_discard} />
      </>
  };

  html! {
      <DialogFrame title="Discard this entry?" small={true} footer={footer}>
          <div>{ "Your unsaved text will be lost." }</div>
      </DialogFrame>
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn draft(
    title: &str,
    body: &str
  ) -> DiaryDraft {
    DiaryDraft {
      title: title.to_string(),
      body:  body.to_string(),
      mood:  Mood::Calm
    }
  }

  #[test]
  fn untouched_draft_closes_without_asking()
  {
    let initial = draft("Walk", "sunny");
    assert!(!needs_discard_confirm(
      &initial, &initial
    ));
  }

  #[test]
  fn typed_text_asks_before_discarding() {
    let initial = DiaryDraft::default();
    assert!(needs_discard_confirm(
      &initial,
      &draft("", "dear diary")
    ));
  }

  #[test]
  fn whitespace_only_new_draft_closes_without_asking()
  {
    let initial = DiaryDraft::default();
    assert!(!needs_discard_confirm(
      &initial,
      &draft("  ", "\n")
    ));
  }

  #[test]
  fn clearing_an_existing_entry_asks() {
    let initial = draft("Walk", "sunny");
    assert!(needs_discard_confirm(
      &initial,
      &draft("", "")
    ));
  }
}
