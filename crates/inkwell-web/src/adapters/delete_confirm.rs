use inkwell_overlay::{
  ModalService,
  OverlayId,
  PromptLatch
};
use inkwell_shared::DiaryEntry;
use uuid::Uuid;
use yew::{
  AttrValue,
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  hook,
  html,
  use_state
};
use yew_router::prelude::use_navigator;

use crate::adapters::notice::use_notices;
use crate::app::{
  Route,
  ui_debug
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
use crate::storage::delete_entry;

#[derive(Clone)]
pub struct DeleteConfirm {
  modal: ModalContext,
  latch: PromptLatch
}

#[hook]
pub fn use_delete_confirm() -> DeleteConfirm
{
  let modal = use_modal();
  let latch = use_state(|| {
    PromptLatch::new("delete-entry")
  });
  DeleteConfirm {
    modal,
    latch: (*latch).clone()
  }
}

impl DeleteConfirm {
  pub fn request(
    &self,
    entry: &DiaryEntry
  ) -> Option<OverlayId> {
    let id = entry.id;
    let title = entry.title.clone();
    self.latch.show(&self.modal, move || {
      html! {
          <DeleteConfirmDialog id={id} title={title} />
      }
    })
  }
}

#[derive(Properties, PartialEq)]
struct DeleteConfirmDialogProps {
  id:    Uuid,
  title: AttrValue
}

#[function_component(DeleteConfirmDialog)]
fn delete_confirm_dialog(
  props: &DeleteConfirmDialogProps
) -> Html {
  let modal = use_modal();
  let notices = use_notices();
  let navigator = use_navigator();

  let on_cancel = {
    let modal = modal.clone();
    Callback::from(move |_: MouseEvent| {
      modal.close_top()
    })
  };

  let on_confirm = {
    let id = props.id;
    Callback::from(move |_: MouseEvent| {
      ui_debug(
        "action.delete.confirm",
        &id.to_string()
      );
      match delete_entry(id) {
        | Ok(()) => {
          modal.close_all();
          if let Some(navigator) = &navigator
          {
            navigator.push(&Route::Diary);
          }
          notices.success("Entry deleted.");
        }
        | Err(message) => {
          notices.error(message);
        }
      }
    })
  };

  let footer = html! {
      <>
          <Button label="Cancel" onclick={on_cancel} />
          <Button label="Delete" variant={ButtonVariant::Danger} onclick={on_confirm} />
      </>
  };

  html! {
      <DialogFrame title="Delete entry" small={true} footer={footer}>
          <div>{ format!("Delete \"{}\"?", props.title) }</div>
          <div class="field-help">{ "This cannot be undone." }</div>
      </DialogFrame>
  }
}
