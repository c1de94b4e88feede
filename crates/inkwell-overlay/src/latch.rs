use std::cell::Cell;
use std::rc::Rc;

use tracing::debug;

use crate::entry::{
  DismissFn,
  OverlayId
};
use crate::shared::ModalService;

/// One-shot guard for a single logical
/// prompt.
///
/// `idle -> shown` when [`show`] pushes
/// the prompt; `shown -> idle` only when
/// that entry's dismissal callback runs,
/// whichever way it was closed. Triggers
/// while shown push nothing.
///
/// [`show`]: PromptLatch::show
#[derive(Clone, Debug)]
pub struct PromptLatch {
  name:  &'static str,
  shown: Rc<Cell<bool>>
}

/// Equal when both handles guard the
/// same prompt.
impl PartialEq for PromptLatch {
  fn eq(&self, other: &Self) -> bool {
    Rc::ptr_eq(&self.shown, &other.shown)
  }
}

impl PromptLatch {
  pub fn new(
    name: &'static str
  ) -> Self {
    Self {
      name,
      shown: Rc::new(Cell::new(false))
    }
  }

  pub fn name(&self) -> &'static str {
    self.name
  }

  pub fn is_shown(&self) -> bool {
    self.shown.get()
  }

  /// Pushes the prompt unless it is
  /// already shown. `content` is only
  /// built when a push happens.
  pub fn show<C, S, F>(
    &self,
    service: &S,
    content: F
  ) -> Option<OverlayId>
  where
    S: ModalService<C> + ?Sized,
    F: FnOnce() -> C
  {
    self.show_with(service, content, None)
  }

  /// Like [`PromptLatch::show`], chaining
  /// `then` after the latch reset.
  pub fn show_with<C, S, F>(
    &self,
    service: &S,
    content: F,
    then: Option<DismissFn>
  ) -> Option<OverlayId>
  where
    S: ModalService<C> + ?Sized,
    F: FnOnce() -> C
  {
    if self.shown.get() {
      debug!(
        latch = self.name,
        "prompt already shown; \
         ignoring trigger"
      );
      return None;
    }

    // Set before pushing: change
    // listeners run inside push.
    self.shown.set(true);
    let shown = Rc::clone(&self.shown);
    let name = self.name;
    let reset: DismissFn =
      Box::new(move || {
        shown.set(false);
        debug!(
          latch = name,
          "prompt dismissed; latch reset"
        );
        match then {
          | Some(then) => then(),
          | None => Ok(())
        }
      });

    let id =
      service.push(content(), Some(reset));
    debug!(
      latch = self.name,
      overlay_id = %id,
      "prompt shown"
    );
    Some(id)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::entry::on_dismiss_fallible;
  use crate::shared::SharedModalStack;

  #[test]
  fn second_trigger_while_shown_is_noop() {
    let stack =
      SharedModalStack::<&str>::new();
    let latch =
      PromptLatch::new("login-required");

    let first =
      latch.show(&stack, || "login");
    let second =
      latch.show(&stack, || "login");

    assert!(first.is_some());
    assert!(second.is_none());
    assert_eq!(stack.len(), 1);
    assert!(latch.is_shown());
  }

  #[test]
  fn latch_resets_on_close_top_and_close_all()
  {
    let stack =
      SharedModalStack::<&str>::new();
    let latch = PromptLatch::new("delete");

    latch.show(&stack, || "confirm");
    stack.close_top();
    assert!(!latch.is_shown());

    latch.show(&stack, || "confirm");
    stack.push("other", None);
    stack.close_all();
    assert!(!latch.is_shown());
    assert!(
      latch
        .show(&stack, || "confirm")
        .is_some()
    );
  }

  #[test]
  fn latch_stays_shown_while_only_children_close()
  {
    let stack =
      SharedModalStack::<&str>::new();
    let latch = PromptLatch::new("write");

    latch.show(&stack, || "editor");
    stack.push("cancel?", None);
    stack.close_top();

    assert!(latch.is_shown());
    assert_eq!(stack.len(), 1);
  }

  #[test]
  fn failing_follow_up_still_resets_latch() {
    let stack =
      SharedModalStack::<&str>::new();
    let latch = PromptLatch::new("notice");

    latch.show_with(
      &stack,
      || "saved",
      Some(on_dismiss_fallible(|| {
        anyhow::bail!("follow-up failed")
      }))
    );
    stack.close_top();

    assert!(!latch.is_shown());
  }

  #[test]
  fn clones_share_state() {
    let stack =
      SharedModalStack::<&str>::new();
    let latch = PromptLatch::new("gate");
    let twin = latch.clone();

    latch.show(&stack, || "gate");
    assert_eq!(latch, twin);
    assert_ne!(latch, PromptLatch::new("gate"));
    assert!(twin.is_shown());
    assert!(
      twin.show(&stack, || "gate").is_none()
    );
  }
}
