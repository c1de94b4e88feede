//! Modal stack for nested dialogs.
//!
//! `ModalStack` keeps every open overlay in push order (bottom to top).
//! Only the newest entry is considered interactive by the host; the
//! stack itself just records order and runs dismissal callbacks.
//!
//! # Invariants
//!
//! - Order is push chronology: growth appends, shrinkage pops the end.
//! - Each entry's dismissal callback runs exactly once, at removal.
//! - `close_all` removes newest-first, so a child is dismissed before
//!   its parent.
//! - No deduplication. Two pushes of identical content are two layers.
//!
//! # Failure Modes
//!
//! - `close_top()` / `close_all()` on an empty stack are no-ops.
//! - A failing or panicking dismissal callback is logged; the rest of
//!   an unwind still runs.
//!
//! Methods here take `&mut self`, so callbacks cannot reach back into
//! the same stack. Use [`crate::SharedModalStack`] when callbacks need
//! to push or close while an unwind is in progress.

use tracing::debug;

use crate::entry::{
  DismissFn,
  DismissOutcome,
  OverlayEntry,
  OverlayId
};

/// Record of one removed entry.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct Closed {
  pub id:      OverlayId,
  pub outcome: DismissOutcome
}

pub struct ModalStack<C> {
  entries: Vec<OverlayEntry<C>>,
  next_id: u64
}

impl<C> Default for ModalStack<C> {
  fn default() -> Self {
    Self::new()
  }
}

impl<C> ModalStack<C> {
  pub fn new() -> Self {
    Self {
      entries: Vec::new(),
      next_id: 1
    }
  }

  // --- Stack Operations ---

  /// Appends a new entry on top and
  /// returns its id. Never replaces or
  /// merges with existing entries.
  pub fn push(
    &mut self,
    content: C,
    on_dismiss: Option<DismissFn>
  ) -> OverlayId {
    let id = OverlayId::new(self.next_id);
    self.next_id += 1;
    self.entries.push(
      OverlayEntry::new(
        id, content, on_dismiss
      )
    );
    debug!(
      overlay_id = %id,
      depth = self.entries.len(),
      "pushed overlay"
    );
    id
  }

  /// Removes the newest entry without
  /// running its callback. The caller
  /// owns the dismissal.
  pub(crate) fn take_top(
    &mut self
  ) -> Option<OverlayEntry<C>> {
    self.entries.pop()
  }

  /// Empties the stack and returns the
  /// removed entries newest-first.
  pub(crate) fn take_all(
    &mut self
  ) -> Vec<OverlayEntry<C>> {
    let mut taken =
      std::mem::take(&mut self.entries);
    taken.reverse();
    taken
  }

  pub fn close_top(
    &mut self
  ) -> Option<Closed> {
    let entry = self.take_top()?;
    debug!(
      overlay_id = %entry.id(),
      depth = self.entries.len(),
      "closing top overlay"
    );
    Some(dismiss_entry(entry))
  }

  /// Removes every entry newest-first.
  /// Returns one record per removed
  /// entry, in removal order.
  pub fn close_all(
    &mut self
  ) -> Vec<Closed> {
    let taken = self.take_all();
    if taken.is_empty() {
      return Vec::new();
    }
    debug!(
      count = taken.len(),
      "closing all overlays"
    );
    taken
      .into_iter()
      .map(dismiss_entry)
      .collect()
  }

  // --- State Queries ---

  #[inline]
  pub fn is_any_open(&self) -> bool {
    !self.entries.is_empty()
  }

  #[inline]
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn top_id(
    &self
  ) -> Option<OverlayId> {
    self
      .entries
      .last()
      .map(OverlayEntry::id)
  }

  pub fn top(
    &self
  ) -> Option<&OverlayEntry<C>> {
    self.entries.last()
  }

  pub fn contains(
    &self,
    id: OverlayId
  ) -> bool {
    self
      .entries
      .iter()
      .any(|entry| entry.id() == id)
  }

  /// Entries bottom to top.
  pub fn iter(
    &self
  ) -> impl DoubleEndedIterator<
    Item = &OverlayEntry<C>
  > + ExactSizeIterator {
    self.entries.iter()
  }

  pub fn ids(&self) -> Vec<OverlayId> {
    self
      .entries
      .iter()
      .map(OverlayEntry::id)
      .collect()
  }
}

pub(crate) fn dismiss_entry<C>(
  entry: OverlayEntry<C>
) -> Closed {
  let id = entry.id();
  let outcome = entry.dismiss();
  Closed { id, outcome }
}

#[cfg(test)]
mod tests {
  use std::cell::RefCell;
  use std::rc::Rc;

  use super::*;
  use crate::entry::{
    on_dismiss,
    on_dismiss_fallible
  };

  fn recorder() -> (
    Rc<RefCell<Vec<&'static str>>>,
    impl Fn(&'static str) -> DismissFn
  ) {
    let log =
      Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let make = move |name: &'static str| {
      let sink = Rc::clone(&sink);
      on_dismiss(move || {
        sink.borrow_mut().push(name)
      })
    };
    (log, make)
  }

  #[test]
  fn push_appends_in_order() {
    let mut stack = ModalStack::new();
    let a = stack.push("a", None);
    let b = stack.push("b", None);
    let c = stack.push("c", None);

    assert_eq!(stack.len(), 3);
    assert_eq!(stack.ids(), vec![a, b, c]);
    assert_eq!(stack.top_id(), Some(c));
    assert!(a < b && b < c);
  }

  #[test]
  fn identical_content_is_not_deduplicated()
  {
    let mut stack = ModalStack::new();
    let first =
      stack.push("login required", None);
    let second =
      stack.push("login required", None);

    assert_ne!(first, second);
    assert_eq!(stack.len(), 2);
  }

  #[test]
  fn close_top_removes_only_newest() {
    let (log, make) = recorder();
    let mut stack = ModalStack::new();
    let a = stack.push("a", Some(make("a")));
    let b = stack.push("b", Some(make("b")));

    let closed = stack.close_top();

    assert_eq!(
      closed,
      Some(Closed {
        id:      b,
        outcome: DismissOutcome::Completed
      })
    );
    assert_eq!(stack.ids(), vec![a]);
    assert!(stack.contains(a));
    assert!(!stack.contains(b));
    assert_eq!(*log.borrow(), vec!["b"]);
  }

  #[test]
  fn close_all_unwinds_newest_first() {
    let (log, make) = recorder();
    let mut stack = ModalStack::new();
    stack.push("a", Some(make("a")));
    stack.push("b", None);
    stack.push("c", Some(make("c")));

    let closed = stack.close_all();

    assert!(!stack.is_any_open());
    assert_eq!(closed.len(), 3);
    assert_eq!(
      closed
        .iter()
        .map(|c| c.outcome)
        .collect::<Vec<_>>(),
      vec![
        DismissOutcome::Completed,
        DismissOutcome::NoCallback,
        DismissOutcome::Completed
      ]
    );
    assert_eq!(
      *log.borrow(),
      vec!["c", "a"]
    );
  }

  #[test]
  fn empty_stack_closes_are_noops() {
    let mut stack =
      ModalStack::<()>::new();
    assert_eq!(stack.close_top(), None);
    assert!(stack.close_all().is_empty());
    assert!(!stack.is_any_open());
    assert_eq!(stack.top_id(), None);
  }

  #[test]
  fn failing_callback_does_not_stop_unwind()
  {
    let (log, make) = recorder();
    let mut stack = ModalStack::new();
    stack.push("a", Some(make("a")));
    stack.push(
      "b",
      Some(on_dismiss_fallible(|| {
        anyhow::bail!("write rejected")
      }))
    );
    stack.push(
      "c",
      Some(on_dismiss(|| {
        panic!("broken consumer")
      }))
    );

    let outcomes: Vec<_> = stack
      .close_all()
      .into_iter()
      .map(|c| c.outcome)
      .collect();

    assert_eq!(
      outcomes,
      vec![
        DismissOutcome::Panicked,
        DismissOutcome::Failed,
        DismissOutcome::Completed
      ]
    );
    assert_eq!(*log.borrow(), vec!["a"]);
    assert!(stack.is_empty());
  }

  #[test]
  fn ids_are_not_reused_after_close() {
    let mut stack = ModalStack::new();
    let first = stack.push((), None);
    stack.close_top();
    let second = stack.push((), None);
    assert!(second > first);
  }
}
