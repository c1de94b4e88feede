//! The one shared modal stack handed to every consumer.
//!
//! `SharedModalStack` wraps a [`ModalStack`] in `Rc<RefCell<..>>` for
//! single-threaded shared ownership. Every operation releases its borrow
//! before running dismissal callbacks or change listeners, so a callback
//! may push, close the top, or close everything without tripping a
//! borrow panic.
//!
//! `close_all` snapshots the entries it removes before running any
//! callback. Entries pushed by a callback during the unwind are not part
//! of the snapshot and stay open.
//!
//! Listeners are held as `Weak` function pointers and pruned lazily
//! during notification; dropping the returned [`Subscription`] detaches
//! the listener.

use std::cell::{
  Cell,
  RefCell
};
use std::fmt;
use std::rc::{
  Rc,
  Weak
};

use tracing::{
  debug,
  trace
};

use crate::entry::{
  DismissFn,
  OverlayId
};
use crate::stack::{
  Closed,
  ModalStack,
  dismiss_entry
};

/// Access point consumers depend on.
pub trait ModalService<C> {
  fn push(
    &self,
    content: C,
    on_dismiss: Option<DismissFn>
  ) -> OverlayId;

  fn close_top(&self);

  fn close_all(&self);

  fn is_any_open(&self) -> bool;
}

type Listener = dyn Fn();

struct Inner<C> {
  stack:     RefCell<ModalStack<C>>,
  listeners: RefCell<Vec<Weak<Listener>>>,
  revision:  Cell<u64>
}

pub struct SharedModalStack<C> {
  inner: Rc<Inner<C>>
}

/// Non-owning handle, for callbacks
/// stored inside the stack itself.
pub struct WeakModalStack<C> {
  inner: Weak<Inner<C>>
}

/// Keeps a change listener attached
/// while alive.
#[must_use = "dropping a Subscription \
              detaches its listener"]
pub struct Subscription {
  _listener: Rc<Listener>
}

impl fmt::Debug for Subscription {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str("Subscription")
  }
}

impl<C> Clone for SharedModalStack<C> {
  fn clone(&self) -> Self {
    Self {
      inner: Rc::clone(&self.inner)
    }
  }
}

impl<C> Clone for WeakModalStack<C> {
  fn clone(&self) -> Self {
    Self {
      inner: Weak::clone(&self.inner)
    }
  }
}

/// Two handles are equal when they
/// share a stack.
impl<C> PartialEq for SharedModalStack<C> {
  fn eq(&self, other: &Self) -> bool {
    Rc::ptr_eq(&self.inner, &other.inner)
  }
}

impl<C> Default for SharedModalStack<C> {
  fn default() -> Self {
    Self::new()
  }
}

impl<C> fmt::Debug for SharedModalStack<C> {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.debug_struct("SharedModalStack")
      .field("depth", &self.len())
      .field(
        "revision",
        &self.revision()
      )
      .finish()
  }
}

impl<C> SharedModalStack<C> {
  pub fn new() -> Self {
    Self {
      inner: Rc::new(Inner {
        stack:     RefCell::new(
          ModalStack::new()
        ),
        listeners: RefCell::new(
          Vec::new()
        ),
        revision:  Cell::new(0)
      })
    }
  }

  pub fn downgrade(
    &self
  ) -> WeakModalStack<C> {
    WeakModalStack {
      inner: Rc::downgrade(&self.inner)
    }
  }

  /// Registers a listener called after
  /// every change to the stack.
  pub fn subscribe<F>(
    &self,
    listener: F
  ) -> Subscription
  where
    F: Fn() + 'static
  {
    let listener: Rc<Listener> =
      Rc::new(listener);
    self
      .inner
      .listeners
      .borrow_mut()
      .push(Rc::downgrade(&listener));
    Subscription {
      _listener: listener
    }
  }

  /// Bumped once per operation that
  /// changed the stack.
  pub fn revision(&self) -> u64 {
    self.inner.revision.get()
  }

  pub fn len(&self) -> usize {
    self.inner.stack.borrow().len()
  }

  pub fn is_empty(&self) -> bool {
    self.inner.stack.borrow().is_empty()
  }

  pub fn top_id(
    &self
  ) -> Option<OverlayId> {
    self.inner.stack.borrow().top_id()
  }

  pub fn contains(
    &self,
    id: OverlayId
  ) -> bool {
    self
      .inner
      .stack
      .borrow()
      .contains(id)
  }

  pub fn ids(&self) -> Vec<OverlayId> {
    self.inner.stack.borrow().ids()
  }

  /// Closes the newest entry and
  /// reports what was removed.
  pub fn close_top_reported(
    &self
  ) -> Option<Closed> {
    let entry = self
      .inner
      .stack
      .borrow_mut()
      .take_top()?;
    debug!(
      overlay_id = %entry.id(),
      "closing top overlay"
    );
    let closed = dismiss_entry(entry);
    self.changed();
    Some(closed)
  }

  /// Closes every entry present when
  /// called, newest-first.
  pub fn close_all_reported(
    &self
  ) -> Vec<Closed> {
    let snapshot = self
      .inner
      .stack
      .borrow_mut()
      .take_all();
    if snapshot.is_empty() {
      return Vec::new();
    }
    debug!(
      count = snapshot.len(),
      "closing all overlays"
    );
    let closed = snapshot
      .into_iter()
      .map(dismiss_entry)
      .collect();
    self.changed();
    closed
  }

  fn changed(&self) {
    let revision =
      self.inner.revision.get() + 1;
    self.inner.revision.set(revision);

    let live: Vec<Rc<Listener>> = {
      let mut listeners =
        self.inner.listeners.borrow_mut();
      listeners.retain(|weak| {
        weak.strong_count() > 0
      });
      listeners
        .iter()
        .filter_map(Weak::upgrade)
        .collect()
    };
    trace!(
      revision,
      listeners = live.len(),
      "notifying overlay listeners"
    );
    for listener in live {
      listener();
    }
  }
}

impl<C: Clone> SharedModalStack<C> {
  /// Copies the current layers, bottom
  /// to top, for rendering.
  pub fn snapshot(
    &self
  ) -> Vec<(OverlayId, C)> {
    self
      .inner
      .stack
      .borrow()
      .iter()
      .map(|entry| {
        (entry.id(), entry.content().clone())
      })
      .collect()
  }
}

impl<C> ModalService<C>
  for SharedModalStack<C>
{
  fn push(
    &self,
    content: C,
    on_dismiss: Option<DismissFn>
  ) -> OverlayId {
    let id = self
      .inner
      .stack
      .borrow_mut()
      .push(content, on_dismiss);
    self.changed();
    id
  }

  fn close_top(&self) {
    let _ = self.close_top_reported();
  }

  fn close_all(&self) {
    let _ = self.close_all_reported();
  }

  fn is_any_open(&self) -> bool {
    self
      .inner
      .stack
      .borrow()
      .is_any_open()
  }
}

impl<C> WeakModalStack<C> {
  pub fn upgrade(
    &self
  ) -> Option<SharedModalStack<C>> {
    self
      .inner
      .upgrade()
      .map(|inner| SharedModalStack { inner })
  }
}

/// Operations on a dropped stack are
/// no-ops.
impl<C> ModalService<C>
  for WeakModalStack<C>
{
  fn push(
    &self,
    content: C,
    on_dismiss: Option<DismissFn>
  ) -> OverlayId {
    match self.upgrade() {
      | Some(stack) => {
        stack.push(content, on_dismiss)
      }
      | None => {
        debug!(
          "push on a dropped modal \
           stack ignored"
        );
        OverlayId::new(0)
      }
    }
  }

  fn close_top(&self) {
    if let Some(stack) = self.upgrade() {
      stack.close_top();
    }
  }

  fn close_all(&self) {
    if let Some(stack) = self.upgrade() {
      stack.close_all();
    }
  }

  fn is_any_open(&self) -> bool {
    self
      .upgrade()
      .is_some_and(|stack| {
        stack.is_any_open()
      })
  }
}

#[cfg(test)]
mod tests {
  use std::cell::RefCell;
  use std::rc::Rc;

  use super::*;
  use crate::entry::on_dismiss;

  #[test]
  fn callback_may_push_during_close_top()
  {
    let stack =
      SharedModalStack::<&str>::new();
    let handle = stack.downgrade();
    stack.push(
      "editor",
      Some(on_dismiss(move || {
        handle.push("saved", None);
      }))
    );

    stack.close_top();

    assert_eq!(stack.len(), 1);
    assert_eq!(
      stack.snapshot()[0].1,
      "saved"
    );
  }

  #[test]
  fn close_all_keeps_entries_pushed_by_callbacks()
  {
    let stack =
      SharedModalStack::<&str>::new();
    let handle = stack.downgrade();
    stack.push("parent", None);
    stack.push(
      "child",
      Some(on_dismiss(move || {
        handle.push("notice", None);
      }))
    );

    let closed = stack.close_all_reported();

    assert_eq!(closed.len(), 2);
    assert_eq!(
      stack
        .snapshot()
        .into_iter()
        .map(|(_, c)| c)
        .collect::<Vec<_>>(),
      vec!["notice"]
    );
  }

  #[test]
  fn callback_calling_close_all_does_not_double_fire()
  {
    let fired =
      Rc::new(RefCell::new(Vec::new()));
    let stack =
      SharedModalStack::<u8>::new();

    for n in 0..3_u8 {
      let fired = Rc::clone(&fired);
      let handle = stack.downgrade();
      stack.push(
        n,
        Some(on_dismiss(move || {
          fired.borrow_mut().push(n);
          handle.close_all();
        }))
      );
    }

    stack.close_all();

    assert_eq!(
      *fired.borrow(),
      vec![2, 1, 0]
    );
    assert!(!stack.is_any_open());
  }

  #[test]
  fn listeners_fire_once_per_change_and_detach_on_drop()
  {
    let stack =
      SharedModalStack::<()>::new();
    let hits = Rc::new(Cell::new(0));
    let seen = Rc::clone(&hits);
    let subscription =
      stack.subscribe(move || {
        seen.set(seen.get() + 1)
      });

    stack.push((), None);
    stack.push((), None);
    stack.close_all();
    assert_eq!(hits.get(), 3);
    assert_eq!(stack.revision(), 3);

    drop(subscription);
    stack.push((), None);
    assert_eq!(hits.get(), 3);
  }

  #[test]
  fn empty_closes_do_not_notify() {
    let stack =
      SharedModalStack::<()>::new();
    let hits = Rc::new(Cell::new(0));
    let seen = Rc::clone(&hits);
    let _subscription =
      stack.subscribe(move || {
        seen.set(seen.get() + 1)
      });

    stack.close_top();
    stack.close_all();

    assert_eq!(hits.get(), 0);
    assert_eq!(stack.revision(), 0);
  }

  #[test]
  fn listener_may_query_the_stack() {
    let stack =
      SharedModalStack::<()>::new();
    let depths =
      Rc::new(RefCell::new(Vec::new()));
    let handle = stack.downgrade();
    let sink = Rc::clone(&depths);
    let _subscription =
      stack.subscribe(move || {
        let depth = handle
          .upgrade()
          .map_or(0, |s| s.len());
        sink.borrow_mut().push(depth);
      });

    stack.push((), None);
    stack.push((), None);
    stack.close_top();

    assert_eq!(
      *depths.borrow(),
      vec![1, 2, 1]
    );
  }

  #[test]
  fn weak_handle_is_inert_after_drop() {
    let stack =
      SharedModalStack::<()>::new();
    let weak = stack.downgrade();
    drop(stack);

    assert!(weak.upgrade().is_none());
    assert!(!weak.is_any_open());
    weak.close_all();
  }

  #[test]
  fn clones_share_one_stack() {
    let stack =
      SharedModalStack::<()>::new();
    let other = stack.clone();
    other.push((), None);
    assert!(stack.is_any_open());
    assert_eq!(stack, other);
    assert_ne!(
      stack,
      SharedModalStack::new()
    );
  }
}
