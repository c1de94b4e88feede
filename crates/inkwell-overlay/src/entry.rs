//! Overlay entries and their one-shot dismissal callbacks.

use std::any::Any;
use std::fmt;
use std::panic::{
  self,
  AssertUnwindSafe
};

use tracing::{
  error,
  trace
};

/// Dismissal callback attached to an
/// entry. Consumed by the removal that
/// runs it.
pub type DismissFn =
  Box<dyn FnOnce() -> anyhow::Result<()>>;

/// Wraps an infallible closure as a
/// [`DismissFn`].
pub fn on_dismiss<F>(f: F) -> DismissFn
where
  F: FnOnce() + 'static
{
  Box::new(move || {
    f();
    Ok(())
  })
}

pub fn on_dismiss_fallible<F>(
  f: F
) -> DismissFn
where
  F: FnOnce() -> anyhow::Result<()>
    + 'static
{
  Box::new(f)
}

/// Unique token for one pushed entry.
/// Ids from a single stack increase
/// with push order and are never
/// reused.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
)]
pub struct OverlayId(u64);

impl OverlayId {
  pub(crate) const fn new(
    raw: u64
  ) -> Self {
    Self(raw)
  }

  #[inline]
  pub const fn get(self) -> u64 {
    self.0
  }
}

impl fmt::Display for OverlayId {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    write!(f, "overlay-{}", self.0)
  }
}

/// What happened when an entry's
/// dismissal callback was run.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum DismissOutcome {
  NoCallback,
  Completed,
  Failed,
  Panicked
}

/// One layer of the modal stack.
///
/// The content is opaque to the stack
/// and handed back verbatim to whoever
/// renders it. Entries are only built
/// by [`crate::ModalStack::push`] and
/// never change afterwards.
pub struct OverlayEntry<C> {
  id:         OverlayId,
  content:    C,
  on_dismiss: Option<DismissFn>
}

impl<C> OverlayEntry<C> {
  pub(crate) fn new(
    id: OverlayId,
    content: C,
    on_dismiss: Option<DismissFn>
  ) -> Self {
    Self {
      id,
      content,
      on_dismiss
    }
  }

  pub fn id(&self) -> OverlayId {
    self.id
  }

  pub fn content(&self) -> &C {
    &self.content
  }

  pub fn has_dismiss_callback(
    &self
  ) -> bool {
    self.on_dismiss.is_some()
  }

  /// Consumes the entry and runs its
  /// dismissal callback.
  ///
  /// Errors and panics raised by the
  /// callback are logged and reported
  /// through the outcome; they never
  /// reach the caller.
  pub(crate) fn dismiss(
    self
  ) -> DismissOutcome {
    let id = self.id;
    match self.on_dismiss {
      | Some(callback) => {
        run_isolated(id, callback)
      }
      | None => {
        trace!(overlay_id = %id, "entry removed without dismissal callback");
        DismissOutcome::NoCallback
      }
    }
  }
}

impl<C> fmt::Debug for OverlayEntry<C> {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.debug_struct("OverlayEntry")
      .field("id", &self.id)
      .field(
        "on_dismiss",
        &self.on_dismiss.is_some()
      )
      .finish_non_exhaustive()
  }
}

// catch_unwind only helps on targets
// that unwind; wasm32 aborts on panic.
fn run_isolated(
  id: OverlayId,
  callback: DismissFn
) -> DismissOutcome {
  match panic::catch_unwind(
    AssertUnwindSafe(callback)
  ) {
    | Ok(Ok(())) => {
      trace!(overlay_id = %id, "dismissal callback completed");
      DismissOutcome::Completed
    }
    | Ok(Err(err)) => {
      error!(
        overlay_id = %id,
        error = %format!("{err:#}"),
        "dismissal callback failed"
      );
      DismissOutcome::Failed
    }
    | Err(payload) => {
      error!(
        overlay_id = %id,
        panic = %panic_message(payload.as_ref()),
        "dismissal callback panicked"
      );
      DismissOutcome::Panicked
    }
  }
}

fn panic_message(
  payload: &(dyn Any + Send)
) -> String {
  if let Some(message) =
    payload.downcast_ref::<&str>()
  {
    return (*message).to_string();
  }
  if let Some(message) =
    payload.downcast_ref::<String>()
  {
    return message.clone();
  }
  "non-string panic payload"
    .to_string()
}
