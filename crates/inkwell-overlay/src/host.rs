//! Render-independent half of the modal host.
//!
//! The host draws one overlay per stack entry, earliest furthest back,
//! and lets only the top one react to input. `HostModel` computes the
//! layer list and routes Escape / backdrop input; the web frontend only
//! turns layers into markup. `ScrollLock` tracks the page-scroll side
//! effect so the surface is touched on transitions only.

use tracing::{
  debug,
  trace
};

use crate::config::OverlayConfig;
use crate::entry::OverlayId;
use crate::shared::{
  ModalService,
  SharedModalStack
};

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct HostLayer {
  pub id:          OverlayId,
  pub index:       usize,
  pub z_index:     u32,
  pub interactive: bool
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum HostInput {
  Escape,
  BackdropClick(OverlayId)
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum HostAction {
  CloseTop,
  Ignore
}

#[derive(Debug, Clone, PartialEq)]
pub struct HostModel {
  config: OverlayConfig
}

impl Default for HostModel {
  fn default() -> Self {
    Self::new(OverlayConfig::default())
  }
}

impl HostModel {
  pub fn new(
    config: OverlayConfig
  ) -> Self {
    Self { config }
  }

  pub fn config(&self) -> &OverlayConfig {
    &self.config
  }

  /// Layers bottom to top. Only the
  /// last one is interactive.
  pub fn layers(
    &self,
    ids: &[OverlayId]
  ) -> Vec<HostLayer> {
    let top = ids.len().checked_sub(1);
    ids
      .iter()
      .enumerate()
      .map(|(index, id)| HostLayer {
        id: *id,
        index,
        z_index: self.z_index_for(index),
        interactive: Some(index) == top
      })
      .collect()
  }

  pub fn z_index_for(
    &self,
    index: usize
  ) -> u32 {
    let step = u32::try_from(index)
      .unwrap_or(u32::MAX)
      .saturating_mul(self.config.z_step);
    self.config.base_z.saturating_add(step)
  }

  /// Decides what an input does given
  /// the current top entry. Input aimed
  /// at a buried layer is ignored.
  pub fn route(
    &self,
    input: HostInput,
    top: Option<OverlayId>
  ) -> HostAction {
    let Some(top) = top else {
      return HostAction::Ignore;
    };
    let action = match input {
      | HostInput::Escape
        if self.config.close_on_escape =>
      {
        HostAction::CloseTop
      }
      | HostInput::BackdropClick(id)
        if id == top
          && self.config.close_on_backdrop =>
      {
        HostAction::CloseTop
      }
      | _ => HostAction::Ignore
    };
    trace!(?input, top = %top, ?action, "routed host input");
    action
  }

  /// Routes `input` and applies it to
  /// `stack`.
  pub fn handle<C>(
    &self,
    stack: &SharedModalStack<C>,
    input: HostInput
  ) -> HostAction {
    let action =
      self.route(input, stack.top_id());
    if action == HostAction::CloseTop {
      debug!(?input, "host closing top overlay");
      stack.close_top();
    }
    action
  }
}

/// Something whose scrolling can be
/// suspended, usually the page body.
pub trait ScrollSurface {
  fn set_scroll_locked(
    &mut self,
    locked: bool
  );
}

/// Tracks whether background scrolling
/// is suspended and only forwards
/// transitions to the surface.
#[derive(Debug, Default)]
pub struct ScrollLock {
  locked: bool
}

impl ScrollLock {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn is_locked(&self) -> bool {
    self.locked
  }

  /// Returns true when the surface was
  /// updated.
  pub fn sync<S>(
    &mut self,
    any_open: bool,
    surface: &mut S
  ) -> bool
  where
    S: ScrollSurface + ?Sized
  {
    if self.locked == any_open {
      return false;
    }
    self.locked = any_open;
    surface.set_scroll_locked(any_open);
    debug!(
      locked = any_open,
      "page scroll lock changed"
    );
    true
  }
}
