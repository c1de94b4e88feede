pub mod config;
pub mod entry;
pub mod host;
pub mod latch;
pub mod shared;
pub mod stack;
#[cfg(not(target_arch = "wasm32"))]
pub mod telemetry;

pub use config::OverlayConfig;
pub use entry::{
  DismissFn,
  DismissOutcome,
  OverlayEntry,
  OverlayId,
  on_dismiss,
  on_dismiss_fallible
};
pub use host::{
  HostAction,
  HostInput,
  HostLayer,
  HostModel,
  ScrollLock,
  ScrollSurface
};
pub use latch::PromptLatch;
pub use shared::{
  ModalService,
  SharedModalStack,
  Subscription,
  WeakModalStack
};
pub use stack::{
  Closed,
  ModalStack
};
