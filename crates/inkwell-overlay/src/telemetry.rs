use tracing_subscriber::prelude::*;
use tracing_subscriber::{
  EnvFilter,
  fmt
};

/// Installs the native subscriber.
/// `RUST_LOG` wins over the default
/// filter; a second call is a no-op.
pub fn init_tracing() {
  let filter =
    EnvFilter::try_from_default_env()
      .or_else(|_| {
        EnvFilter::try_new(
          "info,inkwell_overlay=debug,\
           inkwell_shared=debug"
        )
      })
      .unwrap_or_else(|_| {
        EnvFilter::new("info")
      });

  let init_result =
    tracing_subscriber::registry()
      .with(filter)
      .with(
        fmt::layer()
          .with_target(true)
          .with_line_number(true)
      )
      .try_init();

  if let Err(err) = init_result {
    tracing::debug!(
      error = %err,
      "tracing subscriber already set, \
       continuing"
    );
  }
}
