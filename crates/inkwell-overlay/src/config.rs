use anyhow::Context;
use serde::{
  Deserialize,
  Serialize
};
use tracing::{
  error,
  info,
  warn
};

const MAX_NOTICE_AUTO_DISMISS_MS: u32 =
  60_000;

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub struct OverlayConfig {
  #[serde(default = "default_version")]
  pub version: u32,
  #[serde(default = "default_base_z")]
  pub base_z: u32,
  #[serde(default = "default_z_step")]
  pub z_step: u32,
  #[serde(default = "overlay_true")]
  pub close_on_escape: bool,
  #[serde(default = "overlay_true")]
  pub close_on_backdrop: bool,
  #[serde(default = "overlay_true")]
  pub lock_scroll: bool,
  #[serde(
    default = "default_notice_auto_dismiss_ms"
  )]
  pub notice_auto_dismiss_ms: u32
}

fn default_version() -> u32 {
  1
}

fn default_base_z() -> u32 {
  1000
}

fn default_z_step() -> u32 {
  10
}

fn overlay_true() -> bool {
  true
}

fn default_notice_auto_dismiss_ms()
-> u32 {
  2500
}

impl Default for OverlayConfig {
  fn default() -> Self {
    Self {
      version:                default_version(),
      base_z:                 default_base_z(),
      z_step:                 default_z_step(),
      close_on_escape:        true,
      close_on_backdrop:      true,
      lock_scroll:            true,
      notice_auto_dismiss_ms:
        default_notice_auto_dismiss_ms()
    }
  }
}

#[derive(Deserialize)]
struct ConfigFile {
  #[serde(default)]
  overlay: Option<OverlayConfig>
}

impl OverlayConfig {
  /// Parses the `[overlay]` table of a
  /// TOML document. A missing table
  /// yields the defaults.
  pub fn from_toml_str(
    raw: &str
  ) -> anyhow::Result<Self> {
    let file =
      toml::from_str::<ConfigFile>(raw)
        .context(
          "failed to parse overlay \
           config"
        )?;
    let mut config =
      file.overlay.unwrap_or_default();
    config.sanitize();
    Ok(config)
  }

  /// Same as [`Self::from_toml_str`]
  /// but falls back to defaults.
  pub fn load_or_default(
    raw: &str
  ) -> Self {
    match Self::from_toml_str(raw) {
      | Ok(config) => {
        info!(
          version = config.version,
          base_z = config.base_z,
          z_step = config.z_step,
          "loaded overlay config"
        );
        config
      }
      | Err(err) => {
        error!(error = %format!("{err:#}"), "failed parsing overlay config; using defaults");
        Self::default()
      }
    }
  }

  fn sanitize(&mut self) {
    if self.z_step == 0 {
      warn!(
        "overlay z_step must be at \
         least 1; using 1"
      );
      self.z_step = 1;
    }
    if self.notice_auto_dismiss_ms
      > MAX_NOTICE_AUTO_DISMISS_MS
    {
      warn!(
        requested =
          self.notice_auto_dismiss_ms,
        "notice auto-dismiss delay \
         clamped"
      );
      self.notice_auto_dismiss_ms =
        MAX_NOTICE_AUTO_DISMISS_MS;
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_table_uses_defaults() {
    let config =
      OverlayConfig::from_toml_str("")
        .expect("empty document parses");
    assert_eq!(
      config,
      OverlayConfig::default()
    );
  }

  #[test]
  fn partial_table_keeps_other_defaults()
  {
    let config =
      OverlayConfig::from_toml_str(
        "[overlay]\nclose_on_backdrop = \
         false\nbase_z = 50\n"
      )
      .expect("valid config");

    assert!(!config.close_on_backdrop);
    assert!(config.close_on_escape);
    assert_eq!(config.base_z, 50);
    assert_eq!(config.z_step, 10);
  }

  #[test]
  fn out_of_range_values_are_sanitized() {
    let config =
      OverlayConfig::from_toml_str(
        "[overlay]\nz_step = \
         0\nnotice_auto_dismiss_ms = \
         900000\n"
      )
      .expect("valid config");

    assert_eq!(config.z_step, 1);
    assert_eq!(
      config.notice_auto_dismiss_ms,
      MAX_NOTICE_AUTO_DISMISS_MS
    );
  }

  #[test]
  fn invalid_document_falls_back() {
    assert!(
      OverlayConfig::from_toml_str(
        "[overlay\n"
      )
      .is_err()
    );
    assert_eq!(
      OverlayConfig::load_or_default(
        "[overlay]\nbase_z = \"high\"\n"
      ),
      OverlayConfig::default()
    );
  }
}
