//! Application settings
//!
//! Layered with figment, lowest to highest precedence:
//! 1. Built-in defaults
//! 2. `rust-template.toml` in the working directory (parents are not searched)
//! 3. `RUST_TEMPLATE_*` environment variables

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const SETTINGS_FILE: &str = "rust-template.toml";
pub const ENV_PREFIX: &str = "RUST_TEMPLATE_";

/// Name of the bundled camera config directory.
pub const CONFIG_DIR_NAME: &str = "config_files";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Directory scanned for camera configuration documents
    pub config_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self { config_dir: default_config_dir() }
    }
}

impl Settings {
    /// Load from `rust-template.toml` in the working directory and the environment.
    ///
    /// A broken source is only warned about; defaults are used instead.
    pub fn load() -> Self {
        Self::load_in(Path::new("."))
    }

    /// Same as [`Settings::load`], reading the settings file from `dir`.
    pub fn load_in(dir: &Path) -> Self {
        let figment = Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file_exact(dir.join(SETTINGS_FILE)))
            .merge(Env::prefixed(ENV_PREFIX));

        match figment.extract() {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Failed to load settings, using defaults: {}", e);
                Settings::default()
            }
        }
    }
}

/// `config_files/` next to the executable, falling back to the source tree.
///
/// An installed binary ships its configs alongside itself; a binary run from
/// `target/` picks up the crate's own `config_files/`.
fn default_config_dir() -> PathBuf {
    let beside_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(CONFIG_DIR_NAME)))
        .filter(|dir| dir.is_dir());

    beside_exe.unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join(CONFIG_DIR_NAME))
}
