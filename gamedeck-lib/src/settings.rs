//! Shared settings (site URL, default viewport width, dev-server origin).
//!
//! The settings file lives at `~/.config/gamedeck/settings.toml`. Every value
//! is optional; command-line flags override it and built-in defaults fill
//! the gaps.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::GalleryError;
use crate::featured::DEFAULT_DEV_ORIGIN;

/// Site served by the local development server.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5500/";

/// Viewport width assumed when none is configured.
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1280;

/// Contents of `settings.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Root URL of the gallery site (where `data.json` lives)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport_width: Option<u32>,

    /// Origin stripped from links when building featured snippets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_origin: Option<String>,
}

impl Settings {
    /// Base URL with a command-line override taking priority.
    pub fn base_url(&self, cli_override: Option<&str>) -> Result<Url, GalleryError> {
        let raw = cli_override
            .or(self.base_url.as_deref())
            .unwrap_or(DEFAULT_BASE_URL);
        Ok(Url::parse(raw)?)
    }

    pub fn viewport_width(&self, cli_override: Option<u32>) -> u32 {
        cli_override
            .or(self.viewport_width)
            .unwrap_or(DEFAULT_VIEWPORT_WIDTH)
    }

    pub fn dev_origin(&self) -> &str {
        self.dev_origin.as_deref().unwrap_or(DEFAULT_DEV_ORIGIN)
    }
}

/// Canonical path to the settings file: `~/.config/gamedeck/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("gamedeck").join("settings.toml")
}

/// Load settings from the canonical path. A missing file yields defaults.
pub fn load_settings() -> Result<Settings, GalleryError> {
    load_settings_from(&settings_path())
}

/// Load settings from `path`. A missing file yields defaults.
pub fn load_settings_from(path: &Path) -> Result<Settings, GalleryError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(e) => return Err(e.into()),
    };
    toml::from_str(&contents)
        .map_err(|e| GalleryError::config(format!("{}: {e}", path.display())))
}

/// Write settings to `path` atomically, creating parent directories.
pub fn save_settings_to(path: &Path, settings: &Settings) -> Result<(), GalleryError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized =
        toml::to_string_pretty(settings).map_err(|e| GalleryError::config(e.to_string()))?;
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

/// Load the full settings file as a pretty-printed TOML string for display.
pub fn load_settings_string() -> Option<String> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}
