//! Notifier configuration types.
//!
//! These are the read-only settings the pipeline consumes: one channel
//! target per category plus the process-wide ping cooldown. Loading them
//! from disk (and validating their contents) is the embedding process's
//! concern.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::event::ReleaseCategory;

/// Default ping cooldown: one minute.
const DEFAULT_COOLDOWN_MS: u64 = 60_000;

/// Default embed accent color (blurple).
const DEFAULT_ACCENT_COLOR: u32 = 0x5865f2;

/// Top-level notifier configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifierConfig {
    /// Minimum time between two role pings for the same category, in
    /// milliseconds. Shared across all categories.
    #[serde(default = "default_cooldown_ms")]
    pub cooldown_ms: u64,
    /// Mod release channel settings.
    pub mod_version: CategoryConfig,
    /// Launcher release channel settings.
    pub launcher_version: CategoryConfig,
    /// Loader release channel settings.
    pub loader_version: CategoryConfig,
}

fn default_cooldown_ms() -> u64 {
    DEFAULT_COOLDOWN_MS
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            cooldown_ms: DEFAULT_COOLDOWN_MS,
            mod_version: CategoryConfig::default(),
            launcher_version: CategoryConfig::default(),
            loader_version: CategoryConfig::default(),
        }
    }
}

impl NotifierConfig {
    /// Settings for one category.
    pub fn category(&self, category: ReleaseCategory) -> &CategoryConfig {
        match category {
            ReleaseCategory::ModVersion => &self.mod_version,
            ReleaseCategory::LauncherVersion => &self.launcher_version,
            ReleaseCategory::LoaderVersion => &self.loader_version,
        }
    }

    /// The ping cooldown as a [`Duration`].
    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }
}

/// Static per-category notification settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryConfig {
    /// Target channel id.
    pub channel_id: String,
    /// Role to mention on a release, when pings are allowed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_id: Option<String>,
    /// Display name shown in the embed footer.
    pub display_name: String,
    /// Logo shown next to the display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    /// Embed accent color.
    #[serde(default = "default_accent_color")]
    pub accent_color: u32,
    /// Static download link (used by the launcher category).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
}

fn default_accent_color() -> u32 {
    DEFAULT_ACCENT_COLOR
}

impl Default for CategoryConfig {
    fn default() -> Self {
        Self {
            channel_id: String::new(),
            role_id: None,
            display_name: String::new(),
            logo_url: None,
            accent_color: DEFAULT_ACCENT_COLOR,
            download_url: None,
        }
    }
}
