//! Release event categories and validated event records.

use serde::{Deserialize, Serialize};
use url::Url;

/// The three release feeds the notifier announces.
///
/// Each category has its own payload schema, its own channel configuration,
/// and its own ping-cooldown slot. Categories never interconvert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseCategory {
    /// A new version of the mod itself.
    ModVersion,
    /// A new version of the launcher.
    LauncherVersion,
    /// A new version of the mod loader.
    LoaderVersion,
}

impl ReleaseCategory {
    /// All categories, in stable order.
    pub const ALL: [ReleaseCategory; 3] = [
        Self::ModVersion,
        Self::LauncherVersion,
        Self::LoaderVersion,
    ];

    /// Stable snake_case wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ModVersion => "mod_version",
            Self::LauncherVersion => "launcher_version",
            Self::LoaderVersion => "loader_version",
        }
    }

    /// Dense index into per-category storage.
    pub(crate) fn index(self) -> usize {
        match self {
            Self::ModVersion => 0,
            Self::LauncherVersion => 1,
            Self::LoaderVersion => 2,
        }
    }
}

impl std::fmt::Display for ReleaseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A validated release event.
///
/// Instances exist only as the output of [`crate::schema::validate`];
/// untrusted payloads have no other path to one.
#[derive(Debug, Clone, PartialEq)]
pub enum ReleaseEvent {
    Mod(ModRelease),
    Launcher(LauncherRelease),
    Loader(LoaderRelease),
}

impl ReleaseEvent {
    /// The category this event belongs to.
    pub fn category(&self) -> ReleaseCategory {
        match self {
            Self::Mod(_) => ReleaseCategory::ModVersion,
            Self::Launcher(_) => ReleaseCategory::LauncherVersion,
            Self::Loader(_) => ReleaseCategory::LoaderVersion,
        }
    }

    /// The release title.
    pub fn title(&self) -> &str {
        match self {
            Self::Mod(release) => &release.title,
            Self::Launcher(release) => &release.title,
            Self::Loader(release) => &release.title,
        }
    }

    /// The free-form version identifier (not assumed to be semver).
    pub fn version(&self) -> &str {
        match self {
            Self::Mod(release) => &release.version,
            Self::Launcher(release) => &release.version,
            Self::Loader(release) => &release.version,
        }
    }
}

/// A validated mod release.
#[derive(Debug, Clone, PartialEq)]
pub struct ModRelease {
    pub title: String,
    pub description: String,
    pub banner_url: Url,
    pub icon_url: Url,
    pub mod_url: Url,
    pub author_name: String,
    pub author_url: Url,
    pub version: String,
    pub changelog: String,
    /// First-ever release, as opposed to an update.
    pub initial: bool,
}

/// A validated launcher release.
#[derive(Debug, Clone, PartialEq)]
pub struct LauncherRelease {
    pub title: String,
    pub description: String,
    pub icon_url: Url,
    pub version: String,
    pub changelog: String,
}

/// A validated loader release.
#[derive(Debug, Clone, PartialEq)]
pub struct LoaderRelease {
    pub title: String,
    pub description: String,
    pub icon_url: Url,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_wire_names() {
        assert_eq!(ReleaseCategory::ModVersion.as_str(), "mod_version");
        assert_eq!(ReleaseCategory::LauncherVersion.as_str(), "launcher_version");
        assert_eq!(ReleaseCategory::LoaderVersion.as_str(), "loader_version");
    }

    #[test]
    fn test_category_serde_round_trip() {
        for category in ReleaseCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
            let parsed: ReleaseCategory = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_category_indices_are_dense() {
        let indices: Vec<usize> = ReleaseCategory::ALL.iter().map(|c| c.index()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_event_category_accessor() {
        let event = ReleaseEvent::Loader(LoaderRelease {
            title: "Loader".to_string(),
            description: "A new loader build".to_string(),
            icon_url: Url::parse("https://example.com/icon.png").unwrap(),
            version: "0.9.1".to_string(),
        });
        assert_eq!(event.category(), ReleaseCategory::LoaderVersion);
        assert_eq!(event.title(), "Loader");
        assert_eq!(event.version(), "0.9.1");
    }
}
