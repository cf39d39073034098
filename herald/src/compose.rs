//! Notification composition.
//!
//! Turns a validated release event plus its category's static settings
//! into a ready-to-send message. Pure: deterministic in its inputs, no
//! I/O, no hidden state.

use serde_json::{Value, json};

use crate::config::CategoryConfig;
use crate::event::{LauncherRelease, LoaderRelease, ModRelease, ReleaseEvent};

/// A fully rendered, ready-to-send notification.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedNotification {
    /// Target channel id.
    pub channel_id: String,
    /// Role mention line, present only when a ping was approved and a
    /// role is configured. Never an empty placeholder.
    pub mention: Option<String>,
    /// Rendered embed content.
    pub embed: Value,
    /// Whether a role mention was included.
    pub mentions_role: bool,
}

/// Compose the outbound notification for a validated event.
///
/// The role mention is included if and only if the category config has a
/// role id and `ping` is true.
pub fn compose(config: &CategoryConfig, event: &ReleaseEvent, ping: bool) -> ComposedNotification {
    let mention = match (&config.role_id, ping) {
        (Some(role_id), true) => Some(format!("<@&{role_id}>")),
        _ => None,
    };

    let embed = match event {
        ReleaseEvent::Mod(release) => mod_embed(config, release),
        ReleaseEvent::Launcher(release) => launcher_embed(config, release),
        ReleaseEvent::Loader(release) => loader_embed(config, release),
    };

    ComposedNotification {
        channel_id: config.channel_id.clone(),
        mentions_role: mention.is_some(),
        mention,
        embed,
    }
}

fn mod_embed(config: &CategoryConfig, release: &ModRelease) -> Value {
    let title = if release.initial {
        format!("{} has been released!", release.title)
    } else {
        format!("{} {} is out!", release.title, release.version)
    };

    let mut embed = json!({
        "title": title,
        "description": release.description,
        "url": release.mod_url.as_str(),
        "color": config.accent_color,
        "author": {
            "name": release.author_name,
            "url": release.author_url.as_str(),
        },
        "thumbnail": { "url": release.icon_url.as_str() },
        "image": { "url": release.banner_url.as_str() },
        "fields": [
            { "name": "Version", "value": release.version, "inline": true },
            { "name": "Changelog", "value": release.changelog, "inline": false },
        ],
    });
    attach_footer(&mut embed, config);
    embed
}

fn launcher_embed(config: &CategoryConfig, release: &LauncherRelease) -> Value {
    let mut fields = vec![
        json!({ "name": "Version", "value": release.version, "inline": true }),
        json!({ "name": "Changelog", "value": release.changelog, "inline": false }),
    ];
    if let Some(download_url) = &config.download_url {
        fields.push(json!({ "name": "Download", "value": download_url, "inline": true }));
    }

    let mut embed = json!({
        "title": format!("{} {} is out!", release.title, release.version),
        "description": release.description,
        "color": config.accent_color,
        "thumbnail": { "url": release.icon_url.as_str() },
        "fields": fields,
    });
    attach_footer(&mut embed, config);
    embed
}

fn loader_embed(config: &CategoryConfig, release: &LoaderRelease) -> Value {
    let mut embed = json!({
        "title": format!("{} {} is out!", release.title, release.version),
        "description": release.description,
        "color": config.accent_color,
        "thumbnail": { "url": release.icon_url.as_str() },
        "fields": [
            { "name": "Version", "value": release.version, "inline": true },
        ],
    });
    attach_footer(&mut embed, config);
    embed
}

fn attach_footer(embed: &mut Value, config: &CategoryConfig) {
    embed["footer"] = json!({ "text": config.display_name });
    if let Some(logo_url) = &config.logo_url {
        embed["footer"]["icon_url"] = json!(logo_url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn config_with_role() -> CategoryConfig {
        CategoryConfig {
            channel_id: "123456".to_string(),
            role_id: Some("987654".to_string()),
            display_name: "Example Mod".to_string(),
            logo_url: Some("https://example.com/logo.png".to_string()),
            accent_color: 0x00ff00,
            download_url: None,
        }
    }

    fn mod_release(initial: bool) -> ReleaseEvent {
        ReleaseEvent::Mod(ModRelease {
            title: "Example Mod".to_string(),
            description: "Adds examples".to_string(),
            banner_url: Url::parse("https://example.com/banner.png").unwrap(),
            icon_url: Url::parse("https://example.com/icon.png").unwrap(),
            mod_url: Url::parse("https://example.com/mod").unwrap(),
            author_name: "alice".to_string(),
            author_url: Url::parse("https://example.com/alice").unwrap(),
            version: "1.4.0".to_string(),
            changelog: "- fixed things".to_string(),
            initial,
        })
    }

    #[test]
    fn test_mention_included_when_role_and_ping() {
        let notification = compose(&config_with_role(), &mod_release(false), true);
        assert_eq!(notification.mention.as_deref(), Some("<@&987654>"));
        assert!(notification.mentions_role);
        assert_eq!(notification.channel_id, "123456");
    }

    #[test]
    fn test_mention_omitted_when_ping_suppressed() {
        let notification = compose(&config_with_role(), &mod_release(false), false);
        assert!(notification.mention.is_none());
        assert!(!notification.mentions_role);
    }

    #[test]
    fn test_mention_omitted_without_role_id() {
        let mut config = config_with_role();
        config.role_id = None;
        let notification = compose(&config, &mod_release(false), true);
        assert!(notification.mention.is_none());
        assert!(!notification.mentions_role);
    }

    #[test]
    fn test_mod_embed_reflects_all_fields() {
        let notification = compose(&config_with_role(), &mod_release(false), false);
        let embed = &notification.embed;

        assert_eq!(embed["title"], "Example Mod 1.4.0 is out!");
        assert_eq!(embed["description"], "Adds examples");
        assert_eq!(embed["url"], "https://example.com/mod");
        assert_eq!(embed["color"], 0x00ff00);
        assert_eq!(embed["author"]["name"], "alice");
        assert_eq!(embed["author"]["url"], "https://example.com/alice");
        assert_eq!(embed["thumbnail"]["url"], "https://example.com/icon.png");
        assert_eq!(embed["image"]["url"], "https://example.com/banner.png");
        assert_eq!(embed["fields"][0]["value"], "1.4.0");
        assert_eq!(embed["fields"][1]["value"], "- fixed things");
        assert_eq!(embed["footer"]["text"], "Example Mod");
        assert_eq!(embed["footer"]["icon_url"], "https://example.com/logo.png");
    }

    #[test]
    fn test_initial_mod_release_gets_announcement_title() {
        let notification = compose(&config_with_role(), &mod_release(true), false);
        assert_eq!(notification.embed["title"], "Example Mod has been released!");
    }

    #[test]
    fn test_launcher_embed_includes_configured_download() {
        let mut config = config_with_role();
        config.download_url = Some("https://example.com/download".to_string());
        let event = ReleaseEvent::Launcher(LauncherRelease {
            title: "Example Launcher".to_string(),
            description: "Launches the game".to_string(),
            icon_url: Url::parse("https://example.com/launcher.png").unwrap(),
            version: "2.0.0".to_string(),
            changelog: "- faster startup".to_string(),
        });

        let notification = compose(&config, &event, false);
        let fields = notification.embed["fields"].as_array().unwrap();
        assert!(
            fields
                .iter()
                .any(|f| f["name"] == "Download" && f["value"] == "https://example.com/download")
        );
    }

    #[test]
    fn test_compose_is_deterministic() {
        let config = config_with_role();
        let event = mod_release(false);
        assert_eq!(compose(&config, &event, true), compose(&config, &event, true));
    }
}
