//! Discord channel-message sender.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, warn};

use super::NotificationSender;
use crate::compose::ComposedNotification;
use crate::error::SendError;

const DEFAULT_API_BASE: &str = "https://discord.com/api/v10";

/// Discord sender configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscordConfig {
    /// Bot token used for the `Authorization` header.
    pub bot_token: String,
    /// REST API base URL. Overridable for tests and proxies.
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            bot_token: String::new(),
            api_base: DEFAULT_API_BASE.to_string(),
            timeout_secs: 30,
        }
    }
}

/// Posts composed notifications as Discord channel messages.
///
/// One HTTP POST per notification; non-success statuses come back as
/// [`SendError::Status`] and are not retried here.
pub struct DiscordSender {
    config: DiscordConfig,
    client: Client,
}

impl DiscordSender {
    /// Create a new Discord sender.
    pub fn new(config: DiscordConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_default();

        Self { config, client }
    }

    fn message_url(&self, channel_id: &str) -> String {
        format!(
            "{}/channels/{}/messages",
            self.config.api_base.trim_end_matches('/'),
            channel_id
        )
    }

    /// Build the message payload.
    ///
    /// The mention line becomes the message content; role pings are the
    /// only mention kind the message is allowed to resolve.
    fn build_payload(notification: &ComposedNotification) -> serde_json::Value {
        let mut payload = json!({
            "embeds": [notification.embed.clone()],
        });
        if let Some(mention) = &notification.mention {
            payload["content"] = json!(mention);
            payload["allowed_mentions"] = json!({ "parse": ["roles"] });
        }
        payload
    }
}

#[async_trait]
impl NotificationSender for DiscordSender {
    async fn send(&self, notification: &ComposedNotification) -> Result<(), SendError> {
        let payload = Self::build_payload(notification);

        let response = self
            .client
            .post(self.message_url(&notification.channel_id))
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Bot {}", self.config.bot_token),
            )
            .json(&payload)
            .send()
            .await
            .map_err(|e| SendError::Request(format!("Discord request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Discord message failed: {} - {}", status, body);
            return Err(SendError::Status {
                status: status.as_u16(),
                body,
            });
        }

        debug!(
            channel_id = %notification.channel_id,
            mentions_role = notification.mentions_role,
            "Discord notification sent"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(mention: Option<&str>) -> ComposedNotification {
        ComposedNotification {
            channel_id: "123456".to_string(),
            mention: mention.map(str::to_string),
            embed: json!({ "title": "Example Mod 1.4.0 is out!" }),
            mentions_role: mention.is_some(),
        }
    }

    #[test]
    fn test_discord_config_default() {
        let config = DiscordConfig::default();
        assert!(config.bot_token.is_empty());
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_message_url_strips_trailing_slash() {
        let sender = DiscordSender::new(DiscordConfig {
            api_base: "http://localhost:9999/api/".to_string(),
            ..Default::default()
        });
        assert_eq!(
            sender.message_url("42"),
            "http://localhost:9999/api/channels/42/messages"
        );
    }

    #[test]
    fn test_build_payload_with_mention() {
        let payload = DiscordSender::build_payload(&notification(Some("<@&987654>")));
        assert_eq!(payload["content"], "<@&987654>");
        assert_eq!(payload["allowed_mentions"]["parse"][0], "roles");
        assert_eq!(payload["embeds"][0]["title"], "Example Mod 1.4.0 is out!");
    }

    #[test]
    fn test_build_payload_without_mention() {
        let payload = DiscordSender::build_payload(&notification(None));
        assert!(payload.get("content").is_none());
        assert!(payload.get("allowed_mentions").is_none());
        assert!(payload["embeds"].is_array());
    }
}
