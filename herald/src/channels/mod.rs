//! Outbound notification channels.
//!
//! The dispatch pipeline hands off fully composed notifications through
//! the [`NotificationSender`] seam; [`DiscordSender`] is the concrete
//! channel that posts them as Discord channel messages.

mod discord;

pub use discord::{DiscordConfig, DiscordSender};

use async_trait::async_trait;

use crate::compose::ComposedNotification;
use crate::error::SendError;

/// Seam between the dispatch pipeline and the messaging provider.
///
/// Implementations deliver a single composed notification to its target
/// channel. Retry and backoff are the provider side's concern, not the
/// pipeline's; a failed send is reported back as a [`SendError`] and the
/// pipeline treats it as final.
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// Deliver a composed notification to its target channel.
    async fn send(&self, notification: &ComposedNotification) -> Result<(), SendError>;
}
