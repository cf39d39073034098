//! The validation-and-dispatch pipeline.
//!
//! One async task per inbound payload: validate, decide ping, compose,
//! send, record. The only suspension points are the per-category lock and
//! the sender call.

use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::channels::NotificationSender;
use crate::compose::compose;
use crate::config::NotifierConfig;
use crate::cooldown::CooldownTracker;
use crate::error::{Error, Result};
use crate::event::ReleaseCategory;
use crate::schema;

/// Outcome of a delivered dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryReceipt {
    /// The category that was announced.
    pub category: ReleaseCategory,
    /// Whether the delivered notification carried a role mention.
    pub pinged: bool,
}

/// Orchestrates release-event dispatches.
///
/// Owns the cooldown tracker and the sender handle. Dispatches for the
/// same category are serialized across the decide/send/record sequence so
/// two concurrent releases cannot both slip a ping past the cooldown;
/// different categories proceed independently.
pub struct Dispatcher {
    config: NotifierConfig,
    tracker: CooldownTracker,
    sender: Arc<dyn NotificationSender>,
    category_locks: [Mutex<()>; 3],
}

impl Dispatcher {
    /// Create a dispatcher with a fresh tracker from `config.cooldown_ms`.
    pub fn new(config: NotifierConfig, sender: Arc<dyn NotificationSender>) -> Self {
        let tracker = CooldownTracker::new(config.cooldown());
        Self::with_tracker(config, tracker, sender)
    }

    /// Create a dispatcher around an externally owned tracker.
    pub fn with_tracker(
        config: NotifierConfig,
        tracker: CooldownTracker,
        sender: Arc<dyn NotificationSender>,
    ) -> Self {
        info!(cooldown_ms = config.cooldown_ms, "Dispatcher initialized");
        Self {
            config,
            tracker,
            sender,
            category_locks: [Mutex::new(()), Mutex::new(()), Mutex::new(())],
        }
    }

    /// The cooldown tracker backing this dispatcher.
    pub fn tracker(&self) -> &CooldownTracker {
        &self.tracker
    }

    /// The configuration backing this dispatcher.
    pub fn config(&self) -> &NotifierConfig {
        &self.config
    }

    /// Handle one inbound release payload for `category`.
    ///
    /// Returns a [`DeliveryReceipt`] on success, [`Error::Validation`] for
    /// a rejected payload, and [`Error::Downstream`] when the sender could
    /// not deliver. Neither failure is retried here. The cooldown is
    /// recorded only after a notification carrying a mention was actually
    /// delivered, so a failed send leaves the next dispatch free to ping.
    pub async fn handle(&self, category: ReleaseCategory, payload: &Value) -> Result<DeliveryReceipt> {
        let event = schema::validate(category, payload)?;
        let target = self.config.category(category);

        // Serializes decide/send/record for this category.
        let _serial = self.category_locks[category.index()].lock().await;

        let ping = self.tracker.should_ping(category, Utc::now());
        let notification = compose(target, &event, ping);

        match self.sender.send(&notification).await {
            Ok(()) => {
                if notification.mentions_role {
                    self.tracker.record_ping(category, Utc::now());
                }
                debug!(
                    category = %category,
                    version = event.version(),
                    pinged = notification.mentions_role,
                    "release notification delivered"
                );
                Ok(DeliveryReceipt {
                    category,
                    pinged: notification.mentions_role,
                })
            }
            Err(e) => {
                warn!(category = %category, error = %e, "release notification delivery failed");
                Err(Error::Downstream(e))
            }
        }
    }
}
