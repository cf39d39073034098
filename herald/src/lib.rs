//! Release announcement pipeline.
//!
//! Ingests release-event payloads for the mod, launcher, and loader feeds,
//! validates them against per-category schemas, and relays each valid
//! event as a Discord notification, mentioning a configured role unless
//! one was pinged too recently for the same category.
//!
//! # Components
//!
//! - [`schema`]: per-category payload validation
//! - [`cooldown`]: per-category role-ping cooldown tracking
//! - [`compose`]: pure event-to-notification rendering
//! - [`dispatch`]: the validate, decide, compose, send pipeline
//! - [`channels`]: the sender seam and the Discord implementation
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use herald::{DiscordConfig, DiscordSender, Dispatcher, NotifierConfig, ReleaseCategory};
//!
//! let config: NotifierConfig = load_config()?;
//! let sender = Arc::new(DiscordSender::new(DiscordConfig {
//!     bot_token: token,
//!     ..Default::default()
//! }));
//! let dispatcher = Dispatcher::new(config, sender);
//!
//! let receipt = dispatcher.handle(ReleaseCategory::ModVersion, &payload).await?;
//! ```

pub mod channels;
pub mod compose;
pub mod config;
pub mod cooldown;
pub mod dispatch;
pub mod error;
pub mod event;
pub mod schema;

pub use channels::{DiscordConfig, DiscordSender, NotificationSender};
pub use compose::{ComposedNotification, compose};
pub use config::{CategoryConfig, NotifierConfig};
pub use cooldown::CooldownTracker;
pub use dispatch::{DeliveryReceipt, Dispatcher};
pub use error::{Error, Result, SendError, ValidationError};
pub use event::{LauncherRelease, LoaderRelease, ModRelease, ReleaseCategory, ReleaseEvent};
