//! Per-category role-ping cooldown tracking.

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use parking_lot::Mutex;

use crate::event::ReleaseCategory;

/// Tracks the last delivered role-ping per category.
///
/// One slot per category, overwritten on every delivered ping and kept for
/// the process lifetime. The tracker is an owned component: construct one
/// per [`crate::dispatch::Dispatcher`] (or per test) rather than sharing a
/// global. Check-then-record atomicity across a dispatch is the
/// dispatcher's responsibility; the tracker itself is a plain read/write
/// API taking explicit timestamps so timing behavior stays deterministic
/// under test.
#[derive(Debug)]
pub struct CooldownTracker {
    cooldown: TimeDelta,
    last_ping: Mutex<HashMap<ReleaseCategory, DateTime<Utc>>>,
}

impl CooldownTracker {
    /// Create a tracker with the given cooldown window.
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown: TimeDelta::from_std(cooldown).unwrap_or(TimeDelta::MAX),
            last_ping: Mutex::new(HashMap::new()),
        }
    }

    /// Create a tracker from a cooldown in milliseconds.
    pub fn from_millis(cooldown_ms: u64) -> Self {
        Self::new(Duration::from_millis(cooldown_ms))
    }

    /// Whether a role ping is currently allowed for `category`.
    ///
    /// True if no ping was ever delivered for the category, or if the
    /// cooldown window has fully elapsed since the last one.
    pub fn should_ping(&self, category: ReleaseCategory, now: DateTime<Utc>) -> bool {
        match self.last_ping.lock().get(&category) {
            None => true,
            Some(last) => now.signed_duration_since(*last) >= self.cooldown,
        }
    }

    /// Record a delivered ping for `category` at `now`.
    ///
    /// Must only be called once a ping actually went out; the stored
    /// timestamp always reflects delivered pings.
    pub fn record_ping(&self, category: ReleaseCategory, now: DateTime<Utc>) {
        self.last_ping.lock().insert(category, now);
    }

    /// The timestamp of the last delivered ping for `category`, if any.
    pub fn last_ping(&self, category: ReleaseCategory) -> Option<DateTime<Utc>> {
        self.last_ping.lock().get(&category).copied()
    }
}
