//! Durable "already signed up" marker.
//!
//! The flow only sees a small key-value capability ([`MarkerStore`]). In the
//! browser it is backed by a cookie; [`MemoryStore`] backs tests and
//! non-browser hosts. The cookie helpers here are pure so they can be tested
//! without a document.

use crate::error::MarkerError;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError},
    time::Duration,
};

pub const SIGNUP_MARKER_KEY: &str = "mnky_signed_up";
pub const SIGNUP_MARKER_VALUE: &str = "true";
/// One year.
pub const SIGNUP_MARKER_TTL: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Key-value capability injected into the flow.
pub trait MarkerStore {
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, expiring `ttl` from now.
    ///
    /// # Errors
    /// Returns `MarkerError` when the backing store refuses the write.
    fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), MarkerError>;
}

/// Reads the signup marker. Any non-empty value counts as signed up.
#[must_use]
pub fn is_signed_up<S: MarkerStore>(store: &S) -> bool {
    store.get(SIGNUP_MARKER_KEY).is_some()
}

/// Writes the signup marker with its one-year horizon.
///
/// # Errors
/// Returns `MarkerError` when the store refuses the write.
pub fn persist_signed_up<S: MarkerStore>(store: &S) -> Result<(), MarkerError> {
    store.set(SIGNUP_MARKER_KEY, SIGNUP_MARKER_VALUE, SIGNUP_MARKER_TTL)
}

/// Finds `key` in a `document.cookie` style string (`a=1; b=2`).
#[must_use]
pub fn parse_cookie(cookies: &str, key: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| name.trim() == key)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Builds a root-scoped cookie assignment that expires after `ttl`.
#[must_use]
pub fn format_cookie(key: &str, value: &str, ttl: Duration) -> String {
    format!(
        "{key}={value}; max-age={}; path=/; samesite=lax",
        ttl.as_secs()
    )
}

/// In-memory store. Clones share the same entries, which lets a test keep a
/// handle across a simulated reload.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, (String, Duration)>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// TTL recorded for `key` on its last write.
    #[must_use]
    pub fn ttl(&self, key: &str) -> Option<Duration> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .map(|(_, ttl)| *ttl)
    }
}

impl MarkerStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .map(|(value, _)| value.clone())
    }

    fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), MarkerError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), (value.to_string(), ttl));
        Ok(())
    }
}
