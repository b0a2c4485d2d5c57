//! Per-call context and options.
//!
//! A [`CallContext`] bounds a single RPC with an optional deadline.
//! Cancelling a call is done by dropping its future. [`CallOption`]s are
//! opaque modifiers the facade hands to the transport without looking at them.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;
use tonic::metadata::{AsciiMetadataKey, AsciiMetadataValue, MetadataMap};

/// Deadline-bearing context for a single call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallContext {
    deadline: Option<Instant>,
}

impl CallContext {
    /// A context without a deadline.
    pub fn background() -> Self {
        Self::default()
    }

    /// A context that expires at `deadline`.
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
        }
    }

    /// A context whose deadline is `timeout` from now.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    /// The deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left before the deadline; zero once it has passed.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(Instant::now()))
    }

    /// Whether the deadline has already passed.
    pub fn is_expired(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}

/// Opaque modifier applied to the outgoing request metadata.
#[derive(Clone)]
pub struct CallOption {
    apply: Arc<dyn Fn(&mut MetadataMap) + Send + Sync>,
}

impl CallOption {
    /// Wrap an arbitrary metadata modifier.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut MetadataMap) + Send + Sync + 'static,
    {
        Self { apply: Arc::new(f) }
    }

    /// Set an ASCII header on the outgoing request.
    ///
    /// The key is validated when it is built, so applying the option cannot
    /// fail.
    pub fn header(key: AsciiMetadataKey, value: AsciiMetadataValue) -> Self {
        Self::new(move |metadata| {
            metadata.insert(key.clone(), value.clone());
        })
    }

    /// Run the modifier against `metadata`.
    pub fn apply(&self, metadata: &mut MetadataMap) {
        (self.apply)(metadata);
    }
}

impl fmt::Debug for CallOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CallOption(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_has_no_deadline() {
        let ctx = CallContext::background();
        assert_eq!(ctx.deadline(), None);
        assert_eq!(ctx.remaining(), None);
        assert!(!ctx.is_expired());
    }

    #[test]
    fn timeout_sets_deadline() {
        let ctx = CallContext::with_timeout(Duration::from_secs(30));
        let remaining = ctx.remaining().expect("deadline");
        assert!(remaining <= Duration::from_secs(30));
        assert!(remaining > Duration::from_secs(25));
        assert!(!ctx.is_expired());
    }

    #[test]
    fn past_deadline_is_expired() {
        let ctx = CallContext::with_deadline(Instant::now());
        assert!(ctx.is_expired());
        assert_eq!(ctx.remaining(), Some(Duration::ZERO));
    }

    #[test]
    fn header_option_sets_metadata() {
        let opt = CallOption::header(
            AsciiMetadataKey::from_static("x-request-id"),
            AsciiMetadataValue::from_static("abc"),
        );
        let mut metadata = MetadataMap::new();
        opt.apply(&mut metadata);
        assert_eq!(
            metadata.get("x-request-id").and_then(|v| v.to_str().ok()),
            Some("abc")
        );
        assert_eq!(format!("{opt:?}"), "CallOption(..)");
    }

    #[test]
    fn invalid_header_key_is_rejected_up_front() {
        assert!("Bad Key".parse::<AsciiMetadataKey>().is_err());

        let key: AsciiMetadataKey = "x-tenant".parse().expect("valid key");
        let opt = CallOption::header(key, AsciiMetadataValue::from_static("blue"));
        let mut metadata = MetadataMap::new();
        opt.apply(&mut metadata);
        opt.apply(&mut metadata);
        assert_eq!(metadata.get_all("x-tenant").iter().count(), 1);
    }
}
