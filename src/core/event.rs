//! Structured transition events and the per-session journal.
//!
//! Every attempted transition — accepted or rejected — is captured as a
//! [`TransitionEvent`] so external logging can reconstruct exactly what the
//! shopper did. The journal itself is immutable: [`TransitionLog::record`]
//! returns a new log with the event appended.

use crate::core::Screen;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;
use uuid::Uuid;

/// One attempted transition.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TransitionEvent {
    /// The session the attempt belongs to.
    pub session: Uuid,
    /// Wire name of the attempted action.
    pub action: &'static str,
    /// Screen the kiosk was on when the action arrived.
    pub from: Screen,
    /// Screen the kiosk ended up on. Equals `from` when rejected.
    pub to: Screen,
    /// Whether the transition table accepted the action.
    pub accepted: bool,
    /// When the attempt occurred.
    pub timestamp: DateTime<Utc>,
}

/// Ordered journal of every transition attempt in a session.
#[derive(Clone, Debug, Default, Serialize)]
pub struct TransitionLog {
    events: Vec<TransitionEvent>,
}

impl TransitionLog {
    /// A new empty journal.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Record an event, returning a new journal.
    pub fn record(&self, event: TransitionEvent) -> Self {
        let mut events = self.events.clone();
        events.push(event);
        Self { events }
    }

    /// All recorded events in order, rejections included.
    pub fn events(&self) -> &[TransitionEvent] {
        &self.events
    }

    /// The screens actually traversed: the starting screen of the first
    /// accepted transition, then the destination of every accepted one.
    pub fn path(&self) -> Vec<Screen> {
        let mut accepted = self.events.iter().filter(|e| e.accepted);
        let mut path = Vec::new();
        if let Some(first) = accepted.next() {
            path.push(first.from);
            path.push(first.to);
        }
        for event in accepted {
            path.push(event.to);
        }
        path
    }

    /// Elapsed wall-clock time from the first recorded attempt to the last.
    ///
    /// `None` while the journal is empty.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.events.first()?, self.events.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }
}
