// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Page lifecycle events published to the host framework

use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Events emitted while a view navigates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NavigationEvent {
    /// A navigation started or the history changed
    LoadStart { url: String, loading: bool },
    /// A navigation finished without error
    LoadFinish { url: String },
    /// A navigation failed
    LoadError {
        url: String,
        code: i32,
        description: String,
    },
    /// Load progress, 0 to 100
    Progress { progress: u8 },
}

impl NavigationEvent {
    /// URL the event refers to, if any
    pub fn url(&self) -> Option<&str> {
        match self {
            NavigationEvent::LoadStart { url, .. }
            | NavigationEvent::LoadFinish { url }
            | NavigationEvent::LoadError { url, .. } => Some(url),
            NavigationEvent::Progress { .. } => None,
        }
    }
}

/// Consumer of navigation events, usually the host's event dispatcher
pub trait EventSink: Send + Sync {
    fn emit(&self, event: NavigationEvent);
}

impl<F> EventSink for F
where
    F: Fn(NavigationEvent) + Send + Sync,
{
    fn emit(&self, event: NavigationEvent) {
        self(event)
    }
}

/// Sink that keeps every event in memory
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<NavigationEvent>>>,
}

impl EventLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events
    pub fn events(&self) -> Vec<NavigationEvent> {
        self.events.lock().clone()
    }

    /// Remove and return the recorded events
    pub fn take(&self) -> Vec<NavigationEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl EventSink for EventLog {
    fn emit(&self, event: NavigationEvent) {
        self.events.lock().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_tagged() {
        let event = NavigationEvent::LoadError {
            url: "https://example.com".to_string(),
            code: -2,
            description: "host lookup".to_string(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "loadError");
        assert_eq!(json["code"], -2);
        assert_eq!(event.url(), Some("https://example.com"));
    }

    #[test]
    fn test_closure_sink() {
        let seen = Arc::new(Mutex::new(0));
        let counter = seen.clone();
        let sink = move |_event: NavigationEvent| *counter.lock() += 1;
        sink.emit(NavigationEvent::Progress { progress: 10 });
        assert_eq!(*seen.lock(), 1);
    }

    #[test]
    fn test_event_log_take() {
        let log = EventLog::new();
        log.emit(NavigationEvent::Progress { progress: 100 });
        assert_eq!(log.take().len(), 1);
        assert!(log.events().is_empty());
    }
}
