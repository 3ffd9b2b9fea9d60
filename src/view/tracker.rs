// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Load state of a single view

use std::sync::Arc;

use parking_lot::Mutex;

use super::event::{EventSink, NavigationEvent};

/// Where the current navigation stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Nothing loaded yet
    #[default]
    Idle,
    /// A navigation is in flight
    Loading,
    /// The last navigation reported an error
    Failed,
    /// The last navigation finished cleanly
    Finished,
}

/// Turns the view's navigation callbacks into [`NavigationEvent`]s
///
/// A finish after an error is swallowed: the host already got `LoadError`
/// for that navigation. The next start clears the failure.
pub struct NavigationTracker {
    state: Mutex<LoadState>,
    sink: Arc<dyn EventSink>,
}

impl NavigationTracker {
    /// Create a tracker publishing to `sink`
    pub fn new(sink: Arc<dyn EventSink>) -> Self {
        Self {
            state: Mutex::new(LoadState::Idle),
            sink,
        }
    }

    /// Current load state
    pub fn state(&self) -> LoadState {
        *self.state.lock()
    }

    /// Check if the last navigation failed
    pub fn last_load_failed(&self) -> bool {
        self.state() == LoadState::Failed
    }

    /// A navigation started
    pub fn page_started(&self, url: &str) {
        *self.state.lock() = LoadState::Loading;
        tracing::debug!(url = %url, "Load started");
        self.sink.emit(NavigationEvent::LoadStart {
            url: url.to_string(),
            loading: true,
        });
    }

    /// A navigation finished
    pub fn page_finished(&self, url: &str) {
        {
            let mut state = self.state.lock();
            if *state == LoadState::Failed {
                tracing::debug!(url = %url, "Ignoring finish of failed load");
                return;
            }
            *state = LoadState::Finished;
        }
        self.sink.emit(NavigationEvent::LoadFinish {
            url: url.to_string(),
        });
    }

    /// A navigation failed
    pub fn received_error(&self, url: &str, code: i32, description: &str) {
        *self.state.lock() = LoadState::Failed;
        tracing::warn!(url = %url, code, description = %description, "Load failed");
        self.sink.emit(NavigationEvent::LoadError {
            url: url.to_string(),
            code,
            description: description.to_string(),
        });
    }

    /// The view's history changed, e.g. through `pushState`
    pub fn history_updated(&self, url: &str) {
        let loading = self.state() == LoadState::Loading;
        self.sink.emit(NavigationEvent::LoadStart {
            url: url.to_string(),
            loading,
        });
    }

    /// Load progress changed
    pub fn progress_changed(&self, progress: u8) {
        self.sink.emit(NavigationEvent::Progress {
            progress: progress.min(100),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::EventLog;

    fn tracker() -> (NavigationTracker, EventLog) {
        let log = EventLog::new();
        (NavigationTracker::new(Arc::new(log.clone())), log)
    }

    #[test]
    fn test_successful_load() {
        let (t, log) = tracker();
        assert_eq!(t.state(), LoadState::Idle);

        t.page_started("https://example.com");
        assert_eq!(t.state(), LoadState::Loading);
        t.page_finished("https://example.com");
        assert_eq!(t.state(), LoadState::Finished);

        assert_eq!(
            log.events(),
            vec![
                NavigationEvent::LoadStart {
                    url: "https://example.com".to_string(),
                    loading: true,
                },
                NavigationEvent::LoadFinish {
                    url: "https://example.com".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_finish_after_error_is_swallowed() {
        let (t, log) = tracker();
        t.page_started("https://bad.example");
        t.received_error("https://bad.example", -2, "net::ERR_NAME_NOT_RESOLVED");
        t.page_finished("https://bad.example");

        assert!(t.last_load_failed());
        let events = log.take();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[1], NavigationEvent::LoadError { code: -2, .. }));
    }

    #[test]
    fn test_start_clears_failure() {
        let (t, log) = tracker();
        t.received_error("https://bad.example", -6, "refused");
        t.page_started("https://good.example");
        assert!(!t.last_load_failed());
        t.page_finished("https://good.example");
        assert_eq!(log.events().len(), 3);
    }

    #[test]
    fn test_history_and_progress() {
        let (t, log) = tracker();
        t.history_updated("https://example.com/#a");
        t.progress_changed(250);
        assert_eq!(
            log.events(),
            vec![
                NavigationEvent::LoadStart {
                    url: "https://example.com/#a".to_string(),
                    loading: false,
                },
                NavigationEvent::Progress { progress: 100 },
            ]
        );
    }
}
