//! User-visible alerts
//!
//! The loader reports fetch failures through an [`AlertSink`] rather than
//! returning them, so the host decides how a one-shot message is shown.

use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::error;

/// Title used for every failure alert
pub const ERROR_TITLE: &str = "Error";

/// Message shown when the catalog cannot be fetched
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch books. Please try again.";

/// A one-shot message for the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    /// Create an alert
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// The alert raised when the catalog fetch fails
    pub fn fetch_failed() -> Self {
        Self::new(ERROR_TITLE, FETCH_FAILED_MESSAGE)
    }
}

/// Receives alerts raised by the core
pub trait AlertSink: Send + Sync {
    /// Show an alert to the user
    fn show(&self, alert: &Alert);
}

/// Sends alerts to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAlertSink;

impl AlertSink for TracingAlertSink {
    fn show(&self, alert: &Alert) {
        error!(title = %alert.title, "{}", alert.message);
    }
}

/// Keeps every alert it is shown
///
/// Useful for hosts that drain alerts on their own schedule.
#[derive(Debug, Clone, Default)]
pub struct RecordingAlertSink {
    alerts: Arc<Mutex<Vec<Alert>>>,
}

impl RecordingAlertSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Alerts shown so far
    pub fn alerts(&self) -> Vec<Alert> {
        self.recorded().clone()
    }

    /// Remove and return alerts shown so far
    pub fn drain(&self) -> Vec<Alert> {
        std::mem::take(&mut *self.recorded())
    }

    // Every holder leaves the Vec whole, so poison is ignored
    fn recorded(&self) -> MutexGuard<'_, Vec<Alert>> {
        self.alerts.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl AlertSink for RecordingAlertSink {
    fn show(&self, alert: &Alert) {
        self.recorded().push(alert.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_failed_alert() {
        let alert = Alert::fetch_failed();
        assert_eq!(alert.title, "Error");
        assert_eq!(alert.message, "Failed to fetch books. Please try again.");
    }

    #[test]
    fn test_recording_sink_keeps_and_drains() {
        let sink = RecordingAlertSink::new();
        let shared = sink.clone();
        shared.show(&Alert::fetch_failed());
        shared.show(&Alert::new("Info", "hello"));

        assert_eq!(sink.alerts().len(), 2);
        assert_eq!(sink.drain()[1].message, "hello");
        assert!(sink.alerts().is_empty());
    }

    #[test]
    fn test_recording_sink_survives_poisoned_lock() {
        let sink = RecordingAlertSink::new();
        sink.show(&Alert::fetch_failed());

        let holder = sink.clone();
        let _ = std::thread::spawn(move || {
            let _guard = holder.alerts.lock().unwrap();
            panic!("poison the alert log");
        })
        .join();
        assert!(sink.alerts.is_poisoned());

        sink.show(&Alert::new("Info", "after poison"));
        let recorded = sink.alerts();
        assert_eq!(recorded.len(), 2);
        assert_eq!(recorded[1].message, "after poison");
        assert_eq!(sink.drain().len(), 2);
    }
}
