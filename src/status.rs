//! Status channel for user-visible progress.
//!
//! Collectors report every milestone and every skipped unit of work through a
//! [`StatusSink`]. The default sink forwards to the `log` facade; a recording
//! sink keeps messages in memory.

use std::sync::Mutex;

use log::info;

/// Receives progress messages from the collectors.
pub trait StatusSink: Send + Sync {
    /// Reports a human-readable status message.
    ///
    /// `is_final` marks the last message of a collection run, or a message
    /// that ends processing of the current article.
    fn update_status(&self, message: &str, is_final: bool);

    /// Reports progress as a fraction between 0.0 and 1.0.
    fn update_progress(&self, _fraction: f64) {}
}

/// Sink writing status messages to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogStatus;

impl StatusSink for LogStatus {
    fn update_status(&self, message: &str, is_final: bool) {
        if is_final {
            info!("[final] {}", message);
        } else {
            info!("{}", message);
        }
    }

    fn update_progress(&self, fraction: f64) {
        log::debug!("Progress: {:.1}%", fraction * 100.0);
    }
}

/// A recorded status message.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    /// Message text
    pub message: String,
    /// Whether the message was marked final
    pub is_final: bool,
}

/// Sink that keeps every message, and also logs it.
#[derive(Debug, Default)]
pub struct RecordingStatus {
    messages: Mutex<Vec<StatusMessage>>,
    progress: Mutex<Vec<f64>>,
}

impl RecordingStatus {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages reported so far.
    pub fn messages(&self) -> Vec<StatusMessage> {
        self.messages
            .lock()
            .map(|m| m.clone())
            .unwrap_or_default()
    }

    /// Whether any message contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.messages().iter().any(|m| m.message.contains(needle))
    }

    /// All progress fractions reported so far.
    pub fn progress(&self) -> Vec<f64> {
        self.progress.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

impl StatusSink for RecordingStatus {
    fn update_status(&self, message: &str, is_final: bool) {
        LogStatus.update_status(message, is_final);
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(StatusMessage {
                message: message.to_string(),
                is_final,
            });
        }
    }

    fn update_progress(&self, fraction: f64) {
        if let Ok(mut progress) = self.progress.lock() {
            progress.push(fraction);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_status_keeps_order() {
        let status = RecordingStatus::new();
        status.update_status("first", false);
        status.update_status("second", true);

        let messages = status.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].message, "first");
        assert!(!messages[0].is_final);
        assert!(messages[1].is_final);
        assert!(status.contains("sec"));
        assert!(!status.contains("third"));
    }

    #[test]
    fn test_recording_status_progress() {
        let status = RecordingStatus::new();
        status.update_progress(0.5);
        status.update_progress(1.0);
        assert_eq!(status.progress(), vec![0.5, 1.0]);
    }
}
