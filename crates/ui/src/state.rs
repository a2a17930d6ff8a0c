//! Gallery state
//!
//! What the gallery page is showing: which dialog is requested, whether it
//! offers a cancel button, and a short log of the callbacks the components
//! fired.

use std::collections::VecDeque;

use cyberkit_core::SeverityType;

/// Number of log lines kept
pub const LOG_CAPACITY: usize = 8;

/// State behind the gallery page
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryState {
    /// The host-owned visibility flag handed to the dialog
    pub dialog_open: bool,
    /// Severity of the last requested dialog; kept while it closes
    pub severity: SeverityType,
    pub show_cancel: bool,
    log: VecDeque<String>,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            dialog_open: false,
            severity: SeverityType::Info,
            show_cancel: false,
            log: VecDeque::with_capacity(LOG_CAPACITY),
        }
    }
}

impl GalleryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a dialog of the given severity
    pub fn open_dialog(&mut self, severity: SeverityType) {
        self.severity = severity;
        self.dialog_open = true;
        self.record(format!("open {severity}"));
    }

    /// Drop the visibility flag
    pub fn close_dialog(&mut self) {
        self.dialog_open = false;
        self.record("close");
    }

    pub fn toggle_cancel(&mut self) {
        self.show_cancel = !self.show_cancel;
    }

    /// Append a log line, evicting the oldest past capacity
    pub fn record(&mut self, entry: impl Into<String>) {
        if self.log.len() == LOG_CAPACITY {
            self.log.pop_front();
        }
        self.log.push_back(entry.into());
    }

    /// Log lines, newest last
    pub fn log(&self) -> impl Iterator<Item = &str> {
        self.log.iter().map(String::as_str)
    }
}

/// Title and message the gallery shows for each severity
pub fn demo_copy(severity: SeverityType) -> (&'static str, &'static str) {
    match severity {
        SeverityType::Success => ("Upload complete", "All 42 shards reached the grid."),
        SeverityType::Error => ("Link severed", "The uplink dropped mid-transfer. Try again."),
        SeverityType::Warning => ("Low signal", "Packet loss is above 12%. Results may lag."),
        SeverityType::Info => ("Patch notes", "Firmware 2.0.77 adds neon channel routing."),
        SeverityType::Confirm => ("Wipe cache?", "Every cached shard on this node will be erased."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cyberkit_core::ClosedSet;

    #[test]
    fn test_open_and_close() {
        let mut state = GalleryState::new();
        state.open_dialog(SeverityType::Error);
        assert!(state.dialog_open);
        assert_eq!(state.severity, SeverityType::Error);

        state.close_dialog();
        assert!(!state.dialog_open);
        // Severity survives so the exit motion keeps its colors
        assert_eq!(state.severity, SeverityType::Error);

        let log: Vec<_> = state.log().collect();
        assert_eq!(log, vec!["open error", "close"]);
    }

    #[test]
    fn test_log_is_bounded() {
        let mut state = GalleryState::new();
        for i in 0..(LOG_CAPACITY + 3) {
            state.record(format!("entry {i}"));
        }
        let log: Vec<_> = state.log().collect();
        assert_eq!(log.len(), LOG_CAPACITY);
        assert_eq!(log[0], "entry 3");
        assert_eq!(log[LOG_CAPACITY - 1], format!("entry {}", LOG_CAPACITY + 2));
    }

    #[test]
    fn test_toggle_cancel() {
        let mut state = GalleryState::new();
        state.toggle_cancel();
        assert!(state.show_cancel);
        state.toggle_cancel();
        assert!(!state.show_cancel);
    }

    #[test]
    fn test_demo_copy_is_complete() {
        for severity in SeverityType::ALL {
            let (title, message) = demo_copy(*severity);
            assert!(!title.is_empty());
            assert!(!message.is_empty());
        }
    }
}
