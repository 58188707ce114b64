// SPDX-License-Identifier: MPL-2.0
//! Collector aggregating diagnostic events into the ring buffer.

use crossbeam_channel::{bounded, Receiver, Sender};

use super::buffer::{BufferCapacity, CircularBuffer};
use super::events::{
    DiagnosticEvent, DiagnosticEventKind, ErrorEvent, UserAction, WarningEvent,
};

/// Channel capacity between producers and the collector. Events beyond this
/// while the collector is not draining are dropped rather than blocking.
const CHANNEL_CAPACITY: usize = 256;

/// Handle for sending diagnostic events to the collector.
///
/// Cheap to clone and safe to hand to any subsystem. All `log_*` methods
/// are non-blocking; if the channel is full the event is dropped.
#[derive(Debug, Clone)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Logs a user action.
    pub fn log_action(&self, action: UserAction) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::UserAction { action });
        let _ = self.event_tx.try_send(event);
    }

    /// Logs a warning.
    pub fn log_warning(&self, warning: WarningEvent) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::Warning { event: warning });
        let _ = self.event_tx.try_send(event);
    }

    /// Logs an error.
    pub fn log_error(&self, error: ErrorEvent) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::Error { event: error });
        let _ = self.event_tx.try_send(event);
    }
}

/// Owns the event buffer and the receiving end of the channel.
///
/// The application calls [`DiagnosticsCollector::process_pending`] on its
/// periodic tick; there is no background thread.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    buffer: CircularBuffer<DiagnosticEvent>,
}

impl DiagnosticsCollector {
    /// Creates a collector with the given buffer capacity.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(CHANNEL_CAPACITY);
        Self {
            event_rx,
            event_tx,
            buffer: CircularBuffer::new(capacity),
        }
    }

    /// Returns a cloneable handle for producing events.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Drains all pending events into the buffer. Returns how many events
    /// were stored.
    pub fn process_pending(&mut self) -> usize {
        let mut stored = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
            stored += 1;
        }
        stored
    }

    /// Stored events, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Number of stored events.
    #[must_use]
    pub fn event_count(&self) -> usize {
        self.buffer.len()
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{ErrorType, WarningType};

    #[test]
    fn logged_events_arrive_after_processing() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.log_action(UserAction::AddToCart);
        handle.log_error(ErrorEvent::new(ErrorType::ProductFetch, "error-fetch-http"));

        assert_eq!(collector.event_count(), 0, "nothing stored before drain");
        assert_eq!(collector.process_pending(), 2);
        assert_eq!(collector.event_count(), 2);
    }

    #[test]
    fn events_keep_arrival_order() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.log_warning(WarningEvent::new(WarningType::ConfigFallback, "first"));
        handle.log_warning(WarningEvent::new(
            WarningType::CartUnexpectedStatus,
            "second",
        ));
        collector.process_pending();

        let messages: Vec<_> = collector
            .events()
            .map(|e| match &e.kind {
                DiagnosticEventKind::Warning { event } => event.message.clone(),
                _ => panic!("expected warnings"),
            })
            .collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn handle_outlives_borrow_and_is_cloneable() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();
        let clone = handle.clone();

        clone.log_action(UserAction::SelectVariant);
        drop(handle);
        drop(clone);

        assert_eq!(collector.process_pending(), 1);
    }

    #[test]
    fn overflowing_channel_drops_instead_of_blocking() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        for _ in 0..(CHANNEL_CAPACITY + 50) {
            handle.log_action(UserAction::SelectSize);
        }

        // No deadlock, and at most the channel capacity made it through.
        let stored = collector.process_pending();
        assert_eq!(stored, CHANNEL_CAPACITY);
    }
}
