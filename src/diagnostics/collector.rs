// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.
//!
//! This module provides the central collector that receives events from
//! various parts of the application and stores them in a circular buffer.
//! Every event is also forwarded to the `log` facade when it is recorded.

use tokio::sync::mpsc::{self, error::TrySendError, Receiver, Sender};

use super::{
    AppStateEvent, BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind,
    UserAction,
};

/// Handle for sending diagnostic events to the collector.
///
/// This handle is cheap to clone and can be moved into background workers.
/// Events are sent via a bounded channel so senders never block.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Logs a user action event.
    ///
    /// Non-blocking; the event is dropped from the buffer (but still logged)
    /// if the channel is full.
    pub fn log_action(&self, action: UserAction) {
        self.send(DiagnosticEventKind::UserAction { action });
    }

    /// Logs an application state change.
    pub fn log_state(&self, state: AppStateEvent) {
        self.send(DiagnosticEventKind::AppState { state });
    }

    /// Logs a warning message.
    pub fn log_warning(&self, message: impl Into<String>) {
        self.send(DiagnosticEventKind::Warning {
            message: message.into(),
        });
    }

    /// Logs an error message.
    pub fn log_error(&self, message: impl Into<String>) {
        self.send(DiagnosticEventKind::Error {
            message: message.into(),
        });
    }

    /// Attempts to send an event, returning an error if the channel is full.
    ///
    /// # Errors
    ///
    /// Returns `TrySendError::Full` if the internal channel buffer is full,
    /// or `TrySendError::Closed` if the collector was dropped.
    pub fn try_log(&self, kind: DiagnosticEventKind) -> Result<(), TrySendError<DiagnosticEvent>> {
        kind.emit();
        self.event_tx.try_send(DiagnosticEvent::new(kind))
    }

    fn send(&self, kind: DiagnosticEventKind) {
        let _ = self.try_log(kind);
    }
}

/// Central collector for diagnostic events.
///
/// The collector receives events through a channel and stores them in a
/// memory-bounded circular buffer. Old events are automatically evicted
/// when the buffer reaches capacity.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
}

impl std::fmt::Debug for DiagnosticsCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosticsCollector")
            .field("len", &self.buffer.len())
            .field("capacity", &self.buffer.capacity())
            .finish()
    }
}

/// Default channel capacity for event buffering.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

impl DiagnosticsCollector {
    /// Creates a new diagnostics collector with the specified buffer capacity.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = mpsc::channel(DEFAULT_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
        }
    }

    /// Creates a handle for sending events to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Drains the channel into the buffer.
    ///
    /// Called at the start of every update so worker events land in order
    /// with the messages that follow them. Returns `true` if an error was
    /// among the drained events.
    pub fn process_pending(&mut self) -> bool {
        let mut error_received = false;
        while let Ok(event) = self.event_rx.try_recv() {
            error_received |= matches!(event.kind, DiagnosticEventKind::Error { .. });
            self.buffer.push(event);
        }
        error_received
    }

    /// Writes the buffered events to the log at debug level, oldest first.
    pub fn dump_to_log(&self) {
        let Some(first) = self.iter().next().map(|event| event.timestamp) else {
            return;
        };
        log::debug!("last {} diagnostic events:", self.len());
        for event in self.iter() {
            let offset = event.timestamp.saturating_duration_since(first);
            log::debug!("  +{:.3}s {:?}", offset.as_secs_f64(), event.kind);
        }
    }

    /// Logs an action directly to the buffer (bypassing the channel).
    pub fn log_action(&mut self, action: UserAction) {
        self.record(DiagnosticEventKind::UserAction { action });
    }

    /// Logs a state change directly to the buffer.
    pub fn log_state(&mut self, state: AppStateEvent) {
        self.record(DiagnosticEventKind::AppState { state });
    }

    /// Logs a warning directly to the buffer.
    pub fn log_warning(&mut self, message: impl Into<String>) {
        self.record(DiagnosticEventKind::Warning {
            message: message.into(),
        });
    }

    /// Logs an error directly to the buffer.
    pub fn log_error(&mut self, message: impl Into<String>) {
        self.record(DiagnosticEventKind::Error {
            message: message.into(),
        });
    }

    fn record(&mut self, kind: DiagnosticEventKind) {
        kind.emit();
        self.buffer.push(DiagnosticEvent::new(kind));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns an iterator over all stored events (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}
