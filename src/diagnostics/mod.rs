// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording application activity.
//!
//! Errors in this application are never shown to the user. They are written
//! here instead: each event is kept in a memory-bounded circular buffer and
//! forwarded to the `log` facade, which `main` routes to the terminal.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped user action, state change, warning or error
//! - [`DiagnosticsCollector`]: Owns the buffer, lives on the update loop
//! - [`DiagnosticsHandle`]: Cloneable non-blocking sender for background workers

mod buffer;
mod collector;
mod events;

pub use buffer::{buffer_capacity_bounds, BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{AppStateEvent, DiagnosticEvent, DiagnosticEventKind, UserAction};
