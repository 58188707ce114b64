// SPDX-License-Identifier: MPL-2.0
//! In-memory diagnostic event log.
//!
//! Failures the UI deliberately keeps quiet about (fetch errors rendered as
//! "not found", unexpected cart statuses) still need to land somewhere a
//! developer can inspect. Events are sent through a non-blocking channel
//! handle and drained into a bounded ring buffer on the UI tick, so no
//! call site ever blocks on logging.

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{
    DiagnosticEvent, DiagnosticEventKind, ErrorEvent, ErrorType, UserAction, WarningEvent,
    WarningType,
};
