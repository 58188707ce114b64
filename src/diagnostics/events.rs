// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User-initiated actions worth having in the log when something goes
/// wrong right after them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    /// A product load was requested (startup argument or lookup bar).
    LoadProduct {
        /// Where the request came from (`cli`, `lookup_bar`).
        #[serde(skip_serializing_if = "Option::is_none")]
        source: Option<String>,
    },
    /// A color variant was selected.
    SelectVariant,
    /// A size was selected.
    SelectSize,
    /// The add-to-cart button was pressed.
    AddToCart,
}

/// Error categories. Coarser than [`crate::error::Error`]: the log cares
/// about which subsystem failed, not about transport details.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    ProductFetch,
    ImageFetch,
    CartSubmit,
    Config,
    Other,
}

/// Warning categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    /// The cart endpoint answered with a status outside 201/202.
    CartUnexpectedStatus,
    /// The settings file could not be read; defaults were used.
    ConfigFallback,
    Other,
}

/// A recorded error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorEvent {
    pub error_type: ErrorType,
    /// Message key or short description; never raw transport payloads.
    pub message: String,
}

impl ErrorEvent {
    pub fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
        }
    }
}

/// A recorded warning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WarningEvent {
    pub warning_type: WarningType,
    pub message: String,
}

impl WarningEvent {
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
        }
    }
}

/// What happened.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction { action: UserAction },
    Warning { event: WarningEvent },
    Error { event: ErrorEvent },
}

/// A timestamped diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticEvent {
    pub at: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            at: Utc::now(),
            kind,
        }
    }

    /// Whether the event records an error.
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self.kind, DiagnosticEventKind::Error { .. })
    }
}
