// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration settings.

use crate::ui::theming::ThemeMode;

/// Base URL of the storefront API when none is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

/// Request timeout applied to every API call.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Whether a non-201/202 add-to-cart answer is surfaced as a warning toast.
/// Off by default: the storefront's historical behavior is to stay silent,
/// and the event is always recorded in diagnostics regardless.
pub const DEFAULT_NOTIFY_UNEXPECTED_STATUS: bool = false;

pub(super) fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

pub(super) fn default_api_base_url() -> Option<String> {
    Some(DEFAULT_API_BASE_URL.to_string())
}

pub(super) fn default_request_timeout() -> Option<u64> {
    Some(DEFAULT_REQUEST_TIMEOUT_SECS)
}

pub(super) fn default_notify_unexpected_status() -> Option<bool> {
    Some(DEFAULT_NOTIFY_UNEXPECTED_STATUS)
}
