// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::product_detail;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Detail(product_detail::Message),
    Navbar(navbar::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick driving the spinner, notification auto-dismiss, and
    /// the diagnostics drain.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional product id to load on startup.
    pub product_id: Option<String>,
    /// Optional API base URL override (takes precedence over the config).
    pub api_url: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `ICED_BOUTIQUE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
