// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the detail view and the
//! ambient services (API client, notifications, diagnostics, localization).
//!
//! The `App` struct wires the components together and translates component
//! effects into side work like HTTP requests or toast pushes. Policy
//! decisions (what an unexpected cart status does, where requests go) stay
//! close to the main update loop so user-facing behavior is easy to audit.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::api::StoreClient;
use crate::catalog::EntityId;
use crate::diagnostics::{DiagnosticsCollector, ErrorEvent, ErrorType, WarningType};
use crate::i18n::fluent::I18n;
use crate::ui::notifications;
use crate::ui::product_detail;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    detail: product_detail::State,
    notifications: notifications::Manager,
    diagnostics: DiagnosticsCollector,
    /// API client; `None` when construction failed at startup.
    client: Option<StoreClient>,
    /// Text in the lookup bar input.
    lookup_value: String,
    theme_mode: ThemeMode,
    /// Surface non-201/202 cart answers as warning toasts.
    notify_unexpected_status: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("has_product", &self.detail.product().is_some())
            .field("is_loading", &self.detail.is_loading())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const MIN_WINDOW_WIDTH: u32 = 760;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.clone());

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let diagnostics = DiagnosticsCollector::default();
        let mut notifications = notifications::Manager::new();
        notifications.set_diagnostics(diagnostics.handle());

        Self {
            i18n: I18n::default(),
            detail: product_detail::State::new(),
            notifications,
            diagnostics,
            client: None,
            lookup_value: String::new(),
            theme_mode: ThemeMode::System,
            notify_unexpected_status: false,
        }
    }
}

impl App {
    /// Initializes application state and optionally kicks off the initial
    /// product load based on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.clone(), &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };

        app.theme_mode = config.general.theme_mode;
        app.notify_unexpected_status = config.api.notify_unexpected_status();

        let base_url = flags
            .api_url
            .clone()
            .unwrap_or_else(|| config.api.base_url().to_string());
        match StoreClient::new(&base_url, config.api.request_timeout()) {
            Ok(client) => app.client = Some(client),
            Err(error) => {
                app.diagnostics
                    .handle()
                    .log_error(ErrorEvent::new(ErrorType::Config, error.i18n_key()));
            }
        }

        if let Some(key) = config_warning {
            app.notifications.push(
                notifications::Notification::warning(key)
                    .with_warning_type(WarningType::ConfigFallback),
            );
        }

        let task = if let Some(raw_id) = flags.product_id {
            let id = EntityId::from(raw_id.as_str());
            update::request_product(&mut app, id, "cli")
        } else {
            Task::none()
        };

        app.diagnostics.process_pending();

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.detail.product() {
            Some(product) => format!("{} - {}", product.name, app_name),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(
            self.detail.is_loading(),
            self.notifications.has_notifications(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            detail: &self.detail,
            notifications: &self.notifications,
            lookup_value: &self.lookup_value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::CartOutcome;
    use crate::catalog::{Product, SizeOption, Variant, VariantImage};
    use crate::diagnostics::DiagnosticEventKind;
    use crate::error::Error;
    use crate::ui::navbar;
    use crate::ui::notifications::Severity;
    use rust_decimal::Decimal;
    use std::sync::{Mutex, OnceLock};
    use tempfile::tempdir;

    fn config_env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    fn with_temp_config_dir<F>(test: F)
    where
        F: FnOnce(&std::path::Path),
    {
        let _guard = config_env_lock().lock().expect("failed to lock mutex");
        let temp_dir = tempdir().expect("failed to create temp dir");
        let previous = std::env::var(paths::ENV_CONFIG_DIR).ok();
        std::env::set_var(paths::ENV_CONFIG_DIR, temp_dir.path());

        test(temp_dir.path());

        if let Some(value) = previous {
            std::env::set_var(paths::ENV_CONFIG_DIR, value);
        } else {
            std::env::remove_var(paths::ENV_CONFIG_DIR);
        }
    }

    fn sample_product() -> Product {
        Product {
            id: EntityId::Number(42),
            name: "Trail Jacket".into(),
            price: Decimal::new(8990, 2),
            variants: vec![Variant {
                id: EntityId::Number(7),
                name: "Forest Green".into(),
                images: vec![VariantImage {
                    url: "https://cdn.example.com/green.jpg".into(),
                }],
                sizes: vec![SizeOption {
                    id: EntityId::Number(1),
                    name: "S".into(),
                }],
            }],
        }
    }

    /// Drives an app through a request plus successful load.
    fn app_with_loaded_product() -> App {
        let mut app = App::default();
        let _ = app.update(Message::Detail(product_detail::Message::ProductRequested(
            EntityId::Number(42),
        )));
        let _ = app.update(Message::Detail(product_detail::Message::ProductLoaded {
            generation: 1,
            result: Ok(sample_product()),
        }));
        app
    }

    #[test]
    fn new_starts_without_product() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags::default());
            assert!(app.detail.product().is_none());
            assert!(!app.detail.is_loading());
        });
    }

    #[test]
    fn new_with_product_id_starts_loading() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags {
                product_id: Some("42".into()),
                ..Flags::default()
            });
            assert!(app.detail.is_loading());
        });
    }

    #[test]
    fn product_loaded_ok_sets_state_and_title() {
        let app = app_with_loaded_product();

        assert!(app.detail.product().is_some());
        assert!(app.title().starts_with("Trail Jacket"));
        assert_eq!(app.notifications.visible_count(), 0);
    }

    #[test]
    fn product_loaded_err_shows_not_found_without_toast() {
        let mut app = App::default();
        let _ = app.update(Message::Detail(product_detail::Message::ProductRequested(
            EntityId::Number(42),
        )));
        let _ = app.update(Message::Detail(product_detail::Message::ProductLoaded {
            generation: 1,
            result: Err(Error::Status(500)),
        }));

        assert!(!app.detail.is_loading());
        assert!(app.detail.product().is_none());
        // Fetch failures are silent toward the user...
        assert_eq!(app.notifications.visible_count(), 0);
        // ...but land in the diagnostics log.
        assert!(app.diagnostics.events().any(|e| e.is_error()));
    }

    #[test]
    fn add_to_cart_without_selection_pushes_exactly_one_error_toast() {
        let mut app = App::default();
        let _ = app.update(Message::Detail(product_detail::Message::AddToCartPressed));

        assert_eq!(app.notifications.visible_count(), 1);
        let toast = app.notifications.visible().next().expect("one toast");
        assert_eq!(toast.severity(), Severity::Error);
        assert_eq!(toast.message_key(), "notification-select-options");
    }

    #[test]
    fn cart_created_pushes_exactly_one_success_toast() {
        let mut app = app_with_loaded_product();
        let _ = app.update(Message::Detail(product_detail::Message::CartSubmitted(Ok(
            CartOutcome::Created,
        ))));

        assert_eq!(app.notifications.visible_count(), 1);
        let toast = app.notifications.visible().next().expect("one toast");
        assert_eq!(toast.severity(), Severity::Success);
        assert_eq!(toast.message_key(), "notification-cart-added");
    }

    #[test]
    fn cart_transport_error_pushes_exactly_one_error_toast() {
        let mut app = app_with_loaded_product();
        let _ = app.update(Message::Detail(product_detail::Message::CartSubmitted(
            Err(Error::Http("boom".into())),
        )));

        assert_eq!(app.notifications.visible_count(), 1);
        let toast = app.notifications.visible().next().expect("one toast");
        assert_eq!(toast.severity(), Severity::Error);
    }

    #[test]
    fn unexpected_cart_status_is_silent_by_default_but_logged() {
        let mut app = app_with_loaded_product();
        let _ = app.update(Message::Detail(product_detail::Message::CartSubmitted(Ok(
            CartOutcome::Unexpected(200),
        ))));

        assert_eq!(app.notifications.visible_count(), 0);
        let warned = app.diagnostics.events().any(|e| {
            matches!(
                &e.kind,
                DiagnosticEventKind::Warning { event }
                    if event.warning_type == crate::diagnostics::WarningType::CartUnexpectedStatus
            )
        });
        assert!(warned, "the status must land in the diagnostics log");
    }

    #[test]
    fn unexpected_cart_status_surfaces_when_configured() {
        let mut app = app_with_loaded_product();
        app.notify_unexpected_status = true;

        let _ = app.update(Message::Detail(product_detail::Message::CartSubmitted(Ok(
            CartOutcome::Unexpected(409),
        ))));

        assert_eq!(app.notifications.visible_count(), 1);
        let toast = app.notifications.visible().next().expect("one toast");
        assert_eq!(toast.severity(), Severity::Warning);
        assert_eq!(
            toast.message_args(),
            [("status".to_string(), "409".to_string())].as_slice()
        );
    }

    #[test]
    fn lookup_submit_starts_a_load() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::LookupChanged("7".into())));
        let _ = app.update(Message::Navbar(navbar::Message::LookupSubmitted));

        assert!(app.detail.is_loading());
        assert_eq!(app.detail.product_id(), Some(&EntityId::Number(7)));
    }

    #[test]
    fn tick_advances_spinner_while_loading() {
        let mut app = App::default();
        let _ = app.update(Message::Detail(product_detail::Message::ProductRequested(
            EntityId::Number(1),
        )));

        let before = app.detail.spinner_rotation();
        let _ = app.update(Message::Tick(std::time::Instant::now()));
        assert!(app.detail.spinner_rotation() > before);
    }

    #[test]
    fn title_falls_back_to_app_name() {
        let app = App::default();
        assert_eq!(app.title(), app.i18n.tr("window-title"));
    }

    #[test]
    fn theme_follows_configured_mode() {
        let mut app = App::default();
        app.theme_mode = ThemeMode::Light;
        assert!(matches!(app.theme(), Theme::Light));

        app.theme_mode = ThemeMode::Dark;
        assert!(matches!(app.theme(), Theme::Dark));
    }
}
