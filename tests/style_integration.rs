// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::Theme;
    use iced_boutique::ui::design_tokens::{palette, sizing, spacing};
    use iced_boutique::ui::styles::button;
    use iced_boutique::ui::theming::ThemeMode;

    #[test]
    fn all_button_styles_compile() {
        let theme = Theme::Dark;

        // Smoke-test all button styles compile and are callable
        let _ = button::primary(&theme, iced::widget::button::Status::Active);
        let _ = button::selected(&theme, iced::widget::button::Status::Active);
        let _ = button::unselected(&theme, iced::widget::button::Status::Active);
        let _ = button::bare(&theme, iced::widget::button::Status::Active);
    }

    #[test]
    fn design_tokens_are_accessible() {
        // Palette
        let _ = palette::PRIMARY_500;
        let _ = palette::PRICE_500;

        // Spacing
        let _ = spacing::MD;

        // Sizing
        let _ = sizing::TOAST_WIDTH;
    }

    #[test]
    fn theme_modes_resolve_to_iced_themes() {
        assert!(matches!(ThemeMode::Light.iced_theme(), Theme::Light));
        assert!(matches!(ThemeMode::Dark.iced_theme(), Theme::Dark));
    }

    #[test]
    fn selection_styles_differ_in_both_themes() {
        for theme in [Theme::Light, Theme::Dark] {
            let selected = button::selected(&theme, iced::widget::button::Status::Active);
            let unselected = button::unselected(&theme, iced::widget::button::Status::Active);
            assert_ne!(selected.background, unselected.background);
        }
    }
}
