// SPDX-License-Identifier: MPL-2.0
//! The settings screen: language selection and theme mode.
//!
//! Both choices take effect immediately and are persisted to
//! `settings.toml` by the update loop.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, Button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};
use unic_langid::LanguageIdentifier;

/// Messages emitted by the settings screen.
#[derive(Debug, Clone)]
pub enum Message {
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
    Back,
}

/// Context required to render the settings screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
}

/// Renders the settings screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.i18n.tr("settings-title")).size(typography::TITLE_LG);

    let mut language_column = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(ctx.i18n.tr("settings-language-label")).size(typography::TITLE_SM));

    for locale in &ctx.i18n.available_locales {
        language_column = language_column.push(language_button(ctx.i18n, locale));
    }

    let mut theme_row = Row::new().spacing(spacing::XS);
    for mode in ThemeMode::ALL {
        theme_row = theme_row.push(theme_button(ctx.i18n, mode, ctx.theme_mode));
    }
    let theme_column = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(ctx.i18n.tr("settings-theme-label")).size(typography::TITLE_SM))
        .push(theme_row);

    let back_button = button(Text::new(ctx.i18n.tr("settings-back")))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary)
        .on_press(Message::Back);

    let content = Column::new()
        .spacing(spacing::LG)
        .max_width(480.0)
        .push(title)
        .push(language_column)
        .push(theme_column)
        .push(back_button);

    Container::new(
        Container::new(content)
            .padding(spacing::XL)
            .style(styles::container::panel),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into()
}

/// A button selecting one of the available locales. The translated
/// language name is looked up through `language-name-*` keys, falling
/// back to the raw locale code.
fn language_button<'a>(i18n: &'a I18n, locale: &LanguageIdentifier) -> Element<'a, Message> {
    let code = locale.to_string();
    let translated_name = i18n.tr(&format!("language-name-{}", code));
    let label = if translated_name.starts_with("MISSING:") {
        code.clone()
    } else {
        format!("{} ({})", translated_name, code)
    };

    let mut button = Button::new(Text::new(label).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .on_press(Message::LanguageSelected(locale.clone()));

    button = if i18n.current_locale() == locale {
        button.style(styles::button::selected)
    } else {
        button.style(styles::button::unselected)
    };

    button.into()
}

/// A button selecting one theme mode.
fn theme_button<'a>(i18n: &'a I18n, mode: ThemeMode, current: ThemeMode) -> Element<'a, Message> {
    let mut button = Button::new(Text::new(i18n.tr(mode.i18n_key())).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .on_press(Message::ThemeModeSelected(mode));

    button = if mode == current {
        button.style(styles::button::selected)
    } else {
        button.style(styles::button::unselected)
    };

    button.into()
}
