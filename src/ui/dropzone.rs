// SPDX-License-Identifier: MPL-2.0
//! The file drop zone shown above the uploaded pool.
//!
//! The zone is a bordered prompt area: clicking it opens the native file
//! dialog, and while files from the OS hover over the window the copy
//! and border switch to the active variant.

use crate::app::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{mouse_area, Container, Text};
use iced::{alignment, Element, Length, Theme};

/// Renders the drop zone.
pub fn view(i18n: &I18n, drag_active: bool) -> Element<'_, Message> {
    let key = if drag_active {
        "dropzone-prompt-active"
    } else {
        "dropzone-prompt-idle"
    };

    let prompt = Text::new(i18n.tr(key))
        .size(typography::BODY)
        .style(move |theme: &Theme| iced::widget::text::Style {
            color: Some(if drag_active {
                palette::PRIMARY_500
            } else {
                theme.palette().text
            }),
        });

    let zone = Container::new(prompt)
        .width(Length::Fill)
        .padding(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .style(move |theme: &Theme| styles::container::dropzone(theme, drag_active));

    mouse_area(zone)
        .on_press(Message::OpenFileDialog)
        .interaction(iced::mouse::Interaction::Pointer)
        .into()
}
