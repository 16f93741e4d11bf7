// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current
//! screen based on application state, with the toast overlay stacked on
//! top.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::picker::layout::StripLayout;
use crate::picker::lists::Lists;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::drag::DragState;
use crate::ui::notifications::{Manager, Toast};
use crate::ui::{dropzone, pool, settings, strip, styles};
use iced::widget::{button, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub lists: &'a Lists,
    pub drag: &'a DragState,
    pub layout: &'a StripLayout,
    pub pool_columns: usize,
    pub drop_hover: bool,
    pub theme_mode: crate::ui::theming::ThemeMode,
    pub notifications: &'a Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Picker => view_picker(
            ctx.i18n,
            ctx.lists,
            ctx.drag,
            ctx.layout,
            ctx.pool_columns,
            ctx.drop_hover,
        ),
        Screen::Settings => settings::view(settings::ViewContext {
            i18n: ctx.i18n,
            theme_mode: ctx.theme_mode,
        })
        .map(Message::Settings),
    };

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_picker<'a>(
    i18n: &'a I18n,
    lists: &'a Lists,
    drag: &'a DragState,
    layout: &'a StripLayout,
    pool_columns: usize,
    drop_hover: bool,
) -> Element<'a, Message> {
    let settings_button = button(Text::new(i18n.tr("settings-button")).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::unselected)
        .on_press(Message::SwitchScreen(Screen::Settings));

    let pool_header = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(Text::new(i18n.tr("pool-title")).size(typography::TITLE_SM))
        .push(Space::new().width(Length::Fill))
        .push(settings_button);

    let drop_target = dropzone::view(i18n, drop_hover);

    let uploaded_grid = pool::view(lists.uploaded(), pool_columns, drag, i18n).map(Message::Drag);

    let strip_title = Text::new(i18n.tr("strip-title")).size(typography::TITLE_SM);
    let selected_strip = strip::view(lists.selected(), layout, drag, i18n).map(Message::Drag);

    Column::new()
        .padding(super::PAGE_PADDING)
        .spacing(spacing::MD)
        .push(pool_header)
        .push(drop_target)
        .push(uploaded_grid)
        .push(strip_title)
        .push(selected_strip)
        .into()
}
