// SPDX-License-Identifier: MPL-2.0
//! The selection strip: a fixed-basis horizontal band where every
//! selected image takes an equal share of the width.

use super::drag::{self, DragState, DropTarget};
use crate::i18n::fluent::I18n;
use crate::picker::layout::StripLayout;
use crate::picker::lists::{ListKind, SlotRef};
use crate::picker::record::ImageRecord;
use crate::ui::design_tokens::{palette, typography};
use crate::ui::styles;
use iced::widget::image::Image;
use iced::widget::{mouse_area, Container, Row, Text};
use iced::{alignment, ContentFit, Element, Length, Theme};

/// Renders the selection strip, centered in the available width.
pub fn view<'a>(
    records: &'a [ImageRecord],
    layout: &StripLayout,
    drag: &DragState,
    i18n: &'a I18n,
) -> Element<'a, drag::Message> {
    let item_width = layout.item_width(records.len());

    let content: Element<'a, drag::Message> = if records.is_empty() {
        // The empty strip keeps its full basis as a single nominal slot.
        Container::new(
            Text::new(i18n.tr("strip-empty-hint"))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
    } else {
        let mut row = Row::new();
        for (index, record) in records.iter().enumerate() {
            let slot = SlotRef {
                list: ListKind::Selected,
                index,
            };
            row = row.push(item(record, slot, item_width, layout.height(), drag));
        }
        row.into()
    };

    let band = Container::new(content)
        .width(Length::Fixed(layout.width()))
        .height(Length::Fixed(layout.height()))
        .clip(true)
        .style(styles::container::strip);

    let band = mouse_area(band)
        .on_enter(drag::Message::ListEntered(ListKind::Selected))
        .on_exit(drag::Message::ListLeft(ListKind::Selected));

    // Center the band like the original strip (margin auto on both sides).
    Container::new(band)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into()
}

/// One strip item at the shared per-item width.
fn item<'a>(
    record: &ImageRecord,
    slot: SlotRef,
    width: f32,
    height: f32,
    drag: &DragState,
) -> Element<'a, drag::Message> {
    let image = Image::new(record.handle.clone())
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .content_fit(ContentFit::Cover);

    let highlighted = drag.target() == Some(DropTarget::Slot(slot));
    let framed = Container::new(image)
        .style(move |theme: &Theme| styles::container::slot(theme, highlighted));

    mouse_area(framed)
        .on_press(drag::Message::Pressed(slot))
        .on_enter(drag::Message::SlotEntered(slot))
        .on_exit(drag::Message::SlotLeft(slot))
        .interaction(iced::mouse::Interaction::Grab)
        .into()
}
