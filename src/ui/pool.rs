// SPDX-License-Identifier: MPL-2.0
//! The uploaded pool: a wrapping grid of fixed-size thumbnails.
//!
//! Thumbnails are chunked into rows of `columns` tiles, recomputed from
//! the container width on resize. Every tile is a drag source and a
//! drop target; the surface behind the tiles accepts end-of-list drops.

use super::drag::{self, DragState, DropTarget};
use crate::i18n::fluent::I18n;
use crate::picker::layout::POOL_TILE_SIZE;
use crate::picker::lists::{ListKind, SlotRef};
use crate::picker::record::ImageRecord;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::image::Image;
use iced::widget::{mouse_area, Column, Container, Row, Text};
use iced::{ContentFit, Element, Length, Theme};

/// Renders the uploaded pool grid.
pub fn view<'a>(
    records: &'a [ImageRecord],
    columns: usize,
    drag: &DragState,
    i18n: &'a I18n,
) -> Element<'a, drag::Message> {
    let columns = columns.max(1);

    let content: Element<'a, drag::Message> = if records.is_empty() {
        Text::new(i18n.tr("pool-empty-hint"))
            .size(typography::CAPTION)
            .color(palette::GRAY_400)
            .into()
    } else {
        let mut grid = Column::new().spacing(spacing::XS);
        for (row_index, chunk) in records.chunks(columns).enumerate() {
            let mut row = Row::new().spacing(spacing::XS);
            for (column_index, record) in chunk.iter().enumerate() {
                let slot = SlotRef {
                    list: ListKind::Uploaded,
                    index: row_index * columns + column_index,
                };
                row = row.push(tile(record, slot, drag));
            }
            grid = grid.push(row);
        }
        grid.into()
    };

    let surface = Container::new(content)
        .width(Length::Fill)
        .padding(spacing::XS);

    mouse_area(surface)
        .on_enter(drag::Message::ListEntered(ListKind::Uploaded))
        .on_exit(drag::Message::ListLeft(ListKind::Uploaded))
        .into()
}

/// One 64×64 thumbnail tile.
fn tile<'a>(
    record: &ImageRecord,
    slot: SlotRef,
    drag: &DragState,
) -> Element<'a, drag::Message> {
    let thumbnail = Image::new(record.handle.clone())
        .width(Length::Fixed(POOL_TILE_SIZE))
        .height(Length::Fixed(POOL_TILE_SIZE))
        .content_fit(ContentFit::Cover);

    let highlighted = drag.target() == Some(DropTarget::Slot(slot));
    let framed = Container::new(thumbnail)
        .style(move |theme: &Theme| styles::container::slot(theme, highlighted));

    mouse_area(framed)
        .on_press(drag::Message::Pressed(slot))
        .on_enter(drag::Message::SlotEntered(slot))
        .on_exit(drag::Message::SlotLeft(slot))
        .interaction(iced::mouse::Interaction::Grab)
        .into()
}
