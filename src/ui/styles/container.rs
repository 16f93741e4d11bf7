// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used for the settings view.
///
/// The color is derived from the active Iced `Theme` background, with a
/// slight opacity, so panels stay readable in both light and dark modes
/// without hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// The file drop zone. The border switches to the brand color and the
/// background tints while files are hovering over the window.
pub fn dropzone(theme: &Theme, drag_active: bool) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    let (border_color, background) = if drag_active {
        (
            palette::PRIMARY_500,
            Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::PRIMARY_100
            },
        )
    } else {
        (palette::GRAY_400, base)
    };

    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: border_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// The selection strip surface, a muted band behind the selected images.
pub fn strip(theme: &Theme) -> container::Style {
    let weak = theme.extended_palette().background.weak.color;

    container::Style {
        background: Some(Background::Color(weak)),
        border: Border {
            radius: radius::NONE.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// A thumbnail slot. Highlighted while it is the current drop target.
pub fn slot(_theme: &Theme, highlighted: bool) -> container::Style {
    let border = if highlighted {
        Border {
            color: palette::PRIMARY_500,
            width: border::WIDTH_MD,
            radius: radius::SM.into(),
        }
    } else {
        Border {
            color: Color {
                a: opacity::TRANSPARENT,
                ..palette::PRIMARY_500
            },
            width: border::WIDTH_MD,
            radius: radius::SM.into(),
        }
    };

    container::Style {
        border,
        ..Default::default()
    }
}
