// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Shadow, Theme};

/// Toast card faded to `alpha`.
///
/// Iced has no per-widget opacity, so every color of the card is scaled by
/// `alpha` instead.
pub fn toast(theme: &Theme, accent: Color, alpha: f32) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;
    let alpha = alpha.clamp(opacity::TRANSPARENT, opacity::OPAQUE);

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE * alpha,
            ..base
        })),
        border: Border {
            color: Color {
                a: accent.a * alpha,
                ..accent
            },
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: Shadow {
            color: Color {
                a: opacity::OVERLAY_SUBTLE * alpha,
                ..shadow::MD.color
            },
            ..shadow::MD
        },
        text_color: Some(Color {
            a: alpha,
            ..palette.background.base.text
        }),
        ..Default::default()
    }
}
