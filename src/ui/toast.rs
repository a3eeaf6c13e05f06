// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering notifications.
//!
//! Toasts are the visual representation of notifications: small cards with a
//! severity-colored border, the localized message and the time it was raised.
//! They carry no interaction, so the views are generic over the message type.

use crate::i18n::fluent::I18n;
use crate::notifications::{Manager, Notification, Severity};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::Instant;

/// Accent color for a severity.
#[must_use]
pub fn accent(severity: Severity) -> Color {
    match severity {
        Severity::Info => palette::INFO_500,
        Severity::Error => palette::ERROR_500,
    }
}

/// Resolves the localized text of `notification`.
#[must_use]
pub fn message_text(notification: &Notification, i18n: &I18n) -> String {
    if notification.message_args().is_empty() {
        return i18n.tr(notification.message_key());
    }
    let args: Vec<(&str, &str)> = notification
        .message_args()
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    i18n.tr_with_args(notification.message_key(), &args)
}

fn severity_key(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "severity-info",
        Severity::Error => "severity-error",
    }
}

/// Renders a single toast at the given opacity.
pub fn view<'a, M: 'a>(notification: &Notification, alpha: f32, i18n: &I18n) -> Element<'a, M> {
    let accent_color = accent(notification.severity());
    let faded = move |color: Color| Color {
        a: color.a * alpha,
        ..color
    };

    let header = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(i18n.tr(severity_key(notification.severity())))
                .size(typography::CAPTION)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(faded(accent_color)),
                }),
        )
        .push(
            Text::new(notification.timestamp().format("%H:%M:%S").to_string())
                .size(typography::CAPTION)
                .style(move |theme: &Theme| text::Style {
                    color: Some(faded(theme.extended_palette().background.strong.text)),
                }),
        );

    let message = Text::new(message_text(notification, i18n))
        .size(typography::BODY)
        .style(move |theme: &Theme| text::Style {
            color: Some(faded(theme.palette().text)),
        });

    let content = Column::new()
        .spacing(spacing::XXS)
        .push(header)
        .push(message);

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| styles::container::toast(theme, accent_color, alpha))
        .into()
}

/// Renders every visible notification stacked in the bottom-right corner,
/// newest first.
pub fn view_overlay<'a, M: 'a>(manager: &Manager, i18n: &I18n, now: Instant) -> Element<'a, M> {
    let toasts: Vec<Element<'a, M>> = manager
        .visible()
        .map(|notification| view(notification, manager.opacity_of(notification, now), i18n))
        .collect();

    if toasts.is_empty() {
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let column = Column::with_children(toasts)
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Right);

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::{ClipboardError, CodecError};

    fn i18n() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    #[test]
    fn severities_have_distinct_accents() {
        assert_eq!(accent(Severity::Info), palette::INFO_500);
        assert_eq!(accent(Severity::Error), palette::ERROR_500);
    }

    #[test]
    fn message_text_resolves_plain_key() {
        let notification = Notification::info("notification-decode-copied");
        assert_eq!(
            message_text(&notification, &i18n()),
            "Decoded value copied to the clipboard"
        );
    }

    #[test]
    fn message_text_interpolates_arguments() {
        let err = ClipboardError::WriteFailed("owner gone".into());
        let text = message_text(&Notification::from_clipboard_error(&err), &i18n());
        assert!(text.contains("owner gone"), "{text}");
    }

    #[test]
    fn codec_errors_render_their_message() {
        let err = CodecError::MalformedInput("Invalid padding".into());
        let text = message_text(&Notification::from_codec_error(&err), &i18n());
        assert_eq!(text, err.to_string());
    }

    #[test]
    fn views_build_for_every_state() {
        let i18n = i18n();
        let mut manager = Manager::new();
        let _: Element<'_, ()> = view_overlay(&manager, &i18n, Instant::now());

        manager.push(Notification::info("notification-encode-copied"));
        manager.push(Notification::error("error-encode-empty"));
        let _: Element<'_, ()> = view_overlay(&manager, &i18n, Instant::now());
    }
}
