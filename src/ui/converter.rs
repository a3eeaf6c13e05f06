// SPDX-License-Identifier: MPL-2.0
//! Converter screen: source field, Encode/Decode buttons and result field.
//!
//! The screen owns the two text buffers. Conversions are not run here; a
//! button press is turned into an [`Event::Convert`] that the application
//! forwards to the conversion service, then hands the output back through
//! [`State::set_output`].

use crate::codec::Operation;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, text_editor, Column, Row, Text};
use iced::{alignment, Element, Length, Theme};

/// Messages emitted by the converter screen.
#[derive(Debug, Clone)]
pub enum Message {
    SourceEdited(text_editor::Action),
    /// Selection and scrolling in the result field. Edits are dropped.
    TargetEdited(text_editor::Action),
    Encode,
    Decode,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Convert(Operation),
}

/// Text buffers of the screen.
#[derive(Debug, Default)]
pub struct State {
    source: text_editor::Content,
    target: text_editor::Content,
}

impl State {
    /// Creates the screen with `initial` pre-filled in the source field.
    #[must_use]
    pub fn new(initial: Option<&str>) -> Self {
        Self {
            source: initial.map_or_else(text_editor::Content::new, text_editor::Content::with_text),
            target: text_editor::Content::new(),
        }
    }

    #[must_use]
    pub fn source_text(&self) -> String {
        self.source.text()
    }

    #[must_use]
    pub fn target_text(&self) -> String {
        self.target.text()
    }

    /// Replaces the result field content.
    pub fn set_output(&mut self, output: &str) {
        self.target = text_editor::Content::with_text(output);
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::SourceEdited(action) => {
                self.source.perform(action);
                Event::None
            }
            Message::TargetEdited(action) => {
                if !action.is_edit() {
                    self.target.perform(action);
                }
                Event::None
            }
            Message::Encode => Event::Convert(Operation::Encode),
            Message::Decode => Event::Convert(Operation::Decode),
        }
    }

    pub fn view<'a>(&'a self, i18n: &I18n) -> Element<'a, Message> {
        let source = text_editor(&self.source)
            .placeholder(i18n.tr("source-placeholder"))
            .on_action(Message::SourceEdited)
            .size(typography::BODY_LG)
            .padding(spacing::XS)
            .height(Length::Fill);

        let target = text_editor(&self.target)
            .placeholder(i18n.tr("target-placeholder"))
            .on_action(Message::TargetEdited)
            .size(typography::BODY_LG)
            .padding(spacing::XS)
            .height(Length::Fill);

        let buttons = Row::new()
            .spacing(spacing::MD)
            .push(action_button(
                i18n.tr(Operation::Encode.label_key()),
                Message::Encode,
                styles::button::primary,
            ))
            .push(action_button(
                i18n.tr(Operation::Decode.label_key()),
                Message::Decode,
                styles::button::secondary,
            ));

        Column::new()
            .spacing(spacing::XS)
            .padding(spacing::LG)
            .align_x(alignment::Horizontal::Center)
            .push(label(i18n.tr("source-label")))
            .push(source)
            .push(buttons)
            .push(label(i18n.tr("target-label")))
            .push(target)
            .into()
    }
}

fn label<'a>(content: String) -> Element<'a, Message> {
    Text::new(content)
        .size(typography::TITLE_SM)
        .width(Length::Fill)
        .into()
}

fn action_button<'a>(
    label: String,
    message: Message,
    style: fn(&Theme, button::Status) -> button::Style,
) -> Element<'a, Message> {
    button(
        text(label)
            .size(typography::BODY)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .on_press(message)
    .width(Length::Fixed(sizing::BUTTON_MIN_WIDTH))
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .style(style)
    .into()
}
