// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the converter screen to the conversion service and
//! the notification manager, and applies the user's configuration (language,
//! theme, fade durations, clipboard copy) at startup.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::application::conversion::Converter;
use crate::config::{self, DEFAULT_COPY_RESULTS};
use crate::i18n::fluent::I18n;
use crate::infrastructure::SystemClipboard;
use crate::notifications::{self, Severity};
use crate::ui::converter::{self, Event};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    converter_screen: converter::State,
    converter: Converter,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("converter", &self.converter)
            .field("notifications", &self.notifications.visible_count())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::WINDOW_DEFAULT_WIDTH, config::WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires the boot function to be Fn; flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            theme_mode: ThemeMode::System,
            converter_screen: converter::State::default(),
            converter: Converter::new(Box::new(SystemClipboard::new())),
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state from the configuration and `Flags`.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let copy_results = config
            .clipboard
            .copy_results
            .unwrap_or(DEFAULT_COPY_RESULTS);

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            converter_screen: converter::State::new(flags.text.as_deref()),
            converter: Converter::new(Box::new(SystemClipboard::new()))
                .with_copy_results(copy_results),
            notifications: notifications::Manager::with_schedule(config.notifications.schedule()),
        };

        if let Some(key) = config_warning {
            app.notifications.notify(Severity::Error, key);
        }

        log::info!(
            "started with locale {}, theme {:?}, copy_results {}",
            app.i18n.current_locale(),
            app.theme_mode,
            app.converter.copy_results()
        );

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Converter(message) => match self.converter_screen.update(message) {
                Event::None => {}
                Event::Convert(operation) => {
                    let source = self.converter_screen.source_text();
                    if let Some(output) =
                        self.converter
                            .convert(operation, Some(&source), &mut self.notifications)
                    {
                        self.converter_screen.set_output(&output);
                    }
                }
            },
            Message::Tick(now) => self.notifications.tick_at(now),
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            converter: &self.converter_screen,
            notifications: &self.notifications,
            now: Instant::now(),
        })
    }
}
