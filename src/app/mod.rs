// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! `App` owns the localization state and is the single place where the
//! display language changes. Iced calls `view` again after every `update`, so
//! a language switch re-resolves every visible string on the next frame.

mod message;
mod view;

pub use message::{Flags, Message};

use crate::config::{
    self, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH,
};
use crate::error::Result;
use crate::i18n::fluent::I18n;
use iced::{window, Element, Size, Task};
use std::path::{Path, PathBuf};

/// Root Iced application state.
#[derive(Debug)]
pub struct App {
    i18n: I18n,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(app: App) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot function; the state is handed over once.
    let boot_state = RefCell::new(Some(app));
    let boot = move || {
        let app = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        (app, Task::none())
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .run()
}

impl App {
    pub fn new(i18n: I18n) -> Self {
        Self { i18n }
    }

    /// Loads configuration and translations according to the CLI flags.
    pub fn from_flags(flags: &Flags) -> Result<Self> {
        let (config, config_warning) =
            config::load_with_override(flags.config_dir.as_ref().map(PathBuf::from));
        if let Some(warning) = config_warning {
            tracing::warn!("ignoring unreadable config: {}", warning);
        }

        let i18n = I18n::new(
            flags.lang.as_deref(),
            flags.i18n_dir.as_deref().map(Path::new),
            &config,
        )?;
        Ok(Self::new(i18n))
    }

    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }

    pub fn title(&self) -> String {
        self.i18n.tr("app.window-title")
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::LocaleSelected(locale) => self.i18n.set_locale(locale),
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext { i18n: &self.i18n })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Locale, LocaleController, MessageCatalog};

    fn hello_bonjour_app() -> App {
        let catalog = MessageCatalog::from_sources(
            Locale::En,
            [
                (Locale::En, "app-title = Hello\n"),
                (Locale::Fr, "app-title = Bonjour\n"),
            ],
        )
        .expect("catalog should build");
        let controller = LocaleController::initialize(Some("en"), Locale::En);
        App::new(I18n::from_parts(catalog, controller))
    }

    #[test]
    fn selecting_french_switches_title() {
        let mut app = hello_bonjour_app();
        assert_eq!(app.i18n().tr("app.title"), "Hello");

        let _ = app.update(Message::LocaleSelected(Locale::Fr));

        assert_eq!(app.i18n().current_locale(), Locale::Fr);
        assert_eq!(app.i18n().tr("app.title"), "Bonjour");
    }

    #[test]
    fn window_title_falls_back_to_key() {
        let app = hello_bonjour_app();
        assert_eq!(app.title(), "app.window-title");
    }

    #[test]
    fn from_flags_honours_lang_flag() {
        let config_dir = tempfile::tempdir().expect("failed to create temp dir");
        let flags = Flags {
            lang: Some("zh".to_string()),
            i18n_dir: None,
            config_dir: Some(config_dir.path().to_string_lossy().into_owned()),
        };
        let app = App::from_flags(&flags).expect("app should build");
        assert_eq!(app.i18n().current_locale(), Locale::Zh);
        assert!(!app.title().is_empty());
    }

    #[test]
    fn view_renders_for_every_locale() {
        let mut app = hello_bonjour_app();
        for locale in [Locale::En, Locale::Fr, Locale::Ja] {
            let _ = app.update(Message::LocaleSelected(locale));
            let _element = app.view();
        }
    }
}
