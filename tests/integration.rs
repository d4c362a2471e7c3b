// SPDX-License-Identifier: MPL-2.0
use locale_greeter::app::{App, Message};
use locale_greeter::config::{self, Config};
use locale_greeter::i18n::fluent::I18n;
use locale_greeter::i18n::{Locale, LocaleController, MessageCatalog};
use std::collections::HashSet;
use tempfile::tempdir;

const TITLE: &str = "app.title";
const INTRO: &str = "app.intro";

fn embedded_i18n(host_signal: Option<&str>) -> I18n {
    let catalog = MessageCatalog::embedded(Locale::En).expect("embedded catalog should load");
    let controller = LocaleController::initialize(host_signal, catalog.fallback_locale());
    I18n::from_parts(catalog, controller)
}

#[test]
fn every_locale_has_distinct_non_empty_greeting() {
    let mut i18n = embedded_i18n(Some("en"));
    let mut titles = HashSet::new();
    let mut intros = HashSet::new();

    for locale in Locale::ALL {
        i18n.set_locale(locale);
        let title = i18n.catalog().lookup(locale, TITLE).expect("title present");
        let intro = i18n.catalog().lookup(locale, INTRO).expect("intro present");
        assert!(!title.is_empty(), "{} title is empty", locale);
        assert!(!intro.is_empty(), "{} intro is empty", locale);
        assert_eq!(i18n.tr(TITLE), title);
        assert_eq!(i18n.tr(INTRO), intro);
        titles.insert(title);
        intros.insert(intro);
    }

    assert_eq!(titles.len(), Locale::ALL.len());
    assert_eq!(intros.len(), Locale::ALL.len());
}

#[test]
fn setting_same_locale_twice_matches_setting_once() {
    for locale in Locale::ALL {
        let mut once = embedded_i18n(Some("en"));
        once.set_locale(locale);

        let mut twice = embedded_i18n(Some("en"));
        twice.set_locale(locale);
        twice.set_locale(locale);

        assert_eq!(once.current_locale(), twice.current_locale());
        assert_eq!(once.tr(TITLE), twice.tr(TITLE));
        assert_eq!(once.tr(INTRO), twice.tr(INTRO));
    }
}

#[test]
fn french_host_signal_selects_french_bundle() {
    let i18n = embedded_i18n(Some("fr"));
    assert_eq!(i18n.current_locale(), Locale::Fr);
    assert_eq!(
        i18n.tr(TITLE),
        i18n.catalog().lookup(Locale::Fr, TITLE).expect("french title")
    );
}

#[test]
fn unsupported_host_signal_falls_back_to_english() {
    let i18n = embedded_i18n(Some("de"));
    assert_eq!(i18n.current_locale(), Locale::En);
    let title = i18n.tr(TITLE);
    assert!(!title.is_empty());
    assert_eq!(title, i18n.catalog().lookup(Locale::En, TITLE).expect("english title"));
}

#[test]
fn switching_through_all_locales_returns_to_identical_english() {
    let mut i18n = embedded_i18n(Some("en"));
    let title = i18n.tr(TITLE);
    let intro = i18n.tr(INTRO);

    for locale in [Locale::Ja, Locale::Zh, Locale::Fr, Locale::En] {
        i18n.set_locale(locale);
    }

    assert_eq!(i18n.tr(TITLE).as_bytes(), title.as_bytes());
    assert_eq!(i18n.tr(INTRO).as_bytes(), intro.as_bytes());
}

#[test]
fn switching_to_french_shows_bonjour() {
    let catalog = MessageCatalog::from_sources(
        Locale::En,
        [
            (Locale::En, "app-title = Hello\n"),
            (Locale::Fr, "app-title = Bonjour\n"),
        ],
    )
    .expect("catalog should build");
    let controller = LocaleController::initialize(Some("en"), Locale::En);
    let mut app = App::new(I18n::from_parts(catalog, controller));

    let _ = app.update(Message::LocaleSelected(Locale::Fr));

    assert_eq!(app.i18n().tr(TITLE), "Bonjour");
}

#[test]
fn missing_translation_shows_english_then_key() {
    let catalog = MessageCatalog::from_sources(
        Locale::En,
        [
            (Locale::En, "app-title = Hello\napp-intro = Welcome\n"),
            (Locale::Ja, "app-title = こんにちは\n"),
        ],
    )
    .expect("catalog should build");
    let mut i18n = I18n::from_parts(catalog, LocaleController::initialize(Some("ja"), Locale::En));

    assert_eq!(i18n.tr(TITLE), "こんにちは");
    assert_eq!(i18n.tr(INTRO), "Welcome");
    assert_eq!(i18n.tr("app.footer"), "app.footer");

    // No bundle at all for Chinese: every region shows English.
    i18n.set_locale(Locale::Zh);
    assert_eq!(i18n.tr(TITLE), "Hello");
}

#[test]
fn language_from_config_file_selects_locale() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(
        dir.path().join("settings.toml"),
        "[general]\nlanguage = \"ja\"\n",
    )
    .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let i18n = I18n::new(None, None, &loaded).expect("i18n should load");
    assert_eq!(i18n.current_locale(), Locale::Ja);
}

#[test]
fn configured_fallback_locale_is_used_for_missing_messages() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("fr.ftl"), "app-title = Bonjour\napp-intro = Salut\n")
        .expect("write fr");
    std::fs::write(dir.path().join("en.ftl"), "app-title = Hello\n").expect("write en");

    let mut config = Config::default();
    config.general.language = Some("en".to_string());
    config.general.fallback_language = Some("fr".to_string());

    let i18n = I18n::new(None, Some(dir.path()), &config).expect("i18n should load");
    assert_eq!(i18n.catalog().fallback_locale(), Locale::Fr);
    assert_eq!(i18n.tr(TITLE), "Hello");
    assert_eq!(i18n.tr(INTRO), "Salut");
}
