// SPDX-License-Identifier: MPL-2.0
use iced_base64::application::conversion::Converter;
use iced_base64::application::port::MemoryClipboard;
use iced_base64::codec::{self, Operation};
use iced_base64::config::{self, ClipboardConfig, Config, GeneralConfig, NotificationsConfig};
use iced_base64::error::ClipboardError;
use iced_base64::i18n::fluent::I18n;
use iced_base64::notifications::{Manager, Phase, Severity};
use iced_base64::ui::toast;
use std::time::{Duration, Instant};
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let french_config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_config_drives_conversion_and_schedule() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    let saved = Config {
        notifications: NotificationsConfig {
            fade_in_ms: Some(100),
            hold_ms: Some(200),
            fade_out_ms: Some(100),
        },
        clipboard: ClipboardConfig {
            copy_results: Some(false),
        },
        ..Config::default()
    };
    config::save_to_path(&saved, &path).expect("Failed to write config");
    let loaded = config::load_from_path(&path).expect("Failed to load config");

    let clipboard = MemoryClipboard::new();
    let mut converter = Converter::new(Box::new(clipboard.clone()))
        .with_copy_results(loaded.clipboard.copy_results.unwrap_or(true));
    let mut manager = Manager::with_schedule(loaded.notifications.schedule());

    let output = converter.convert(Operation::Encode, Some("hello"), &mut manager);
    assert_eq!(output.as_deref(), Some("aGVsbG8="));
    assert_eq!(clipboard.writes(), 0);

    let start = Instant::now();
    manager.tick_at(start + Duration::from_millis(450));
    assert!(!manager.has_notifications());
}

#[test]
fn test_reference_examples() {
    assert_eq!(codec::encode(Some("hello")).unwrap(), "aGVsbG8=");
    assert_eq!(codec::decode(Some("aGVsbG8=")).unwrap(), "hello");
    assert!(codec::encode(Some("")).unwrap_err().is_invalid_input());
    assert!(codec::encode(None).unwrap_err().is_invalid_input());
    assert!(codec::decode(Some("not-valid-base64!!"))
        .unwrap_err()
        .is_malformed_input());
}

#[test]
fn test_full_round_trip_through_clipboard() {
    let clipboard = MemoryClipboard::new();
    let mut converter = Converter::new(Box::new(clipboard.clone()));
    let mut manager = Manager::new();
    let source = "Grüße, 世界! 🦀";

    let encoded = converter
        .convert(Operation::Encode, Some(source), &mut manager)
        .expect("encode");
    let copied = clipboard.contents().expect("clipboard written");
    let decoded = converter
        .convert(Operation::Decode, Some(&copied), &mut manager)
        .expect("decode");

    assert_eq!(copied, encoded);
    assert_eq!(decoded, source);
    assert_eq!(clipboard.contents().as_deref(), Some(source));
    assert_eq!(manager.visible_count(), 2);
    assert!(manager.visible().all(|n| n.severity() == Severity::Info));
}

#[test]
fn test_notification_lifecycle_with_default_schedule() {
    let mut manager = Manager::new();
    let mut converter = Converter::new(Box::new(MemoryClipboard::new()));
    converter.convert(Operation::Decode, Some("   "), &mut manager);

    let notification = manager.visible().next().expect("notification").clone();
    let created = notification.created_at();
    assert_eq!(notification.severity(), Severity::Error);

    let at = |ms: u64| created + Duration::from_millis(ms);
    assert_eq!(manager.phase_of(&notification, at(0)), Phase::Created);
    assert_eq!(manager.phase_of(&notification, at(500)), Phase::Visible);
    assert_eq!(manager.phase_of(&notification, at(5500)), Phase::Fading);
    assert_eq!(manager.phase_of(&notification, at(6000)), Phase::Removed);

    manager.tick_at(at(5999));
    assert_eq!(manager.visible_count(), 1);
    manager.tick_at(at(6000));
    assert_eq!(manager.visible_count(), 0);
}

#[test]
fn test_clipboard_failure_is_localized() {
    let clipboard = MemoryClipboard::failing(ClipboardError::Unavailable("no display".into()));
    let mut converter = Converter::new(Box::new(clipboard));
    let mut manager = Manager::new();
    let i18n = I18n::new(Some("en-US".to_string()), &Config::default());

    let output = converter.convert(Operation::Encode, Some("hello"), &mut manager);

    assert_eq!(output.as_deref(), Some("aGVsbG8="));
    let notification = manager.visible().next().expect("notification");
    assert_eq!(
        toast::message_text(notification, &i18n),
        "The clipboard is not available: no display"
    );
}
