// End-to-end scenarios: commands mutate the stores, channel posts produce
// (or do not produce) a notification, and state survives a restart.

use chanwatch_core::{ExErrorKind, StoreKind};
use chanwatch_engine::config::StorageConfig;
use chanwatch_engine::{parse_command_args, Monitor};
use std::fs;
use tempfile::TempDir;

const LINK: &str = "https://t.me/c/123/456";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn storage(dir: &TempDir) -> StorageConfig {
    StorageConfig {
        primary_path: dir.path().join("keywords_data.json"),
        secondary_path: dir.path().join("secondary_keywords_data.json"),
    }
}

fn seeded(dir: &TempDir) -> Monitor {
    let mut monitor = Monitor::open(&storage(dir));
    monitor
        .on_add_keyword(StoreKind::Primary, &strings(&["sale", "discount"]))
        .unwrap();
    monitor
        .on_add_keyword(StoreKind::Secondary, &strings(&["urgent", "now"]))
        .unwrap();
    monitor
}

#[test]
fn test_both_stores_match() {
    let dir = TempDir::new().unwrap();
    let monitor = seeded(&dir);

    let notification = monitor.on_channel_post("Big discount now available", LINK);

    assert_eq!(
        notification.as_deref(),
        Some("sale : urgent\nhttps://t.me/c/123/456")
    );
}

#[test]
fn test_no_match_means_no_notification() {
    let dir = TempDir::new().unwrap();
    let monitor = seeded(&dir);

    assert_eq!(monitor.on_channel_post("Nothing to see here", LINK), None);
    assert_eq!(monitor.on_channel_post("", LINK), None);
}

#[test]
fn test_only_secondary_matches_keeps_leading_space() {
    let dir = TempDir::new().unwrap();
    let monitor = seeded(&dir);

    let notification = monitor.on_channel_post("Act now", LINK);

    assert_eq!(
        notification.as_deref(),
        Some(" : urgent\nhttps://t.me/c/123/456")
    );
}

#[test]
fn test_confirmation_texts() {
    let dir = TempDir::new().unwrap();
    let mut monitor = Monitor::open(&storage(&dir));

    let primary = monitor
        .on_add_keyword(StoreKind::Primary, &strings(&["sale", "discount", "promo"]))
        .unwrap();
    let secondary = monitor
        .on_add_keyword(StoreKind::Secondary, &strings(&["urgent", "now"]))
        .unwrap();

    assert_eq!(primary, "Ключ 'sale' добавлен с значениями: discount, promo.");
    assert_eq!(
        secondary,
        "Во второй словарь добавлен ключ 'urgent' с значениями: now."
    );
}

#[test]
fn test_state_survives_restart() {
    let dir = TempDir::new().unwrap();
    drop(seeded(&dir));

    let monitor = Monitor::open(&storage(&dir));
    assert_eq!(
        monitor
            .on_channel_post("discount now", LINK)
            .as_deref(),
        Some("sale : urgent\nhttps://t.me/c/123/456")
    );
}

#[test]
fn test_raw_command_text_flow() {
    let dir = TempDir::new().unwrap();
    let mut monitor = Monitor::open(&storage(&dir));

    let args = parse_command_args("/add_keyword crypto bitcoin биткоин");
    monitor.on_add_keyword(StoreKind::Primary, &args).unwrap();

    assert_eq!(
        monitor.on_channel_post("Курс биткоин вырос", LINK).as_deref(),
        Some("crypto : \nhttps://t.me/c/123/456")
    );
}

#[test]
fn test_matches_listed_in_store_order() {
    let dir = TempDir::new().unwrap();
    let mut monitor = Monitor::open(&storage(&dir));
    for args in [["zeta", "z"], ["alpha", "a"], ["mid", "m"]] {
        monitor
            .on_add_keyword(StoreKind::Primary, &strings(&args))
            .unwrap();
    }

    assert_eq!(
        monitor.on_channel_post("zam", "L").as_deref(),
        Some("zeta alpha mid : \nL")
    );
}

#[test]
fn test_corrupt_secondary_file_still_starts() {
    let dir = TempDir::new().unwrap();
    let cfg = storage(&dir);
    fs::write(&cfg.secondary_path, b"<html>oops</html>").unwrap();
    fs::write(&cfg.primary_path, br#"{"sale": ["discount"]}"#).unwrap();

    let monitor = Monitor::open(&cfg);

    assert!(monitor.store(StoreKind::Secondary).is_empty());
    assert_eq!(
        monitor.on_channel_post("discount", "L").as_deref(),
        Some("sale : \nL")
    );
}

#[test]
fn test_hand_edited_empty_trigger_matches_everything() {
    let dir = TempDir::new().unwrap();
    let cfg = storage(&dir);
    fs::write(&cfg.primary_path, br#"{"everything": [""]}"#).unwrap();

    let monitor = Monitor::open(&cfg);

    assert_eq!(
        monitor.on_channel_post("any post at all", "L").as_deref(),
        Some("everything : \nL")
    );
}

#[test]
fn test_empty_value_rejected_by_command() {
    let dir = TempDir::new().unwrap();
    let mut monitor = Monitor::open(&storage(&dir));

    let err = monitor
        .on_add_keyword(StoreKind::Primary, &strings(&["sale", ""]))
        .unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::InvalidArgument);
    assert!(monitor.store(StoreKind::Primary).is_empty());
}

#[test]
fn test_write_failure_is_not_confirmed() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, b"x").unwrap();
    let mut monitor = Monitor::open(&StorageConfig {
        primary_path: blocker.join("p.json"),
        secondary_path: dir.path().join("s.json"),
    });

    let result = monitor.on_add_keyword(StoreKind::Primary, &strings(&["sale", "discount"]));
    assert!(result.unwrap_err().kind().is_storage());

    let reply = monitor.reply_to_add_keyword(StoreKind::Primary, &strings(&["sale", "x"]));
    assert!(!reply.contains("добавлен"));
    assert_eq!(monitor.on_channel_post("discount", "L"), None);
}
