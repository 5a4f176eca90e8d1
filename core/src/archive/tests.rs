use crate::archive::{ArchiveBridge, ArchiveConfig, ConfigOption, KeyedArchive, DEFAULT_MAX_PAYLOAD_SIZE};
use crate::engine::KeyValueSink;
use crate::error::{ArchiveError, EngineError};
use crate::test_support::{init_tracing, Dog, Ledger, Player, Stats};
use crate::value::Value;
use rstest::*;

#[test]
fn test_archive_round_trip() {
  init_tracing();
  let player = Player::sample();
  let bytes = player.archive().unwrap();
  assert_eq!(Player::unarchive(&bytes).unwrap(), player);
}

#[test]
fn test_archive_round_trip_with_minimized_keys() {
  let stats = Stats {
    score: -1,
    size: 0,
    size_limit: i32::MAX,
  };
  let bytes = stats.archive().unwrap();
  let archive = KeyedArchive::from_bytes(&bytes, &ArchiveConfig::default()).unwrap();
  assert_eq!(archive.class_name(), "Stats");
  assert_eq!(archive.values().keys().map(String::as_str).collect::<Vec<_>>(), vec!["s", "si", "siz"]);
  assert_eq!(Stats::unarchive(&bytes).unwrap(), stats);
}

#[test]
fn test_null_survives_the_archive() {
  let mut archive = KeyedArchive::new("Player");
  archive.set("size_limit", Value::Null);
  archive.set("name", Value::from("x"));
  let restored = KeyedArchive::from_bytes(&archive.to_bytes(), &ArchiveConfig::default()).unwrap();
  assert_eq!(restored, archive);
}

#[test]
fn test_class_mismatch_is_rejected() {
  let bytes = Player::sample().archive().unwrap();
  let err = Dog::unarchive(&bytes).unwrap_err();
  assert_eq!(
    err,
    EngineError::Archive(ArchiveError::ClassMismatch {
      expected: "Dog".to_string(),
      found: "Player".to_string(),
    })
  );
}

#[test]
fn test_overridden_class_name_round_trips() {
  let ledger = Ledger {
    id: 1 << 40,
    entries: 12,
    drift: -3,
    currency: '€',
  };
  let bytes = ledger.archive().unwrap();
  let archive = KeyedArchive::from_bytes(&bytes, &ArchiveConfig::default()).unwrap();
  assert_eq!(archive.class_name(), "Account");
  assert_eq!(archive.get("currency"), Some(Value::from("€")));
  assert_eq!(Ledger::unarchive(&bytes).unwrap(), ledger);
}

#[test]
fn test_archives_written_under_the_old_name_still_read() {
  let mut archive = KeyedArchive::new("Account");
  archive.set("id", Value::Int(77));
  archive.set("currency", Value::from("$"));
  let ledger = Ledger::unarchive(&archive.to_bytes()).unwrap();
  assert_eq!(ledger.id, 77);
  assert_eq!(ledger.currency, '$');

  let err = Ledger::unarchive(&KeyedArchive::new("Ledger").to_bytes()).unwrap_err();
  assert!(matches!(err, EngineError::Archive(ArchiveError::ClassMismatch { .. })));
}

#[test]
fn test_class_check_can_be_disabled() {
  let mut archive = KeyedArchive::new("Renamed");
  archive.set("score", Value::Int(5));
  let config = ArchiveConfig::from([ConfigOption::with_class_name_check(false)]);
  let stats = Stats::unarchive_with(&archive.to_bytes(), &config);
  assert!(stats.is_ok());
}

#[rstest]
#[case(vec![], Some(DEFAULT_MAX_PAYLOAD_SIZE), true)]
#[case(vec![ConfigOption::with_max_payload_size(8)], Some(8), true)]
#[case(vec![ConfigOption::without_payload_limit(), ConfigOption::with_class_name_check(false)], None, false)]
fn test_config_options(#[case] options: Vec<ConfigOption>, #[case] limit: Option<usize>, #[case] check: bool) {
  let config = ArchiveConfig::from(options);
  assert_eq!(config.max_payload_size(), limit);
  assert_eq!(config.class_name_check(), check);
}

#[test]
fn test_payload_limit_applies_both_ways() {
  let config = ArchiveConfig::from([ConfigOption::with_max_payload_size(4)]);
  let err = Player::sample().archive_with(&config).unwrap_err();
  assert!(matches!(err, EngineError::Archive(ArchiveError::PayloadTooLarge { limit: 4, .. })));

  let bytes = Player::sample().archive().unwrap();
  let err = Player::unarchive_with(&bytes, &config).unwrap_err();
  assert!(matches!(err, EngineError::Archive(ArchiveError::PayloadTooLarge { limit: 4, .. })));
}

#[test]
fn test_malformed_bytes_are_rejected() {
  let err = Player::unarchive(&[0xff, 0xff, 0xff]).unwrap_err();
  assert!(matches!(err, EngineError::Archive(ArchiveError::Decode(_))));
}
