//! Integration test: Configuration loading
//!
//! Tests the shipped config file and the bin_common argument handling.

use uof_feed::bin_common::ReplayArgs;
use uof_feed::uof::config::{FeedConfig, DEFAULT_CONFIG_PATH};
use uof_feed::uof::replay::STAGING_URL;

#[test]
fn test_shipped_config_loads() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_CONFIG_PATH);
    let config = FeedConfig::load(path).unwrap();

    assert_eq!(config.log_level, "info");
    assert_eq!(config.replay.resolved_base_url(), STAGING_URL);
    assert_eq!(config.replay.speed, 100);
    assert_eq!(config.replay.max_delay, 10);
    assert_eq!(config.stream.channel_capacity, 128);
    assert!(config.catalog.player_markets.is_empty());
}

#[test]
fn test_missing_config_file() {
    let dir = std::env::temp_dir().join("uof-feed-missing-config.yaml");
    assert!(FeedConfig::load(dir).is_err());
}

#[test]
fn test_args_override_config() {
    let args = ReplayArgs::parse(vec!["--scenario".into(), "1".into(), "--speed".into(), "2".into()])
        .unwrap();
    let config = FeedConfig::default();

    assert_eq!(args.speed.unwrap_or(config.replay.speed), 2);
    assert_eq!(args.max_delay.unwrap_or(config.replay.max_delay), 10);
    assert_eq!(args.scenario, Some(1));
}
