//! CLI utilities for binaries
//!
//! Handles configuration lookup and argument parsing for the replay tool.

use anyhow::{anyhow, bail, Context};
use std::path::PathBuf;
use uof::config::{config_path, FeedConfig};

/// Load configuration from `UOF_CONFIG_PATH` (or `config/uof.yaml`).
///
/// A missing file yields defaults; secrets are read from the environment
/// either way.
pub fn load_config_from_env() -> anyhow::Result<FeedConfig> {
    let path = config_path();
    if path.exists() {
        FeedConfig::load(&path).with_context(|| format!("loading {}", path.display()))
    } else {
        let mut config = FeedConfig::default();
        config.load_env_secrets();
        Ok(config)
    }
}

/// Command line arguments, excluding the program name
pub fn parse_args() -> Vec<String> {
    std::env::args().skip(1).collect()
}

/// Options of the `replay` binary. Unset values fall back to the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplayArgs {
    pub speed: Option<u32>,
    pub max_delay: Option<u32>,
    pub scenario: Option<u32>,
    pub event: Option<u32>,
    pub sample: bool,
    pub show: bool,
    pub capture_dir: Option<PathBuf>,
}

impl ReplayArgs {
    pub const USAGE: &'static str = "\
usage: replay [options]
  --speed <n>          replay speed multiplier (default from config, 100)
  --max-delay <ms>     maximum delay between messages in milliseconds (default 10)
  --scenario <id>      scenario to replay
  --event <id>         match id to replay
  --sample             replay the sample events
  --show               list the sample events and exit
  --capture-dir <dir>  decode envelopes captured in <dir>";

    pub fn parse(args: Vec<String>) -> anyhow::Result<Self> {
        let mut parsed = Self::default();
        let mut iter = args.into_iter();

        while let Some(arg) = iter.next() {
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) => (flag.to_string(), Some(value.to_string())),
                None => (arg, None),
            };
            let mut value = |name: &str| {
                inline
                    .clone()
                    .or_else(|| iter.next())
                    .ok_or_else(|| anyhow!("{} requires a value", name))
            };

            match flag.as_str() {
                "--speed" => parsed.speed = Some(number(&flag, &value(&flag)?)?),
                "--max-delay" => parsed.max_delay = Some(number(&flag, &value(&flag)?)?),
                "--scenario" => parsed.scenario = Some(number(&flag, &value(&flag)?)?),
                "--event" => parsed.event = Some(positive(&flag, &value(&flag)?)?),
                "--capture-dir" => parsed.capture_dir = Some(PathBuf::from(value(&flag)?)),
                "--sample" => parsed.sample = true,
                "--show" => parsed.show = true,
                other => bail!("unknown argument {:?}\n{}", other, Self::USAGE),
            }
        }

        Ok(parsed)
    }

    /// Whether any replay control request is needed
    pub fn controls_replay(&self) -> bool {
        self.event.is_some() || self.scenario.is_some() || self.sample
    }
}

fn number<T: std::str::FromStr>(flag: &str, raw: &str) -> anyhow::Result<T> {
    raw.parse()
        .map_err(|_| anyhow!("{} expects a non-negative integer, got {:?}", flag, raw))
}

fn positive(flag: &str, raw: &str) -> anyhow::Result<u32> {
    match number(flag, raw)? {
        0 => bail!("{} expects a positive integer, got {:?}", flag, raw),
        n => Ok(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_flags() {
        let parsed = ReplayArgs::parse(args(&[
            "--speed",
            "20",
            "--max-delay=500",
            "--event",
            "11830662",
            "--sample",
            "--capture-dir",
            "./tmp",
        ]))
        .unwrap();

        assert_eq!(parsed.speed, Some(20));
        assert_eq!(parsed.max_delay, Some(500));
        assert_eq!(parsed.event, Some(11830662));
        assert_eq!(parsed.scenario, None);
        assert!(parsed.sample);
        assert!(!parsed.show);
        assert_eq!(parsed.capture_dir, Some(PathBuf::from("./tmp")));
        assert!(parsed.controls_replay());
    }

    #[test]
    fn test_defaults() {
        let parsed = ReplayArgs::parse(Vec::new()).unwrap();
        assert_eq!(parsed, ReplayArgs::default());
        assert!(!parsed.controls_replay());
    }

    #[test]
    fn test_errors() {
        assert!(ReplayArgs::parse(args(&["--speed"])).is_err());
        assert!(ReplayArgs::parse(args(&["--speed", "fast"])).is_err());
        assert!(ReplayArgs::parse(args(&["--scenario", "-1"])).is_err());
        assert!(ReplayArgs::parse(args(&["--bogus"])).is_err());
    }

    #[test]
    fn test_event_must_be_positive() {
        assert!(ReplayArgs::parse(args(&["--event", "-1"])).is_err());
        assert!(ReplayArgs::parse(args(&["--event=0"])).is_err());
        assert!(ReplayArgs::parse(args(&["--event", "99999999999"])).is_err());
        assert_eq!(
            ReplayArgs::parse(args(&["--event", "1"])).unwrap().event,
            Some(1)
        );
    }
}
