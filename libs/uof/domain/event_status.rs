//! Sport event status and match clock

use crate::error::{DecodeError, Result};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatusKind {
    NotStarted,
    Live,
    Suspended,
    Ended,
    Closed,
    Cancelled,
    Delayed,
    Interrupted,
    Postponed,
    Abandoned,
}

impl EventStatusKind {
    pub fn from_code(code: i32) -> Result<Self> {
        let kind = match code {
            0 => EventStatusKind::NotStarted,
            1 => EventStatusKind::Live,
            2 => EventStatusKind::Suspended,
            3 => EventStatusKind::Ended,
            4 => EventStatusKind::Closed,
            5 => EventStatusKind::Cancelled,
            6 => EventStatusKind::Delayed,
            7 => EventStatusKind::Interrupted,
            8 => EventStatusKind::Postponed,
            9 => EventStatusKind::Abandoned,
            other => return Err(DecodeError::UnknownEventStatus(other)),
        };
        Ok(kind)
    }

    pub fn code(&self) -> i32 {
        *self as i32
    }

    pub fn is_live(&self) -> bool {
        matches!(self, EventStatusKind::Live)
    }
}

/// Clock reading in `MM:SS` form.
///
/// Minutes are kept verbatim so values past 99 (`"105:12"`) or with leading
/// zeros survive a round trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClockTime {
    raw: String,
    split: usize,
}

impl ClockTime {
    pub fn parse(raw: &str) -> Result<Self> {
        let malformed = || DecodeError::MalformedClock(raw.to_string());
        let (minute, second) = raw.split_once(':').ok_or_else(malformed)?;

        if minute.is_empty() || !minute.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        if second.len() != 2 || !second.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }

        Ok(Self {
            raw: raw.to_string(),
            split: minute.len(),
        })
    }

    pub fn minute(&self) -> &str {
        &self.raw[..self.split]
    }

    pub fn second(&self) -> &str {
        &self.raw[self.split + 1..]
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for ClockTime {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Clock {
    pub match_time: Option<ClockTime>,
    pub stoppage_time: Option<ClockTime>,
    pub remaining_time: Option<ClockTime>,
    pub stopped: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventStatus {
    pub status: EventStatusKind,
    pub match_status: Option<i32>,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub clock: Option<Clock>,
}

impl EventStatus {
    pub fn new(status: EventStatusKind) -> Self {
        Self {
            status,
            match_status: None,
            home_score: None,
            away_score: None,
            clock: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        for code in 0..=9 {
            assert_eq!(EventStatusKind::from_code(code).unwrap().code(), code);
        }
        assert!(EventStatusKind::from_code(1).unwrap().is_live());
        assert_eq!(
            EventStatusKind::from_code(10),
            Err(DecodeError::UnknownEventStatus(10))
        );
        assert_eq!(
            EventStatusKind::from_code(-1),
            Err(DecodeError::UnknownEventStatus(-1))
        );
    }

    #[test]
    fn test_clock_time() {
        let t = ClockTime::parse("75:02").unwrap();
        assert_eq!(t.minute(), "75");
        assert_eq!(t.second(), "02");
        assert_eq!(t.to_string(), "75:02");

        let extra = ClockTime::parse("105:12").unwrap();
        assert_eq!(extra.minute(), "105");

        let padded: ClockTime = "05:00".parse().unwrap();
        assert_eq!(padded.minute(), "05");
        assert_eq!(padded.as_str(), "05:00");
    }

    #[test]
    fn test_clock_time_rejects_malformed() {
        for raw in ["", "75", ":02", "75:2", "75:002", "7a:02", "75:0x", "75-02", "+5:00"] {
            assert_eq!(
                ClockTime::parse(raw),
                Err(DecodeError::MalformedClock(raw.to_string())),
                "{raw:?}"
            );
        }
    }

    #[test]
    fn test_clock_time_serializes_as_string() {
        let t = ClockTime::parse("45:00").unwrap();
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"45:00\"");
    }
}
