//! Decoded feed messages, one variant per message kind

use super::kind::MessageKind;
use crate::domain::{EventStatus, Market, MarketStatus, Specifiers, Urn};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeedMessage {
    OddsChange(OddsChange),
    BetStop(BetStop),
    BetSettlement(BetSettlement),
    BetCancel(BetCancel),
    FixtureChange(FixtureChange),
    Alive(Alive),
    SnapshotComplete(SnapshotComplete),
}

impl FeedMessage {
    pub fn kind(&self) -> MessageKind {
        match self {
            FeedMessage::OddsChange(_) => MessageKind::OddsChange,
            FeedMessage::BetStop(_) => MessageKind::BetStop,
            FeedMessage::BetSettlement(_) => MessageKind::BetSettlement,
            FeedMessage::BetCancel(_) => MessageKind::BetCancel,
            FeedMessage::FixtureChange(_) => MessageKind::FixtureChange,
            FeedMessage::Alive(_) => MessageKind::Alive,
            FeedMessage::SnapshotComplete(_) => MessageKind::SnapshotComplete,
        }
    }

    pub fn producer(&self) -> u32 {
        match self {
            FeedMessage::OddsChange(m) => m.producer,
            FeedMessage::BetStop(m) => m.producer,
            FeedMessage::BetSettlement(m) => m.producer,
            FeedMessage::BetCancel(m) => m.producer,
            FeedMessage::FixtureChange(m) => m.producer,
            FeedMessage::Alive(m) => m.producer,
            FeedMessage::SnapshotComplete(m) => m.producer,
        }
    }

    /// Producer timestamp from the body, in ms since epoch
    pub fn timestamp(&self) -> i64 {
        match self {
            FeedMessage::OddsChange(m) => m.timestamp,
            FeedMessage::BetStop(m) => m.timestamp,
            FeedMessage::BetSettlement(m) => m.timestamp,
            FeedMessage::BetCancel(m) => m.timestamp,
            FeedMessage::FixtureChange(m) => m.timestamp,
            FeedMessage::Alive(m) => m.timestamp,
            FeedMessage::SnapshotComplete(m) => m.timestamp,
        }
    }

    /// Sport event the message refers to; producer-level messages have none
    pub fn event(&self) -> Option<&Urn> {
        match self {
            FeedMessage::OddsChange(m) => Some(&m.event),
            FeedMessage::BetStop(m) => Some(&m.event),
            FeedMessage::BetSettlement(m) => Some(&m.event),
            FeedMessage::BetCancel(m) => Some(&m.event),
            FeedMessage::FixtureChange(m) => Some(&m.event),
            FeedMessage::Alive(_) | FeedMessage::SnapshotComplete(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OddsChange {
    pub event: Urn,
    pub producer: u32,
    pub timestamp: i64,
    pub request_id: Option<i64>,
    pub betting_status: Option<i32>,
    pub betstop_reason: Option<i32>,
    pub event_status: Option<EventStatus>,
    pub markets: Vec<Market>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BetStop {
    pub event: Urn,
    pub producer: u32,
    pub timestamp: i64,
    pub groups: Vec<String>,
    /// Status the affected markets move to; suspended when absent on the wire
    pub market_status: MarketStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BetSettlement {
    pub event: Urn,
    pub producer: u32,
    pub timestamp: i64,
    pub certainty: Option<i32>,
    pub markets: Vec<SettledMarket>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettledMarket {
    pub id: i64,
    pub specifiers: Specifiers,
    pub line_id: u32,
    pub void_reason: Option<i32>,
    pub outcomes: Vec<SettledOutcome>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettledOutcome {
    pub id: i64,
    pub player_id: i64,
    /// Whether the outcome won
    pub result: bool,
    pub void_factor: Option<f64>,
    pub dead_heat_factor: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BetCancel {
    pub event: Urn,
    pub producer: u32,
    pub timestamp: i64,
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    pub markets: Vec<CancelledMarket>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CancelledMarket {
    pub id: i64,
    pub specifiers: Specifiers,
    pub line_id: u32,
    pub void_reason: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FixtureChange {
    pub event: Urn,
    pub producer: u32,
    pub timestamp: i64,
    pub start_time: Option<i64>,
    pub change_type: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alive {
    pub producer: u32,
    pub timestamp: i64,
    pub subscribed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotComplete {
    pub producer: u32,
    pub timestamp: i64,
    pub request_id: i64,
}
