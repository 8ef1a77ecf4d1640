//! Wire schema for each message kind, deserialized with quick-xml.
//!
//! These mirror the XML as sent; flags stay as strings here and are
//! interpreted during normalization.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct RawOddsChange {
    #[serde(rename = "@product")]
    pub product: u32,
    #[serde(rename = "@event_id")]
    pub event_id: String,
    #[serde(rename = "@timestamp")]
    pub timestamp: i64,
    #[serde(rename = "@request_id", default)]
    pub request_id: Option<i64>,
    #[serde(default)]
    pub sport_event_status: Option<RawSportEventStatus>,
    #[serde(default)]
    pub odds: Option<RawOdds>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawSportEventStatus {
    #[serde(rename = "@status")]
    pub status: i32,
    #[serde(rename = "@match_status", default)]
    pub match_status: Option<i32>,
    #[serde(rename = "@home_score", default)]
    pub home_score: Option<i32>,
    #[serde(rename = "@away_score", default)]
    pub away_score: Option<i32>,
    #[serde(default)]
    pub clock: Option<RawClock>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawClock {
    #[serde(rename = "@match_time", default)]
    pub match_time: Option<String>,
    #[serde(rename = "@stoppage_time", default)]
    pub stoppage_time: Option<String>,
    #[serde(rename = "@remaining_time", default)]
    pub remaining_time: Option<String>,
    #[serde(rename = "@stopped", default)]
    pub stopped: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawOdds {
    #[serde(rename = "@betting_status", default)]
    pub betting_status: Option<i32>,
    #[serde(rename = "@betstop_reason", default)]
    pub betstop_reason: Option<i32>,
    #[serde(rename = "market", default)]
    pub markets: Vec<RawMarket>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawMarket {
    #[serde(rename = "@id")]
    pub id: i64,
    #[serde(rename = "@specifiers", default)]
    pub specifiers: Option<String>,
    #[serde(rename = "@extended_specifiers", default)]
    pub extended_specifiers: Option<String>,
    #[serde(rename = "@status")]
    pub status: i32,
    #[serde(rename = "@next_betstop", default)]
    pub next_betstop: Option<i64>,
    #[serde(rename = "@favourite", default)]
    pub favourite: Option<String>,
    #[serde(rename = "outcome", default)]
    pub outcomes: Vec<RawOutcome>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawOutcome {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@odds", default)]
    pub odds: Option<f64>,
    #[serde(rename = "@probabilities", default)]
    pub probabilities: Option<f64>,
    #[serde(rename = "@active", default)]
    pub active: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawBetStop {
    #[serde(rename = "@product")]
    pub product: u32,
    #[serde(rename = "@event_id")]
    pub event_id: String,
    #[serde(rename = "@timestamp")]
    pub timestamp: i64,
    #[serde(rename = "@groups", default)]
    pub groups: Option<String>,
    #[serde(rename = "@market_status", default)]
    pub market_status: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawBetSettlement {
    #[serde(rename = "@product")]
    pub product: u32,
    #[serde(rename = "@event_id")]
    pub event_id: String,
    #[serde(rename = "@timestamp")]
    pub timestamp: i64,
    #[serde(rename = "@certainty", default)]
    pub certainty: Option<i32>,
    #[serde(default)]
    pub outcomes: Option<RawSettlementMarkets>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawSettlementMarkets {
    #[serde(rename = "market", default)]
    pub markets: Vec<RawSettledMarket>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawSettledMarket {
    #[serde(rename = "@id")]
    pub id: i64,
    #[serde(rename = "@specifiers", default)]
    pub specifiers: Option<String>,
    #[serde(rename = "@extended_specifiers", default)]
    pub extended_specifiers: Option<String>,
    #[serde(rename = "@void_reason", default)]
    pub void_reason: Option<i32>,
    #[serde(rename = "outcome", default)]
    pub outcomes: Vec<RawSettledOutcome>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawSettledOutcome {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@result")]
    pub result: String,
    #[serde(rename = "@void_factor", default)]
    pub void_factor: Option<f64>,
    #[serde(rename = "@dead_heat_factor", default)]
    pub dead_heat_factor: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawBetCancel {
    #[serde(rename = "@product")]
    pub product: u32,
    #[serde(rename = "@event_id")]
    pub event_id: String,
    #[serde(rename = "@timestamp")]
    pub timestamp: i64,
    #[serde(rename = "@start_time", default)]
    pub start_time: Option<i64>,
    #[serde(rename = "@end_time", default)]
    pub end_time: Option<i64>,
    #[serde(rename = "market", default)]
    pub markets: Vec<RawCancelledMarket>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawCancelledMarket {
    #[serde(rename = "@id")]
    pub id: i64,
    #[serde(rename = "@specifiers", default)]
    pub specifiers: Option<String>,
    #[serde(rename = "@extended_specifiers", default)]
    pub extended_specifiers: Option<String>,
    #[serde(rename = "@void_reason", default)]
    pub void_reason: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawFixtureChange {
    #[serde(rename = "@product")]
    pub product: u32,
    #[serde(rename = "@event_id")]
    pub event_id: String,
    #[serde(rename = "@timestamp")]
    pub timestamp: i64,
    #[serde(rename = "@start_time", default)]
    pub start_time: Option<i64>,
    #[serde(rename = "@change_type", default)]
    pub change_type: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawAlive {
    #[serde(rename = "@product")]
    pub product: u32,
    #[serde(rename = "@timestamp")]
    pub timestamp: i64,
    #[serde(rename = "@subscribed", default)]
    pub subscribed: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawSnapshotComplete {
    #[serde(rename = "@product")]
    pub product: u32,
    #[serde(rename = "@timestamp")]
    pub timestamp: i64,
    #[serde(rename = "@request_id")]
    pub request_id: i64,
}
