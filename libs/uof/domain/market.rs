//! Normalized markets and outcomes

use super::hash::fnv1a32;
use super::specifiers::Specifiers;
use super::urn::{Urn, UrnType};
use crate::error::{DecodeError, Result};
use serde::Serialize;

/// Tradability of a market. Closed: unknown wire codes fail to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketStatus {
    Active,
    Inactive,
    Suspended,
    HandedOver,
    Settled,
    Cancelled,
}

impl MarketStatus {
    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            1 => Ok(MarketStatus::Active),
            0 => Ok(MarketStatus::Inactive),
            -1 => Ok(MarketStatus::Suspended),
            -2 => Ok(MarketStatus::HandedOver),
            -3 => Ok(MarketStatus::Settled),
            -4 => Ok(MarketStatus::Cancelled),
            other => Err(DecodeError::UnknownMarketStatus(other)),
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            MarketStatus::Active => 1,
            MarketStatus::Inactive => 0,
            MarketStatus::Suspended => -1,
            MarketStatus::HandedOver => -2,
            MarketStatus::Settled => -3,
            MarketStatus::Cancelled => -4,
        }
    }

    /// Only active markets accept bets
    pub fn is_tradable(&self) -> bool {
        matches!(self, MarketStatus::Active)
    }
}

impl TryFrom<i32> for MarketStatus {
    type Error = DecodeError;

    fn try_from(code: i32) -> Result<Self> {
        Self::from_code(code)
    }
}

/// Outcome identifier decoded from its wire form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutcomeId {
    pub id: i64,
    /// The wire id itself was a player reference
    pub player: bool,
}

impl OutcomeId {
    /// Decode an outcome id attribute.
    ///
    /// - plain integers are used as-is
    /// - `sr:player:<n>` yields `n` and marks a player reference
    /// - other composite ids (`sr:exact_goals:4+:1336`) hash to a stable id
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(DecodeError::MalformedIdentifier(raw.to_string()));
        }
        if raw.bytes().all(|b| b.is_ascii_digit()) {
            let id = raw
                .parse::<i64>()
                .map_err(|_| DecodeError::MalformedIdentifier(raw.to_string()))?;
            return Ok(Self { id, player: false });
        }
        if raw.starts_with("sr:player:") {
            let urn = Urn::parse(raw)?;
            debug_assert_eq!(urn.kind(), UrnType::Player);
            return Ok(Self {
                id: urn.id(),
                player: true,
            });
        }
        Ok(Self {
            id: i64::from(fnv1a32(raw)),
            player: false,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub id: i64,
    /// Equal to `id` for player-linked outcomes, otherwise `0`
    pub player_id: i64,
    pub odds: Option<f64>,
    pub probability: Option<f64>,
    pub active: Option<bool>,
}

impl Outcome {
    /// Build an outcome, linking it to a player when either the wire id is
    /// a player reference or the market is classified as a player market.
    pub fn new(id: OutcomeId, player_market: bool) -> Self {
        let player_id = if id.player || player_market { id.id } else { 0 };
        Self {
            id: id.id,
            player_id,
            odds: None,
            probability: None,
            active: None,
        }
    }

    pub fn is_player(&self) -> bool {
        self.player_id != 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Market {
    pub id: i64,
    pub specifiers: Specifiers,
    /// Derived from `specifiers`; `0` when there are none
    pub line_id: u32,
    pub outcomes: Vec<Outcome>,
    pub status: MarketStatus,
    pub next_betstop: Option<i64>,
    pub favourite: bool,
}

impl Market {
    pub fn new(id: i64, specifiers: Specifiers, status: MarketStatus) -> Self {
        Self {
            id,
            line_id: specifiers.line_id(),
            specifiers,
            outcomes: Vec::new(),
            status,
            next_betstop: None,
            favourite: false,
        }
    }

    /// Value of the `variant` specifier
    pub fn variant(&self) -> Option<&str> {
        self.specifiers.variant()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_are_closed() {
        for code in -4..=1 {
            let status = MarketStatus::from_code(code).unwrap();
            assert_eq!(status.code(), code);
        }
        for code in [2, -5, 100, i32::MIN] {
            assert_eq!(
                MarketStatus::try_from(code),
                Err(DecodeError::UnknownMarketStatus(code))
            );
        }
        assert!(MarketStatus::Active.is_tradable());
        assert!(!MarketStatus::Suspended.is_tradable());
    }

    #[test]
    fn test_outcome_id_forms() {
        assert_eq!(
            OutcomeId::parse("12").unwrap(),
            OutcomeId { id: 12, player: false }
        );
        assert_eq!(
            OutcomeId::parse("sr:player:1234").unwrap(),
            OutcomeId { id: 1234, player: true }
        );

        let composite = OutcomeId::parse("sr:exact_goals:4+:1336").unwrap();
        assert!(!composite.player);
        assert_eq!(composite, OutcomeId::parse("sr:exact_goals:4+:1336").unwrap());
        assert_ne!(composite.id, 0);

        assert!(OutcomeId::parse("").is_err());
        assert!(OutcomeId::parse("sr:player:x").is_err());
    }

    #[test]
    fn test_player_linking() {
        let plain = Outcome::new(OutcomeId::parse("2").unwrap(), false);
        assert_eq!(plain.player_id, 0);
        assert!(!plain.is_player());

        let wire_player = Outcome::new(OutcomeId::parse("sr:player:4322").unwrap(), false);
        assert_eq!(wire_player.id, 4322);
        assert_eq!(wire_player.player_id, 4322);

        let catalog_player = Outcome::new(OutcomeId::parse("947").unwrap(), true);
        assert_eq!(catalog_player.player_id, 947);
    }

    #[test]
    fn test_market_line_id_follows_specifiers() {
        let market = Market::new(
            18,
            Specifiers::parse("total=2.5"),
            MarketStatus::Active,
        );
        assert_eq!(market.line_id, market.specifiers.line_id());
        assert_ne!(market.line_id, 0);
        assert_eq!(market.variant(), None);

        let plain = Market::new(1, Specifiers::new(), MarketStatus::Active);
        assert_eq!(plain.line_id, 0);
    }
}
