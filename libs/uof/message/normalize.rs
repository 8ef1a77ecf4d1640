//! Raw wire structs to domain messages

use super::raw::*;
use super::types::*;
use crate::domain::{
    Clock, ClockTime, EventStatus, EventStatusKind, Market, MarketCatalog, MarketStatus, Outcome,
    OutcomeId, Specifiers, Urn,
};
use crate::error::{DecodeError, Result};

/// Wire booleans come as `1`/`0` or `true`/`false`
fn parse_flag(name: &str, raw: &str) -> Result<bool> {
    match raw {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        other => Err(DecodeError::SchemaViolation(format!(
            "invalid {} flag {:?}",
            name, other
        ))),
    }
}

fn parse_optional_flag(name: &str, raw: Option<&str>) -> Result<Option<bool>> {
    raw.map(|value| parse_flag(name, value)).transpose()
}

fn specifiers(base: Option<&str>, extended: Option<&str>) -> Specifiers {
    Specifiers::merge(base.unwrap_or_default(), extended.unwrap_or_default())
}

fn clock_time(raw: Option<&str>) -> Result<Option<ClockTime>> {
    raw.map(ClockTime::parse).transpose()
}

pub(crate) fn odds_change(raw: RawOddsChange, catalog: &MarketCatalog) -> Result<OddsChange> {
    let event = Urn::parse(&raw.event_id)?;
    let event_status = raw.sport_event_status.map(event_status).transpose()?;

    let (betting_status, betstop_reason, markets) = match raw.odds {
        Some(odds) => {
            let markets = odds
                .markets
                .into_iter()
                .map(|m| market(m, catalog))
                .collect::<Result<Vec<_>>>()?;
            (odds.betting_status, odds.betstop_reason, markets)
        }
        None => (None, None, Vec::new()),
    };

    Ok(OddsChange {
        event,
        producer: raw.product,
        timestamp: raw.timestamp,
        request_id: raw.request_id,
        betting_status,
        betstop_reason,
        event_status,
        markets,
    })
}

fn event_status(raw: RawSportEventStatus) -> Result<EventStatus> {
    let clock = match raw.clock {
        Some(c) => Some(Clock {
            match_time: clock_time(c.match_time.as_deref())?,
            stoppage_time: clock_time(c.stoppage_time.as_deref())?,
            remaining_time: clock_time(c.remaining_time.as_deref())?,
            stopped: parse_optional_flag("stopped", c.stopped.as_deref())?,
        }),
        None => None,
    };

    Ok(EventStatus {
        status: EventStatusKind::from_code(raw.status)?,
        match_status: raw.match_status,
        home_score: raw.home_score,
        away_score: raw.away_score,
        clock,
    })
}

fn market(raw: RawMarket, catalog: &MarketCatalog) -> Result<Market> {
    let specifiers = specifiers(
        raw.specifiers.as_deref(),
        raw.extended_specifiers.as_deref(),
    );
    let mut market = Market::new(raw.id, specifiers, MarketStatus::from_code(raw.status)?);
    market.next_betstop = raw.next_betstop;
    market.favourite = parse_optional_flag("favourite", raw.favourite.as_deref())?.unwrap_or(false);

    let player_market = catalog.is_player_market(raw.id);
    market.outcomes = raw
        .outcomes
        .into_iter()
        .map(|o| {
            let mut outcome = Outcome::new(OutcomeId::parse(&o.id)?, player_market);
            outcome.odds = o.odds;
            outcome.probability = o.probabilities;
            outcome.active = parse_optional_flag("active", o.active.as_deref())?;
            Ok(outcome)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(market)
}

pub(crate) fn bet_stop(raw: RawBetStop) -> Result<BetStop> {
    let groups = raw
        .groups
        .as_deref()
        .unwrap_or_default()
        .split('|')
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect();
    let market_status = match raw.market_status {
        Some(code) => MarketStatus::from_code(code)?,
        None => MarketStatus::Suspended,
    };

    Ok(BetStop {
        event: Urn::parse(&raw.event_id)?,
        producer: raw.product,
        timestamp: raw.timestamp,
        groups,
        market_status,
    })
}

pub(crate) fn bet_settlement(raw: RawBetSettlement, catalog: &MarketCatalog) -> Result<BetSettlement> {
    let markets = raw
        .outcomes
        .map(|o| o.markets)
        .unwrap_or_default()
        .into_iter()
        .map(|m| settled_market(m, catalog))
        .collect::<Result<Vec<_>>>()?;

    Ok(BetSettlement {
        event: Urn::parse(&raw.event_id)?,
        producer: raw.product,
        timestamp: raw.timestamp,
        certainty: raw.certainty,
        markets,
    })
}

fn settled_market(raw: RawSettledMarket, catalog: &MarketCatalog) -> Result<SettledMarket> {
    let specifiers = specifiers(
        raw.specifiers.as_deref(),
        raw.extended_specifiers.as_deref(),
    );
    let player_market = catalog.is_player_market(raw.id);
    let outcomes = raw
        .outcomes
        .into_iter()
        .map(|o| {
            let outcome = Outcome::new(OutcomeId::parse(&o.id)?, player_market);
            Ok(SettledOutcome {
                id: outcome.id,
                player_id: outcome.player_id,
                result: parse_flag("result", &o.result)?,
                void_factor: o.void_factor,
                dead_heat_factor: o.dead_heat_factor,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(SettledMarket {
        id: raw.id,
        line_id: specifiers.line_id(),
        specifiers,
        void_reason: raw.void_reason,
        outcomes,
    })
}

pub(crate) fn bet_cancel(raw: RawBetCancel) -> Result<BetCancel> {
    let markets = raw
        .markets
        .into_iter()
        .map(|m| {
            let specifiers = specifiers(m.specifiers.as_deref(), m.extended_specifiers.as_deref());
            CancelledMarket {
                id: m.id,
                line_id: specifiers.line_id(),
                specifiers,
                void_reason: m.void_reason,
            }
        })
        .collect();

    Ok(BetCancel {
        event: Urn::parse(&raw.event_id)?,
        producer: raw.product,
        timestamp: raw.timestamp,
        start_time: raw.start_time,
        end_time: raw.end_time,
        markets,
    })
}

pub(crate) fn fixture_change(raw: RawFixtureChange) -> Result<FixtureChange> {
    Ok(FixtureChange {
        event: Urn::parse(&raw.event_id)?,
        producer: raw.product,
        timestamp: raw.timestamp,
        start_time: raw.start_time,
        change_type: raw.change_type,
    })
}

pub(crate) fn alive(raw: RawAlive) -> Result<Alive> {
    Ok(Alive {
        producer: raw.product,
        timestamp: raw.timestamp,
        subscribed: parse_optional_flag("subscribed", raw.subscribed.as_deref())?.unwrap_or(false),
    })
}

pub(crate) fn snapshot_complete(raw: RawSnapshotComplete) -> SnapshotComplete {
    SnapshotComplete {
        producer: raw.product,
        timestamp: raw.timestamp,
        request_id: raw.request_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags() {
        assert_eq!(parse_flag("x", "1"), Ok(true));
        assert_eq!(parse_flag("x", "true"), Ok(true));
        assert_eq!(parse_flag("x", "0"), Ok(false));
        assert_eq!(parse_flag("x", "false"), Ok(false));
        assert!(matches!(
            parse_flag("active", "yes"),
            Err(DecodeError::SchemaViolation(_))
        ));
        assert_eq!(parse_optional_flag("x", None), Ok(None));
    }

    #[test]
    fn test_bet_stop_defaults_to_suspended() {
        let raw = RawBetStop {
            product: 3,
            event_id: "sr:match:1".into(),
            timestamp: 10,
            groups: Some("all||prematch".into()),
            market_status: None,
        };
        let stop = bet_stop(raw).unwrap();
        assert_eq!(stop.market_status, MarketStatus::Suspended);
        assert_eq!(stop.groups, vec!["all", "prematch"]);
    }
}
