//! Decoding of a complete odds change fixture

use std::sync::Arc;
use uof::{
    DecodeError, EventStatusKind, FeedDecoder, FeedMessage, MarketCatalog, MarketStatus,
    MessageKind, UrnType,
};

const ROUTING_KEY: &str = "hi.-.live.odds_change.2.sr:match.123.-";
const FIXTURE: &str = include_str!("fixtures/odds_change-0.xml");

fn decode_with(catalog: MarketCatalog) -> uof::message::OddsChange {
    let decoder = FeedDecoder::new(Arc::new(catalog));
    match decoder.decode_message(ROUTING_KEY, FIXTURE.as_bytes()).unwrap() {
        FeedMessage::OddsChange(oc) => oc,
        other => panic!("expected odds change, got {:?}", other.kind()),
    }
}

fn decode() -> uof::message::OddsChange {
    decode_with(MarketCatalog::empty())
}

#[test]
fn test_scalar_fields() {
    let oc = decode();
    assert_eq!(oc.markets.len(), 7);
    assert_eq!(oc.event.id(), 123);
    assert_eq!(oc.event.kind(), UrnType::Match);
    assert_eq!(oc.producer, 2);
    assert_eq!(oc.timestamp, 1234);
    assert_eq!(oc.betting_status, Some(1));
    assert_eq!(oc.betstop_reason, Some(2));
    assert_eq!(oc.request_id, None);
}

#[test]
fn test_markets() {
    let oc = decode();

    assert_eq!(oc.markets[0].next_betstop, Some(12345));
    assert!(oc.markets[0].favourite);
    assert_eq!(oc.markets[0].line_id, 2_701_050_930);
    assert_eq!(oc.markets[4].line_id, 0);

    let first = &oc.markets[0].outcomes[0];
    assert_eq!(first.odds, Some(1.85));
    assert_eq!(first.probability, Some(0.52));
    assert_eq!(first.active, Some(true));
    assert_eq!(oc.markets[5].outcomes[0].active, None);
}

#[test]
fn test_outcome_ids() {
    let oc = decode();

    let plain: Vec<(i64, i64)> = oc.markets[3]
        .outcomes
        .iter()
        .map(|o| (o.id, o.player_id))
        .collect();
    assert_eq!(plain, vec![(1, 0), (2, 0)]);

    let players: Vec<(i64, i64)> = oc.markets[4]
        .outcomes
        .iter()
        .map(|o| (o.id, o.player_id))
        .collect();
    assert_eq!(players, vec![(1234, 1234), (4322, 4322)]);

    let composite = &oc.markets[6].outcomes;
    assert_ne!(composite[0].id, composite[1].id);
    assert_eq!(composite[0].player_id, 0);
}

#[test]
fn test_player_market_catalog() {
    let oc = decode_with(MarketCatalog::new([1]));
    for outcome in &oc.markets[1].outcomes {
        assert_eq!(outcome.player_id, outcome.id);
    }
    for outcome in &oc.markets[2].outcomes {
        assert_eq!(outcome.player_id, 0);
    }
}

#[test]
fn test_specifiers() {
    let oc = decode();

    let s = &oc.markets[0].specifiers;
    assert_eq!(s.len(), 1);
    assert_eq!(s.get("score"), Some("41.5"));

    let s = &oc.markets[3].specifiers;
    assert_eq!(s.len(), 4);
    assert_eq!(s.get("pero"), Some("2"));
    assert_eq!(s.get("to"), Some("15"));

    assert_eq!(oc.markets[6].variant(), Some("sr:exact_goals:4+"));
    assert_eq!(oc.markets[0].variant(), None);
}

#[test]
fn test_market_status() {
    let oc = decode();
    let statuses: Vec<MarketStatus> = oc.markets.iter().map(|m| m.status).collect();
    assert_eq!(
        statuses,
        vec![
            MarketStatus::Active,
            MarketStatus::Active,
            MarketStatus::Inactive,
            MarketStatus::Suspended,
            MarketStatus::Active,
            MarketStatus::HandedOver,
            MarketStatus::Cancelled,
        ]
    );
}

#[test]
fn test_event_status() {
    let oc = decode();
    let status = oc.event_status.expect("sport_event_status present");
    assert_eq!(status.status, EventStatusKind::Live);
    assert_eq!(status.match_status, Some(7));
    assert_eq!(status.home_score, Some(2));
    assert_eq!(status.away_score, Some(0));

    let clock = status.clock.expect("clock present");
    let match_time = clock.match_time.expect("match time present");
    assert_eq!(match_time.to_string(), "75:02");
    assert_eq!(match_time.minute(), "75");
    assert_eq!(clock.stoppage_time.map(|t| t.to_string()), Some("1:00".to_string()));
    assert_eq!(clock.remaining_time, None);
    assert_eq!(clock.stopped, Some(false));
}

#[test]
fn test_message_accessors() {
    let decoder = FeedDecoder::default();
    let message = decoder
        .decode_message(ROUTING_KEY, FIXTURE.as_bytes())
        .unwrap();
    assert_eq!(message.kind(), MessageKind::OddsChange);
    assert_eq!(message.producer(), 2);
    assert_eq!(message.timestamp(), 1234);
    assert_eq!(message.event().map(|u| u.to_string()), Some("sr:match:123".into()));
}

#[test]
fn test_one_bad_market_fails_message() {
    let broken = FIXTURE.replace(r#"status="-2""#, r#"status="7""#);
    let err = FeedDecoder::default()
        .decode_message(ROUTING_KEY, broken.as_bytes())
        .unwrap_err();
    assert_eq!(err, DecodeError::UnknownMarketStatus(7));
}

#[test]
fn test_malformed_specifier_token_keeps_market() {
    let odd = FIXTURE.replace(r#"specifiers="total=2.5""#, r#"specifiers="total=2.5|x""#);
    let FeedMessage::OddsChange(oc) = FeedDecoder::default()
        .decode_message(ROUTING_KEY, odd.as_bytes())
        .unwrap()
    else {
        panic!("expected odds change");
    };
    assert_eq!(oc.markets.len(), decode().markets.len());

    let market = oc.markets.iter().find(|m| m.id == 60).unwrap();
    assert_eq!(market.specifiers.len(), 1);
    assert_eq!(market.specifiers.get("total"), Some("2.5"));

    let siblings = oc.markets.iter().find(|m| m.id == 144).unwrap();
    assert_eq!(siblings.specifiers.get("pero"), Some("2"));
}

#[test]
fn test_bad_clock_fails_message() {
    let broken = FIXTURE.replace("75:02", "75m02");
    let err = FeedDecoder::default()
        .decode_message(ROUTING_KEY, broken.as_bytes())
        .unwrap_err();
    assert_eq!(err, DecodeError::MalformedClock("75m02".into()));
}

#[test]
fn test_bad_event_urn_fails_message() {
    let broken = FIXTURE.replace("sr:match:123", "sr:fixture:123");
    let err = FeedDecoder::default()
        .decode_message(ROUTING_KEY, broken.as_bytes())
        .unwrap_err();
    assert_eq!(err, DecodeError::MalformedIdentifier("sr:fixture:123".into()));
}

#[test]
fn test_serializes_to_json() {
    let value = serde_json::to_value(FeedDecoder::default()
        .decode_message(ROUTING_KEY, FIXTURE.as_bytes())
        .unwrap())
    .unwrap();
    assert_eq!(value["kind"], "odds_change");
    assert_eq!(value["event"], "sr:match:123");
    assert_eq!(value["markets"][0]["specifiers"]["score"], "41.5");
    assert_eq!(value["markets"][3]["status"], "suspended");
    assert_eq!(value["event_status"]["clock"]["match_time"], "75:02");
}
