//! Envelope to [`FeedMessage`] decoding

use super::kind::MessageKind;
use super::normalize;
use super::types::FeedMessage;
use crate::domain::MarketCatalog;
use crate::error::{DecodeError, Result};
use feedstream::{Envelope, EnvelopeDecoder};
use quick_xml::events::Event;
use quick_xml::Reader;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Pure decoder for feed envelopes.
///
/// Cheap to clone; every clone shares the same read-only catalog, so a
/// single instance can serve all stream workers.
#[derive(Debug, Clone, Default)]
pub struct FeedDecoder {
    catalog: Arc<MarketCatalog>,
}

impl FeedDecoder {
    pub fn new(catalog: Arc<MarketCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &MarketCatalog {
        &self.catalog
    }

    /// Decode a body whose kind is already known from its routing key
    pub fn decode_body(&self, kind: MessageKind, body: &str) -> Result<FeedMessage> {
        let root = root_element(body)?;
        if root != kind.as_str() {
            return Err(DecodeError::SchemaViolation(format!(
                "expected <{}> root element, found <{}>",
                kind, root
            )));
        }

        let message = match kind {
            MessageKind::OddsChange => {
                FeedMessage::OddsChange(normalize::odds_change(parse(body)?, &self.catalog)?)
            }
            MessageKind::BetStop => FeedMessage::BetStop(normalize::bet_stop(parse(body)?)?),
            MessageKind::BetSettlement => FeedMessage::BetSettlement(normalize::bet_settlement(
                parse(body)?,
                &self.catalog,
            )?),
            MessageKind::BetCancel => FeedMessage::BetCancel(normalize::bet_cancel(parse(body)?)?),
            MessageKind::FixtureChange => {
                FeedMessage::FixtureChange(normalize::fixture_change(parse(body)?)?)
            }
            MessageKind::Alive => FeedMessage::Alive(normalize::alive(parse(body)?)?),
            MessageKind::SnapshotComplete => {
                FeedMessage::SnapshotComplete(normalize::snapshot_complete(parse(body)?))
            }
        };
        Ok(message)
    }

    pub fn decode_message(&self, routing_key: &str, body: &[u8]) -> Result<FeedMessage> {
        let kind = MessageKind::from_routing_key(routing_key)?;
        let body = std::str::from_utf8(body)
            .map_err(|e| DecodeError::SchemaViolation(format!("body is not utf-8: {}", e)))?;
        self.decode_body(kind, body)
    }
}

impl EnvelopeDecoder for FeedDecoder {
    type Message = FeedMessage;
    type Error = DecodeError;

    fn decode(&self, envelope: &Envelope) -> Result<FeedMessage> {
        self.decode_message(&envelope.routing_key, &envelope.body)
    }
}

fn parse<T: DeserializeOwned>(body: &str) -> Result<T> {
    quick_xml::de::from_str(body).map_err(|e| DecodeError::SchemaViolation(e.to_string()))
}

/// Name of the first element in the document
fn root_element(body: &str) -> Result<String> {
    let mut reader = Reader::from_str(body);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                return Ok(String::from_utf8_lossy(e.name().as_ref()).into_owned())
            }
            Ok(Event::Eof) => {
                return Err(DecodeError::SchemaViolation("document has no root element".into()))
            }
            Ok(_) => {}
            Err(e) => return Err(DecodeError::SchemaViolation(e.to_string())),
        }
    }
}
