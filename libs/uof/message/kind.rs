//! Message kind dispatch from the routing key

use crate::error::{DecodeError, Result};
use serde::Serialize;
use std::fmt;

/// Position of the message name in a routing key such as
/// `hi.-.live.odds_change.1.sr:match.123.-`
const KIND_SEGMENT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    OddsChange,
    BetStop,
    BetSettlement,
    BetCancel,
    FixtureChange,
    Alive,
    SnapshotComplete,
}

impl MessageKind {
    pub const ALL: [MessageKind; 7] = [
        MessageKind::OddsChange,
        MessageKind::BetStop,
        MessageKind::BetSettlement,
        MessageKind::BetCancel,
        MessageKind::FixtureChange,
        MessageKind::Alive,
        MessageKind::SnapshotComplete,
    ];

    /// Wire name; also the root element of the message body
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::OddsChange => "odds_change",
            MessageKind::BetStop => "bet_stop",
            MessageKind::BetSettlement => "bet_settlement",
            MessageKind::BetCancel => "bet_cancel",
            MessageKind::FixtureChange => "fixture_change",
            MessageKind::Alive => "alive",
            MessageKind::SnapshotComplete => "snapshot_complete",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.as_str() == name)
    }

    pub fn from_routing_key(routing_key: &str) -> Result<Self> {
        routing_key
            .split('.')
            .nth(KIND_SEGMENT)
            .and_then(Self::from_name)
            .ok_or_else(|| DecodeError::UnrecognizedMessageKind(routing_key.to_string()))
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
