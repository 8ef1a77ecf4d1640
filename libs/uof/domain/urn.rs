//! Compact entity identifiers of the form `sr:<type>:<id>`

use crate::error::{DecodeError, Result};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The only prefix the feed uses
pub const URN_PREFIX: &str = "sr";

/// Known entity kinds. Anything else fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UrnType {
    Match,
    Stage,
    Season,
    Tournament,
    SimpleTournament,
    RaceTournament,
    Player,
    Competitor,
    Venue,
    Sport,
    Category,
}

impl UrnType {
    pub const ALL: [UrnType; 11] = [
        UrnType::Match,
        UrnType::Stage,
        UrnType::Season,
        UrnType::Tournament,
        UrnType::SimpleTournament,
        UrnType::RaceTournament,
        UrnType::Player,
        UrnType::Competitor,
        UrnType::Venue,
        UrnType::Sport,
        UrnType::Category,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UrnType::Match => "match",
            UrnType::Stage => "stage",
            UrnType::Season => "season",
            UrnType::Tournament => "tournament",
            UrnType::SimpleTournament => "simple_tournament",
            UrnType::RaceTournament => "race_tournament",
            UrnType::Player => "player",
            UrnType::Competitor => "competitor",
            UrnType::Venue => "venue",
            UrnType::Sport => "sport",
            UrnType::Category => "category",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.as_str() == token)
    }
}

impl fmt::Display for UrnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsed entity reference, e.g. `sr:match:123`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Urn {
    kind: UrnType,
    id: i64,
}

impl Urn {
    pub fn new(kind: UrnType, id: i64) -> Self {
        Self { kind, id }
    }

    /// Parse `prefix:type:id`.
    ///
    /// The id must be a non-negative base-10 integer without sign.
    pub fn parse(input: &str) -> Result<Self> {
        let malformed = || DecodeError::MalformedIdentifier(input.to_string());

        let mut parts = input.split(':');
        let (prefix, kind, id) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(prefix), Some(kind), Some(id), None) => (prefix, kind, id),
            _ => return Err(malformed()),
        };

        if prefix != URN_PREFIX {
            return Err(malformed());
        }
        let kind = UrnType::from_token(kind).ok_or_else(malformed)?;
        if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        let id = id.parse::<i64>().map_err(|_| malformed())?;

        Ok(Self { kind, id })
    }

    #[inline]
    pub fn kind(&self) -> UrnType {
        self.kind
    }

    #[inline]
    pub fn id(&self) -> i64 {
        self.id
    }
}

impl FromStr for Urn {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Urn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", URN_PREFIX, self.kind, self.id)
    }
}

impl Serialize for Urn {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_types() {
        let urn = Urn::parse("sr:match:123").unwrap();
        assert_eq!(urn.kind(), UrnType::Match);
        assert_eq!(urn.id(), 123);

        let urn: Urn = "sr:simple_tournament:66820".parse().unwrap();
        assert_eq!(urn.kind(), UrnType::SimpleTournament);
        assert_eq!(urn.id(), 66820);

        assert_eq!(Urn::parse("sr:season:40175").unwrap().kind(), UrnType::Season);
        assert_eq!(Urn::parse("sr:stage:329361").unwrap().kind(), UrnType::Stage);
        assert_eq!(Urn::parse("sr:match:0").unwrap().id(), 0);
    }

    #[test]
    fn test_every_type_round_trips() {
        for kind in UrnType::ALL {
            let urn = Urn::new(kind, 42);
            assert_eq!(Urn::parse(&urn.to_string()).unwrap(), urn);
        }
    }

    #[test]
    fn test_malformed_inputs_rejected() {
        let cases = [
            "",
            "sr:match",
            "sr:match:",
            "xx:match:1",
            "sr:unknown:1",
            "sr:match:abc",
            "sr:match:-1",
            "sr:match:+1",
            "sr:match:1:2",
            "sr:match:99999999999999999999",
            "SR:match:1",
        ];
        for input in cases {
            assert_eq!(
                Urn::parse(input),
                Err(DecodeError::MalformedIdentifier(input.to_string())),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_serializes_as_string() {
        let urn = Urn::new(UrnType::Match, 8696826);
        assert_eq!(serde_json::to_string(&urn).unwrap(), "\"sr:match:8696826\"");
    }
}
