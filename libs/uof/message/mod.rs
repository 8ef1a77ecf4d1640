//! Feed message decoding
//!
//! The routing key selects the message kind, the body is parsed against
//! that kind's XML schema and normalized into a [`FeedMessage`].

mod decoder;
mod kind;
mod normalize;
mod raw;
mod types;

pub use decoder::FeedDecoder;
pub use kind::MessageKind;
pub use types::{
    Alive, BetCancel, BetSettlement, BetStop, CancelledMarket, FeedMessage, FixtureChange,
    OddsChange, SettledMarket, SettledOutcome, SnapshotComplete,
};
