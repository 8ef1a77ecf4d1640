//! Normalized domain model shared by every message kind

mod hash;

pub mod catalog;
pub mod event_status;
pub mod market;
pub mod specifiers;
pub mod urn;

pub use catalog::MarketCatalog;
pub use event_status::{Clock, ClockTime, EventStatus, EventStatusKind};
pub use hash::fnv1a32;
pub use market::{Market, MarketStatus, Outcome, OutcomeId};
pub use specifiers::Specifiers;
pub use urn::{Urn, UrnType, URN_PREFIX};
