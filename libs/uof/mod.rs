//! Unified Odds Feed client
//!
//! Decodes feed envelopes into typed messages and controls the replay
//! server that feeds recorded events into a test session.
//!
//! ```ignore
//! use feedstream::{FeedStream, Shutdown, VecSource};
//! use std::sync::Arc;
//! use uof::{FeedDecoder, MarketCatalog};
//!
//! let decoder = FeedDecoder::new(Arc::new(MarketCatalog::new([38, 39])));
//! let (stream, mut rx) =
//!     FeedStream::spawn(VecSource::new(envelopes), decoder, config, Shutdown::new())?;
//! while let Some(delivery) = rx.recv().await {
//!     match delivery {
//!         Ok(decoded) => handle(decoded.message),
//!         Err(failure) => warn!("{}", failure),
//!     }
//! }
//! stream.finish().await?;
//! ```

pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod message;

pub use domain::{
    Clock, ClockTime, EventStatus, EventStatusKind, Market, MarketCatalog, MarketStatus, Outcome,
    Specifiers, Urn, UrnType,
};
pub use error::DecodeError;
pub use infrastructure::{
    capture, client::replay, config, init_tracing, CaptureError, ConfigError, FeedConfig,
    ReplayClient, ReplayError,
};
pub use message::{FeedDecoder, FeedMessage, MessageKind};
