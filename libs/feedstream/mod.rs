//! # Feedstream
//!
//! Ordered delivery of decoded messages from a queue-like envelope source.
//!
//! ## Features
//!
//! - **Arrival order preserved**: parallel decode, re-sequenced before delivery
//! - **Backpressure**: bounded delivery channel, nothing is dropped
//! - **Per-message failures**: a bad message is reported in its slot and the stream continues
//! - **Trailing error**: at most one terminal error, reported after the channel closes
//! - **Graceful shutdown**: in-flight decodes complete, then the channel closes

pub mod core;
pub mod traits;

// Re-export all traits
pub use traits::*;

// Re-export core stream functionality
pub use self::core::{
    config, shutdown, state, stream,
    config::StreamConfig,
    shutdown::Shutdown,
    state::{AtomicMetrics, AtomicStreamState, StreamMetrics, StreamState},
    stream::{DeliveryReceiver, FeedStream},
};
