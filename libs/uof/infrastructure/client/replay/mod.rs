//! Replay server control plane
//!
//! Scripts which recorded events the replay broker plays back, at what
//! speed and with what cap on inter-message delay.

mod client;
mod error;
mod samples;
pub mod templates;

pub use client::{ReplayClient, PRODUCTION_URL, STAGING_URL};
pub use error::{ReplayError, Result};
pub use samples::{sample_events, SampleEvent};
pub use templates::{render, ReplayParams, Template};
