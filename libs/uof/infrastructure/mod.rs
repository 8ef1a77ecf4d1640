//! Infrastructure layer: provider API clients, configuration, capture
//! files and logging

pub mod capture;
pub mod client;
pub mod config;
pub mod logging;

pub use capture::CaptureError;
pub use client::{ReplayClient, ReplayError};
pub use config::{ConfigError, FeedConfig};
pub use logging::init_tracing;
