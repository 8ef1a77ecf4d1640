//! Provider API clients

pub mod replay;

pub use replay::{ReplayClient, ReplayError};
