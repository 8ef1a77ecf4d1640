//! Unified Odds Feed client - main library
//!
//! ## Architecture
//!
//! - **feedstream**: ordered, backpressured decoding of raw envelopes
//!   (re-exported from workspace)
//! - **uof**: feed domain model, message decoder and replay control
//!   (re-exported from workspace)
//! - **bin_common**: shared helpers for the binaries
//!
//! ## Usage in Binaries
//!
//! ```rust,ignore
//! use uof_feed::bin_common::{load_config_from_env, ReplayArgs};
//! use uof_feed::uof::ReplayClient;
//! ```

// Re-export workspace libraries for convenience
pub use feedstream;
pub use uof;

pub mod bin_common {
    //! Common utilities for binary executables

    pub mod cli;

    pub use cli::{load_config_from_env, parse_args, ReplayArgs};
}
