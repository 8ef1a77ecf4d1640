//! # Feedstream core
//!
//! The stream task, its configuration, state tracking and shutdown signal.
//!
//! ## Example
//!
//! ```rust,ignore
//! use feedstream::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let (tx, source) = ChannelSource::new(1024);
//!     let shutdown = Shutdown::new();
//!     shutdown.spawn_signal_handler();
//!
//!     let (stream, mut deliveries) =
//!         FeedStream::spawn(source, MyDecoder, StreamConfig::default(), shutdown)?;
//!
//!     // broker collaborator pushes into `tx`
//!
//!     while let Some(delivery) = deliveries.recv().await {
//!         match delivery {
//!             Ok(decoded) => println!("{:?}", decoded.message),
//!             Err(failure) => eprintln!("{}", failure),
//!         }
//!     }
//!
//!     stream.finish().await
//! }
//! ```

pub mod config;
pub mod shutdown;
pub mod state;
pub mod stream;

// Re-export main types
pub use config::StreamConfig;
pub use shutdown::Shutdown;
pub use state::{AtomicMetrics, AtomicStreamState, StreamMetrics, StreamState};
pub use stream::{DeliveryReceiver, FeedStream};

// Re-export traits for convenience
pub use crate::traits::*;
