//! # Feedstream Traits
//!
//! Core traits and types shared by every stream:
//!
//! - **EnvelopeSource**: yields raw envelopes from the transport
//! - **EnvelopeDecoder**: turns an envelope into a typed message
//! - **StreamError**: fatal stream failures

pub mod decoder;
pub mod error;
pub mod source;

pub use decoder::{decode_envelope, DecodeFailure, Decoded, Delivery, EnvelopeDecoder};
pub use error::{Result, StreamError};
pub use source::{ChannelSource, Envelope, EnvelopeSource, VecSource};
