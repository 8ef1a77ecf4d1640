//! Envelope Decoding
//!
//! This module provides the trait that turns raw envelopes into typed
//! messages, and the types the stream delivers downstream.
//!
//! # Architecture
//!
//! ```text
//! Source → Envelope → Decoder (parallel workers) → Resequence → Delivery channel
//!                          ↓
//!                     DecodeFailure (delivered in place of the message)
//! ```
//!
//! # Ordering Guarantees
//!
//! - **Arrival order**: deliveries leave the stream in the order envelopes
//!   arrived, whatever order the workers finish in
//! - **Per-message failures**: a failed decode occupies its slot in the
//!   sequence and never terminates the stream

use crate::source::Envelope;
use std::fmt::{Debug, Display};

/// Decoder that turns a raw envelope into a typed message
///
/// Decoding must be pure: no I/O and no mutation of shared state. The
/// stream runs `decode` on blocking worker threads, several envelopes at
/// a time, so any shared data the decoder holds must be safe for
/// unsynchronized concurrent reads.
///
/// # Example
///
/// ```ignore
/// struct TextDecoder;
///
/// impl EnvelopeDecoder for TextDecoder {
///     type Message = String;
///     type Error = std::str::Utf8Error;
///
///     fn decode(&self, envelope: &Envelope) -> Result<String, Self::Error> {
///         std::str::from_utf8(&envelope.body).map(str::to_owned)
///     }
/// }
/// ```
pub trait EnvelopeDecoder: Send + Sync + 'static {
    /// The decoded message type
    type Message: Send + Debug + 'static;

    /// The per-message failure type
    type Error: Send + Debug + Display + 'static;

    /// Decode a single envelope
    fn decode(&self, envelope: &Envelope) -> std::result::Result<Self::Message, Self::Error>;
}

/// A successfully decoded message with its transport metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<M> {
    pub timestamp: i64,
    pub routing_key: String,
    pub message: M,
}

/// A message that could not be decoded, reported in its arrival slot
#[derive(Debug)]
pub struct DecodeFailure<E> {
    pub envelope: Envelope,
    pub error: E,
}

impl<E: Display> Display for DecodeFailure<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "failed to decode {} @ {}: {}",
            self.envelope.routing_key, self.envelope.timestamp, self.error
        )
    }
}

/// One item on the delivery channel
pub type Delivery<M, E> = std::result::Result<Decoded<M>, DecodeFailure<E>>;

/// Run a decoder against an envelope and wrap the outcome for delivery
pub fn decode_envelope<D: EnvelopeDecoder>(
    decoder: &D,
    envelope: Envelope,
) -> Delivery<D::Message, D::Error> {
    match decoder.decode(&envelope) {
        Ok(message) => Ok(Decoded {
            timestamp: envelope.timestamp,
            routing_key: envelope.routing_key,
            message,
        }),
        Err(error) => Err(DecodeFailure { envelope, error }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TextDecoder;

    impl EnvelopeDecoder for TextDecoder {
        type Message = String;
        type Error = std::str::Utf8Error;

        fn decode(&self, envelope: &Envelope) -> Result<String, Self::Error> {
            std::str::from_utf8(&envelope.body).map(str::to_owned)
        }
    }

    #[test]
    fn test_decode_envelope_success_keeps_metadata() {
        let delivery = decode_envelope(&TextDecoder, Envelope::new(42, "key", "hello"));
        let decoded = delivery.unwrap();
        assert_eq!(decoded.timestamp, 42);
        assert_eq!(decoded.routing_key, "key");
        assert_eq!(decoded.message, "hello");
    }

    #[test]
    fn test_decode_envelope_failure_keeps_envelope() {
        let delivery = decode_envelope(&TextDecoder, Envelope::new(3, "bad", vec![0xc3, 0x28]));
        let failure = delivery.unwrap_err();
        assert_eq!(failure.envelope.routing_key, "bad");
        assert!(failure.to_string().starts_with("failed to decode bad @ 3"));
    }
}
