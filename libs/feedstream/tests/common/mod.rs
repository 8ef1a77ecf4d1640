//! Common test utilities for feedstream integration tests

#![allow(dead_code)]

use feedstream::{Envelope, EnvelopeDecoder};
use std::time::Duration;

/// Macro for verbose test output (controlled by TEST_VERBOSE env var)
#[macro_export]
macro_rules! verbose_println {
    ($($arg:tt)*) => {
        if std::env::var("TEST_VERBOSE").is_ok() {
            println!($($arg)*);
        }
    };
}

/// Decoder for bodies of the form `<seq>:<delay_ms>`.
///
/// Sleeps for the delay before returning the sequence number, so tests
/// can force workers to finish out of order. The body `bad` fails and
/// the body `panic` panics inside the worker.
pub struct DelayDecoder;

impl EnvelopeDecoder for DelayDecoder {
    type Message = u64;
    type Error = String;

    fn decode(&self, envelope: &Envelope) -> Result<u64, String> {
        let body = envelope.body_str().ok_or("body is not utf-8")?;
        if body == "bad" {
            return Err(format!("bad envelope {}", envelope.routing_key));
        }
        if body == "panic" {
            panic!("decoder panicked on {}", envelope.routing_key);
        }
        let (seq, delay) = body.split_once(':').ok_or("missing delay")?;
        let delay: u64 = delay.parse().map_err(|_| "invalid delay".to_string())?;
        std::thread::sleep(Duration::from_millis(delay));
        seq.parse().map_err(|_| "invalid sequence".to_string())
    }
}

/// Build an envelope decoded by [`DelayDecoder`]
pub fn envelope(seq: u64, delay_ms: u64) -> Envelope {
    Envelope::new(seq as i64, format!("key.{}", seq), format!("{}:{}", seq, delay_ms))
}
