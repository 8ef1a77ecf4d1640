//! Decode error taxonomy
//!
//! Every variant is reported per message. None of them is retried: a
//! malformed message decodes the same way every time.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Malformed identifier: {0:?}")]
    MalformedIdentifier(String),

    #[error("Unknown market status code: {0}")]
    UnknownMarketStatus(i32),

    #[error("Unknown event status code: {0}")]
    UnknownEventStatus(i32),

    #[error("Malformed clock value: {0:?}")]
    MalformedClock(String),

    #[error("Unrecognized message kind in routing key: {0:?}")]
    UnrecognizedMessageKind(String),

    #[error("Schema violation: {0}")]
    SchemaViolation(String),
}

pub type Result<T> = std::result::Result<T, DecodeError>;
