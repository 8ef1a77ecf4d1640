use crate::error::{Result, StreamError};
use serde::{Deserialize, Serialize};

/// Configuration for a [`FeedStream`](crate::stream::FeedStream)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    /// Bounded capacity of the delivery channel. A full channel blocks
    /// the stream until the consumer catches up.
    pub channel_capacity: usize,

    /// Maximum number of envelopes decoded concurrently
    pub decode_workers: usize,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 128,
            decode_workers: 4,
        }
    }
}

impl StreamConfig {
    pub fn validate(&self) -> Result<()> {
        if self.channel_capacity == 0 {
            return Err(StreamError::Configuration(
                "channel_capacity must be greater than 0".to_string(),
            ));
        }
        if self.decode_workers == 0 {
            return Err(StreamError::Configuration(
                "decode_workers must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
