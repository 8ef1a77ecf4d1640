use crate::error::Result;
use async_trait::async_trait;
use std::collections::VecDeque;
use tokio::sync::mpsc;

/// Raw transport unit handed over by the broker collaborator.
///
/// One envelope per wire message. The body is the undecoded payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    /// Receive time in milliseconds since the Unix epoch
    pub timestamp: i64,
    /// Transport-level tag describing the message kind
    pub routing_key: String,
    pub body: Vec<u8>,
}

impl Envelope {
    pub fn new(timestamp: i64, routing_key: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            timestamp,
            routing_key: routing_key.into(),
            body: body.into(),
        }
    }

    /// Get the body as text, if it is valid UTF-8
    pub fn body_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}

/// Trait for anything that yields raw envelopes in arrival order
///
/// `next` is polled inside `tokio::select!`, so implementations must be
/// cancel-safe: dropping the future before it resolves must not lose an
/// envelope.
///
/// # Returns
/// * `Some(Ok(envelope))` - next envelope
/// * `Some(Err(_))` - transport failure, the stream closes with this error
/// * `None` - source exhausted
#[async_trait]
pub trait EnvelopeSource: Send + 'static {
    async fn next(&mut self) -> Option<Result<Envelope>>;
}

/// Source fed through a bounded tokio channel.
///
/// The broker collaborator owns the sender and pushes envelopes into it.
/// A transport failure is pushed as `Err(StreamError::Source(..))`, a
/// broker-side disconnect as `Err(StreamError::ConnectionClosed(..))`.
/// Dropping every sender ends the source cleanly.
pub struct ChannelSource {
    rx: mpsc::Receiver<Result<Envelope>>,
}

impl ChannelSource {
    /// Create a source together with the sender half used by the producer
    pub fn new(capacity: usize) -> (mpsc::Sender<Result<Envelope>>, Self) {
        let (tx, rx) = mpsc::channel(capacity);
        (tx, Self { rx })
    }
}

#[async_trait]
impl EnvelopeSource for ChannelSource {
    async fn next(&mut self) -> Option<Result<Envelope>> {
        self.rx.recv().await
    }
}

/// Finite in-memory source, used for captured traffic and tests
pub struct VecSource {
    items: VecDeque<Envelope>,
}

impl VecSource {
    pub fn new(items: impl IntoIterator<Item = Envelope>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.items.len()
    }
}

#[async_trait]
impl EnvelopeSource for VecSource {
    async fn next(&mut self) -> Option<Result<Envelope>> {
        self.items.pop_front().map(Ok)
    }
}
