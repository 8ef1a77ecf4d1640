//! Lock-free stream state and counters

use std::sync::atomic::{AtomicU64, AtomicU8, Ordering};

/// Lifecycle of a feed stream
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StreamState {
    /// Reading from the source
    #[default]
    Running = 0,
    /// Source no longer polled, in-flight decodes completing
    Draining = 1,
    /// Delivery channel closed
    Closed = 2,
}

impl StreamState {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => StreamState::Running,
            1 => StreamState::Draining,
            _ => StreamState::Closed,
        }
    }
}

/// Atomic wrapper around [`StreamState`]
#[derive(Debug)]
pub struct AtomicStreamState(AtomicU8);

impl AtomicStreamState {
    pub fn new(state: StreamState) -> Self {
        Self(AtomicU8::new(state as u8))
    }

    #[inline]
    pub fn get(&self) -> StreamState {
        StreamState::from_u8(self.0.load(Ordering::Acquire))
    }

    #[inline]
    pub fn set(&self, state: StreamState) {
        self.0.store(state as u8, Ordering::Release);
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.get() == StreamState::Running
    }

    #[inline]
    pub fn is_draining(&self) -> bool {
        self.get() == StreamState::Draining
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.get() == StreamState::Closed
    }
}

/// Stream metrics snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreamMetrics {
    pub envelopes_received: u64,
    pub messages_delivered: u64,
    pub decode_failures: u64,
    pub state: StreamState,
}

/// Counters updated by the stream task
#[derive(Debug, Default)]
pub struct AtomicMetrics {
    envelopes_received: AtomicU64,
    messages_delivered: AtomicU64,
    decode_failures: AtomicU64,
}

impl AtomicMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn increment_received(&self) {
        self.envelopes_received.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn increment_delivered(&self) {
        self.messages_delivered.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn increment_failures(&self) {
        self.decode_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn envelopes_received(&self) -> u64 {
        self.envelopes_received.load(Ordering::Relaxed)
    }

    /// Deliveries of any kind, failures included
    pub fn messages_delivered(&self) -> u64 {
        self.messages_delivered.load(Ordering::Relaxed)
    }

    pub fn decode_failures(&self) -> u64 {
        self.decode_failures.load(Ordering::Relaxed)
    }

    pub fn snapshot(&self, state: StreamState) -> StreamMetrics {
        StreamMetrics {
            envelopes_received: self.envelopes_received(),
            messages_delivered: self.messages_delivered(),
            decode_failures: self.decode_failures(),
            state,
        }
    }
}
