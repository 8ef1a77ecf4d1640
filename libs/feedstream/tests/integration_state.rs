//! Integration tests for stream state and metrics tracking

mod common;

use feedstream::{AtomicMetrics, AtomicStreamState, StreamState};
use std::sync::Arc;
use std::thread;

#[test]
fn test_stream_state_full_lifecycle() {
    verbose_println!("Testing full stream lifecycle...");

    let state = AtomicStreamState::new(StreamState::Running);
    assert!(state.is_running());

    state.set(StreamState::Draining);
    assert!(state.is_draining());
    verbose_println!("  State: Draining");

    state.set(StreamState::Closed);
    assert!(state.is_closed());
    verbose_println!("  State: Closed");
}

#[test]
fn test_concurrent_metrics_updates() {
    let metrics = Arc::new(AtomicMetrics::new());
    let mut handles = vec![];

    for _ in 0..4 {
        let metrics = Arc::clone(&metrics);
        handles.push(thread::spawn(move || {
            for i in 0..1000 {
                metrics.increment_received();
                metrics.increment_delivered();
                if i % 10 == 0 {
                    metrics.increment_failures();
                }
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    let snapshot = metrics.snapshot(StreamState::Closed);
    assert_eq!(snapshot.envelopes_received, 4000);
    assert_eq!(snapshot.messages_delivered, 4000);
    assert_eq!(snapshot.decode_failures, 400);
    assert_eq!(snapshot.state, StreamState::Closed);
}
