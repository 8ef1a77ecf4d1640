use crate::config::StreamConfig;
use crate::shutdown::Shutdown;
use crate::state::{AtomicMetrics, AtomicStreamState, StreamMetrics, StreamState};
use crate::traits::*;
use futures::stream::{FuturesOrdered, StreamExt};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

/// Receiving half of a stream's delivery channel
pub type DeliveryReceiver<D> = mpsc::Receiver<
    Delivery<<D as EnvelopeDecoder>::Message, <D as EnvelopeDecoder>::Error>,
>;

/// Ordered, backpressured stream of decoded envelopes
///
/// One tokio task owns the source. Each envelope is decoded on a blocking
/// worker (up to `decode_workers` at once) and results are re-sequenced
/// into arrival order before being sent on the bounded delivery channel.
///
/// Consumers drain the delivery channel until it closes, then call
/// [`FeedStream::finish`] to learn whether the stream ended cleanly. At
/// most one terminal error is reported, and only after the channel has
/// closed.
pub struct FeedStream {
    state: Arc<AtomicStreamState>,
    metrics: Arc<AtomicMetrics>,
    shutdown: Shutdown,
    error_rx: Option<oneshot::Receiver<StreamError>>,
    task_handle: Option<JoinHandle<()>>,
}

impl FeedStream {
    /// Start streaming `source` through `decoder`
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<S, D>(
        source: S,
        decoder: D,
        config: StreamConfig,
        shutdown: Shutdown,
    ) -> Result<(Self, DeliveryReceiver<D>)>
    where
        S: EnvelopeSource,
        D: EnvelopeDecoder,
    {
        config.validate()?;

        let state = Arc::new(AtomicStreamState::new(StreamState::Running));
        let metrics = Arc::new(AtomicMetrics::new());
        let (delivery_tx, delivery_rx) = mpsc::channel(config.channel_capacity);
        let (error_tx, error_rx) = oneshot::channel();

        info!(
            channel_capacity = config.channel_capacity,
            decode_workers = config.decode_workers,
            "FeedStream starting"
        );

        let task_handle = {
            let worker = StreamWorker {
                decoder: Arc::new(decoder),
                config,
                shutdown: shutdown.clone(),
                state: Arc::clone(&state),
                metrics: Arc::clone(&metrics),
            };
            tokio::spawn(async move {
                worker.run(source, delivery_tx, error_tx).await;
            })
        };

        Ok((
            Self {
                state,
                metrics,
                shutdown,
                error_rx: Some(error_rx),
                task_handle: Some(task_handle),
            },
            delivery_rx,
        ))
    }

    /// Get current stream state
    #[inline]
    pub fn state(&self) -> StreamState {
        self.state.get()
    }

    /// Get current metrics
    pub fn metrics(&self) -> StreamMetrics {
        self.metrics.snapshot(self.state.get())
    }

    /// The cancellation signal driving this stream
    pub fn shutdown_signal(&self) -> &Shutdown {
        &self.shutdown
    }

    /// Stop reading from the source; in-flight decodes still get delivered.
    /// Safe to call any number of times.
    pub fn close(&self) {
        self.shutdown.trigger();
    }

    /// Wait for the stream task to end and return its terminal status
    ///
    /// Call this after the delivery channel has been drained; while the
    /// channel is full the stream task cannot finish.
    pub async fn finish(mut self) -> Result<()> {
        if let Some(handle) = self.task_handle.take() {
            handle
                .await
                .map_err(|e| StreamError::Worker(e.to_string()))?;
        }

        match self.error_rx.take() {
            Some(rx) => match rx.await {
                Ok(err) => Err(err),
                // Sender dropped without an error: clean end
                Err(_) => Ok(()),
            },
            None => Ok(()),
        }
    }
}

struct StreamWorker<D: EnvelopeDecoder> {
    decoder: Arc<D>,
    config: StreamConfig,
    shutdown: Shutdown,
    state: Arc<AtomicStreamState>,
    metrics: Arc<AtomicMetrics>,
}

impl<D: EnvelopeDecoder> StreamWorker<D> {
    /// Main stream loop
    async fn run<S: EnvelopeSource>(
        self,
        mut source: S,
        delivery_tx: mpsc::Sender<Delivery<D::Message, D::Error>>,
        error_tx: oneshot::Sender<StreamError>,
    ) {
        let mut in_flight: FuturesOrdered<JoinHandle<Delivery<D::Message, D::Error>>> =
            FuturesOrdered::new();
        let mut reading = true;
        let mut terminal: Option<StreamError> = None;

        loop {
            tokio::select! {
                biased;

                // Oldest in-flight decode first: FuturesOrdered yields in push order
                Some(joined) = in_flight.next(), if !in_flight.is_empty() => {
                    match joined {
                        Ok(delivery) => {
                            if let Err(ref failure) = delivery {
                                warn!(
                                    routing_key = %failure.envelope.routing_key,
                                    timestamp = failure.envelope.timestamp,
                                    error = %failure.error,
                                    "Decode failed"
                                );
                                self.metrics.increment_failures();
                            }
                            // Blocks while the channel is full
                            if delivery_tx.send(delivery).await.is_err() {
                                warn!("Delivery channel dropped by consumer, stopping stream");
                                break;
                            }
                            self.metrics.increment_delivered();
                        }
                        Err(e) => {
                            error!(error = %e, "Decode worker failed");
                            terminal.get_or_insert(StreamError::Worker(e.to_string()));
                            if reading {
                                reading = false;
                                self.state.set(StreamState::Draining);
                            }
                        }
                    }
                }

                _ = self.shutdown.wait(), if reading => {
                    info!(in_flight = in_flight.len(), "Shutdown requested, draining in-flight decodes");
                    reading = false;
                    self.state.set(StreamState::Draining);
                }

                next = source.next(), if reading && in_flight.len() < self.config.decode_workers => {
                    match next {
                        Some(Ok(envelope)) => {
                            self.metrics.increment_received();
                            debug!(
                                routing_key = %envelope.routing_key,
                                timestamp = envelope.timestamp,
                                "Envelope received"
                            );
                            let decoder = Arc::clone(&self.decoder);
                            in_flight.push_back(tokio::task::spawn_blocking(move || {
                                decode_envelope(decoder.as_ref(), envelope)
                            }));
                        }
                        Some(Err(e)) => {
                            error!(error = %e, "Envelope source failed");
                            terminal = Some(e);
                            reading = false;
                            self.state.set(StreamState::Draining);
                        }
                        None => {
                            info!("Envelope source exhausted");
                            reading = false;
                            self.state.set(StreamState::Draining);
                        }
                    }
                }

                else => break,
            }
        }

        // Close the data channel before reporting the terminal status
        drop(delivery_tx);
        self.state.set(StreamState::Closed);

        info!(
            received = self.metrics.envelopes_received(),
            delivered = self.metrics.messages_delivered(),
            failures = self.metrics.decode_failures(),
            "FeedStream closed"
        );

        if let Some(err) = terminal {
            let _ = error_tx.send(err);
        }
    }
}
