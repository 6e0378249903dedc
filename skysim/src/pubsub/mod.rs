//! State fan-out to stream subscribers.
//!
//! [`StatePublisher`] routes every published snapshot to each registered
//! subscriber over its own bounded queue. Publishing never waits: when a
//! subscriber's queue is full, that snapshot is dropped for that subscriber
//! and delivery continues with the next one, so a stalled consumer can
//! never block the simulation loop or its peers.
//!
//! Subscribers registered before a publish receive that publish (unless
//! their queue is full); unsubscribed ids receive nothing further and
//! observe their queue closing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tracing::{debug, trace};

use crate::model::AircraftState;

/// Default per-subscriber queue capacity.
pub const DEFAULT_SUBSCRIBER_BUFFER: usize = 10;

/// Fan-out registry for aircraft state snapshots.
///
/// `publish` is called from the simulation loop; `subscribe`, `unsubscribe`
/// and `subscriber_count` may be called concurrently from any task. The
/// subscriber table sits behind a read/write lock with `publish` taking the
/// read side, keeping the hot path contention-free against other readers.
pub struct StatePublisher {
    subscribers: RwLock<HashMap<String, mpsc::Sender<AircraftState>>>,
    buffer_size: usize,
    dropped: AtomicU64,
}

impl StatePublisher {
    /// Create a publisher with the given per-subscriber queue capacity.
    pub fn new(buffer_size: usize) -> Self {
        Self {
            subscribers: RwLock::new(HashMap::new()),
            buffer_size,
            dropped: AtomicU64::new(0),
        }
    }

    /// Register a subscriber and return its snapshot queue.
    ///
    /// The id must be unique; re-subscribing an existing id replaces the
    /// prior queue, which the old receiver observes as a close.
    pub fn subscribe(&self, id: impl Into<String>) -> mpsc::Receiver<AircraftState> {
        let id = id.into();
        let (tx, rx) = mpsc::channel(self.buffer_size);

        let mut subscribers = self.subscribers.write().unwrap();
        if subscribers.insert(id.clone(), tx).is_some() {
            debug!(subscriber = %id, "Subscription replaced");
        } else {
            debug!(subscriber = %id, "Subscriber registered");
        }

        rx
    }

    /// Remove a subscriber and close its queue.
    ///
    /// Unknown ids are ignored.
    pub fn unsubscribe(&self, id: &str) {
        let mut subscribers = self.subscribers.write().unwrap();
        if subscribers.remove(id).is_some() {
            debug!(subscriber = %id, "Subscriber removed");
        }
    }

    /// Deliver a snapshot to every subscriber without waiting.
    ///
    /// Queues that are full drop this snapshot; queues whose receiver is
    /// gone are left for `unsubscribe` to clean up.
    pub fn publish(&self, state: &AircraftState) {
        let subscribers = self.subscribers.read().unwrap();
        for (id, tx) in subscribers.iter() {
            match tx.try_send(state.clone()) {
                Ok(()) => {}
                Err(TrySendError::Full(_)) => {
                    self.dropped.fetch_add(1, Ordering::Relaxed);
                    trace!(subscriber = %id, "Snapshot dropped (subscriber lagging)");
                }
                Err(TrySendError::Closed(_)) => {}
            }
        }
    }

    /// Current number of registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().unwrap().len()
    }

    /// Total snapshots dropped across all subscribers since creation.
    pub fn dropped_count(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }
}

impl Default for StatePublisher {
    fn default() -> Self {
        Self::new(DEFAULT_SUBSCRIBER_BUFFER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Position, Velocity};
    use chrono::Utc;

    fn snapshot(altitude: f64) -> AircraftState {
        AircraftState {
            position: Position::new(32.0, 34.0, altitude),
            velocity: Velocity::default(),
            heading: 0.0,
            timestamp: Utc::now(),
            active_command: None,
            environment: None,
        }
    }

    #[tokio::test]
    async fn test_subscriber_receives_published_snapshot() {
        let publisher = StatePublisher::default();
        let mut rx = publisher.subscribe("sse-1");

        publisher.publish(&snapshot(1000.0));

        let received = rx.recv().await.expect("Should receive snapshot");
        assert_eq!(received.position.altitude, 1000.0);
    }

    #[tokio::test]
    async fn test_publish_with_no_subscribers_is_noop() {
        let publisher = StatePublisher::default();
        publisher.publish(&snapshot(1000.0));
        assert_eq!(publisher.subscriber_count(), 0);
        assert_eq!(publisher.dropped_count(), 0);
    }

    #[tokio::test]
    async fn test_full_queue_drops_without_blocking() {
        let publisher = StatePublisher::new(2);
        let mut rx = publisher.subscribe("slow");

        // Fill the queue, then overflow it
        publisher.publish(&snapshot(1.0));
        publisher.publish(&snapshot(2.0));
        publisher.publish(&snapshot(3.0));
        publisher.publish(&snapshot(4.0));

        assert_eq!(publisher.dropped_count(), 2);

        // The two enqueued snapshots arrive in publish order
        assert_eq!(rx.recv().await.unwrap().position.altitude, 1.0);
        assert_eq!(rx.recv().await.unwrap().position.altitude, 2.0);
    }

    #[tokio::test]
    async fn test_slow_subscriber_does_not_affect_others() {
        let publisher = StatePublisher::new(2);
        let _stalled = publisher.subscribe("stalled");
        let mut draining = publisher.subscribe("draining");

        for i in 0..5 {
            publisher.publish(&snapshot(i as f64));
            // Drain one queue, never the other
            let received = draining.recv().await.unwrap();
            assert_eq!(received.position.altitude, i as f64);
        }

        // Only the stalled subscriber dropped anything
        assert_eq!(publisher.dropped_count(), 3);
    }

    #[tokio::test]
    async fn test_unsubscribe_closes_queue() {
        let publisher = StatePublisher::default();
        let mut rx = publisher.subscribe("sse-1");

        publisher.unsubscribe("sse-1");
        assert_eq!(publisher.subscriber_count(), 0);

        // Closed channel yields None once drained
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_unsubscribed_receives_no_further_publishes() {
        let publisher = StatePublisher::default();
        let mut rx = publisher.subscribe("sse-1");

        publisher.publish(&snapshot(1.0));
        publisher.unsubscribe("sse-1");
        publisher.publish(&snapshot(2.0));

        assert_eq!(rx.recv().await.unwrap().position.altitude, 1.0);
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_resubscribe_replaces_prior_queue() {
        let publisher = StatePublisher::default();
        let mut first = publisher.subscribe("sse-1");
        let mut second = publisher.subscribe("sse-1");

        assert_eq!(publisher.subscriber_count(), 1);

        publisher.publish(&snapshot(1.0));
        assert_eq!(second.recv().await.unwrap().position.altitude, 1.0);

        // The replaced queue is closed and received nothing
        assert!(first.recv().await.is_none());
    }
}
