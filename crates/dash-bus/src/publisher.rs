//! # Event Publisher
//!
//! Publishing side of the event bus.

use crate::events::{DashboardEvent, EventFilter};
use crate::subscriber::Subscription;
use crate::DEFAULT_CHANNEL_CAPACITY;
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::broadcast;
use tracing::{debug, warn};

/// Trait for publishing events to the bus.
///
/// This is the interface the dashboard core and the producer adapters use
/// to emit events for consumption by the other side.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish an event to the bus.
    ///
    /// # Returns
    ///
    /// The number of active subscribers that received the event.
    async fn publish(&self, event: DashboardEvent) -> usize;

    /// Get the total number of events published.
    fn events_published(&self) -> u64;
}

/// In-memory implementation of the event bus.
///
/// Backed by `tokio::sync::broadcast` so the live transport, the replay
/// engine, and the scheduler can publish concurrently while the dashboard
/// and renderer each hold their own [`Subscription`]. The channel itself
/// tracks subscriber liveness; the bus only adds the publish counter on
/// top of it.
pub struct InMemoryEventBus {
    sender: broadcast::Sender<DashboardEvent>,
    events_published: AtomicU64,
    capacity: usize,
}

impl InMemoryEventBus {
    /// Create a new in-memory event bus with default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Create a new in-memory event bus with specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender,
            events_published: AtomicU64::new(0),
            capacity,
        }
    }

    /// Subscribe to events matching a filter.
    ///
    /// Returns a [`Subscription`] handle that receives every event
    /// published after this call and matching the filter.
    #[must_use]
    pub fn subscribe(&self, filter: EventFilter) -> Subscription {
        debug!(topics = ?filter.topics, "New subscription created");
        Subscription::new(self.sender.subscribe(), filter)
    }

    /// Get the number of active subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Get the channel capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for InMemoryEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus {
    async fn publish(&self, event: DashboardEvent) -> usize {
        let topic = event.topic();

        // Count the attempt even when nobody is listening
        self.events_published.fetch_add(1, Ordering::Relaxed);

        match self.sender.send(event) {
            Ok(receiver_count) => {
                debug!(
                    topic = ?topic,
                    receivers = receiver_count,
                    "Event published"
                );
                receiver_count
            }
            Err(e) => {
                warn!(
                    topic = ?topic,
                    error = %e,
                    "Event dropped (no receivers)"
                );
                0
            }
        }
    }

    fn events_published(&self) -> u64 {
        self.events_published.load(Ordering::Relaxed)
    }
}
