//! # Event Subscriber
//!
//! Receiving side of the event bus. A [`Subscription`] is a filtered view
//! over one broadcast receiver: events that do not match the filter are
//! consumed and discarded so the caller only ever sees its own topics.

use crate::events::{DashboardEvent, EventFilter};
use thiserror::Error;
use tokio::sync::broadcast;
use tracing::debug;

/// Errors from subscription operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubscriptionError {
    /// The event bus was closed.
    #[error("Event bus closed")]
    Closed,
}

/// A subscription handle for receiving events.
///
/// Dropping the handle releases the underlying broadcast receiver, which
/// removes it from the bus subscriber count.
pub struct Subscription {
    receiver: broadcast::Receiver<DashboardEvent>,
    filter: EventFilter,
}

impl Subscription {
    pub(crate) fn new(receiver: broadcast::Receiver<DashboardEvent>, filter: EventFilter) -> Self {
        Self { receiver, filter }
    }

    /// Receive the next event that matches the filter.
    ///
    /// Returns `None` once the bus is dropped and the backlog is drained.
    /// A lagged receiver skips the overwritten events and keeps going.
    pub async fn recv(&mut self) -> Option<DashboardEvent> {
        loop {
            match self.receiver.recv().await {
                Ok(event) if self.filter.matches(&event) => return Some(event),
                Ok(_) => {}
                Err(broadcast::error::RecvError::Closed) => return None,
                Err(broadcast::error::RecvError::Lagged(count)) => {
                    debug!(lagged = count, "Subscriber lagged, some events dropped");
                }
            }
        }
    }

    /// Try to receive the next matching event without blocking.
    ///
    /// `Ok(None)` means no matching event is buffered right now;
    /// `Err(Closed)` means the bus is gone and nothing more will arrive.
    pub fn try_recv(&mut self) -> Result<Option<DashboardEvent>, SubscriptionError> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) if self.filter.matches(&event) => return Ok(Some(event)),
                Ok(_) => {}
                Err(broadcast::error::TryRecvError::Empty) => return Ok(None),
                Err(broadcast::error::TryRecvError::Closed) => {
                    return Err(SubscriptionError::Closed)
                }
                Err(broadcast::error::TryRecvError::Lagged(_)) => {}
            }
        }
    }

    /// Get the filter for this subscription.
    #[must_use]
    pub fn filter(&self) -> &EventFilter {
        &self.filter
    }
}
