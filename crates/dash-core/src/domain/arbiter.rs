//! # Frame Arbitration
//!
//! Multiple asynchronous producers (the live transport and the replay
//! engine) can each emit a telemetry candidate around the same scheduler
//! tick. Arbitration keeps only the candidate with the highest
//! producer-assigned sequence number so reordered or replayed arrivals
//! never regress the dashboard.

use dash_types::TelemetryFrame;
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Pure sequence-number arbitration between the current frame and an
/// incoming candidate.
pub struct FrameArbiter;

impl FrameArbiter {
    /// Pick the winner between `current` and `incoming`.
    ///
    /// Incoming wins iff its sequence number is strictly greater; ties
    /// and lower sequence numbers keep `current` unchanged. Rejection is
    /// silent and expected.
    #[must_use]
    pub fn select(current: TelemetryFrame, incoming: TelemetryFrame) -> TelemetryFrame {
        if incoming.sequence_number > current.sequence_number {
            incoming
        } else {
            current
        }
    }
}

/// The shared hand-off point between producers and the owner thread.
///
/// Producers clone the slot and `submit` candidates from any thread; the
/// tick takes a `snapshot` of whatever won most recently. The
/// compare-and-swap inside `submit` is the only cross-thread
/// synchronization in the subsystem, so a tick never observes a
/// half-updated candidate.
#[derive(Clone)]
pub struct FrameSlot {
    current: Arc<Mutex<TelemetryFrame>>,
}

impl FrameSlot {
    /// Create a slot holding the empty sentinel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: Arc::new(Mutex::new(TelemetryFrame::empty())),
        }
    }

    /// Submit a candidate for arbitration.
    ///
    /// Returns `true` if the candidate became current. The sequence
    /// comparison and the swap happen as one indivisible step.
    pub fn submit(&self, candidate: TelemetryFrame) -> bool {
        let Ok(mut current) = self.current.lock() else {
            return false;
        };

        let previous = current.sequence_number;
        let sequence = candidate.sequence_number;
        let accepted = sequence > previous;

        *current = FrameArbiter::select(std::mem::take(&mut *current), candidate);

        if accepted {
            debug!(sequence, previous, "Telemetry candidate accepted");
        } else {
            debug!(
                sequence,
                current = previous,
                "Telemetry candidate rejected (out of order)"
            );
        }
        accepted
    }

    /// Copy of the current winning frame for this tick.
    #[must_use]
    pub fn snapshot(&self) -> TelemetryFrame {
        self.current
            .lock()
            .map(|current| current.clone())
            .unwrap_or_else(|_| TelemetryFrame::empty())
    }

    /// Store the empty sentinel, restarting the sequence space.
    pub fn reset(&self) {
        if let Ok(mut current) = self.current.lock() {
            *current = TelemetryFrame::empty();
        }
    }
}

impl Default for FrameSlot {
    fn default() -> Self {
        Self::new()
    }
}
