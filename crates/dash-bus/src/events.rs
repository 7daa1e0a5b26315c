//! # Dashboard Events
//!
//! Defines all event types that flow through the bus: producer triggers
//! going into the dashboard and notifications coming back out to the
//! rendering layer.

use serde::{Deserialize, Serialize};

/// All events that can be published to the bus.
///
/// Producer and scheduler events drive the dashboard's recomputation state
/// machine; dashboard events tell the rendering layer what changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DashboardEvent {
    // =========================================================================
    // PRODUCER TRIGGERS (transport / replay engine)
    // =========================================================================
    /// A telemetry candidate was submitted for arbitration.
    ///
    /// Decoding is deferred to the next scheduler tick; this event only
    /// announces the arrival.
    FrameReceived {
        /// Producer-assigned sequence number of the candidate.
        sequence_number: u64,
    },

    /// The transport connection opened or closed. Resets the dashboard.
    ConnectionChanged {
        /// Whether the transport is now connected.
        connected: bool,
    },

    /// The replay source changed (log opened or closed). Resets the
    /// dashboard.
    SourceChanged,

    /// The frame-source map definition changed. Resets the dashboard.
    FrameMapChanged,

    // =========================================================================
    // SCHEDULER
    // =========================================================================
    /// High-frequency recomputation tick.
    Tick,

    // =========================================================================
    // DASHBOARD NOTIFICATIONS (consumed by the rendering layer)
    // =========================================================================
    /// A recomputation pass completed; widget values may have changed.
    DataUpdated,

    /// The dashboard returned to its empty state.
    DataReset,

    /// The decoded frame's title differs from the previous tick's.
    TitleChanged {
        /// The new title ("" after a reset).
        title: String,
    },

    /// At least one category's cardinality changed; the renderer must
    /// regenerate its widget set.
    WidgetCountChanged {
        /// New total across all nine categories.
        total: usize,
    },

    /// The visibility matrix was rebuilt or a visibility flag was written.
    WidgetVisibilityChanged,
}

impl DashboardEvent {
    /// Get the topic for this event (for filtering).
    #[must_use]
    pub fn topic(&self) -> EventTopic {
        match self {
            Self::FrameReceived { .. }
            | Self::ConnectionChanged { .. }
            | Self::SourceChanged
            | Self::FrameMapChanged => EventTopic::Producer,
            Self::Tick => EventTopic::Scheduler,
            Self::DataUpdated
            | Self::DataReset
            | Self::TitleChanged { .. }
            | Self::WidgetCountChanged { .. }
            | Self::WidgetVisibilityChanged => EventTopic::Dashboard,
        }
    }

    /// Whether this event is a reset trigger for the dashboard.
    #[must_use]
    pub fn is_reset_trigger(&self) -> bool {
        matches!(
            self,
            Self::ConnectionChanged { .. } | Self::SourceChanged | Self::FrameMapChanged
        )
    }
}

/// Event topics for subscription filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventTopic {
    /// Telemetry producer events (transport, replay engine).
    Producer,
    /// Scheduler ticks.
    Scheduler,
    /// Dashboard notifications for the rendering layer.
    Dashboard,
    /// All events (no filtering).
    All,
}

/// Filter for subscribing to specific events.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Topics to include. Empty means all topics.
    pub topics: Vec<EventTopic>,
}

impl EventFilter {
    /// Create a filter that accepts all events.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Create a filter for specific topics.
    #[must_use]
    pub fn topics(topics: Vec<EventTopic>) -> Self {
        Self { topics }
    }

    /// Check if an event matches this filter.
    #[must_use]
    pub fn matches(&self, event: &DashboardEvent) -> bool {
        self.topics.is_empty()
            || self.topics.contains(&EventTopic::All)
            || self.topics.contains(&event.topic())
    }
}
