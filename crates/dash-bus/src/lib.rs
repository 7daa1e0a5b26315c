//! # Dash Bus - Event Bus for the Telemetry Dashboard
//!
//! Replaces implicit signal/slot wiring with explicit typed event
//! subscriptions: every producer trigger and every dashboard notification
//! is a declared `DashboardEvent` variant with a documented payload.
//!
//! ```text
//! ┌──────────────┐                    ┌──────────────┐
//! │  Producers/  │                    │  Dashboard / │
//! │  Scheduler   │    publish()       │  Renderer    │
//! │              │ ──────┐            │              │
//! └──────────────┘       │            └──────────────┘
//!                        ▼                    ↑
//!                  ┌──────────────┐          │
//!                  │  Event Bus   │          │
//!                  │              │ ─────────┘
//!                  └──────────────┘  subscribe()
//! ```

// Nursery lints that are too strict
#![allow(clippy::missing_const_for_fn)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]

pub mod events;
pub mod publisher;
pub mod subscriber;

// Re-export main types
pub use events::{DashboardEvent, EventFilter, EventTopic};
pub use publisher::{EventPublisher, InMemoryEventBus};
pub use subscriber::{Subscription, SubscriptionError};

/// Maximum events to buffer per subscriber before backpressure.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1000;
