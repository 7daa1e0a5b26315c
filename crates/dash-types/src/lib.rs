//! # Dash Types Crate
//!
//! Domain entities shared across the dashboard crates.
//!
//! ## Clusters
//!
//! - **Raw telemetry**: `TelemetryFrame`, one arrival tagged with its
//!   producer-assigned sequence number.
//! - **Decoded model**: `Frame`, `Group`, `Dataset` — the structured view
//!   the classifier and index space operate on.
//! - **Categories**: `WidgetCategory`, the closed enumeration behind the
//!   global-index system, with its canonical ordering and icon mapping.

pub mod category;
pub mod entities;
pub mod telemetry;

pub use category::WidgetCategory;
pub use entities::{Dataset, Frame, Group};
pub use telemetry::TelemetryFrame;
