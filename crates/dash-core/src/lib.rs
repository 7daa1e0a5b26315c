//! # Dash Core: Telemetry Dashboard Subsystem
//!
//! Ingests periodically-arriving telemetry frames, resolves races between
//! competing producers, classifies frame contents into nine fixed
//! visualization categories, and exposes one flat, addressable global
//! index space over all resulting widgets so a generic renderer can
//! enumerate and toggle them without per-type code.
//!
//! ## Architecture
//!
//! - **Domain**: `FrameArbiter`/`FrameSlot` (race resolution),
//!   `classify`/`CategorizedWidgets` (the nine collections),
//!   `GlobalIndexSpace` (index arithmetic), `VisibilityMatrix`
//! - **Ports**: Inbound (`DashboardApi`) and Outbound (`FrameDecoder`)
//! - **Adapters**: `JsonFrameDecoder`
//! - **Application**: `DashboardService` orchestration and event wiring

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use adapters::JsonFrameDecoder;
pub use application::runtime::{handle_event, run};
pub use application::service::DashboardService;
pub use config::DashboardConfig;
pub use domain::arbiter::{FrameArbiter, FrameSlot};
pub use domain::classifier::{classify, CategorizedWidgets, WidgetRef, WidgetSource};
pub use domain::errors::DecodeError;
pub use domain::index_space::GlobalIndexSpace;
pub use domain::visibility::VisibilityMatrix;
pub use ports::inbound::DashboardApi;
pub use ports::outbound::FrameDecoder;
