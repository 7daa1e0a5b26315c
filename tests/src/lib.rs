//! # Telemetry-Dash Test Suite
//!
//! Unified test crate for cross-crate scenarios.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # Producer -> arbitration -> tick -> renderer flows
//!     ├── dashboard_flow.rs
//!     ├── arbitration.rs
//!     └── reset.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p dash-tests
//! cargo test -p dash-tests integration::
//! ```

#![allow(dead_code)]

pub mod integration;

/// Install a compact subscriber so scenarios can be debugged with
/// `RUST_LOG=debug cargo test -p dash-tests`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
