//! Application layer: service orchestration and event wiring.

pub mod runtime;
pub mod service;
