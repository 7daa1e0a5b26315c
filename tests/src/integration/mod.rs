//! Cross-crate integration scenarios.

pub mod arbitration;
pub mod dashboard_flow;
pub mod reset;

use dash_core::{DashboardService, JsonFrameDecoder};
use serde_json::json;

/// Build a dashboard wired with the JSON decoder. Installs the tracing
/// subscriber first so a failing scenario can be replayed with
/// `RUST_LOG=debug cargo test -p dash-tests`.
pub fn fresh_service() -> DashboardService {
    crate::init_tracing();
    DashboardService::new(Box::new(JsonFrameDecoder::new()))
}

/// The worked sensor payload used across scenarios: an accelerometer
/// group, a map group, and an environment group with plotted datasets.
pub fn sensor_document() -> serde_json::Value {
    json!({
        "t": "CanSat",
        "g": [
            {
                "t": "Motion", "w": "accelerometer",
                "d": [
                    { "t": "ax", "w": "" },
                    { "t": "ay", "w": "" },
                    { "t": "az", "w": "" }
                ]
            },
            {
                "t": "Position", "w": "map",
                "d": [
                    { "t": "lat", "w": "" },
                    { "t": "lon", "w": "" }
                ]
            },
            {
                "t": "Environment", "w": "",
                "d": [
                    { "t": "Temperature", "w": "thermometer", "g": true },
                    { "t": "Battery", "w": "bar" }
                ]
            }
        ]
    })
}
