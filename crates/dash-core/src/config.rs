//! Configuration for the Dashboard Subsystem

use serde::{Deserialize, Serialize};

/// Dashboard configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Capacity of the event bus created by `DashboardService::new`.
    pub bus_capacity: usize,
    /// When a tick fails to decode, also drop the previously decoded
    /// frame and the visibility matrix instead of only the widget lists.
    ///
    /// Off by default: the degraded state keeps the stale title on screen
    /// until the next valid tick, which matches the long-standing
    /// dashboard behavior.
    pub clear_frame_on_decode_failure: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            bus_capacity: 1000,
            clear_frame_on_decode_failure: false,
        }
    }
}
