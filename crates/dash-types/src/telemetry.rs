//! # Raw Telemetry Frames
//!
//! One `TelemetryFrame` is created per producer arrival. At most one frame
//! is current at any instant; arbitration between competing producers is
//! decided purely on the sequence number.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A raw telemetry arrival: an opaque structured document tagged with a
/// monotonically increasing, producer-assigned sequence number.
///
/// The document stays opaque until a scheduler tick hands it to the frame
/// decoder; arrival never triggers decoding inline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryFrame {
    /// Producer-assigned sequence number, increases with every emission.
    pub sequence_number: u64,
    /// Opaque structured payload, decoded lazily on the next tick.
    pub document: Value,
    /// Whether this frame carries a payload at all. The reset sentinel
    /// is the only invalid frame in circulation.
    pub valid: bool,
}

impl TelemetryFrame {
    /// Create a frame carrying a payload.
    #[must_use]
    pub fn new(sequence_number: u64, document: Value) -> Self {
        Self {
            sequence_number,
            document,
            valid: true,
        }
    }

    /// The reset sentinel: sequence number zero, no document.
    ///
    /// Stored on reset so the next real arrival (sequence >= 1) always
    /// wins arbitration.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            sequence_number: 0,
            document: Value::Null,
            valid: false,
        }
    }

    /// Borrow the raw document.
    #[must_use]
    pub fn document(&self) -> &Value {
        &self.document
    }
}

impl Default for TelemetryFrame {
    fn default() -> Self {
        Self::empty()
    }
}
