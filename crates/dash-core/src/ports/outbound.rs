//! Outbound Ports (Driven Ports / SPI)

use crate::domain::errors::DecodeError;
use dash_types::Frame;
use serde_json::Value;

/// Frame decoder collaborator.
///
/// Turns the raw telemetry document into the structured frame model.
/// Decoding runs synchronously inside a tick: it is bounded by the number
/// of groups and datasets in the document and never blocks or suspends.
pub trait FrameDecoder: Send + Sync {
    /// Decode a raw document into a frame.
    ///
    /// On failure the caller keeps its previously decoded frame; failure
    /// is a degraded tick, not a fatal condition.
    fn decode(&self, document: &Value) -> Result<Frame, DecodeError>;
}
