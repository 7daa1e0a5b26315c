//! Error types for the Dashboard Subsystem

use thiserror::Error;

/// All errors that can occur while decoding a telemetry document.
///
/// Decode failure is recoverable: a failed tick degrades the dashboard
/// (widget lists cleared) and the next valid tick heals it. Nothing here
/// is fatal.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// No telemetry frame has arrived since the last reset.
    #[error("No telemetry document available")]
    EmptyDocument,

    /// The document is not a JSON object.
    #[error("Telemetry document is not an object")]
    NotAnObject,

    /// The document parsed but violates the frame model.
    #[error("Malformed telemetry document: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The frame parsed but is unusable (empty title or no groups).
    #[error("Frame rejected: {0}")]
    InvalidFrame(&'static str),
}
