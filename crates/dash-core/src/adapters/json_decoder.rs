//! # JSON Frame Decoder
//!
//! The default `FrameDecoder` implementation: deserializes the raw
//! telemetry document with serde, accepting both the short single-letter
//! key spelling and the long-form names, and rejects frames that would be
//! unusable downstream (no title, or no groups at all).

use crate::domain::errors::DecodeError;
use crate::ports::outbound::FrameDecoder;
use dash_types::Frame;
use serde_json::Value;

/// serde_json-backed frame decoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFrameDecoder;

impl JsonFrameDecoder {
    /// Create the decoder.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FrameDecoder for JsonFrameDecoder {
    fn decode(&self, document: &Value) -> Result<Frame, DecodeError> {
        if !document.is_object() {
            return Err(DecodeError::NotAnObject);
        }

        let frame: Frame = serde_json::from_value(document.clone())?;

        if frame.title().is_empty() {
            return Err(DecodeError::InvalidFrame("missing title"));
        }
        if frame.groups().is_empty() {
            return Err(DecodeError::InvalidFrame("no groups"));
        }

        Ok(frame)
    }
}
