//! Adapters layer: concrete implementations of the outbound ports.

pub mod json_decoder;

pub use json_decoder::JsonFrameDecoder;
