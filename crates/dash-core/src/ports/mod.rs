//! Ports layer: the inbound renderer surface and the outbound decode
//! collaborator.

pub mod inbound;
pub mod outbound;
