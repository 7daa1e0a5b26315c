//! Domain layer: arbitration, classification, index arithmetic, and
//! visibility state.

pub mod arbiter;
pub mod classifier;
pub mod errors;
pub mod index_space;
pub mod visibility;
