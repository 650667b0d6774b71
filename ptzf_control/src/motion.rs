//! Motion request validation helpers: absolute/relative range checks
//! and speed-step validation.

pub mod range;
pub mod speed;
