//! Error types returned by the public validation surface.
//!
//! Validation failures are synchronous and local: they are reported to
//! the caller before anything is dispatched to hardware, and no state
//! is mutated. Sequencing failures inside the transition machine are
//! logged and absorbed there instead of crossing this boundary.

use thiserror::Error;

/// Failure of a validated motion/configuration request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// A degree value lies outside the axis's degree domain.
    #[error("degree value {value} out of range [{min}, {max}]")]
    DegreeOutOfRange { value: i32, min: i32, max: i32 },

    /// A sin value lies outside the axis's operating domain.
    #[error("position {value} out of range [{min}, {max}]")]
    PositionOutOfRange { value: i32, min: i32, max: i32 },

    /// The left/right pair violates the coordinate-type ordering.
    #[error("pan limit ordering violated: left={left}, right={right}")]
    PanOrderingViolation { left: i32, right: i32 },

    /// The up/down pair violates up > down.
    #[error("tilt limit ordering violated: up={up}, down={down}")]
    TiltOrderingViolation { up: i32, down: i32 },

    /// A speed step lies outside the supported table.
    #[error("speed step {value} out of range [{min}, {max}]")]
    SpeedOutOfRange { value: u8, min: u8, max: u8 },

    /// A conflicting configuration change is still in flight.
    #[error("configuration busy: {0}")]
    Busy(&'static str),
}
