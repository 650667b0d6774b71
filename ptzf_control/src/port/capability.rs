//! Capability query port: static facts about the installed hardware
//! variant.

use ptzf_common::state::CoordinateType;

/// Read-only capability surface of the installed camera head.
pub trait CapabilityQuery {
    /// Coordinate-type variant of the pan/tilt hardware.
    fn coordinate_type(&self) -> CoordinateType;

    /// Fastest commandable pan speed step (normal table).
    fn max_pan_speed(&self) -> u8;

    /// Fastest commandable tilt speed step (normal table).
    fn max_tilt_speed(&self) -> u8;

    /// Fastest pan speed step when the extended table is enabled.
    fn max_extended_pan_speed(&self) -> u8;

    /// Fastest tilt speed step when the extended table is enabled.
    fn max_extended_tilt_speed(&self) -> u8;

    /// Whether the extended speed table is active.
    fn extended_speed_enabled(&self) -> bool;

    /// Whether half-resolution speed stepping (slow mode) is supported.
    fn speed_step_enabled(&self) -> bool;
}
