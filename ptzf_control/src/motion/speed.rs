//! Speed-step validation and rounding against the capability tables.
//!
//! The commandable ceiling comes from the capability port: the normal
//! table, or the extended table when enabled. Slow mode (when the model
//! supports speed stepping) halves the ceiling, floor at the slowest
//! step.

use ptzf_common::consts::SPEED_MIN;
use ptzf_common::error::RequestError;

use crate::port::capability::CapabilityQuery;

/// Effective fastest pan speed step for the current mode.
pub fn effective_pan_speed_max(caps: &dyn CapabilityQuery, slow_mode: bool) -> u8 {
    let max = if caps.extended_speed_enabled() {
        caps.max_extended_pan_speed()
    } else {
        caps.max_pan_speed()
    };
    apply_slow_mode(max, slow_mode && caps.speed_step_enabled())
}

/// Effective fastest tilt speed step for the current mode.
pub fn effective_tilt_speed_max(caps: &dyn CapabilityQuery, slow_mode: bool) -> u8 {
    let max = if caps.extended_speed_enabled() {
        caps.max_extended_tilt_speed()
    } else {
        caps.max_tilt_speed()
    };
    apply_slow_mode(max, slow_mode && caps.speed_step_enabled())
}

fn apply_slow_mode(max: u8, halve: bool) -> u8 {
    if halve { (max / 2).max(SPEED_MIN) } else { max }
}

/// Check a requested pan speed step against the effective table.
pub fn validate_pan_speed(
    caps: &dyn CapabilityQuery,
    speed: u8,
    slow_mode: bool,
) -> Result<(), RequestError> {
    let max = effective_pan_speed_max(caps, slow_mode);
    if speed < SPEED_MIN || speed > max {
        return Err(RequestError::SpeedOutOfRange {
            value: speed,
            min: SPEED_MIN,
            max,
        });
    }
    Ok(())
}

/// Check a requested tilt speed step against the effective table.
pub fn validate_tilt_speed(
    caps: &dyn CapabilityQuery,
    speed: u8,
    slow_mode: bool,
) -> Result<(), RequestError> {
    let max = effective_tilt_speed_max(caps, slow_mode);
    if speed < SPEED_MIN || speed > max {
        return Err(RequestError::SpeedOutOfRange {
            value: speed,
            min: SPEED_MIN,
            max,
        });
    }
    Ok(())
}

/// Round a requested pan speed step into the effective table.
pub fn round_pan_speed(caps: &dyn CapabilityQuery, speed: u8, slow_mode: bool) -> u8 {
    speed.clamp(SPEED_MIN, effective_pan_speed_max(caps, slow_mode))
}

/// Round a requested tilt speed step into the effective table.
pub fn round_tilt_speed(caps: &dyn CapabilityQuery, speed: u8, slow_mode: bool) -> u8 {
    speed.clamp(SPEED_MIN, effective_tilt_speed_max(caps, slow_mode))
}
