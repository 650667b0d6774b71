//! Wire-level constants for the pan/tilt coordinate spaces.
//!
//! VISCA raw positions travel in axis-specific bit widths: pan uses a
//! 20-bit field, tilt a 16-bit field. Values above the axis's relative
//! maximum are negative positions wrapped into the field width. One
//! sentinel per axis means "no limit configured".

use static_assertions::const_assert;

// ─── Pan Axis (20-bit wire field) ───────────────────────────────────

/// Valid-bit mask of the pan wire field.
pub const PAN_VISCA_MASK: u32 = 0xF_FFFF;

/// Wrap modulus of the pan wire field (`mask + 1`).
pub const PAN_VISCA_WRAP: u32 = 0x10_0000;

/// Wire sentinel: pan limit not configured.
pub const PAN_VISCA_NO_LIMIT: u32 = 0x7_FFFF;

/// Sin-space marker for "pan unbounded". Outside every operating range.
pub const PAN_SIN_NO_LIMIT: i32 = 0x7_FFFF;

// ─── Tilt Axis (16-bit wire field) ──────────────────────────────────

/// Valid-bit mask of the tilt wire field.
pub const TILT_VISCA_MASK: u32 = 0xFFFF;

/// Wrap modulus of the tilt wire field (`mask + 1`).
pub const TILT_VISCA_WRAP: u32 = 0x1_0000;

/// Wire sentinel: tilt limit not configured.
pub const TILT_VISCA_NO_LIMIT: u32 = 0x7FFF;

/// Sin-space marker for "tilt unbounded". Outside every operating range.
pub const TILT_SIN_NO_LIMIT: i32 = 0x7FFF;

// ─── Speed ──────────────────────────────────────────────────────────

/// Slowest commandable pan/tilt speed step.
pub const SPEED_MIN: u8 = 0x01;

/// Default fastest pan speed step.
pub const PAN_SPEED_MAX_DEFAULT: u8 = 0x18;

/// Default fastest tilt speed step.
pub const TILT_SPEED_MAX_DEFAULT: u8 = 0x17;

/// Fastest pan speed step with the extended table enabled.
pub const PAN_SPEED_MAX_EXTENDED: u8 = 0x1F;

/// Fastest tilt speed step with the extended table enabled.
pub const TILT_SPEED_MAX_EXTENDED: u8 = 0x1F;

// Wrap moduli must follow their masks.
const_assert!(PAN_VISCA_WRAP == PAN_VISCA_MASK + 1);
const_assert!(TILT_VISCA_WRAP == TILT_VISCA_MASK + 1);
// Sentinels must fit their wire fields.
const_assert!(PAN_VISCA_NO_LIMIT <= PAN_VISCA_MASK);
const_assert!(TILT_VISCA_NO_LIMIT <= TILT_VISCA_MASK);
const_assert!(SPEED_MIN <= TILT_SPEED_MAX_DEFAULT);
const_assert!(TILT_SPEED_MAX_DEFAULT <= PAN_SPEED_MAX_DEFAULT);
