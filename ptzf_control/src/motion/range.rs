//! Absolute and relative move-range validation.
//!
//! Relative checks operate on the *move amount*: a move is valid when
//! the current position plus the amount stays inside the axis envelope,
//! and rounding clamps the amount so the sum lands exactly on the
//! violated boundary — never past it, never short of it.

use ptzf_common::state::ImageFlip;

use crate::coord::ValueManager;

/// Whether a raw pan position lies inside the absolute travel envelope.
pub fn is_valid_pan_absolute(vm: &ValueManager, raw: u32) -> bool {
    let sin = vm.pan_visca_to_sin(raw);
    sin >= vm.pan_sin_min() && sin <= vm.pan_sin_max()
}

/// Whether a raw tilt position lies inside the absolute travel envelope
/// for the given orientation.
pub fn is_valid_tilt_absolute(vm: &ValueManager, raw: u32, flip: ImageFlip) -> bool {
    let sin = vm.tilt_visca_to_sin(raw);
    sin >= vm.tilt_sin_min(flip) && sin <= vm.tilt_sin_max(flip)
}

/// Whether a pan move amount keeps the final position in the envelope.
pub fn is_valid_pan_relative_move(vm: &ValueManager, current_raw: u32, move_sin: i32) -> bool {
    if move_sin < vm.relative_pan_sin_min() || move_sin > vm.relative_pan_sin_max() {
        return false;
    }
    let target = vm.pan_visca_to_sin(current_raw) + move_sin;
    target >= vm.pan_sin_min() && target <= vm.pan_sin_max()
}

/// Tilt counterpart of [`is_valid_pan_relative_move`].
pub fn is_valid_tilt_relative_move(
    vm: &ValueManager,
    current_raw: u32,
    move_sin: i32,
    flip: ImageFlip,
) -> bool {
    if move_sin < vm.relative_tilt_sin_min(flip) || move_sin > vm.relative_tilt_sin_max(flip) {
        return false;
    }
    let target = vm.tilt_visca_to_sin(current_raw) + move_sin;
    target >= vm.tilt_sin_min(flip) && target <= vm.tilt_sin_max(flip)
}

/// Clamp a pan move amount so the final position lands on the nearest
/// violated boundary. Valid amounts pass through unchanged.
pub fn round_pan_relative_move(vm: &ValueManager, current_raw: u32, move_sin: i32) -> i32 {
    let current = vm.pan_visca_to_sin(current_raw);
    let target = current + move_sin;
    if target > vm.pan_sin_max() {
        vm.pan_sin_max() - current
    } else if target < vm.pan_sin_min() {
        vm.pan_sin_min() - current
    } else {
        move_sin
    }
}

/// Tilt counterpart of [`round_pan_relative_move`].
pub fn round_tilt_relative_move(
    vm: &ValueManager,
    current_raw: u32,
    move_sin: i32,
    flip: ImageFlip,
) -> i32 {
    let current = vm.tilt_visca_to_sin(current_raw);
    let target = current + move_sin;
    if target > vm.tilt_sin_max(flip) {
        vm.tilt_sin_max(flip) - current
    } else if target < vm.tilt_sin_min(flip) {
        vm.tilt_sin_min(flip) - current
    } else {
        move_sin
    }
}
