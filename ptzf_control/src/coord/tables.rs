//! Per-coordinate-type constant tables for pan/tilt coordinate math.
//!
//! One row per hardware variant. The tilt rows are additionally keyed
//! by image-flip orientation because flipping inverts the mechanical
//! up/down sense and with it the asymmetric tilt travel envelope.
//!
//! Degrees scale to sin units as `sin = degree * base / 10`, so `base`
//! is the sin width of ten degrees. The negative-wrap threshold of the
//! wire decoding equals the relative-move maximum: raw values above it
//! are negative positions wrapped into the wire field.

use ptzf_common::state::{CoordinateType, ImageFlip};
use static_assertions::const_assert;

/// Constant row for the pan axis of one coordinate type.
#[derive(Debug, Clone, Copy)]
pub struct PanTable {
    pub sin_min: i32,
    pub sin_max: i32,
    pub degree_min: i32,
    pub degree_max: i32,
    /// Sin units per ten degrees.
    pub degree_base: i32,
    pub relative_sin_min: i32,
    pub relative_sin_max: i32,
    /// Hardware default for the left travel-limit edge.
    pub left_default_sin: i32,
    /// Hardware default for the right travel-limit edge.
    pub right_default_sin: i32,
}

/// Constant row for the tilt axis of one coordinate type and flip mode.
#[derive(Debug, Clone, Copy)]
pub struct TiltTable {
    pub sin_min: i32,
    pub sin_max: i32,
    pub degree_min: i32,
    pub degree_max: i32,
    /// Sin units per ten degrees.
    pub degree_base: i32,
    pub relative_sin_min: i32,
    pub relative_sin_max: i32,
    /// Hardware default for the up travel-limit edge.
    pub up_default_sin: i32,
    /// Hardware default for the down travel-limit edge.
    pub down_default_sin: i32,
}

// ─── Pan Rows ───────────────────────────────────────────────────────

/// Type 1 pan: ±170.0°, left edge numerically positive.
const PAN_TYPE1: PanTable = PanTable {
    sin_min: -0x9CA7, // -40103
    sin_max: 0x9CA7,
    degree_min: -170,
    degree_max: 170,
    degree_base: 2359,
    relative_sin_min: -80206,
    relative_sin_max: 80206,
    left_default_sin: 0x9CA7,
    right_default_sin: -0x9CA7,
};

/// Type 2 pan: ±175.0°, left edge numerically negative.
const PAN_TYPE2: PanTable = PanTable {
    sin_min: -41282,
    sin_max: 41282,
    degree_min: -175,
    degree_max: 175,
    degree_base: 2359,
    relative_sin_min: -82564,
    relative_sin_max: 82564,
    left_default_sin: -41282,
    right_default_sin: 41282,
};

const PAN_TABLES: [PanTable; 2] = [PAN_TYPE1, PAN_TYPE2];

// ─── Tilt Rows ──────────────────────────────────────────────────────

/// Type 1 tilt, image flip off: −20.0° … +90.0°.
const TILT_TYPE1_FLIP_OFF: TiltTable = TiltTable {
    sin_min: -4718,
    sin_max: 21231,
    degree_min: -20,
    degree_max: 90,
    degree_base: 2359,
    relative_sin_min: -25949,
    relative_sin_max: 25949,
    up_default_sin: 21231,
    down_default_sin: -4718,
};

/// Type 1 tilt, image flip on: −90.0° … +20.0°.
const TILT_TYPE1_FLIP_ON: TiltTable = TiltTable {
    sin_min: -21231,
    sin_max: 4718,
    degree_min: -90,
    degree_max: 20,
    degree_base: 2359,
    relative_sin_min: -25949,
    relative_sin_max: 25949,
    up_default_sin: 4718,
    down_default_sin: -21231,
};

/// Type 2 tilt, image flip off: −30.0° … +105.0°.
const TILT_TYPE2_FLIP_OFF: TiltTable = TiltTable {
    sin_min: -7077,
    sin_max: 24769,
    degree_min: -30,
    degree_max: 105,
    degree_base: 2359,
    relative_sin_min: -31846,
    relative_sin_max: 31846,
    up_default_sin: 24769,
    down_default_sin: -7077,
};

/// Type 2 tilt, image flip on: −105.0° … +30.0°.
const TILT_TYPE2_FLIP_ON: TiltTable = TiltTable {
    sin_min: -24769,
    sin_max: 7077,
    degree_min: -105,
    degree_max: 30,
    degree_base: 2359,
    relative_sin_min: -31846,
    relative_sin_max: 31846,
    up_default_sin: 7077,
    down_default_sin: -24769,
};

const TILT_TABLES: [[TiltTable; 2]; 2] = [
    [TILT_TYPE1_FLIP_OFF, TILT_TYPE1_FLIP_ON],
    [TILT_TYPE2_FLIP_OFF, TILT_TYPE2_FLIP_ON],
];

/// Look up the pan row for a coordinate type.
#[inline]
pub const fn pan_table(coordinate_type: CoordinateType) -> &'static PanTable {
    &PAN_TABLES[coordinate_type as usize]
}

/// Look up the tilt row for a coordinate type and flip orientation.
#[inline]
pub const fn tilt_table(coordinate_type: CoordinateType, flip: ImageFlip) -> &'static TiltTable {
    &TILT_TABLES[coordinate_type as usize][flip as usize]
}

// Negative wire encodings (`wrap - |sin|`) must stay above the
// relative-max threshold, otherwise decoding is ambiguous.
const_assert!(PAN_TYPE1.relative_sin_max < (ptzf_common::consts::PAN_VISCA_WRAP / 2) as i32);
const_assert!(PAN_TYPE2.relative_sin_max < (ptzf_common::consts::PAN_VISCA_WRAP / 2) as i32);
const_assert!(
    TILT_TYPE1_FLIP_OFF.relative_sin_max < (ptzf_common::consts::TILT_VISCA_WRAP / 2) as i32
);
const_assert!(
    TILT_TYPE2_FLIP_OFF.relative_sin_max < (ptzf_common::consts::TILT_VISCA_WRAP / 2) as i32
);
// Degree extremes must scale exactly onto the sin extremes.
const_assert!(PAN_TYPE1.degree_max * PAN_TYPE1.degree_base / 10 == PAN_TYPE1.sin_max);
const_assert!(TILT_TYPE1_FLIP_OFF.degree_max * TILT_TYPE1_FLIP_OFF.degree_base / 10
    == TILT_TYPE1_FLIP_OFF.sin_max);
const_assert!(TILT_TYPE1_FLIP_OFF.degree_min * TILT_TYPE1_FLIP_OFF.degree_base / 10
    == TILT_TYPE1_FLIP_OFF.sin_min);
