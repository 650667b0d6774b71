//! Bidirectional conversion between VISCA raw units, sin units and
//! degrees, plus the range queries consumed by all validation logic.
//!
//! Conversion law (identical for both axes, only the wire width
//! differs): a raw value with any bit set outside the axis mask, or
//! equal to the axis's no-limit sentinel, degrades to the sin no-limit
//! marker instead of failing — hardware may report transient invalid
//! readings. A raw value above the relative-move maximum is a negative
//! position wrapped into the wire field: `sin = -(wrap - raw)`.

use ptzf_common::consts::{
    PAN_SIN_NO_LIMIT, PAN_VISCA_MASK, PAN_VISCA_NO_LIMIT, PAN_VISCA_WRAP, TILT_SIN_NO_LIMIT,
    TILT_VISCA_MASK, TILT_VISCA_NO_LIMIT, TILT_VISCA_WRAP,
};
use ptzf_common::state::{CoordinateType, ImageFlip};

use crate::coord::tables::{pan_table, tilt_table, PanTable, TiltTable};
use crate::port::capability::CapabilityQuery;

/// Width-generic raw → sin decoding.
fn visca_to_sin(
    raw: u32,
    mask: u32,
    wrap: u32,
    no_limit_raw: u32,
    negative_threshold: i32,
    no_limit_sin: i32,
) -> i32 {
    if raw & !mask != 0 || raw == no_limit_raw {
        return no_limit_sin;
    }
    let value = (raw & mask) as i32;
    if value > negative_threshold {
        -((wrap as i32) - value)
    } else {
        value
    }
}

/// Width-generic sin → raw encoding (two's-complement truncation back
/// into the wire field).
#[inline]
fn sin_to_visca(sin: i32, mask: u32) -> u32 {
    (sin as u32) & mask
}

/// Truncating degree → sin scaling, clamped to the table bounds.
fn degree_to_sin(degree: i32, base: i32, sin_min: i32, sin_max: i32) -> i32 {
    (degree * base / 10).clamp(sin_min, sin_max)
}

/// Sin → degree with round-half-away-from-zero, clamped to the table
/// bounds.
fn sin_to_degree(sin: i32, base: i32, degree_min: i32, degree_max: i32) -> i32 {
    let half = base / 2;
    let rounded = if sin >= 0 {
        (sin * 10 + half) / base
    } else {
        (sin * 10 - half) / base
    };
    rounded.clamp(degree_min, degree_max)
}

/// Stateless conversion/validation engine for one hardware variant.
///
/// Holds only the coordinate type, selected once at construction from
/// the capability port. Tilt operations take the current [`ImageFlip`]
/// explicitly so callers choose between the boot-cached and live
/// orientation.
#[derive(Debug, Clone, Copy)]
pub struct ValueManager {
    coordinate_type: CoordinateType,
}

impl ValueManager {
    /// Select the constant table row for the installed hardware.
    pub fn new(capability: &dyn CapabilityQuery) -> Self {
        Self::with_coordinate_type(capability.coordinate_type())
    }

    pub const fn with_coordinate_type(coordinate_type: CoordinateType) -> Self {
        Self { coordinate_type }
    }

    #[inline]
    pub const fn coordinate_type(&self) -> CoordinateType {
        self.coordinate_type
    }

    #[inline]
    fn pan(&self) -> &'static PanTable {
        pan_table(self.coordinate_type)
    }

    #[inline]
    fn tilt(&self, flip: ImageFlip) -> &'static TiltTable {
        tilt_table(self.coordinate_type, flip)
    }

    // ─── Raw ↔ Sin ──────────────────────────────────────────────────

    pub fn pan_visca_to_sin(&self, raw: u32) -> i32 {
        visca_to_sin(
            raw,
            PAN_VISCA_MASK,
            PAN_VISCA_WRAP,
            PAN_VISCA_NO_LIMIT,
            self.pan().relative_sin_max,
            PAN_SIN_NO_LIMIT,
        )
    }

    #[inline]
    pub fn pan_sin_to_visca(&self, sin: i32) -> u32 {
        sin_to_visca(sin, PAN_VISCA_MASK)
    }

    pub fn tilt_visca_to_sin(&self, raw: u32) -> i32 {
        // The wire decoding is flip-agnostic: the relative span is the
        // same for both orientations.
        visca_to_sin(
            raw,
            TILT_VISCA_MASK,
            TILT_VISCA_WRAP,
            TILT_VISCA_NO_LIMIT,
            self.tilt(ImageFlip::Off).relative_sin_max,
            TILT_SIN_NO_LIMIT,
        )
    }

    #[inline]
    pub fn tilt_sin_to_visca(&self, sin: i32) -> u32 {
        sin_to_visca(sin, TILT_VISCA_MASK)
    }

    // ─── Degree ↔ Sin ───────────────────────────────────────────────

    pub fn pan_degree_to_sin(&self, degree: i32) -> i32 {
        let t = self.pan();
        degree_to_sin(degree, t.degree_base, t.sin_min, t.sin_max)
    }

    pub fn pan_sin_to_degree(&self, sin: i32) -> i32 {
        let t = self.pan();
        sin_to_degree(sin, t.degree_base, t.degree_min, t.degree_max)
    }

    pub fn tilt_degree_to_sin(&self, degree: i32, flip: ImageFlip) -> i32 {
        let t = self.tilt(flip);
        degree_to_sin(degree, t.degree_base, t.sin_min, t.sin_max)
    }

    pub fn tilt_sin_to_degree(&self, sin: i32, flip: ImageFlip) -> i32 {
        let t = self.tilt(flip);
        sin_to_degree(sin, t.degree_base, t.degree_min, t.degree_max)
    }

    // ─── Range Queries ──────────────────────────────────────────────

    #[inline]
    pub fn pan_sin_min(&self) -> i32 {
        self.pan().sin_min
    }

    #[inline]
    pub fn pan_sin_max(&self) -> i32 {
        self.pan().sin_max
    }

    #[inline]
    pub fn tilt_sin_min(&self, flip: ImageFlip) -> i32 {
        self.tilt(flip).sin_min
    }

    #[inline]
    pub fn tilt_sin_max(&self, flip: ImageFlip) -> i32 {
        self.tilt(flip).sin_max
    }

    #[inline]
    pub fn pan_degree_min(&self) -> i32 {
        self.pan().degree_min
    }

    #[inline]
    pub fn pan_degree_max(&self) -> i32 {
        self.pan().degree_max
    }

    #[inline]
    pub fn tilt_degree_min(&self, flip: ImageFlip) -> i32 {
        self.tilt(flip).degree_min
    }

    #[inline]
    pub fn tilt_degree_max(&self, flip: ImageFlip) -> i32 {
        self.tilt(flip).degree_max
    }

    #[inline]
    pub fn relative_pan_sin_min(&self) -> i32 {
        self.pan().relative_sin_min
    }

    #[inline]
    pub fn relative_pan_sin_max(&self) -> i32 {
        self.pan().relative_sin_max
    }

    #[inline]
    pub fn relative_tilt_sin_min(&self, flip: ImageFlip) -> i32 {
        self.tilt(flip).relative_sin_min
    }

    #[inline]
    pub fn relative_tilt_sin_max(&self, flip: ImageFlip) -> i32 {
        self.tilt(flip).relative_sin_max
    }

    /// Domain of the left travel-limit edge in sin units.
    #[inline]
    pub fn pan_sin_limit_left_min(&self) -> i32 {
        self.pan().sin_min
    }

    #[inline]
    pub fn pan_sin_limit_left_max(&self) -> i32 {
        self.pan().sin_max
    }

    /// Domain of the right travel-limit edge in sin units.
    #[inline]
    pub fn pan_sin_limit_right_min(&self) -> i32 {
        self.pan().sin_min
    }

    #[inline]
    pub fn pan_sin_limit_right_max(&self) -> i32 {
        self.pan().sin_max
    }

    /// Domain of the up travel-limit edge in sin units.
    #[inline]
    pub fn tilt_sin_limit_up_min(&self, flip: ImageFlip) -> i32 {
        self.tilt(flip).sin_min
    }

    #[inline]
    pub fn tilt_sin_limit_up_max(&self, flip: ImageFlip) -> i32 {
        self.tilt(flip).sin_max
    }

    /// Domain of the down travel-limit edge in sin units.
    #[inline]
    pub fn tilt_sin_limit_down_min(&self, flip: ImageFlip) -> i32 {
        self.tilt(flip).sin_min
    }

    #[inline]
    pub fn tilt_sin_limit_down_max(&self, flip: ImageFlip) -> i32 {
        self.tilt(flip).sin_max
    }

    #[inline]
    pub fn pan_left_default(&self) -> i32 {
        self.pan().left_default_sin
    }

    #[inline]
    pub fn pan_right_default(&self) -> i32 {
        self.pan().right_default_sin
    }

    #[inline]
    pub fn tilt_up_default(&self, flip: ImageFlip) -> i32 {
        self.tilt(flip).up_default_sin
    }

    #[inline]
    pub fn tilt_down_default(&self, flip: ImageFlip) -> i32 {
        self.tilt(flip).down_default_sin
    }

    #[inline]
    pub fn pan_no_limit(&self) -> i32 {
        PAN_SIN_NO_LIMIT
    }

    #[inline]
    pub fn tilt_no_limit(&self) -> i32 {
        TILT_SIN_NO_LIMIT
    }

    // ─── Ordering Invariants ────────────────────────────────────────

    /// Left/right ordering in sin space. Type 1 hardware counts "left"
    /// numerically greater than "right"; Type 2 inverts the convention.
    /// This asymmetry is load-bearing and must be preserved per type.
    #[inline]
    pub fn is_valid_left_right(&self, sin_left: i32, sin_right: i32) -> bool {
        match self.coordinate_type {
            CoordinateType::Type1 => sin_left > sin_right,
            CoordinateType::Type2 => sin_right > sin_left,
        }
    }

    /// Up/down ordering in sin space: up > down for both types.
    #[inline]
    pub fn is_valid_up_down(&self, sin_up: i32, sin_down: i32) -> bool {
        sin_up > sin_down
    }
}
