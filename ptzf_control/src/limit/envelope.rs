//! Travel-limit envelope construction and validation.
//!
//! One [`LimitEdit`] describes a single edit intent against the 4-edge
//! envelope. [`LimitEnvelope::build`] loads the persisted baseline from
//! the status port, applies the edit to a working copy, converts all
//! four edges to sin units and validates domain plus ordering for the
//! axis pair(s) the edit touches. Only a fully valid result constructs
//! a [`LimitEnvelope`] — the success type always represents a
//! committed-valid envelope, there is no constructible-but-invalid
//! state to check afterwards.

use ptzf_common::error::RequestError;
use ptzf_common::state::{ImageFlip, LimitEditItem};

use crate::coord::ValueManager;
use crate::port::status::StatusRead;

/// One edit intent against the travel-limit envelope.
///
/// Corner edits carry VISCA-unit positions (two edges each); single
/// edge edits carry a degree value. The pseudo-edits substitute
/// hardware defaults, restore the persisted pair, or re-validate the
/// live envelope without changing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitEdit {
    /// Set the down-left corner: left and down edges, VISCA units.
    /// `enable: false` stages the bounds without raising the enabled
    /// flags.
    DownLeft { pan: u32, tilt: u32, enable: bool },
    /// Set the up-right corner: right and up edges, VISCA units.
    /// `enable: false` stages the bounds without raising the enabled
    /// flags.
    UpRight { pan: u32, tilt: u32, enable: bool },
    Left { degree: i32 },
    Right { degree: i32 },
    Up { degree: i32 },
    Down { degree: i32 },
    PanLimitOn,
    PanLimitOff,
    TiltLimitOn,
    TiltLimitOff,
    /// Clear the down-left corner back to hardware defaults.
    DownLeftLimitOff,
    /// Clear the up-right corner back to hardware defaults.
    UpRightLimitOff,
    /// Re-validate the currently configured envelope without editing.
    Current,
}

impl LimitEdit {
    /// The edit-item tag of this intent.
    pub const fn item(&self) -> LimitEditItem {
        match self {
            Self::DownLeft { .. } => LimitEditItem::DownLeft,
            Self::UpRight { .. } => LimitEditItem::UpRight,
            Self::Left { .. } => LimitEditItem::Left,
            Self::Right { .. } => LimitEditItem::Right,
            Self::Up { .. } => LimitEditItem::Up,
            Self::Down { .. } => LimitEditItem::Down,
            Self::PanLimitOn => LimitEditItem::PanLimitOn,
            Self::PanLimitOff => LimitEditItem::PanLimitOff,
            Self::TiltLimitOn => LimitEditItem::TiltLimitOn,
            Self::TiltLimitOff => LimitEditItem::TiltLimitOff,
            Self::DownLeftLimitOff => LimitEditItem::DownLeftLimitOff,
            Self::UpRightLimitOff => LimitEditItem::UpRightLimitOff,
            Self::Current => LimitEditItem::Current,
        }
    }

    /// Whether the edit is a clear command towards hardware (defaults
    /// substituted rather than positions applied).
    pub const fn is_clear(&self) -> bool {
        matches!(
            self,
            Self::PanLimitOff | Self::TiltLimitOff | Self::DownLeftLimitOff | Self::UpRightLimitOff
        )
    }

    /// Whether the edit touches the pan pair (left/right).
    const fn touches_pan(&self) -> bool {
        matches!(
            self,
            Self::DownLeft { .. }
                | Self::UpRight { .. }
                | Self::Left { .. }
                | Self::Right { .. }
                | Self::PanLimitOn
                | Self::PanLimitOff
                | Self::DownLeftLimitOff
                | Self::UpRightLimitOff
                | Self::Current
        )
    }

    /// Whether the edit touches the tilt pair (up/down).
    const fn touches_tilt(&self) -> bool {
        matches!(
            self,
            Self::DownLeft { .. }
                | Self::UpRight { .. }
                | Self::Up { .. }
                | Self::Down { .. }
                | Self::TiltLimitOn
                | Self::TiltLimitOff
                | Self::DownLeftLimitOff
                | Self::UpRightLimitOff
                | Self::Current
        )
    }
}

/// A validated, internally consistent 4-edge travel-limit envelope.
///
/// Constructed only through [`LimitEnvelope::build`]; every instance
/// satisfies the edge domains and the pair ordering invariants for the
/// pair(s) its edit touched.
///
/// Carries two views of the edges: the live edges sent to hardware
/// (`left()` .. `down()`) and the stored edges to persist
/// (`stored_left()` .. `stored_down()`). They differ only for the
/// axis-off edits, where the live pair reverts to the hardware defaults
/// while the stored pair keeps the operator's configured values so a
/// later axis-on edit can restore them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitEnvelope {
    item: LimitEditItem,
    left: u32,
    right: u32,
    up: u32,
    down: u32,
    stored_left: u32,
    stored_right: u32,
    stored_up: u32,
    stored_down: u32,
    pan_limit_enabled: bool,
    tilt_limit_enabled: bool,
    flip: ImageFlip,
}

impl LimitEnvelope {
    /// Build a validated envelope from the persisted baseline plus one
    /// edit.
    ///
    /// The baseline is read from `status`; an edge equal to the axis's
    /// no-limit sentinel is replaced with the hardware default before
    /// editing, so "no limit" never propagates into an edit baseline.
    /// Fails without side effects if a degree value is out of domain,
    /// an edge leaves its sin domain, or a touched pair violates its
    /// ordering invariant.
    pub fn build<S>(edit: &LimitEdit, status: &S, vm: &ValueManager) -> Result<Self, RequestError>
    where
        S: StatusRead + ?Sized,
    {
        let flip = status.image_flip_boot();
        let raw_left = status.limit_left();
        let raw_right = status.limit_right();
        let raw_up = status.limit_up();
        let raw_down = status.limit_down();

        // Baseline with no-limit sentinels replaced by defaults.
        let base_left = baseline_edge(
            vm.pan_visca_to_sin(raw_left),
            vm.pan_no_limit(),
            vm.pan_left_default(),
        );
        let base_right = baseline_edge(
            vm.pan_visca_to_sin(raw_right),
            vm.pan_no_limit(),
            vm.pan_right_default(),
        );
        let base_up = baseline_edge(
            vm.tilt_visca_to_sin(raw_up),
            vm.tilt_no_limit(),
            vm.tilt_up_default(flip),
        );
        let base_down = baseline_edge(
            vm.tilt_visca_to_sin(raw_down),
            vm.tilt_no_limit(),
            vm.tilt_down_default(flip),
        );

        let mut pan_enabled = status.pan_limit_enabled();
        let mut tilt_enabled = status.tilt_limit_enabled();

        // Working copy in sin units.
        let mut left = base_left;
        let mut right = base_right;
        let mut up = base_up;
        let mut down = base_down;

        match *edit {
            LimitEdit::DownLeft { pan, tilt, enable } => {
                left = vm.pan_visca_to_sin(pan);
                down = vm.tilt_visca_to_sin(tilt);
                if enable {
                    pan_enabled = true;
                    tilt_enabled = true;
                }
            }
            LimitEdit::UpRight { pan, tilt, enable } => {
                right = vm.pan_visca_to_sin(pan);
                up = vm.tilt_visca_to_sin(tilt);
                if enable {
                    pan_enabled = true;
                    tilt_enabled = true;
                }
            }
            LimitEdit::Left { degree } => {
                check_degree(degree, vm.pan_degree_min(), vm.pan_degree_max())?;
                left = vm.pan_degree_to_sin(degree);
                pan_enabled = true;
            }
            LimitEdit::Right { degree } => {
                check_degree(degree, vm.pan_degree_min(), vm.pan_degree_max())?;
                right = vm.pan_degree_to_sin(degree);
                pan_enabled = true;
            }
            LimitEdit::Up { degree } => {
                check_degree(degree, vm.tilt_degree_min(flip), vm.tilt_degree_max(flip))?;
                up = vm.tilt_degree_to_sin(degree, flip);
                tilt_enabled = true;
            }
            LimitEdit::Down { degree } => {
                check_degree(degree, vm.tilt_degree_min(flip), vm.tilt_degree_max(flip))?;
                down = vm.tilt_degree_to_sin(degree, flip);
                tilt_enabled = true;
            }
            LimitEdit::PanLimitOff => {
                left = vm.pan_left_default();
                right = vm.pan_right_default();
                pan_enabled = false;
            }
            LimitEdit::PanLimitOn => {
                // Restore the persisted pair as-is and re-validate it.
                pan_enabled = true;
            }
            LimitEdit::TiltLimitOff => {
                up = vm.tilt_up_default(flip);
                down = vm.tilt_down_default(flip);
                tilt_enabled = false;
            }
            LimitEdit::TiltLimitOn => {
                tilt_enabled = true;
            }
            LimitEdit::DownLeftLimitOff => {
                left = vm.pan_left_default();
                down = vm.tilt_down_default(flip);
            }
            LimitEdit::UpRightLimitOff => {
                right = vm.pan_right_default();
                up = vm.tilt_up_default(flip);
            }
            LimitEdit::Current => {}
        }

        if edit.touches_pan() {
            check_sin(left, vm.pan_sin_limit_left_min(), vm.pan_sin_limit_left_max())?;
            check_sin(right, vm.pan_sin_limit_right_min(), vm.pan_sin_limit_right_max())?;
            if !vm.is_valid_left_right(left, right) {
                return Err(RequestError::PanOrderingViolation { left, right });
            }
        }
        if edit.touches_tilt() {
            check_sin(up, vm.tilt_sin_limit_up_min(flip), vm.tilt_sin_limit_up_max(flip))?;
            check_sin(
                down,
                vm.tilt_sin_limit_down_min(flip),
                vm.tilt_sin_limit_down_max(flip),
            )?;
            if !vm.is_valid_up_down(up, down) {
                return Err(RequestError::TiltOrderingViolation { up, down });
            }
        }

        let live_left = vm.pan_sin_to_visca(left);
        let live_right = vm.pan_sin_to_visca(right);
        let live_up = vm.tilt_sin_to_visca(up);
        let live_down = vm.tilt_sin_to_visca(down);

        // Axis-off edits revert the live pair to defaults but must not
        // clobber the persisted pair, or a later axis-on edit would
        // have nothing to restore.
        let (stored_left, stored_right) = match edit {
            LimitEdit::PanLimitOff => (raw_left, raw_right),
            _ => (live_left, live_right),
        };
        let (stored_up, stored_down) = match edit {
            LimitEdit::TiltLimitOff => (raw_up, raw_down),
            _ => (live_up, live_down),
        };

        Ok(Self {
            item: edit.item(),
            left: live_left,
            right: live_right,
            up: live_up,
            down: live_down,
            stored_left,
            stored_right,
            stored_up,
            stored_down,
            pan_limit_enabled: pan_enabled,
            tilt_limit_enabled: tilt_enabled,
            flip,
        })
    }

    #[inline]
    pub const fn item(&self) -> LimitEditItem {
        self.item
    }

    // ─── Edges (VISCA units) ────────────────────────────────────────

    #[inline]
    pub const fn left(&self) -> u32 {
        self.left
    }

    #[inline]
    pub const fn right(&self) -> u32 {
        self.right
    }

    #[inline]
    pub const fn up(&self) -> u32 {
        self.up
    }

    #[inline]
    pub const fn down(&self) -> u32 {
        self.down
    }

    // ─── Stored Edges (VISCA units) ─────────────────────────────────

    /// Left edge to persist. Differs from [`Self::left`] only for
    /// [`LimitEdit::PanLimitOff`], which keeps the configured pair
    /// recoverable.
    #[inline]
    pub const fn stored_left(&self) -> u32 {
        self.stored_left
    }

    #[inline]
    pub const fn stored_right(&self) -> u32 {
        self.stored_right
    }

    /// Up edge to persist. Differs from [`Self::up`] only for
    /// [`LimitEdit::TiltLimitOff`].
    #[inline]
    pub const fn stored_up(&self) -> u32 {
        self.stored_up
    }

    #[inline]
    pub const fn stored_down(&self) -> u32 {
        self.stored_down
    }

    // ─── Edges (degrees) ────────────────────────────────────────────

    pub fn left_degree(&self, vm: &ValueManager) -> i32 {
        vm.pan_sin_to_degree(vm.pan_visca_to_sin(self.left))
    }

    pub fn right_degree(&self, vm: &ValueManager) -> i32 {
        vm.pan_sin_to_degree(vm.pan_visca_to_sin(self.right))
    }

    pub fn up_degree(&self, vm: &ValueManager) -> i32 {
        vm.tilt_sin_to_degree(vm.tilt_visca_to_sin(self.up), self.flip)
    }

    pub fn down_degree(&self, vm: &ValueManager) -> i32 {
        vm.tilt_sin_to_degree(vm.tilt_visca_to_sin(self.down), self.flip)
    }

    // ─── Flags ──────────────────────────────────────────────────────

    #[inline]
    pub const fn pan_limit_enabled(&self) -> bool {
        self.pan_limit_enabled
    }

    #[inline]
    pub const fn tilt_limit_enabled(&self) -> bool {
        self.tilt_limit_enabled
    }

    /// Whether this construction semantically touched the down-left
    /// corner (callers use this to pick which half of the two-part
    /// hardware command to send).
    #[inline]
    pub const fn touches_down_left(&self) -> bool {
        self.item.touches_down_left()
    }

    /// Up-right counterpart of [`Self::touches_down_left`].
    #[inline]
    pub const fn touches_up_right(&self) -> bool {
        self.item.touches_up_right()
    }

    /// Reported limit mode for the down-left corner.
    ///
    /// Deliberately reports "any limit active" — true when either the
    /// pan or the tilt pair is enabled — matching the long-observed
    /// device behavior rather than the corner's own axis.
    #[inline]
    pub const fn down_left_limit_mode(&self) -> bool {
        self.pan_limit_enabled || self.tilt_limit_enabled
    }

    /// Reported limit mode for the up-right corner. Same any-axis
    /// semantics as [`Self::down_left_limit_mode`].
    #[inline]
    pub const fn up_right_limit_mode(&self) -> bool {
        self.pan_limit_enabled || self.tilt_limit_enabled
    }
}

/// Substitute the hardware default when the persisted edge decodes to
/// the axis's no-limit marker.
fn baseline_edge(sin: i32, no_limit_sin: i32, default_sin: i32) -> i32 {
    if sin == no_limit_sin { default_sin } else { sin }
}

fn check_degree(value: i32, min: i32, max: i32) -> Result<(), RequestError> {
    if value < min || value > max {
        return Err(RequestError::DegreeOutOfRange { value, min, max });
    }
    Ok(())
}

fn check_sin(value: i32, min: i32, max: i32) -> Result<(), RequestError> {
    if value < min || value > max {
        return Err(RequestError::PositionOutOfRange { value, min, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ptzf_common::consts::{PAN_VISCA_NO_LIMIT, TILT_VISCA_NO_LIMIT};
    use ptzf_common::state::{
        ConfiguringFlags, CoordinateType, LockControlStatus, LockSensor, PowerPhase,
    };

    /// Minimal status fixture for builder tests.
    struct FakeStatus {
        left: u32,
        right: u32,
        up: u32,
        down: u32,
        pan_enabled: bool,
        tilt_enabled: bool,
        flip: ImageFlip,
    }

    impl FakeStatus {
        fn unconfigured() -> Self {
            Self {
                left: PAN_VISCA_NO_LIMIT,
                right: PAN_VISCA_NO_LIMIT,
                up: TILT_VISCA_NO_LIMIT,
                down: TILT_VISCA_NO_LIMIT,
                pan_enabled: false,
                tilt_enabled: false,
                flip: ImageFlip::Off,
            }
        }
    }

    impl StatusRead for FakeStatus {
        fn pan_position(&self) -> u32 {
            0
        }
        fn tilt_position(&self) -> u32 {
            0
        }
        fn limit_left(&self) -> u32 {
            self.left
        }
        fn limit_right(&self) -> u32 {
            self.right
        }
        fn limit_up(&self) -> u32 {
            self.up
        }
        fn limit_down(&self) -> u32 {
            self.down
        }
        fn pan_limit_enabled(&self) -> bool {
            self.pan_enabled
        }
        fn tilt_limit_enabled(&self) -> bool {
            self.tilt_enabled
        }
        fn image_flip_boot(&self) -> ImageFlip {
            self.flip
        }
        fn image_flip_live(&self) -> ImageFlip {
            self.flip
        }
        fn lock_control_status(&self) -> LockControlStatus {
            LockControlStatus::None
        }
        fn lock_sensor(&self) -> LockSensor {
            LockSensor::Unlocked
        }
        fn power_phase(&self) -> PowerPhase {
            PowerPhase::PowerOn
        }
        fn slow_mode(&self) -> bool {
            false
        }
        fn configuring(&self) -> ConfiguringFlags {
            ConfiguringFlags::empty()
        }
    }

    fn vm() -> ValueManager {
        ValueManager::with_coordinate_type(CoordinateType::Type1)
    }

    #[test]
    fn unconfigured_baseline_substitutes_defaults() {
        let status = FakeStatus::unconfigured();
        let env = LimitEnvelope::build(&LimitEdit::Current, &status, &vm()).unwrap();
        assert_eq!(env.left(), 0x09CA7);
        assert_eq!(env.right(), 0xF6359);
        assert_eq!(env.up(), vm().tilt_sin_to_visca(21231));
        assert_eq!(env.down(), vm().tilt_sin_to_visca(-4718));
        // Current leaves the enabled flags untouched.
        assert!(!env.pan_limit_enabled());
        assert!(!env.tilt_limit_enabled());
    }

    #[test]
    fn down_left_corner_edit_sets_both_flags() {
        let status = FakeStatus::unconfigured();
        let edit = LimitEdit::DownLeft {
            pan: 0xF6359,              // left = pan sin min
            tilt: 0xED92,              // down = −4718
            enable: true,
        };
        // Type 1 wants left > right; left at the minimum fails against
        // the default right edge at the minimum.
        assert!(LimitEnvelope::build(&edit, &status, &vm()).is_err());

        let edit = LimitEdit::DownLeft { pan: 0x100, tilt: 0xED92, enable: true };
        let env = LimitEnvelope::build(&edit, &status, &vm()).unwrap();
        assert_eq!(env.left(), 0x100);
        assert!(env.pan_limit_enabled());
        assert!(env.tilt_limit_enabled());
        assert!(env.touches_down_left());
        assert!(!env.touches_up_right());
    }

    #[test]
    fn up_right_ordering_violation_fails() {
        let status = FakeStatus::unconfigured();
        // right above the default left edge violates left > right.
        let edit = LimitEdit::UpRight {
            pan: 0x09CA7,
            tilt: vm().tilt_sin_to_visca(21231),
            enable: true,
        };
        let err = LimitEnvelope::build(&edit, &status, &vm()).unwrap_err();
        assert!(matches!(err, RequestError::PanOrderingViolation { .. }));
    }

    #[test]
    fn out_of_domain_degree_fails_before_conversion() {
        let status = FakeStatus::unconfigured();
        let err = LimitEnvelope::build(&LimitEdit::Left { degree: 171 }, &status, &vm())
            .unwrap_err();
        assert!(matches!(err, RequestError::DegreeOutOfRange { .. }));
        let err = LimitEnvelope::build(&LimitEdit::Up { degree: 91 }, &status, &vm())
            .unwrap_err();
        assert!(matches!(err, RequestError::DegreeOutOfRange { .. }));
    }

    #[test]
    fn single_edge_degree_edit() {
        let status = FakeStatus::unconfigured();
        let env = LimitEnvelope::build(&LimitEdit::Left { degree: 90 }, &status, &vm()).unwrap();
        assert_eq!(env.left_degree(&vm()), 90);
        assert!(env.pan_limit_enabled());
        assert!(!env.tilt_limit_enabled());
    }

    #[test]
    fn pan_limit_off_substitutes_defaults_and_clears_flag() {
        let mut status = FakeStatus::unconfigured();
        status.left = 0x100;
        status.right = 0xF6359;
        status.pan_enabled = true;
        let env = LimitEnvelope::build(&LimitEdit::PanLimitOff, &status, &vm()).unwrap();
        assert_eq!(env.left(), 0x09CA7);
        assert_eq!(env.right(), 0xF6359);
        assert!(!env.pan_limit_enabled());
        assert_eq!(env.item(), LimitEditItem::PanLimitOff);
        // The configured pair survives in the stored view.
        assert_eq!(env.stored_left(), 0x100);
        assert_eq!(env.stored_right(), 0xF6359);
    }

    #[test]
    fn tilt_limit_off_keeps_stored_pair() {
        let mut status = FakeStatus::unconfigured();
        status.up = vm().tilt_sin_to_visca(21000);
        status.down = vm().tilt_sin_to_visca(-4000);
        status.tilt_enabled = true;
        let env = LimitEnvelope::build(&LimitEdit::TiltLimitOff, &status, &vm()).unwrap();
        // Live edges at defaults, stored edges untouched.
        assert_eq!(env.up(), vm().tilt_sin_to_visca(21231));
        assert_eq!(env.down(), vm().tilt_sin_to_visca(-4718));
        assert_eq!(env.stored_up(), vm().tilt_sin_to_visca(21000));
        assert_eq!(env.stored_down(), vm().tilt_sin_to_visca(-4000));
        assert!(!env.tilt_limit_enabled());
    }

    #[test]
    fn corner_edit_can_stage_without_enabling() {
        let status = FakeStatus::unconfigured();
        let edit = LimitEdit::UpRight {
            pan: 0xF6400,
            tilt: vm().tilt_sin_to_visca(20000),
            enable: false,
        };
        let env = LimitEnvelope::build(&edit, &status, &vm()).unwrap();
        assert_eq!(env.right(), 0xF6400);
        assert_eq!(env.up(), vm().tilt_sin_to_visca(20000));
        // Bounds staged, enabled flags left as persisted.
        assert!(!env.pan_limit_enabled());
        assert!(!env.tilt_limit_enabled());

        // Same edit with enable raises both flags.
        let edit = LimitEdit::UpRight {
            pan: 0xF6400,
            tilt: vm().tilt_sin_to_visca(20000),
            enable: true,
        };
        let env = LimitEnvelope::build(&edit, &status, &vm()).unwrap();
        assert!(env.pan_limit_enabled());
        assert!(env.tilt_limit_enabled());
    }

    #[test]
    fn pan_limit_on_restores_persisted_pair() {
        let mut status = FakeStatus::unconfigured();
        status.left = 0x100;
        status.right = 0xF6359;
        status.pan_enabled = false;
        let env = LimitEnvelope::build(&LimitEdit::PanLimitOn, &status, &vm()).unwrap();
        assert_eq!(env.left(), 0x100);
        assert_eq!(env.right(), 0xF6359);
        assert!(env.pan_limit_enabled());
    }

    #[test]
    fn corner_off_clears_one_corner_only() {
        let mut status = FakeStatus::unconfigured();
        status.left = 0x100;
        status.right = 0xF6400;
        status.pan_enabled = true;
        let env = LimitEnvelope::build(&LimitEdit::DownLeftLimitOff, &status, &vm()).unwrap();
        assert_eq!(env.left(), 0x09CA7);
        assert_eq!(env.right(), 0xF6400);
        // Corner clears leave the axis-enable flags as they were.
        assert!(env.pan_limit_enabled());
    }

    #[test]
    fn flip_on_uses_mirrored_tilt_envelope() {
        let mut status = FakeStatus::unconfigured();
        status.flip = ImageFlip::On;
        let env = LimitEnvelope::build(&LimitEdit::Up { degree: 20 }, &status, &vm()).unwrap();
        assert_eq!(env.up_degree(&vm()), 20);
        // +90° is outside the flipped envelope.
        assert!(LimitEnvelope::build(&LimitEdit::Up { degree: 90 }, &status, &vm()).is_err());
    }

    #[test]
    fn any_axis_limit_mode_reporting() {
        let mut status = FakeStatus::unconfigured();
        status.up = vm().tilt_sin_to_visca(21000);
        status.tilt_enabled = true;
        let env = LimitEnvelope::build(&LimitEdit::Current, &status, &vm()).unwrap();
        // Only the tilt pair is enabled, yet both corner modes report
        // active.
        assert!(env.down_left_limit_mode());
        assert!(env.up_right_limit_mode());
    }
}
