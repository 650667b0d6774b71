//! State enums shared across the PTZF motion-control workspace.
//!
//! All enums use `#[repr(u8)]` for compact memory layout and stable
//! persistence. Includes the hardware-variant selector, orientation and
//! power/lock state, the per-sub-machine processing statuses, and the
//! limit-envelope edit intents.

use serde::{Deserialize, Serialize};

use bitflags::bitflags;

// ─── Hardware Variant ───────────────────────────────────────────────

/// Coordinate-type variant of the installed pan/tilt hardware.
///
/// Selected once from the capability port at construction and immutable
/// afterwards. Changes the sign convention and scale constants for all
/// pan/tilt coordinate math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum CoordinateType {
    /// Legacy variant: pan "left" is numerically positive.
    Type1 = 0,
    /// Newer variant: pan "left" is numerically negative.
    Type2 = 1,
}

impl CoordinateType {
    #[inline]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Type1),
            1 => Some(Self::Type2),
            _ => None,
        }
    }
}

/// Image-flip orientation. Inverts the mechanical up/down sense and
/// therefore the effective tilt travel envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ImageFlip {
    Off = 0,
    On = 1,
}

impl ImageFlip {
    #[inline]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Off),
            1 => Some(Self::On),
            _ => None,
        }
    }
}

impl Default for ImageFlip {
    fn default() -> Self {
        Self::Off
    }
}

// ─── Lock / Power State ─────────────────────────────────────────────

/// Commanded/acknowledged lock state of the pan-tilt mechanism.
///
/// Distinct from the instantaneous physical sensor reading
/// ([`LockSensor`]). Mutated only by the lock/power transition machine
/// at defined transition points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum LockControlStatus {
    /// Unknown — boot default, not yet reconciled with the sensor.
    None = 0,
    Unlocked = 1,
    Locked = 2,
    /// Logically unlocked, and the pan-tilt mechanism was powered on as
    /// part of the unlock — it must be powered down again before
    /// re-locking.
    UnlockedAfterBooting = 3,
}

impl LockControlStatus {
    #[inline]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::None),
            1 => Some(Self::Unlocked),
            2 => Some(Self::Locked),
            3 => Some(Self::UnlockedAfterBooting),
            _ => None,
        }
    }

    /// Whether this status counts as logically unlocked for transition
    /// decisions.
    #[inline]
    pub const fn is_logically_unlocked(&self) -> bool {
        matches!(self, Self::Unlocked | Self::UnlockedAfterBooting)
    }
}

impl Default for LockControlStatus {
    fn default() -> Self {
        Self::None
    }
}

/// Instantaneous physical lock sensor reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum LockSensor {
    Unlocked = 0,
    Locked = 1,
}

impl LockSensor {
    #[inline]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Unlocked),
            1 => Some(Self::Locked),
            _ => None,
        }
    }
}

/// Overall device power phase, as reported by the status port.
///
/// Lock transitions are deferred while a phase change is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PowerPhase {
    PowerOff = 0,
    PowerOn = 1,
    ProcessingOn = 2,
    ProcessingOff = 3,
}

impl PowerPhase {
    #[inline]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::PowerOff),
            1 => Some(Self::PowerOn),
            2 => Some(Self::ProcessingOn),
            3 => Some(Self::ProcessingOff),
            _ => None,
        }
    }

    /// Whether a power phase change is currently in progress.
    #[inline]
    pub const fn is_transitioning(&self) -> bool {
        matches!(self, Self::ProcessingOn | Self::ProcessingOff)
    }
}

impl Default for PowerPhase {
    fn default() -> Self {
        Self::PowerOff
    }
}

// ─── Transition Processing Status ───────────────────────────────────

/// Step tracker for the Lock→Unlock (pan-tilt power-on) sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PanTiltInitializingStatus {
    None = 0,
    /// Pan-tilt mechanism power-on request outstanding.
    PanTiltPowerOn = 1,
}

impl PanTiltInitializingStatus {
    #[inline]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::None),
            1 => Some(Self::PanTiltPowerOn),
            _ => None,
        }
    }
}

impl Default for PanTiltInitializingStatus {
    fn default() -> Self {
        Self::None
    }
}

/// Step tracker for the Unlock→Lock (finalize + power-off) sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PanTiltFinalizingStatus {
    None = 0,
    /// Finalize request (flush in-flight pan-tilt operations) outstanding.
    PanTiltFinalizing = 1,
    /// Pan-tilt mechanism power-off request outstanding.
    PanTiltPowerOff = 2,
}

impl PanTiltFinalizingStatus {
    #[inline]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::None),
            1 => Some(Self::PanTiltFinalizing),
            2 => Some(Self::PanTiltPowerOff),
            _ => None,
        }
    }
}

impl Default for PanTiltFinalizingStatus {
    fn default() -> Self {
        Self::None
    }
}

// ─── Limit Edit Intents ─────────────────────────────────────────────

/// Which item of the travel-limit envelope an edit targets.
///
/// Corner edits touch two edges, single-edge edits touch one, the
/// on/off/clear pseudo-items substitute defaults or restore the
/// persisted pair, and `Current` re-validates the live envelope
/// without editing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum LimitEditItem {
    DownLeft = 0,
    UpRight = 1,
    Left = 2,
    Right = 3,
    Up = 4,
    Down = 5,
    PanLimitOn = 6,
    PanLimitOff = 7,
    TiltLimitOn = 8,
    TiltLimitOff = 9,
    DownLeftLimitOff = 10,
    UpRightLimitOff = 11,
    Current = 12,
}

impl LimitEditItem {
    #[inline]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::DownLeft),
            1 => Some(Self::UpRight),
            2 => Some(Self::Left),
            3 => Some(Self::Right),
            4 => Some(Self::Up),
            5 => Some(Self::Down),
            6 => Some(Self::PanLimitOn),
            7 => Some(Self::PanLimitOff),
            8 => Some(Self::TiltLimitOn),
            9 => Some(Self::TiltLimitOff),
            10 => Some(Self::DownLeftLimitOff),
            11 => Some(Self::UpRightLimitOff),
            12 => Some(Self::Current),
            _ => None,
        }
    }

    /// Whether this edit semantically touches the down-left corner.
    #[inline]
    pub const fn touches_down_left(&self) -> bool {
        matches!(
            self,
            Self::DownLeft
                | Self::Left
                | Self::Down
                | Self::PanLimitOn
                | Self::PanLimitOff
                | Self::TiltLimitOn
                | Self::TiltLimitOff
                | Self::DownLeftLimitOff
                | Self::Current
        )
    }

    /// Whether this edit semantically touches the up-right corner.
    #[inline]
    pub const fn touches_up_right(&self) -> bool {
        matches!(
            self,
            Self::UpRight
                | Self::Right
                | Self::Up
                | Self::PanLimitOn
                | Self::PanLimitOff
                | Self::TiltLimitOn
                | Self::TiltLimitOff
                | Self::UpRightLimitOff
                | Self::Current
        )
    }
}

// ─── Configuration Busy Flags ───────────────────────────────────────

bitflags! {
    /// "Configuring X" busy flags exposed through the status ports.
    ///
    /// A set flag means the corresponding configuration change has been
    /// dispatched to hardware and its completion has not yet arrived;
    /// conflicting requests are rejected while it is set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ConfiguringFlags: u8 {
        const IMAGE_FLIP    = 0x01;
        const SLOW_MODE     = 0x02;
        const SPEED_STEP    = 0x04;
        const IR_CORRECTION = 0x08;
        const PAN_TILT_LIMIT = 0x10;
    }
}

impl Default for ConfiguringFlags {
    fn default() -> Self {
        Self::empty()
    }
}
