//! Configuration structures for the motion-control core.
//!
//! All config types use `serde::Deserialize` for TOML loading. Optional
//! fields use `#[serde(default)]` so older config files keep loading.

use serde::{Deserialize, Serialize};

use crate::consts::{
    PAN_SPEED_MAX_DEFAULT, PAN_SPEED_MAX_EXTENDED, SPEED_MIN, TILT_SPEED_MAX_DEFAULT,
    TILT_SPEED_MAX_EXTENDED,
};
use crate::state::ImageFlip;

// ─── Top-Level Config ───────────────────────────────────────────────

/// Top-level motion-control configuration.
///
/// Loaded from TOML at startup. Immutable afterwards; runtime state
/// changes flow through the status ports, not through this struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PtzfConfig {
    /// Speed table configuration.
    #[serde(default)]
    pub speed: SpeedConfig,

    /// Boot-time orientation configuration.
    #[serde(default)]
    pub boot: BootConfig,
}

impl PtzfConfig {
    /// Validate parameter bounds.
    pub fn validate(&self) -> Result<(), String> {
        self.speed.validate()
    }
}

// ─── Speed Config ───────────────────────────────────────────────────

/// Commandable speed-step ceilings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeedConfig {
    /// Fastest pan speed step (default: 0x18).
    #[serde(default = "default_max_pan_speed")]
    pub max_pan_speed: u8,

    /// Fastest tilt speed step (default: 0x17).
    #[serde(default = "default_max_tilt_speed")]
    pub max_tilt_speed: u8,

    /// Whether the extended speed table is available on this model.
    #[serde(default)]
    pub extended_speed: bool,

    /// Whether half-resolution speed stepping (slow mode) is supported.
    #[serde(default = "default_true")]
    pub speed_step: bool,
}

fn default_max_pan_speed() -> u8 {
    PAN_SPEED_MAX_DEFAULT
}
fn default_max_tilt_speed() -> u8 {
    TILT_SPEED_MAX_DEFAULT
}
fn default_true() -> bool {
    true
}

impl Default for SpeedConfig {
    fn default() -> Self {
        Self {
            max_pan_speed: PAN_SPEED_MAX_DEFAULT,
            max_tilt_speed: TILT_SPEED_MAX_DEFAULT,
            extended_speed: false,
            speed_step: true,
        }
    }
}

impl SpeedConfig {
    /// Validate speed ceilings against the supported tables.
    pub fn validate(&self) -> Result<(), String> {
        let pan_ceiling = if self.extended_speed {
            PAN_SPEED_MAX_EXTENDED
        } else {
            PAN_SPEED_MAX_DEFAULT
        };
        let tilt_ceiling = if self.extended_speed {
            TILT_SPEED_MAX_EXTENDED
        } else {
            TILT_SPEED_MAX_DEFAULT
        };
        if self.max_pan_speed < SPEED_MIN || self.max_pan_speed > pan_ceiling {
            return Err(format!(
                "max_pan_speed {:#04x} out of range [{:#04x}, {:#04x}]",
                self.max_pan_speed, SPEED_MIN, pan_ceiling
            ));
        }
        if self.max_tilt_speed < SPEED_MIN || self.max_tilt_speed > tilt_ceiling {
            return Err(format!(
                "max_tilt_speed {:#04x} out of range [{:#04x}, {:#04x}]",
                self.max_tilt_speed, SPEED_MIN, tilt_ceiling
            ));
        }
        Ok(())
    }
}

// ─── Boot Config ────────────────────────────────────────────────────

/// Boot-time orientation defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BootConfig {
    /// Image-flip orientation cached at boot. The tilt envelope is
    /// derived from this until a live flip change completes.
    #[serde(default)]
    pub image_flip: ImageFlip,
}
