//! Status read/write ports: the authoritative device-state store.
//!
//! The core holds no cross-call position or limit state of its own —
//! every validation re-reads the baseline through [`StatusRead`], so
//! concurrent readers elsewhere in the process stay consistent.

use ptzf_common::state::{
    ConfiguringFlags, ImageFlip, LockControlStatus, LockSensor, PowerPhase,
};

/// Read surface of the persisted device status.
pub trait StatusRead {
    /// Current pan position in VISCA units.
    fn pan_position(&self) -> u32;

    /// Current tilt position in VISCA units.
    fn tilt_position(&self) -> u32;

    /// Persisted travel-limit edges in VISCA units. An edge equal to
    /// the axis's no-limit sentinel means "not configured".
    fn limit_left(&self) -> u32;
    fn limit_right(&self) -> u32;
    fn limit_up(&self) -> u32;
    fn limit_down(&self) -> u32;

    fn pan_limit_enabled(&self) -> bool;
    fn tilt_limit_enabled(&self) -> bool;

    /// Image-flip orientation cached at boot. The tilt travel envelope
    /// is derived from this value.
    fn image_flip_boot(&self) -> ImageFlip;

    /// Live image-flip setting (may differ until the next boot).
    fn image_flip_live(&self) -> ImageFlip;

    fn lock_control_status(&self) -> LockControlStatus;

    /// Instantaneous physical lock sensor reading.
    fn lock_sensor(&self) -> LockSensor;

    fn power_phase(&self) -> PowerPhase;

    fn slow_mode(&self) -> bool;

    /// Active "configuring X" busy flags.
    fn configuring(&self) -> ConfiguringFlags;
}

/// Write surface of the persisted device status.
pub trait StatusWrite {
    fn set_lock_control_status(&mut self, status: LockControlStatus);

    fn set_pan_tilt_position(&mut self, pan: u32, tilt: u32);

    /// Persist the four travel-limit edges (VISCA units).
    fn set_limits(&mut self, left: u32, right: u32, up: u32, down: u32);

    fn set_pan_limit_enabled(&mut self, enabled: bool);
    fn set_tilt_limit_enabled(&mut self, enabled: bool);

    fn set_configuring(&mut self, flag: ConfiguringFlags, active: bool);

    /// Mark the pan-tilt mechanism power-on step as in progress.
    fn set_power_on_in_progress(&mut self, active: bool);

    /// Mark the pan-tilt mechanism power-off step as in progress.
    fn set_power_off_in_progress(&mut self, active: bool);

    /// Re-enable/disable the pan-tilt function limit for the camera.
    fn set_function_limit_for_camera(&mut self, enabled: bool);
}
