//! End-to-end lock/power transition scenarios driven through the full
//! port surface: a fake device status store plus a recording hardware
//! dispatcher, with completions fed back the way the controller's
//! message loop would.

use ptzf_common::state::{
    ConfiguringFlags, ImageFlip, LockControlStatus, LockSensor, PowerPhase,
};
use ptzf_control::lock::LockTransitionMachine;
use ptzf_control::port::hardware::{
    CompletionResult, EventSuppression, HardwareDispatch, SequenceId,
};
use ptzf_control::port::status::{StatusRead, StatusWrite};
use ptzf_control::limit::LimitEnvelope;

/// Route machine tracing through the test harness capture.
fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

// ─── Device Fixture ─────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Finalize(SequenceId),
    PowerOn(SequenceId),
    PowerOff(SequenceId),
}

/// Fake device: persisted status store plus recorded hardware commands.
struct Device {
    sensor: LockSensor,
    power: PowerPhase,
    status: LockControlStatus,
    suppressed: bool,
    power_on_in_progress: bool,
    power_off_in_progress: bool,
    function_limit: bool,
    commands: Vec<Command>,
}

impl Device {
    fn new(status: LockControlStatus, sensor: LockSensor, power: PowerPhase) -> Self {
        Self {
            sensor,
            power,
            status,
            suppressed: false,
            power_on_in_progress: false,
            power_off_in_progress: false,
            function_limit: false,
            commands: Vec::new(),
        }
    }

    /// Sequence id of the most recently issued hardware command.
    fn last_seq(&self) -> SequenceId {
        match *self.commands.last().expect("no command issued") {
            Command::Finalize(seq) | Command::PowerOn(seq) | Command::PowerOff(seq) => seq,
        }
    }
}

impl StatusRead for Device {
    fn pan_position(&self) -> u32 {
        0
    }
    fn tilt_position(&self) -> u32 {
        0
    }
    fn limit_left(&self) -> u32 {
        0
    }
    fn limit_right(&self) -> u32 {
        0
    }
    fn limit_up(&self) -> u32 {
        0
    }
    fn limit_down(&self) -> u32 {
        0
    }
    fn pan_limit_enabled(&self) -> bool {
        false
    }
    fn tilt_limit_enabled(&self) -> bool {
        false
    }
    fn image_flip_boot(&self) -> ImageFlip {
        ImageFlip::Off
    }
    fn image_flip_live(&self) -> ImageFlip {
        ImageFlip::Off
    }
    fn lock_control_status(&self) -> LockControlStatus {
        self.status
    }
    fn lock_sensor(&self) -> LockSensor {
        self.sensor
    }
    fn power_phase(&self) -> PowerPhase {
        self.power
    }
    fn slow_mode(&self) -> bool {
        false
    }
    fn configuring(&self) -> ConfiguringFlags {
        ConfiguringFlags::empty()
    }
}

impl StatusWrite for Device {
    fn set_lock_control_status(&mut self, status: LockControlStatus) {
        self.status = status;
    }
    fn set_pan_tilt_position(&mut self, _pan: u32, _tilt: u32) {}
    fn set_limits(&mut self, _left: u32, _right: u32, _up: u32, _down: u32) {}
    fn set_pan_limit_enabled(&mut self, _enabled: bool) {}
    fn set_tilt_limit_enabled(&mut self, _enabled: bool) {}
    fn set_configuring(&mut self, _flag: ConfiguringFlags, _active: bool) {}
    fn set_power_on_in_progress(&mut self, active: bool) {
        self.power_on_in_progress = active;
    }
    fn set_power_off_in_progress(&mut self, active: bool) {
        self.power_off_in_progress = active;
    }
    fn set_function_limit_for_camera(&mut self, enabled: bool) {
        self.function_limit = enabled;
    }
}

impl HardwareDispatch for Device {
    fn finalize_pan_tilt(&mut self, seq: SequenceId) {
        self.commands.push(Command::Finalize(seq));
    }
    fn power_on_pan_tilt(&mut self, seq: SequenceId) {
        self.commands.push(Command::PowerOn(seq));
    }
    fn power_off_pan_tilt(&mut self, seq: SequenceId) {
        self.commands.push(Command::PowerOff(seq));
    }
    fn set_pan_tilt_limit(&mut self, _envelope: &LimitEnvelope, _seq: SequenceId) {}
    fn clear_pan_tilt_limit(&mut self, _envelope: &LimitEnvelope, _seq: SequenceId) {}
}

impl EventSuppression for Device {
    fn set_lock_event_suppressed(&mut self, suppressed: bool) {
        self.suppressed = suppressed;
    }
}

// ─── Scenarios ──────────────────────────────────────────────────────

#[test]
fn operator_unlocks_powered_head() {
    init_tracing();
    let mut device = Device::new(
        LockControlStatus::Locked,
        LockSensor::Unlocked,
        PowerPhase::PowerOn,
    );
    let mut sm = LockTransitionMachine::new();

    sm.process(&mut device);
    assert_eq!(device.commands, vec![Command::PowerOn(SequenceId(1))]);
    assert!(device.suppressed);
    assert!(device.power_on_in_progress);
    // Still locked while the power-on is in flight.
    assert_eq!(device.status, LockControlStatus::Locked);

    let seq = device.last_seq();
    sm.handle_completion(seq, CompletionResult::Ok, &mut device);
    assert_eq!(device.status, LockControlStatus::UnlockedAfterBooting);
    assert!(!device.suppressed);
    assert!(!device.power_on_in_progress);
    assert!(!sm.is_executing());
    assert_eq!(device.commands.len(), 1);
}

#[test]
fn operator_locks_powered_head_in_three_steps() {
    init_tracing();
    let mut device = Device::new(
        LockControlStatus::UnlockedAfterBooting,
        LockSensor::Locked,
        PowerPhase::PowerOn,
    );
    let mut sm = LockTransitionMachine::new();

    // Step 1: flush in-flight operations.
    sm.process(&mut device);
    assert_eq!(device.commands, vec![Command::Finalize(SequenceId(1))]);

    // Step 2: finalize completion triggers the power-off.
    sm.handle_completion(device.last_seq(), CompletionResult::Ok, &mut device);
    assert_eq!(device.commands.len(), 2);
    assert!(matches!(device.commands[1], Command::PowerOff(_)));
    assert!(device.suppressed);
    assert!(device.power_off_in_progress);

    // Step 3: power-off completion commits the lock.
    sm.handle_completion(device.last_seq(), CompletionResult::Ok, &mut device);
    assert_eq!(device.status, LockControlStatus::Locked);
    assert!(device.function_limit);
    assert!(!device.suppressed);
    assert!(!device.power_off_in_progress);
    assert!(!sm.is_executing());
    assert_eq!(device.commands.len(), 2);
}

#[test]
fn repeated_sensor_events_during_transition_issue_nothing() {
    init_tracing();
    let mut device = Device::new(
        LockControlStatus::UnlockedAfterBooting,
        LockSensor::Locked,
        PowerPhase::PowerOn,
    );
    let mut sm = LockTransitionMachine::new();
    sm.process(&mut device);

    // Bounce: a chattering sensor re-delivers change events.
    for _ in 0..5 {
        sm.process(&mut device);
    }
    assert_eq!(device.commands.len(), 1);
}

#[test]
fn relock_during_power_on_ends_locked() {
    init_tracing();
    let mut device = Device::new(
        LockControlStatus::Locked,
        LockSensor::Unlocked,
        PowerPhase::PowerOn,
    );
    let mut sm = LockTransitionMachine::new();
    sm.process(&mut device);
    let power_on_seq = device.last_seq();

    // The operator re-locks the mechanism while it is powering on.
    device.sensor = LockSensor::Locked;
    sm.process(&mut device); // absorbed by the guard
    assert_eq!(device.commands.len(), 1);

    sm.handle_completion(power_on_seq, CompletionResult::Ok, &mut device);
    // Power-off issued instead of committing unlocked.
    assert_eq!(device.commands.len(), 2);
    assert!(matches!(device.commands[1], Command::PowerOff(_)));
    assert!(!device.power_on_in_progress);
    assert!(device.power_off_in_progress);
    assert_ne!(device.status, LockControlStatus::UnlockedAfterBooting);

    sm.handle_completion(device.last_seq(), CompletionResult::Ok, &mut device);
    assert_eq!(device.status, LockControlStatus::Locked);
    assert!(device.function_limit);
    assert!(!sm.is_executing());
}

#[test]
fn boot_with_device_powered_off_resolves_without_hardware() {
    init_tracing();
    // Boot reveals the mechanism locked; device power is off, so the
    // status commits directly.
    let mut device = Device::new(
        LockControlStatus::None,
        LockSensor::Locked,
        PowerPhase::PowerOff,
    );
    let mut sm = LockTransitionMachine::new();
    sm.process(&mut device);
    assert_eq!(device.status, LockControlStatus::Locked);
    assert!(device.commands.is_empty());
    assert!(!sm.is_executing());

    // Same with the sensor unlocked.
    let mut device = Device::new(
        LockControlStatus::None,
        LockSensor::Unlocked,
        PowerPhase::PowerOff,
    );
    let mut sm = LockTransitionMachine::new();
    sm.process(&mut device);
    assert_eq!(device.status, LockControlStatus::UnlockedAfterBooting);
    assert!(device.commands.is_empty());
}

#[test]
fn transitioning_power_phase_defers_until_stable() {
    init_tracing();
    let mut device = Device::new(
        LockControlStatus::Locked,
        LockSensor::Unlocked,
        PowerPhase::ProcessingOn,
    );
    let mut sm = LockTransitionMachine::new();
    sm.process(&mut device);
    assert!(device.commands.is_empty());
    assert!(!sm.is_executing());

    // Power settles, the next event kicks the sequence off.
    device.power = PowerPhase::PowerOn;
    sm.process(&mut device);
    assert_eq!(device.commands, vec![Command::PowerOn(SequenceId(1))]);
}

#[test]
fn stale_completion_does_not_advance_sequence() {
    init_tracing();
    let mut device = Device::new(
        LockControlStatus::UnlockedAfterBooting,
        LockSensor::Locked,
        PowerPhase::PowerOn,
    );
    let mut sm = LockTransitionMachine::new();
    sm.process(&mut device);
    let real_seq = device.last_seq();

    sm.handle_completion(SequenceId(real_seq.0 + 7), CompletionResult::Ok, &mut device);
    assert_eq!(device.commands.len(), 1);
    assert!(sm.is_executing());
    assert_ne!(device.status, LockControlStatus::Locked);

    sm.handle_completion(real_seq, CompletionResult::Ok, &mut device);
    assert_eq!(device.commands.len(), 2);
}

#[test]
fn failed_hardware_step_halts_sequence() {
    init_tracing();
    let mut device = Device::new(
        LockControlStatus::UnlockedAfterBooting,
        LockSensor::Locked,
        PowerPhase::PowerOn,
    );
    let mut sm = LockTransitionMachine::new();
    sm.process(&mut device);

    sm.handle_completion(device.last_seq(), CompletionResult::Error, &mut device);
    // No power-off issued and the status never commits.
    assert_eq!(device.commands.len(), 1);
    assert_ne!(device.status, LockControlStatus::Locked);
    // The guard stays set until external recovery.
    assert!(sm.is_executing());
    sm.process(&mut device);
    assert_eq!(device.commands.len(), 1);
}

#[test]
fn converged_states_stay_quiet() {
    init_tracing();
    for (status, sensor) in [
        (LockControlStatus::Locked, LockSensor::Locked),
        (LockControlStatus::Unlocked, LockSensor::Unlocked),
        (LockControlStatus::UnlockedAfterBooting, LockSensor::Unlocked),
    ] {
        let mut device = Device::new(status, sensor, PowerPhase::PowerOn);
        let mut sm = LockTransitionMachine::new();
        sm.process(&mut device);
        assert!(device.commands.is_empty(), "{status:?}/{sensor:?}");
        assert!(!sm.is_executing());
        assert_eq!(device.status, status);
    }
}
