//! Lock/power transition decision function.
//!
//! Pure mapping from (commanded lock status, physical sensor, device
//! power phase) to the single next action that converges the commanded
//! state towards the sensor. Mid-transition power phases defer every
//! lock transition.

use ptzf_common::state::{LockControlStatus, LockSensor, PowerPhase};

/// Next transition action of the lock/power machine.
///
/// The decision matrix yields `FinalizeForLock`, `CommitLocked`,
/// `PowerOnForUnlock`, `CommitUnlocked` or `None`; `PowerOffForLock`
/// and `AbortToLock` arise from the completion handlers mid-sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionAction {
    /// Already consistent, or deferred.
    None,
    /// Unlock→Lock step 1: finalize in-flight pan-tilt operations.
    FinalizeForLock,
    /// Unlock→Lock step 2: power the pan-tilt mechanism off.
    PowerOffForLock,
    /// Sensor locked while device power is not on: set LOCKED directly.
    CommitLocked,
    /// Lock→Unlock step 1: power the pan-tilt mechanism on.
    PowerOnForUnlock,
    /// Sensor unlocked while device power is not on: set unlocked
    /// directly.
    CommitUnlocked,
    /// Sensor flipped back to locked during an unlock sequence: route
    /// into the lock sequence.
    AbortToLock,
}

/// Decide the next action for the current observations.
pub const fn decide(
    status: LockControlStatus,
    sensor: LockSensor,
    power: PowerPhase,
) -> TransitionAction {
    if power.is_transitioning() {
        return TransitionAction::None;
    }
    match sensor {
        LockSensor::Locked => match status {
            LockControlStatus::Locked => TransitionAction::None,
            LockControlStatus::None
            | LockControlStatus::Unlocked
            | LockControlStatus::UnlockedAfterBooting => match power {
                PowerPhase::PowerOn => TransitionAction::FinalizeForLock,
                _ => TransitionAction::CommitLocked,
            },
        },
        LockSensor::Unlocked => match status {
            LockControlStatus::Unlocked | LockControlStatus::UnlockedAfterBooting => {
                TransitionAction::None
            }
            LockControlStatus::None | LockControlStatus::Locked => match power {
                PowerPhase::PowerOn => TransitionAction::PowerOnForUnlock,
                _ => TransitionAction::CommitUnlocked,
            },
        },
    }
}
