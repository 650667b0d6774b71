//! Lock/power transition state machine.
//!
//! Single-threaded: entry points run on the controller's message loop,
//! and "asynchronous" hardware steps are fire-and-forget requests whose
//! completions come back through the same loop. At most one correlated
//! operation is outstanding at a time, enforced by the executing guard.
//!
//! Every completion handler re-runs the decision function before the
//! guard clears, because the physical sensor or the device power phase
//! may have changed again during the asynchronous step.

use tracing::{debug, error, warn};

use ptzf_common::state::{
    LockControlStatus, LockSensor, PanTiltFinalizingStatus, PanTiltInitializingStatus,
};

use crate::lock::decision::{decide, TransitionAction};
use crate::port::hardware::{CompletionResult, SequenceId};
use crate::port::TransitionPorts;

/// Orchestrator for lock/unlock and pan-tilt power sequencing.
#[derive(Debug)]
pub struct LockTransitionMachine {
    /// Re-entrancy guard: set while a transition is being executed,
    /// cleared when the decision function returns no action.
    executing: bool,
    initializing: PanTiltInitializingStatus,
    initializing_seq: Option<SequenceId>,
    finalizing: PanTiltFinalizingStatus,
    finalizing_seq: Option<SequenceId>,
    next_seq: u32,
}

impl Default for LockTransitionMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl LockTransitionMachine {
    pub const fn new() -> Self {
        Self {
            executing: false,
            initializing: PanTiltInitializingStatus::None,
            initializing_seq: None,
            finalizing: PanTiltFinalizingStatus::None,
            finalizing_seq: None,
            next_seq: 1,
        }
    }

    /// Whether a transition is currently executing.
    #[inline]
    pub const fn is_executing(&self) -> bool {
        self.executing
    }

    #[inline]
    pub const fn initializing_status(&self) -> PanTiltInitializingStatus {
        self.initializing
    }

    #[inline]
    pub const fn finalizing_status(&self) -> PanTiltFinalizingStatus {
        self.finalizing
    }

    fn alloc_seq(&mut self) -> SequenceId {
        let seq = SequenceId(self.next_seq);
        self.next_seq = self.next_seq.wrapping_add(1);
        seq
    }

    /// Entry point for any change of the lock sensor, the device power
    /// phase, or the commanded lock status.
    ///
    /// Re-entrant calls while a step is outstanding are absorbed; the
    /// pending step's completion re-evaluates anyway.
    pub fn process<P>(&mut self, ports: &mut P)
    where
        P: TransitionPorts + ?Sized,
    {
        if self.executing {
            debug!("lock transition already executing, deferring");
            return;
        }
        self.evaluate(ports);
    }

    /// Run the decision function and dispatch its outcome. Clears the
    /// guard when there is nothing to do, sets it when an action is
    /// dispatched.
    fn evaluate<P>(&mut self, ports: &mut P)
    where
        P: TransitionPorts + ?Sized,
    {
        let action = decide(
            ports.lock_control_status(),
            ports.lock_sensor(),
            ports.power_phase(),
        );
        match action {
            TransitionAction::None => {
                self.executing = false;
            }
            _ => {
                self.executing = true;
                self.dispatch(action, ports);
            }
        }
    }

    fn dispatch<P>(&mut self, action: TransitionAction, ports: &mut P)
    where
        P: TransitionPorts + ?Sized,
    {
        debug!(?action, "dispatching lock transition");
        match action {
            TransitionAction::None => {}

            TransitionAction::FinalizeForLock => {
                let seq = self.alloc_seq();
                self.finalizing = PanTiltFinalizingStatus::PanTiltFinalizing;
                self.finalizing_seq = Some(seq);
                ports.finalize_pan_tilt(seq);
            }

            TransitionAction::PowerOffForLock => {
                ports.set_power_off_in_progress(true);
                ports.set_lock_event_suppressed(true);
                let seq = self.alloc_seq();
                self.finalizing = PanTiltFinalizingStatus::PanTiltPowerOff;
                self.finalizing_seq = Some(seq);
                ports.power_off_pan_tilt(seq);
            }

            TransitionAction::CommitLocked => {
                ports.set_lock_control_status(LockControlStatus::Locked);
                self.evaluate(ports);
            }

            TransitionAction::PowerOnForUnlock => {
                // The sensor may have flipped back between decision and
                // dispatch; re-confirm before powering on.
                if ports.lock_sensor() == LockSensor::Locked {
                    warn!("lock sensor flipped during unlock dispatch, re-locking");
                    self.evaluate(ports);
                    return;
                }
                ports.set_power_on_in_progress(true);
                ports.set_lock_event_suppressed(true);
                let seq = self.alloc_seq();
                self.initializing = PanTiltInitializingStatus::PanTiltPowerOn;
                self.initializing_seq = Some(seq);
                ports.power_on_pan_tilt(seq);
            }

            TransitionAction::CommitUnlocked => {
                ports.set_lock_control_status(LockControlStatus::UnlockedAfterBooting);
                self.evaluate(ports);
            }

            TransitionAction::AbortToLock => {
                self.initializing = PanTiltInitializingStatus::None;
                self.initializing_seq = None;
                ports.set_power_on_in_progress(false);
                self.dispatch(TransitionAction::PowerOffForLock, ports);
            }
        }
    }

    /// Process a hardware completion event for one of this machine's
    /// outstanding requests.
    ///
    /// A completion that matches no outstanding request is logged and
    /// dropped; it is not retried. A failed result abandons the pending
    /// operation with the guard left set — recovery is an external
    /// power-cycle or re-sync.
    pub fn handle_completion<P>(&mut self, seq: SequenceId, result: CompletionResult, ports: &mut P)
    where
        P: TransitionPorts + ?Sized,
    {
        if self.finalizing == PanTiltFinalizingStatus::PanTiltFinalizing
            && self.finalizing_seq == Some(seq)
        {
            self.finalizing = PanTiltFinalizingStatus::None;
            self.finalizing_seq = None;
            if result != CompletionResult::Ok {
                error!(seq = seq.0, "pan-tilt finalize failed, abandoning lock transition");
                return;
            }
            self.dispatch(TransitionAction::PowerOffForLock, ports);
            return;
        }

        if self.finalizing == PanTiltFinalizingStatus::PanTiltPowerOff
            && self.finalizing_seq == Some(seq)
        {
            self.finalizing = PanTiltFinalizingStatus::None;
            self.finalizing_seq = None;
            if result != CompletionResult::Ok {
                error!(seq = seq.0, "pan-tilt power-off failed, abandoning lock transition");
                return;
            }
            ports.set_lock_control_status(LockControlStatus::Locked);
            ports.set_function_limit_for_camera(true);
            ports.set_lock_event_suppressed(false);
            ports.set_power_off_in_progress(false);
            self.evaluate(ports);
            return;
        }

        if self.initializing == PanTiltInitializingStatus::PanTiltPowerOn
            && self.initializing_seq == Some(seq)
        {
            self.initializing = PanTiltInitializingStatus::None;
            self.initializing_seq = None;
            if result != CompletionResult::Ok {
                error!(seq = seq.0, "pan-tilt power-on failed, abandoning unlock transition");
                return;
            }
            // Re-confirm the sensor: it may have flipped back to locked
            // while the power-on was in flight.
            if ports.lock_sensor() == LockSensor::Locked {
                warn!("lock sensor flipped during power-on, aborting to lock");
                self.dispatch(TransitionAction::AbortToLock, ports);
                return;
            }
            ports.set_lock_control_status(LockControlStatus::UnlockedAfterBooting);
            ports.set_lock_event_suppressed(false);
            ports.set_power_on_in_progress(false);
            self.evaluate(ports);
            return;
        }

        error!(seq = seq.0, ?result, "unexpected lock transition completion, dropping");
    }
}
