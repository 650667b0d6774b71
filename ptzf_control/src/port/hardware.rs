//! Hardware command dispatch port.
//!
//! All operations are fire-and-forget: the call returns immediately and
//! exactly one completion event later arrives on the controller's queue
//! carrying the same caller-assigned sequence id and a result code.
//! Completions are not guaranteed to arrive in issue order.

use serde::{Deserialize, Serialize};

use crate::limit::LimitEnvelope;

/// Caller-assigned token correlating an asynchronous hardware request
/// with its later completion event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SequenceId(pub u32);

/// Result code carried by a completion event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum CompletionResult {
    Ok = 0,
    Error = 1,
}

impl CompletionResult {
    #[inline]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Ok),
            1 => Some(Self::Error),
            _ => None,
        }
    }
}

/// Asynchronous command surface of the pan/tilt hardware layer.
pub trait HardwareDispatch {
    /// Flush in-flight motion/configuration operations.
    fn finalize_pan_tilt(&mut self, seq: SequenceId);

    /// Power the pan-tilt mechanism on.
    fn power_on_pan_tilt(&mut self, seq: SequenceId);

    /// Power the pan-tilt mechanism off.
    fn power_off_pan_tilt(&mut self, seq: SequenceId);

    /// Apply a validated travel-limit envelope.
    fn set_pan_tilt_limit(&mut self, envelope: &LimitEnvelope, seq: SequenceId);

    /// Clear travel limits back to the envelope's defaults.
    fn clear_pan_tilt_limit(&mut self, envelope: &LimitEnvelope, seq: SequenceId);
}

/// Downstream event-propagation gate.
///
/// Suppression must be idempotent: setting an already-set state is a
/// no-op at the transport level.
pub trait EventSuppression {
    /// Enable/disable propagation of lock-status-changed events to
    /// downstream listeners.
    fn set_lock_event_suppressed(&mut self, suppressed: bool);
}
