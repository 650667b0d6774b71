//! Travel-limit request sequencing.
//!
//! Builds a validated envelope, persists it, raises the pan-tilt-limit
//! busy flag and dispatches the hardware command; the flag drops when
//! the matching completion arrives. At most one limit operation is in
//! flight at a time.

use tracing::{debug, error};

use ptzf_common::error::RequestError;
use ptzf_common::state::ConfiguringFlags;

use crate::coord::ValueManager;
use crate::limit::envelope::{LimitEdit, LimitEnvelope};
use crate::port::hardware::{CompletionResult, HardwareDispatch, SequenceId};
use crate::port::status::{StatusRead, StatusWrite};

/// Sequencer for travel-limit configuration requests.
#[derive(Debug, Default)]
pub struct PanTiltLimitController {
    pending: Option<SequenceId>,
    next_seq: u32,
}

impl PanTiltLimitController {
    pub const fn new() -> Self {
        Self {
            pending: None,
            next_seq: 1,
        }
    }

    /// Sequence id of the outstanding request, if any.
    #[inline]
    pub const fn pending(&self) -> Option<SequenceId> {
        self.pending
    }

    fn alloc_seq(&mut self) -> SequenceId {
        let seq = SequenceId(self.next_seq);
        self.next_seq = self.next_seq.wrapping_add(1);
        seq
    }

    /// Validate and dispatch one limit edit.
    ///
    /// Rejects with [`RequestError::Busy`] while a previous limit
    /// operation (ours or another configurator's) is still in flight.
    /// On validation failure nothing is persisted or dispatched.
    pub fn request<P>(
        &mut self,
        edit: &LimitEdit,
        vm: &ValueManager,
        ports: &mut P,
    ) -> Result<SequenceId, RequestError>
    where
        P: StatusRead + StatusWrite + HardwareDispatch + ?Sized,
    {
        if self.pending.is_some()
            || ports.configuring().contains(ConfiguringFlags::PAN_TILT_LIMIT)
        {
            return Err(RequestError::Busy("pan-tilt limit"));
        }

        let envelope = LimitEnvelope::build(edit, ports, vm)?;

        // Persist the stored view: axis-off edits keep the configured
        // pair in the store while hardware reverts to defaults.
        ports.set_limits(
            envelope.stored_left(),
            envelope.stored_right(),
            envelope.stored_up(),
            envelope.stored_down(),
        );
        ports.set_pan_limit_enabled(envelope.pan_limit_enabled());
        ports.set_tilt_limit_enabled(envelope.tilt_limit_enabled());
        ports.set_configuring(ConfiguringFlags::PAN_TILT_LIMIT, true);

        let seq = self.alloc_seq();
        debug!(seq = seq.0, item = ?envelope.item(), "dispatching pan-tilt limit");
        if edit.is_clear() {
            ports.clear_pan_tilt_limit(&envelope, seq);
        } else {
            ports.set_pan_tilt_limit(&envelope, seq);
        }
        self.pending = Some(seq);
        Ok(seq)
    }

    /// Process a limit-command completion event.
    ///
    /// A completion with an unknown sequence id is logged and dropped.
    pub fn handle_completion<P>(&mut self, seq: SequenceId, result: CompletionResult, ports: &mut P)
    where
        P: StatusWrite + ?Sized,
    {
        if self.pending != Some(seq) {
            error!(seq = seq.0, "unexpected pan-tilt limit completion");
            return;
        }
        if result != CompletionResult::Ok {
            error!(seq = seq.0, "pan-tilt limit command failed");
        }
        self.pending = None;
        ports.set_configuring(ConfiguringFlags::PAN_TILT_LIMIT, false);
    }
}
