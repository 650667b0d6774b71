//! External collaborator interfaces.
//!
//! The core never reaches for process-wide singletons: every component
//! takes the ports it needs at the call site, which keeps unit tests
//! deterministic without process fixtures. Concrete transports (the
//! VISCA protocol layer, the message-queue router, persisted backup
//! storage) live behind these traits and are out of scope here.

pub mod capability;
pub mod hardware;
pub mod status;

pub use capability::CapabilityQuery;
pub use hardware::{CompletionResult, EventSuppression, HardwareDispatch, SequenceId};
pub use status::{StatusRead, StatusWrite};

/// Everything the lock/power transition machine needs from its host.
pub trait TransitionPorts: StatusRead + StatusWrite + HardwareDispatch + EventSuppression {}

impl<T> TransitionPorts for T where
    T: StatusRead + StatusWrite + HardwareDispatch + EventSuppression
{
}
