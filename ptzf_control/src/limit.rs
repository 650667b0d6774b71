//! Pan/tilt travel-limit subsystem: envelope construction/validation
//! and the request sequencer in front of the hardware dispatch port.

pub mod controller;
pub mod envelope;

pub use controller::PanTiltLimitController;
pub use envelope::{LimitEdit, LimitEnvelope};
