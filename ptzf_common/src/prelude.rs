//! Convenience re-exports for downstream crates.

pub use crate::config::{BootConfig, PtzfConfig, SpeedConfig};
pub use crate::error::RequestError;
pub use crate::state::{
    ConfiguringFlags, CoordinateType, ImageFlip, LimitEditItem, LockControlStatus, LockSensor,
    PanTiltFinalizingStatus, PanTiltInitializingStatus, PowerPhase,
};
