//! # PTZF Control Library
//!
//! Pan/tilt/zoom/focus motion-control core for a remote camera head.
//! Provides the coordinate conversion engine between the wire protocol's
//! raw position words and signed internal units, builds and validates
//! pan/tilt travel-limit envelopes, and sequences the mechanical lock /
//! pan-tilt power transitions.
//!
//! ## Layers
//!
//! 1. **coord** — Model-keyed coordinate tables and value conversion
//! 2. **motion** — Absolute/relative range checks and speed ceilings
//! 3. **limit** — Travel-limit envelope builder and apply controller
//! 4. **lock** — Lock/power transition decision + state machine
//! 5. **port** — Traits at the seams: status store, hardware dispatch,
//!    capability queries, event suppression
//!
//! ## Single-Threaded Core
//!
//! The core holds no locks: all entry points run on the controller's
//! message loop, and asynchronous hardware steps correlate back through
//! caller-assigned sequence ids on that same loop.

pub mod config;
pub mod coord;
pub mod limit;
pub mod lock;
pub mod motion;
pub mod port;
