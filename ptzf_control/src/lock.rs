//! Mechanical lock / pan-tilt power transition orchestration.
//!
//! Split into a pure decision function ([`decision::decide`]) and a
//! stateful executor ([`machine::LockTransitionMachine`]) that owns the
//! re-entrancy guard and the outstanding-operation bookkeeping.

pub mod decision;
pub mod machine;

pub use decision::{decide, TransitionAction};
pub use machine::LockTransitionMachine;
