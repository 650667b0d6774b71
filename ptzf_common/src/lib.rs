//! PTZF Common Library
//!
//! Shared state enums, wire constants, error types and configuration
//! structures for the PTZF motion-control workspace.
//!
//! # Module Structure
//!
//! - [`state`] - `#[repr(u8)]` state enums and busy-flag bitflags
//! - [`consts`] - VISCA wire-field constants and speed table bounds
//! - [`config`] - TOML-loadable configuration structures
//! - [`error`] - request/validation error types
//! - [`prelude`] - common re-exports for convenience

pub mod config;
pub mod consts;
pub mod error;
pub mod prelude;
pub mod state;
