//! LKAS Common Library
//!
//! Shared constants, per-cycle data contracts and configuration loading
//! for the LKAS workspace crates.
//!
//! # Module Structure
//!
//! - [`consts`] - Default limits, cadences and validation bounds
//! - [`config`] - Configuration loading traits and types
//! - [`params`] - Torque limits, cadences and alert switches with validation
//! - [`vehicle`] - Decoded vehicle-state snapshot (input)
//! - [`command`] - Per-cycle actuation and cruise intent (input)
//! - [`message`] - Abstract outbound messages (output)
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! ```rust
//! use lkas_common::prelude::*;
//!
//! let params = ControllerParams::default();
//! assert!(params.validate().is_ok());
//! ```

pub mod command;
pub mod config;
pub mod consts;
pub mod message;
pub mod params;
pub mod prelude;
pub mod vehicle;
