//! Prelude module for common re-exports.
//!
//! ```rust
//! use lkas_common::prelude::*;
//! ```

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{ConfigError, ConfigLoader, LkasConfig, LogLevel, SharedConfig};
pub use crate::params::{AlertConfig, CadenceConfig, ControllerParams, TorqueLimits};

// ─── System Constants ───────────────────────────────────────────────
pub use crate::consts::{CYCLE_TIME_US, MAX_MESSAGES_PER_CYCLE};

// ─── Per-Cycle Data ─────────────────────────────────────────────────
pub use crate::command::{ActuationRequest, CruiseIntent, CycleCommand};
pub use crate::message::{AlertCommand, ButtonCommand, ButtonKind, OutboundMessage, SteeringCommand};
pub use crate::vehicle::VehicleState;
