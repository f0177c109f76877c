//! # LKAS Control Unit Library
//!
//! Per-cycle actuator-command sequencer for lateral steering (LKAS) and
//! stock adaptive-cruise button emulation. Each cycle takes a decoded
//! vehicle-state snapshot plus the desired actuation and cruise intent, and
//! produces the ordered outbound messages for an external encoder.
//!
//! ## Components
//!
//! 1. **Torque limiter** ([`limiter`]): pure bound on steering torque
//!    against the absolute limit, the per-cycle rate and driver override.
//! 2. **Cruise arbitration** ([`arbitration`]): debounced cancel/resume
//!    state with brake hold-off.
//! 3. **Command sequencer** ([`sequencer`]): owns the session counters and
//!    schedules steering, button and alert messages on their cadences.
//!
//! ## Zero-Allocation Cycle
//!
//! `CommandSequencer::step` performs no I/O and no heap allocation. The
//! per-cycle output lives in a fixed-capacity buffer ([`output`]).

pub mod arbitration;
pub mod cadence;
pub mod config;
pub mod limiter;
pub mod output;
pub mod replay;
pub mod sequencer;
pub mod stats;
