//! Per-cycle command sequencer.
//!
//! Evaluates three concerns every cycle, in this order:
//!
//! 1. **Steering**: scale the normalized request by `max_torque` (or use
//!    zero when lateral control is not active), run it through the torque
//!    limiter against the last applied torque, store the result.
//! 2. **Cruise arbitration**: cancel/resume button emulation with the brake
//!    hold-off (see [`crate::arbitration`]).
//! 3. **Alerts**: HUD alert state on the alert cadence.
//!
//! Then the cycle index advances by one (wrapping).
//!
//! ## Output order
//! The returned messages are always alert (if due), then button (if due),
//! then steering (always present, always last). Downstream bus arbitration
//! relies on this order; callers must not reorder within a cycle.
//!
//! ## Conflicting intents
//! Cancel and resume asserted together are accepted and resolved as cancel.

use lkas_common::command::CycleCommand;
use lkas_common::config::ConfigError;
use lkas_common::message::{AlertCommand, ButtonCommand, OutboundMessage, SteeringCommand};
use lkas_common::params::{AlertConfig, ControllerParams, TorqueLimits};
use lkas_common::vehicle::VehicleState;

use crate::arbitration::{CruiseArbiter, CruiseDecision};
use crate::cadence::{Cadence, Schedule};
use crate::limiter::limit_torque_detailed;
use crate::output::CycleOutput;

// ─── Session State ──────────────────────────────────────────────────

/// Mutable per-session state, owned by exactly one control loop.
///
/// Created once at session start (all zero) and passed by `&mut` into
/// every [`CommandSequencer::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SequencerState {
    /// Torque applied on the previous cycle. Always within `±max_torque`.
    pub last_applied_torque: i32,
    /// Consecutive cycles with cancel asserted; zero whenever cancel is not.
    pub cancel_hold_counter: u32,
    /// Cycle counter. Only its remainders matter, so wrapping is harmless.
    pub cycle_index: u64,
}

impl SequencerState {
    /// Fresh session state.
    pub const fn new() -> Self {
        Self {
            last_applied_torque: 0,
            cancel_hold_counter: 0,
            cycle_index: 0,
        }
    }
}

/// Diagnostic side-channel of one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleTrace {
    /// Cycle index the step ran on.
    pub cycle_index: u64,
    /// Arbitration outcome.
    pub cruise: CruiseDecision,
    /// The limiter yielded to the driver.
    pub driver_override: bool,
    /// An alert was emitted.
    pub alert_sent: bool,
}

// ─── Sequencer ──────────────────────────────────────────────────────

/// Validated, immutable sequencing rules for one session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommandSequencer {
    limits: TorqueLimits,
    arbiter: CruiseArbiter,
    alert_cadence: Cadence,
    alerts: AlertConfig,
}

impl CommandSequencer {
    /// Build a sequencer from controller parameters.
    ///
    /// # Errors
    /// `ConfigError::ValidationError` if any parameter is out of bounds.
    pub fn new(params: &ControllerParams) -> Result<Self, ConfigError> {
        params.validate()?;
        let schedule = Schedule::from_config(&params.cadence).ok_or_else(|| {
            ConfigError::ValidationError("cadence divisors must be at least 1".to_string())
        })?;

        Ok(Self {
            limits: params.torque,
            arbiter: CruiseArbiter::new(schedule, params.cadence.cancel_hold_threshold),
            alert_cadence: schedule.alert,
            alerts: params.alerts,
        })
    }

    /// Torque limits in effect.
    #[inline]
    pub const fn limits(&self) -> &TorqueLimits {
        &self.limits
    }

    /// Run one control cycle.
    pub fn step(
        &self,
        state: &mut SequencerState,
        vehicle: &VehicleState,
        command: &CycleCommand,
    ) -> CycleOutput {
        self.step_traced(state, vehicle, command).0
    }

    /// Run one control cycle, also returning its diagnostic trace.
    pub fn step_traced(
        &self,
        state: &mut SequencerState,
        vehicle: &VehicleState,
        command: &CycleCommand,
    ) -> (CycleOutput, CycleTrace) {
        let cycle_index = state.cycle_index;

        // ── (a) Steering ──
        let requested = self.requested_torque(command);
        let limited = limit_torque_detailed(
            requested,
            state.last_applied_torque,
            vehicle.driver_torque,
            &self.limits,
        );
        state.last_applied_torque = limited.torque;
        let steering = SteeringCommand {
            torque: limited.torque,
            frame: cycle_index,
        };

        // ── (b) Cruise arbitration ──
        if command.cruise.is_conflicting() {
            tracing::debug!(cycle_index, "cancel and resume both asserted, cancel wins");
        }
        let cruise = self.arbiter.step(
            command.cruise,
            vehicle.brake_pressed,
            cycle_index,
            &mut state.cancel_hold_counter,
        );
        let button = cruise.button().map(|kind| {
            OutboundMessage::Button(ButtonCommand {
                kind,
                counter: vehicle.button_counter,
            })
        });

        // ── (c) Alerts ──
        let alert = self
            .alert_cadence
            .is_due(cycle_index)
            .then(|| OutboundMessage::Alert(self.alert_for(vehicle)));

        state.cycle_index = cycle_index.wrapping_add(1);

        let trace = CycleTrace {
            cycle_index,
            cruise,
            driver_override: limited.driver_override,
            alert_sent: alert.is_some(),
        };
        let applied_steer = f64::from(limited.torque) / f64::from(self.limits.max_torque);
        (
            CycleOutput::assemble(alert, button, steering, applied_steer),
            trace,
        )
    }

    /// `round(steer * max_torque)` when active, else zero.
    fn requested_torque(&self, command: &CycleCommand) -> i32 {
        if !command.actuation.active {
            return 0;
        }
        let max = f64::from(self.limits.max_torque);
        // NaN saturates to 0 in the cast; the clamp keeps the product in ±max.
        (command.actuation.steer.clamp(-1.0, 1.0) * max).round() as i32
    }

    fn alert_for(&self, vehicle: &VehicleState) -> AlertCommand {
        AlertCommand {
            lane_departure: vehicle.lane_departure_visible,
            steer_required: vehicle.steer_required_visible
                && vehicle.steer_alerts_allowed
                && self.alerts.steer_required_enabled,
        }
    }
}
