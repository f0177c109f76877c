//! Emission statistics.
//!
//! O(1) per-cycle counters with no allocation, fed from each step's output
//! and trace. Used by the replay host for its end-of-run summary.

use std::time::Duration;

use serde::Serialize;

use lkas_common::consts::CYCLE_TIME_US;
use lkas_common::message::{ButtonKind, OutboundMessage};

use crate::arbitration::CruiseDecision;
use crate::output::CycleOutput;
use crate::sequencer::CycleTrace;

/// Running counters over a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct EmissionStats {
    /// Total cycles executed.
    pub cycles: u64,
    /// Steering commands emitted.
    pub steering: u64,
    /// Cancel presses emitted.
    pub cancels: u64,
    /// Resume presses emitted.
    pub resumes: u64,
    /// Alert messages emitted.
    pub alerts: u64,
    /// Cancel slots skipped by the brake hold-off.
    pub cancels_held: u64,
    /// Cycles on which the limiter yielded to the driver.
    pub override_cycles: u64,
    /// Peak absolute applied torque.
    pub peak_abs_torque: u32,
}

impl EmissionStats {
    /// Create a new zeroed stats instance.
    pub const fn new() -> Self {
        Self {
            cycles: 0,
            steering: 0,
            cancels: 0,
            resumes: 0,
            alerts: 0,
            cancels_held: 0,
            override_cycles: 0,
            peak_abs_torque: 0,
        }
    }

    /// Record one cycle. O(1), no allocation.
    #[inline]
    pub fn record(&mut self, output: &CycleOutput, trace: &CycleTrace) {
        self.cycles += 1;
        for msg in output {
            match msg {
                OutboundMessage::Steering(cmd) => {
                    self.steering += 1;
                    self.peak_abs_torque = self.peak_abs_torque.max(cmd.torque.unsigned_abs());
                }
                OutboundMessage::Button(cmd) => match cmd.kind {
                    ButtonKind::Cancel => self.cancels += 1,
                    ButtonKind::Resume => self.resumes += 1,
                },
                OutboundMessage::Alert(_) => self.alerts += 1,
            }
        }
        if trace.cruise == CruiseDecision::CancelHeld {
            self.cancels_held += 1;
        }
        if trace.driver_override {
            self.override_cycles += 1;
        }
    }

    /// Vehicle time covered by the recorded cycles at the nominal cycle period.
    pub const fn simulated_duration(&self) -> Duration {
        Duration::from_micros(self.cycles.saturating_mul(CYCLE_TIME_US))
    }
}
