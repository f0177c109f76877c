//! Stock cruise arbitration: cancel vs. resume button emulation.
//!
//! ## Cancel
//! Each cycle with cancel asserted increments the hold counter. A cancel
//! press goes out on cancel-cadence cycles, except while the brake is
//! pressed and the hold counter is still below the hold threshold. Braking
//! already makes the stock system cancel on its own; a second cancel landing
//! while the stock controller is still syncing can toggle cruise main back
//! on, so the first presses are held back.
//!
//! ## Resume
//! Without cancel the hold counter is cleared. A resume press goes out on
//! resume-cadence cycles while resume is asserted.
//!
//! Cancel takes priority: with both intents set, only the cancel path runs.

use lkas_common::command::CruiseIntent;
use lkas_common::message::ButtonKind;

use crate::cadence::Schedule;

/// Outcome of one arbitration step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CruiseDecision {
    /// Nothing to send.
    Idle,
    /// Send this button press.
    Press(ButtonKind),
    /// A cancel was due but held back by the brake hold-off.
    CancelHeld,
}

impl CruiseDecision {
    /// Button to send, if any.
    #[inline]
    pub const fn button(&self) -> Option<ButtonKind> {
        match self {
            Self::Press(kind) => Some(*kind),
            Self::Idle | Self::CancelHeld => None,
        }
    }
}

/// Cruise arbitration rules for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CruiseArbiter {
    schedule: Schedule,
    cancel_hold_threshold: u32,
}

impl CruiseArbiter {
    /// Create an arbiter from the session schedule and hold threshold.
    pub const fn new(schedule: Schedule, cancel_hold_threshold: u32) -> Self {
        Self {
            schedule,
            cancel_hold_threshold,
        }
    }

    /// Run one cycle of arbitration, updating `hold_counter` in place.
    pub fn step(
        &self,
        intent: CruiseIntent,
        brake_pressed: bool,
        cycle_index: u64,
        hold_counter: &mut u32,
    ) -> CruiseDecision {
        if intent.cancel {
            *hold_counter = hold_counter.saturating_add(1);
            if !self.schedule.cancel.is_due(cycle_index) {
                return CruiseDecision::Idle;
            }
            if brake_pressed && *hold_counter < self.cancel_hold_threshold {
                tracing::trace!(
                    cycle_index,
                    hold_counter = *hold_counter,
                    "cancel held while braking"
                );
                return CruiseDecision::CancelHeld;
            }
            CruiseDecision::Press(ButtonKind::Cancel)
        } else {
            *hold_counter = 0;
            if intent.resume && self.schedule.resume.is_due(cycle_index) {
                CruiseDecision::Press(ButtonKind::Resume)
            } else {
                CruiseDecision::Idle
            }
        }
    }
}
