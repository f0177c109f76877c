//! Per-cycle output buffer.
//!
//! Messages are held in a fixed-capacity `heapless::Vec` so producing a
//! cycle's output never allocates. Order within the buffer is the
//! transmission order: alert, then button, then steering (always last).

use heapless::Vec;
use serde::{Deserialize, Serialize};
use static_assertions::const_assert;

use lkas_common::consts::MAX_MESSAGES_PER_CYCLE;
use lkas_common::message::{OutboundMessage, SteeringCommand};

// Alert + button + steering must always fit.
const_assert!(MAX_MESSAGES_PER_CYCLE >= 3);

/// Everything the sequencer hands to the host for one cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleOutput {
    /// Outbound messages in transmission order.
    pub messages: Vec<OutboundMessage, MAX_MESSAGES_PER_CYCLE>,
    /// Applied torque normalized by `max_torque`, for upstream reporting.
    pub applied_steer: f64,
}

impl CycleOutput {
    /// Assemble a cycle's output in priority order.
    pub(crate) fn assemble(
        alert: Option<OutboundMessage>,
        button: Option<OutboundMessage>,
        steering: SteeringCommand,
        applied_steer: f64,
    ) -> Self {
        let mut messages = Vec::new();
        for msg in alert
            .into_iter()
            .chain(button)
            .chain(Some(OutboundMessage::Steering(steering)))
        {
            if let Err(dropped) = messages.push(msg) {
                tracing::error!(?dropped, "cycle output buffer full");
            }
        }
        Self {
            messages,
            applied_steer,
        }
    }

    /// The cycle's steering command.
    pub fn steering(&self) -> Option<&SteeringCommand> {
        self.messages.last().and_then(OutboundMessage::as_steering)
    }

    /// Messages as a slice, in transmission order.
    #[inline]
    pub fn as_slice(&self) -> &[OutboundMessage] {
        &self.messages
    }

    /// Whether the messages are in strictly increasing priority order and end
    /// with exactly one steering command.
    pub fn is_well_ordered(&self) -> bool {
        let ordered = self
            .messages
            .windows(2)
            .all(|w| w[0].priority() < w[1].priority());
        let steering_count = self
            .messages
            .iter()
            .filter(|m| m.as_steering().is_some())
            .count();
        ordered && steering_count == 1 && self.steering().is_some()
    }
}

impl<'a> IntoIterator for &'a CycleOutput {
    type Item = &'a OutboundMessage;
    type IntoIter = core::slice::Iter<'a, OutboundMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}
