//! Fixed message cadences derived from the cycle index.

use std::num::NonZeroU32;

use lkas_common::params::CadenceConfig;

/// "Every N cycles" schedule. Due on cycles where `cycle_index % N == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cadence(NonZeroU32);

impl Cadence {
    /// Build from a divisor; `None` for zero.
    pub const fn new(divisor: u32) -> Option<Self> {
        match NonZeroU32::new(divisor) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    /// Whether a message on this cadence is due on `cycle_index`.
    #[inline]
    pub const fn is_due(&self, cycle_index: u64) -> bool {
        cycle_index % self.0.get() as u64 == 0
    }
}

/// The three scheduled cadences of the sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    /// Cancel button requests.
    pub cancel: Cadence,
    /// Resume button requests.
    pub resume: Cadence,
    /// HUD alert.
    pub alert: Cadence,
}

impl Schedule {
    /// Build from config; `None` if any divisor is zero.
    pub fn from_config(config: &CadenceConfig) -> Option<Self> {
        Some(Self {
            cancel: Cadence::new(config.cancel_divisor)?,
            resume: Cadence::new(config.resume_divisor)?,
            alert: Cadence::new(config.alert_divisor)?,
        })
    }
}
