//! Per-cycle command inputs.
//!
//! `CruiseIntent` carries two flags that are mutually exclusive only by
//! convention. When both are set, cancel wins: the sequencer sends no resume
//! request in a cycle where cancel is asserted.

use serde::{Deserialize, Serialize};

/// Desired lateral actuation for one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActuationRequest {
    /// Normalized steering effort in [-1.0, 1.0].
    pub steer: f64,
    /// Lateral control is engaged.
    pub active: bool,
}

impl ActuationRequest {
    /// Engaged request with the given effort.
    pub const fn engaged(steer: f64) -> Self {
        Self {
            steer,
            active: true,
        }
    }

    /// Disengaged request; the command ramps to zero.
    pub const fn disengaged() -> Self {
        Self {
            steer: 0.0,
            active: false,
        }
    }
}

/// Stock cruise-control intent for one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CruiseIntent {
    /// Disengage the stock cruise system.
    pub cancel: bool,
    /// Ask the stock cruise system to resume motion.
    pub resume: bool,
}

impl CruiseIntent {
    /// No cruise request.
    pub const NONE: Self = Self {
        cancel: false,
        resume: false,
    };
    /// Cancel request.
    pub const CANCEL: Self = Self {
        cancel: true,
        resume: false,
    };
    /// Resume request.
    pub const RESUME: Self = Self {
        cancel: false,
        resume: true,
    };

    /// Both flags set; resolved as cancel.
    #[inline]
    pub const fn is_conflicting(&self) -> bool {
        self.cancel && self.resume
    }
}

/// Everything the host asks for in one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CycleCommand {
    /// Lateral actuation.
    pub actuation: ActuationRequest,
    /// Cruise intent.
    pub cruise: CruiseIntent,
}

impl CycleCommand {
    /// Bundle an actuation and a cruise intent.
    pub const fn new(actuation: ActuationRequest, cruise: CruiseIntent) -> Self {
        Self { actuation, cruise }
    }
}
