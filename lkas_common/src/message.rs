//! Abstract outbound messages.
//!
//! A closed set: the external encoder matches exhaustively and maps each
//! variant to its bus layout. Byte layout is not this crate's concern.

use serde::{Deserialize, Serialize};

/// Which stock cruise button to emulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonKind {
    /// Disengage stock cruise.
    Cancel,
    /// Resume from standstill.
    Resume,
}

/// LKAS steering torque command, sent every cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SteeringCommand {
    /// Limited torque [raw units].
    pub torque: i32,
    /// Sequencer cycle index the command was produced on.
    pub frame: u64,
}

/// Emulated cruise button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonCommand {
    /// Button to press.
    pub kind: ButtonKind,
    /// Stock button rolling counter echoed from the vehicle state.
    pub counter: u8,
}

/// HUD visual alert state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AlertCommand {
    /// Show the lane-departure indicator.
    pub lane_departure: bool,
    /// Show the steer-required indicator.
    pub steer_required: bool,
}

/// One outbound message of a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutboundMessage {
    /// HUD alert, lowest cadence.
    Alert(AlertCommand),
    /// Cruise button emulation.
    Button(ButtonCommand),
    /// Steering torque.
    Steering(SteeringCommand),
}

impl OutboundMessage {
    /// Relative position within a cycle; lower goes first.
    #[inline]
    pub const fn priority(&self) -> u8 {
        match self {
            Self::Alert(_) => 0,
            Self::Button(_) => 1,
            Self::Steering(_) => 2,
        }
    }

    /// Steering payload, if this is a steering command.
    pub const fn as_steering(&self) -> Option<&SteeringCommand> {
        match self {
            Self::Steering(cmd) => Some(cmd),
            _ => None,
        }
    }

    /// Button payload, if this is a button command.
    pub const fn as_button(&self) -> Option<&ButtonCommand> {
        match self {
            Self::Button(cmd) => Some(cmd),
            _ => None,
        }
    }

    /// Alert payload, if this is an alert command.
    pub const fn as_alert(&self) -> Option<&AlertCommand> {
        match self {
            Self::Alert(cmd) => Some(cmd),
            _ => None,
        }
    }
}
