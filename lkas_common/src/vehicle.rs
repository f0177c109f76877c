//! Decoded vehicle-state snapshot.
//!
//! Produced by the (external) bus decoder once per cycle and read by the
//! sequencer without modification.

use serde::{Deserialize, Serialize};

/// Vehicle state relevant to steering and cruise sequencing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleState {
    /// Torque the driver applies to the wheel [raw units, signed].
    pub driver_torque: i32,
    /// Brake pedal pressed.
    pub brake_pressed: bool,
    /// Rolling counter of the stock cruise button message.
    /// Echoed back in button commands so the encoder can stamp them.
    pub button_counter: u8,
    /// Lane-departure indicator requested upstream.
    pub lane_departure_visible: bool,
    /// Steer-required indicator requested upstream.
    pub steer_required_visible: bool,
    /// Steering alerts are permitted at the current speed.
    pub steer_alerts_allowed: bool,
}
