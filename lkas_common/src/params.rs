//! Controller parameters fixed at session start.
//!
//! All parameter types use `serde::Deserialize` for TOML loading.
//! Every field has a default so a partial section is accepted; bounds are
//! checked by `validate()` before a sequencer is built from them.

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::consts::{
    ALERT_DIVISOR_DEFAULT, CANCEL_DIVISOR_DEFAULT, CANCEL_HOLD_THRESHOLD_DEFAULT,
    DRIVER_OVERRIDE_THRESHOLD_DEFAULT, MAX_RATE_NEAR_OVERRIDE_DEFAULT, MAX_RATE_PER_CYCLE_DEFAULT,
    MAX_TORQUE_DEFAULT, RESUME_DIVISOR_DEFAULT, TORQUE_LIMIT,
};

// ─── Torque Limits ──────────────────────────────────────────────────

/// Steering torque limits applied by the torque limiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TorqueLimits {
    /// Absolute torque bound [raw units].
    #[serde(default = "default_max_torque")]
    pub max_torque: i32,

    /// Largest change of the command per cycle.
    #[serde(default = "default_max_rate")]
    pub max_rate_per_cycle: i32,

    /// Largest change per cycle while the driver is overriding.
    #[serde(default = "default_override_rate")]
    pub max_rate_near_driver_override: i32,

    /// Opposing driver torque above this magnitude counts as override.
    #[serde(default = "default_override_threshold")]
    pub driver_override_threshold: i32,
}

fn default_max_torque() -> i32 {
    MAX_TORQUE_DEFAULT
}
fn default_max_rate() -> i32 {
    MAX_RATE_PER_CYCLE_DEFAULT
}
fn default_override_rate() -> i32 {
    MAX_RATE_NEAR_OVERRIDE_DEFAULT
}
fn default_override_threshold() -> i32 {
    DRIVER_OVERRIDE_THRESHOLD_DEFAULT
}

impl Default for TorqueLimits {
    fn default() -> Self {
        Self {
            max_torque: MAX_TORQUE_DEFAULT,
            max_rate_per_cycle: MAX_RATE_PER_CYCLE_DEFAULT,
            max_rate_near_driver_override: MAX_RATE_NEAR_OVERRIDE_DEFAULT,
            driver_override_threshold: DRIVER_OVERRIDE_THRESHOLD_DEFAULT,
        }
    }
}

impl TorqueLimits {
    /// Validate parameter bounds.
    ///
    /// `1 <= max_rate_near_driver_override <= max_rate_per_cycle <= max_torque <= TORQUE_LIMIT`
    /// and a non-negative override threshold.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_torque < 1 || self.max_torque > TORQUE_LIMIT {
            return Err(ConfigError::ValidationError(format!(
                "max_torque {} out of range [1, {}]",
                self.max_torque, TORQUE_LIMIT
            )));
        }
        if self.max_rate_per_cycle < 1 || self.max_rate_per_cycle > self.max_torque {
            return Err(ConfigError::ValidationError(format!(
                "max_rate_per_cycle {} out of range [1, {}]",
                self.max_rate_per_cycle, self.max_torque
            )));
        }
        if self.max_rate_near_driver_override < 1
            || self.max_rate_near_driver_override > self.max_rate_per_cycle
        {
            return Err(ConfigError::ValidationError(format!(
                "max_rate_near_driver_override {} out of range [1, {}]",
                self.max_rate_near_driver_override, self.max_rate_per_cycle
            )));
        }
        if self.driver_override_threshold < 0 {
            return Err(ConfigError::ValidationError(format!(
                "driver_override_threshold {} must not be negative",
                self.driver_override_threshold
            )));
        }
        Ok(())
    }
}

// ─── Cadences ───────────────────────────────────────────────────────

/// Message cadences and the cancel hold-off window, in cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CadenceConfig {
    /// Cancel requests are sent on cycles divisible by this value.
    #[serde(default = "default_cancel_divisor")]
    pub cancel_divisor: u32,

    /// Resume requests are sent on cycles divisible by this value.
    #[serde(default = "default_resume_divisor")]
    pub resume_divisor: u32,

    /// HUD alerts are sent on cycles divisible by this value.
    #[serde(default = "default_alert_divisor")]
    pub alert_divisor: u32,

    /// While braking, cancels stay suppressed until the hold counter
    /// reaches this value.
    #[serde(default = "default_cancel_hold")]
    pub cancel_hold_threshold: u32,
}

fn default_cancel_divisor() -> u32 {
    CANCEL_DIVISOR_DEFAULT
}
fn default_resume_divisor() -> u32 {
    RESUME_DIVISOR_DEFAULT
}
fn default_alert_divisor() -> u32 {
    ALERT_DIVISOR_DEFAULT
}
fn default_cancel_hold() -> u32 {
    CANCEL_HOLD_THRESHOLD_DEFAULT
}

impl Default for CadenceConfig {
    fn default() -> Self {
        Self {
            cancel_divisor: CANCEL_DIVISOR_DEFAULT,
            resume_divisor: RESUME_DIVISOR_DEFAULT,
            alert_divisor: ALERT_DIVISOR_DEFAULT,
            cancel_hold_threshold: CANCEL_HOLD_THRESHOLD_DEFAULT,
        }
    }
}

impl CadenceConfig {
    /// All divisors must be at least 1.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let divisors = [
            ("cancel_divisor", self.cancel_divisor),
            ("resume_divisor", self.resume_divisor),
            ("alert_divisor", self.alert_divisor),
        ];
        for (name, value) in divisors {
            if value == 0 {
                return Err(ConfigError::ValidationError(format!(
                    "{name} must be at least 1"
                )));
            }
        }
        Ok(())
    }
}

// ─── Alerts ─────────────────────────────────────────────────────────

/// HUD alert switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertConfig {
    /// When false the steer-required indicator is never shown.
    #[serde(default = "default_true")]
    pub steer_required_enabled: bool,
}

fn default_true() -> bool {
    true
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            steer_required_enabled: true,
        }
    }
}

// ─── Controller Params ──────────────────────────────────────────────

/// Complete controller parameter set for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ControllerParams {
    /// Torque limiter parameters.
    #[serde(default)]
    pub torque: TorqueLimits,

    /// Message cadences.
    #[serde(default)]
    pub cadence: CadenceConfig,

    /// HUD alert switches.
    #[serde(default)]
    pub alerts: AlertConfig,
}

impl ControllerParams {
    /// Validate all sections.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.torque.validate()?;
        self.cadence.validate()
    }
}
