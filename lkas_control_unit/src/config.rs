//! TOML configuration loader with validation.
//!
//! Loads an `LkasConfig`, validates every section and builds the session's
//! `CommandSequencer`. Out-of-range parameters are rejected here, before the
//! first cycle runs.

use std::path::Path;

use lkas_common::config::{ConfigError, ConfigLoader, LkasConfig, SharedConfig};
use lkas_common::params::ControllerParams;

use crate::sequencer::CommandSequencer;

/// Complete validated configuration bundle, ready for runtime use.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub shared: SharedConfig,
    pub params: ControllerParams,
    pub sequencer: CommandSequencer,
}

impl LoadedConfig {
    fn from_config(config: LkasConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let sequencer = CommandSequencer::new(&config.controller)?;
        let torque = &config.controller.torque;
        let cadence = &config.controller.cadence;
        tracing::debug!(
            service = %config.shared.service_name,
            max_torque = torque.max_torque,
            max_rate_per_cycle = torque.max_rate_per_cycle,
            max_rate_near_driver_override = torque.max_rate_near_driver_override,
            driver_override_threshold = torque.driver_override_threshold,
            cancel_divisor = cadence.cancel_divisor,
            resume_divisor = cadence.resume_divisor,
            alert_divisor = cadence.alert_divisor,
            cancel_hold_threshold = cadence.cancel_hold_threshold,
            "controller configuration validated"
        );
        Ok(Self {
            shared: config.shared,
            params: config.controller,
            sequencer,
        })
    }
}

/// Load and validate the configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<LoadedConfig, ConfigError> {
    let config = LkasConfig::load(path).map_err(|e| match e {
        ConfigError::ParseError(detail) => {
            ConfigError::ParseError(format!("{}: {detail}", path.display()))
        }
        other => other,
    })?;
    LoadedConfig::from_config(config)
}

/// Load config from a TOML string (for testing).
pub fn load_config_from_str(toml: &str) -> Result<LoadedConfig, ConfigError> {
    LoadedConfig::from_config(LkasConfig::from_toml_str(toml)?)
}
