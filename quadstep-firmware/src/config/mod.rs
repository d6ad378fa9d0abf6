//! Configuration loading
//!
//! The machine configuration is compiled into the firmware from
//! `machine.toml` and parsed at boot. A parse failure falls back to the
//! default stepper on GPIO 2-5 so the board still runs its demo.

use defmt::*;

use quadstep_core::config::{parse_stepper_config, StepperConfig};

/// Embedded configuration (edit machine.toml and rebuild to customize)
const EMBEDDED_CONFIG: &str = include_str!("../../machine.toml");

/// Coil pins used when the embedded config is unusable
const FALLBACK_PINS: [u8; 4] = [2, 3, 4, 5];

/// Load the stepper configuration
pub fn load_config() -> StepperConfig {
    match parse_stepper_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            log_config_summary(&config);
            config
        }
        Err(e) => {
            error!("Failed to parse embedded config: {:?}", e);
            warn!("Using fallback stepper on {}", FALLBACK_PINS);
            StepperConfig::new(FALLBACK_PINS)
        }
    }
}

/// Log a summary of the loaded configuration
fn log_config_summary(config: &StepperConfig) {
    info!("Configuration loaded successfully");
    debug!("  name: {}", config.name.as_str());
    debug!("  pins: {}", config.pins);
    debug!("  step duration: {} ms", config.step_duration_ms);
    debug!("  method: {}", config.method);
}
