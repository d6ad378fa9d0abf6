//! Configuration type definitions

use heapless::String;
use quadstep_hal::PinId;

use crate::sequence::{SteppingMethod, PIN_COUNT};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum stepper name length
pub const MAX_LABEL_LEN: usize = 16;

/// Default step duration in milliseconds
pub const DEFAULT_STEP_DURATION_MS: u32 = 3;

/// Errors in a pin assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The same pin is assigned to more than one coil terminal
    DuplicatePin(PinId),
    /// The platform cannot drive this pin
    InvalidPin(PinId),
}

/// Stepper motor configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StepperConfig {
    /// Stepper name (e.g., "feeder", "dial")
    pub name: String<MAX_LABEL_LEN>,
    /// Pins driving coil terminals A, B, C, D
    pub pins: [PinId; PIN_COUNT],
    /// Time each phase is held, in ms
    pub step_duration_ms: u32,
    /// Initial stepping method
    pub method: SteppingMethod,
}

impl StepperConfig {
    /// Create a config with default name, duration and method
    pub fn new(pins: [PinId; PIN_COUNT]) -> Self {
        Self {
            name: String::new(),
            pins,
            step_duration_ms: DEFAULT_STEP_DURATION_MS,
            method: SteppingMethod::default(),
        }
    }

    /// Set the step duration
    pub fn with_step_duration_ms(mut self, step_duration_ms: u32) -> Self {
        self.step_duration_ms = step_duration_ms;
        self
    }

    /// Set the stepping method
    pub fn with_method(mut self, method: SteppingMethod) -> Self {
        self.method = method;
        self
    }

    /// Check that the four pins are distinct
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_pins(&self.pins)
    }
}

/// Check that a pin assignment names four distinct pins
pub fn validate_pins(pins: &[PinId; PIN_COUNT]) -> Result<(), ConfigError> {
    for (i, pin) in pins.iter().enumerate() {
        if pins[i + 1..].contains(pin) {
            return Err(ConfigError::DuplicatePin(*pin));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StepperConfig::new([1, 2, 3, 4]);
        assert_eq!(config.step_duration_ms, 3);
        assert_eq!(config.method, SteppingMethod::FullStep);
        assert!(config.name.is_empty());
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_builder() {
        let config = StepperConfig::new([1, 2, 3, 4])
            .with_step_duration_ms(10)
            .with_method(SteppingMethod::HalfStep);
        assert_eq!(config.step_duration_ms, 10);
        assert_eq!(config.method, SteppingMethod::HalfStep);
    }

    #[test]
    fn test_duplicate_pins() {
        assert_eq!(
            validate_pins(&[1, 2, 1, 4]),
            Err(ConfigError::DuplicatePin(1))
        );
        assert_eq!(
            validate_pins(&[5, 6, 7, 7]),
            Err(ConfigError::DuplicatePin(7))
        );
        assert_eq!(
            validate_pins(&[0, 0, 0, 0]),
            Err(ConfigError::DuplicatePin(0))
        );
    }
}
