//! 4-wire stepper driver
//!
//! Drives a unipolar/bipolar stepper (28BYJ-48 on a ULN2003 board, or any
//! motor with four coil terminals) directly from four GPIO outputs.
//!
//! Each elementary step:
//! 1. writes the phase pattern to pins A, B, C, D
//! 2. holds for the step duration
//! 3. writes LOW to all four pins (coils de-energized)
//!
//! That is 8 level writes and 1 hold per step.
//!
//! # Failure hazard
//!
//! A platform error aborts the sequence at the failing call. Nothing is
//! retried and no de-energize is attempted, so up to one step's pattern may
//! be left energized on the coils.
//!
//! # Usage
//!
//! ```ignore
//! let mut motor = FourWireStepper::new(gpio, [2, 3, 4, 5], 3, SteppingMethod::FullStep)?;
//! motor.full_rotation(1)?;
//! motor.set_stepping_method(SteppingMethod::HalfStep);
//! motor.angle_rotation(-30.0)?;
//! ```

use quadstep_core::config::{validate_pins, ConfigError, StepperConfig};
use quadstep_core::phase::PhaseIndices;
use quadstep_core::sequence::{phase_pattern, SteppingMethod, PIN_COUNT};
use quadstep_core::traits::{StepperDriver, StepperError};
use quadstep_hal::{GpioPlatform, Level, PinId};

/// 4-wire stepper driver
///
/// Owns the platform (and through it the pins) exclusively.
pub struct FourWireStepper<G> {
    platform: G,
    /// Coil terminal pins A, B, C, D
    pins: [PinId; PIN_COUNT],
    /// Time each phase is held (ms)
    step_duration_ms: u32,
    /// Current stepping method
    method: SteppingMethod,
}

impl<G: GpioPlatform> FourWireStepper<G> {
    /// Create a driver and configure its pins as outputs
    ///
    /// Fails with [`ConfigError`] if the pins are not four distinct pins
    /// the platform accepts. Validation happens before any pin is
    /// configured.
    pub fn new(
        mut platform: G,
        pins: [PinId; PIN_COUNT],
        step_duration_ms: u32,
        method: SteppingMethod,
    ) -> Result<Self, StepperError<G::Error>> {
        validate_pins(&pins)?;
        if let Some(&pin) = pins.iter().find(|&&pin| !platform.is_valid_pin(pin)) {
            return Err(ConfigError::InvalidPin(pin).into());
        }

        for pin in pins {
            platform
                .configure_output(pin)
                .map_err(StepperError::Platform)?;
        }

        Ok(Self {
            platform,
            pins,
            step_duration_ms,
            method,
        })
    }

    /// Create a driver from a [`StepperConfig`]
    pub fn from_config(
        platform: G,
        config: &StepperConfig,
    ) -> Result<Self, StepperError<G::Error>> {
        Self::new(
            platform,
            config.pins,
            config.step_duration_ms,
            config.method,
        )
    }

    /// Get the pin assignment (A, B, C, D)
    pub fn pins(&self) -> [PinId; PIN_COUNT] {
        self.pins
    }

    /// Borrow the platform
    pub fn platform(&self) -> &G {
        &self.platform
    }

    /// Consume the driver and return the platform
    pub fn into_platform(self) -> G {
        self.platform
    }

    /// Write the pattern for phase `index` to the four pins
    fn write_phase(&mut self, index: usize) -> Result<(), G::Error> {
        let pattern = phase_pattern(self.method, index);
        for (&pin, &high) in self.pins.iter().zip(pattern.iter()) {
            self.platform.write_level(pin, Level::from(high))?;
        }
        Ok(())
    }

    /// Drive all four pins LOW
    fn de_energize(&mut self) -> Result<(), G::Error> {
        for &pin in self.pins.iter() {
            self.platform.write_level(pin, Level::Low)?;
        }
        Ok(())
    }
}

impl<G: GpioPlatform> StepperDriver for FourWireStepper<G> {
    type Error = StepperError<G::Error>;

    fn step(&mut self, count: i32) -> Result<(), Self::Error> {
        let indices = PhaseIndices::new(count);

        #[cfg(feature = "defmt")]
        defmt::trace!(
            "step: count={} order={} method={} hold={}ms",
            count,
            indices.order(),
            self.method,
            self.step_duration_ms
        );

        for index in indices {
            self.write_phase(index).map_err(StepperError::Platform)?;
            self.platform
                .hold(self.step_duration_ms)
                .map_err(StepperError::Platform)?;
            self.de_energize().map_err(StepperError::Platform)?;
        }
        Ok(())
    }

    fn stepping_method(&self) -> SteppingMethod {
        self.method
    }

    fn set_stepping_method(&mut self, method: SteppingMethod) {
        self.method = method;
    }

    fn step_duration_ms(&self) -> u32 {
        self.step_duration_ms
    }

    fn set_step_duration_ms(&mut self, duration_ms: u32) {
        self.step_duration_ms = duration_ms;
    }
}
