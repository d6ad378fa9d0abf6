//! Stepper motor driver trait
//!
//! Every rotation request reduces to one primitive, [`StepperDriver::step`],
//! which issues a signed number of elementary steps. The rotation API is
//! provided on top of it as default methods, scaled by the current
//! stepping method.

use crate::config::ConfigError;
use crate::rotation::{self, Rotation};
use crate::sequence::SteppingMethod;

/// Errors from a stepper driver
///
/// `E` is the platform's GPIO error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepperError<E> {
    /// Invalid pin assignment, detected at construction
    Config(ConfigError),
    /// The GPIO layer failed; the step sequence was aborted
    Platform(E),
}

impl<E> From<ConfigError> for StepperError<E> {
    fn from(e: ConfigError) -> Self {
        StepperError::Config(e)
    }
}

/// Trait for 4-wire stepper drivers
///
/// Execution is synchronous: each call blocks until every step it issues
/// has been written and held.
pub trait StepperDriver {
    /// Error returned by the step primitive
    type Error;

    /// Issue `|count|` elementary steps
    ///
    /// The sign selects the order in which the phase counter is scanned
    /// (see [`crate::phase`]). `step(0)` does nothing.
    fn step(&mut self, count: i32) -> Result<(), Self::Error>;

    /// Get the current stepping method
    fn stepping_method(&self) -> SteppingMethod;

    /// Set the stepping method used by the next `step` call
    fn set_stepping_method(&mut self, method: SteppingMethod);

    /// Get the current step duration in ms
    fn step_duration_ms(&self) -> u32;

    /// Set the step duration used by the next `step` call
    fn set_step_duration_ms(&mut self, duration_ms: u32);

    /// Rotate by `quarters` quarter revolutions
    fn quarter_rotation(&mut self, quarters: i32) -> Result<(), Self::Error> {
        let steps = rotation::quarter_rotation_steps(self.stepping_method(), quarters);
        self.step(steps)
    }

    /// Rotate by `halves` half revolutions
    fn half_rotation(&mut self, halves: i32) -> Result<(), Self::Error> {
        self.quarter_rotation(halves.saturating_mul(2))
    }

    /// Rotate by `rotations` full revolutions
    fn full_rotation(&mut self, rotations: i32) -> Result<(), Self::Error> {
        self.half_rotation(rotations.saturating_mul(2))
    }

    /// Rotate by an angle in degrees
    ///
    /// The step count truncates toward zero, see
    /// [`rotation::angle_to_steps`].
    fn angle_rotation(&mut self, degrees: f32) -> Result<(), Self::Error> {
        let steps = rotation::angle_to_steps(self.stepping_method(), degrees);
        self.step(steps)
    }

    /// Perform a rotation given in any unit
    fn rotate(&mut self, rotation: Rotation) -> Result<(), Self::Error> {
        match rotation {
            Rotation::Steps(n) => self.step(n),
            Rotation::Quarter(n) => self.quarter_rotation(n),
            Rotation::Half(n) => self.half_rotation(n),
            Rotation::Full(n) => self.full_rotation(n),
            Rotation::Angle(degrees) => self.angle_rotation(degrees),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Driver that records the counts passed to `step`
    struct RecordingDriver {
        method: SteppingMethod,
        duration_ms: u32,
        calls: [i32; 8],
        len: usize,
    }

    impl RecordingDriver {
        fn new(method: SteppingMethod) -> Self {
            Self {
                method,
                duration_ms: 3,
                calls: [0; 8],
                len: 0,
            }
        }

        fn calls(&self) -> &[i32] {
            &self.calls[..self.len]
        }
    }

    impl StepperDriver for RecordingDriver {
        type Error = ();

        fn step(&mut self, count: i32) -> Result<(), ()> {
            self.calls[self.len] = count;
            self.len += 1;
            Ok(())
        }

        fn stepping_method(&self) -> SteppingMethod {
            self.method
        }

        fn set_stepping_method(&mut self, method: SteppingMethod) {
            self.method = method;
        }

        fn step_duration_ms(&self) -> u32 {
            self.duration_ms
        }

        fn set_step_duration_ms(&mut self, duration_ms: u32) {
            self.duration_ms = duration_ms;
        }
    }

    #[test]
    fn test_rotations_funnel_to_step() {
        let mut driver = RecordingDriver::new(SteppingMethod::FullStep);

        driver.full_rotation(1).unwrap();
        driver.half_rotation(-1).unwrap();
        driver.quarter_rotation(1).unwrap();
        driver.angle_rotation(30.0).unwrap();
        driver.angle_rotation(-30.0).unwrap();

        assert_eq!(driver.calls(), &[2048, -1024, 512, 170, -170]);
    }

    #[test]
    fn test_half_step_doubles() {
        let mut driver = RecordingDriver::new(SteppingMethod::HalfStep);

        driver.quarter_rotation(1).unwrap();
        driver.full_rotation(1).unwrap();
        driver.angle_rotation(30.0).unwrap();

        assert_eq!(driver.calls(), &[1024, 4096, 341]);
    }

    #[test]
    fn test_method_change_applies_to_next_call() {
        let mut driver = RecordingDriver::new(SteppingMethod::WaveDrive);

        driver.set_stepping_method(SteppingMethod::HalfStep);
        driver.set_stepping_method(SteppingMethod::FullStep);
        driver.quarter_rotation(1).unwrap();

        assert_eq!(driver.calls(), &[512]);
    }

    #[test]
    fn test_rotate_dispatch() {
        let mut driver = RecordingDriver::new(SteppingMethod::FullStep);

        driver.rotate(Rotation::Steps(5)).unwrap();
        driver.rotate(Rotation::Full(-1)).unwrap();
        driver.rotate(Rotation::Angle(90.0)).unwrap();

        assert_eq!(driver.calls(), &[5, -2048, 512]);
    }

    #[test]
    fn test_config_error_converts() {
        let err: StepperError<()> = ConfigError::DuplicatePin(3).into();
        assert_eq!(err, StepperError::Config(ConfigError::DuplicatePin(3)));
    }
}
