//! `GpioPlatform` over `embedded-hal` 1.0 pins
//!
//! Lets the stepper run on any board whose HAL implements
//! [`embedded_hal::digital::OutputPin`] and [`embedded_hal::delay::DelayNs`].
//! Pin identifiers are indices into the bank, so a bank of four pins is
//! driven with the assignment `[0, 1, 2, 3]`.
//!
//! Output pins are already in output mode by type in `embedded-hal`, so
//! configuring a pin only drives it LOW.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};
use quadstep_hal::{GpioPlatform, Level, PinId};

/// Errors from an [`OutputBank`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BankError<E> {
    /// Pin id is not an index into the bank
    UnknownPin(PinId),
    /// The underlying pin failed
    Pin(E),
}

/// Bank of `N` output pins plus a blocking delay
pub struct OutputBank<P, D, const N: usize> {
    pins: [P; N],
    delay: D,
}

impl<P, D, const N: usize> OutputBank<P, D, N> {
    /// Create a bank; pin `i` of the array answers to id `i`
    pub fn new(pins: [P; N], delay: D) -> Self {
        Self { pins, delay }
    }

    /// Consume the bank and return the pins and delay
    pub fn release(self) -> ([P; N], D) {
        (self.pins, self.delay)
    }

    fn pin_mut(&mut self, pin: PinId) -> Result<&mut P, BankError<P::Error>>
    where
        P: OutputPin,
    {
        self.pins
            .get_mut(pin as usize)
            .ok_or(BankError::UnknownPin(pin))
    }
}

impl<P: OutputPin, D: DelayNs, const N: usize> GpioPlatform for OutputBank<P, D, N> {
    type Error = BankError<P::Error>;

    fn is_valid_pin(&self, pin: PinId) -> bool {
        (pin as usize) < N
    }

    fn configure_output(&mut self, pin: PinId) -> Result<(), Self::Error> {
        self.pin_mut(pin)?.set_low().map_err(BankError::Pin)
    }

    fn write_level(&mut self, pin: PinId, level: Level) -> Result<(), Self::Error> {
        let state = PinState::from(level.is_high());
        self.pin_mut(pin)?.set_state(state).map_err(BankError::Pin)
    }

    fn hold(&mut self, duration_ms: u32) -> Result<(), Self::Error> {
        self.delay.delay_ms(duration_ms);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::{Error, ErrorKind, ErrorType};
    use quadstep_core::sequence::SteppingMethod;
    use quadstep_core::traits::{StepperDriver, StepperError};

    use crate::stepper::FourWireStepper;

    /// Mock output pin
    #[derive(Default)]
    struct MockPin {
        high: bool,
        writes: u32,
    }

    impl ErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.high = false;
            self.writes += 1;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.high = true;
            self.writes += 1;
            Ok(())
        }
    }

    /// Mock delay that sums requested milliseconds
    #[derive(Default)]
    struct MockDelay {
        total_ms: u32,
        calls: u32,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, _ns: u32) {}

        fn delay_ms(&mut self, ms: u32) {
            self.total_ms += ms;
            self.calls += 1;
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct BrokenWire;

    impl Error for BrokenWire {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    /// Pin that always fails
    struct BrokenPin;

    impl ErrorType for BrokenPin {
        type Error = BrokenWire;
    }

    impl OutputPin for BrokenPin {
        fn set_low(&mut self) -> Result<(), BrokenWire> {
            Err(BrokenWire)
        }

        fn set_high(&mut self) -> Result<(), BrokenWire> {
            Err(BrokenWire)
        }
    }

    fn bank() -> OutputBank<MockPin, MockDelay, 4> {
        OutputBank::new(Default::default(), MockDelay::default())
    }

    #[test]
    fn test_pin_ids_are_indices() {
        let bank = bank();
        assert!(bank.is_valid_pin(0));
        assert!(bank.is_valid_pin(3));
        assert!(!bank.is_valid_pin(4));
    }

    #[test]
    fn test_write_and_hold() {
        let mut bank = bank();
        bank.write_level(2, Level::High).unwrap();
        bank.hold(3).unwrap();
        bank.write_level(2, Level::Low).unwrap();

        assert_eq!(bank.write_level(9, Level::High), Err(BankError::UnknownPin(9)));

        let (pins, delay) = bank.release();
        assert!(!pins[2].high);
        assert_eq!(pins[2].writes, 2);
        assert_eq!(delay.total_ms, 3);
    }

    #[test]
    fn test_drives_stepper() {
        let mut motor =
            FourWireStepper::new(bank(), [0, 1, 2, 3], 2, SteppingMethod::FullStep).unwrap();
        motor.quarter_rotation(1).unwrap();

        let (pins, delay) = motor.into_platform().release();
        assert_eq!(delay.calls, 512);
        assert_eq!(delay.total_ms, 1024);
        // 1 configure write + 2 writes per step
        assert!(pins.iter().all(|p| p.writes == 1 + 2 * 512 && !p.high));
    }

    #[test]
    fn test_out_of_bank_assignment_rejected() {
        let result = FourWireStepper::new(bank(), [0, 1, 2, 4], 2, SteppingMethod::FullStep);
        assert!(matches!(
            result,
            Err(StepperError::Config(
                quadstep_core::config::ConfigError::InvalidPin(4)
            ))
        ));
    }

    #[test]
    fn test_pin_error_surfaces() {
        let mut bank = OutputBank::new([BrokenPin, BrokenPin], MockDelay::default());
        assert_eq!(bank.configure_output(1), Err(BankError::Pin(BrokenWire)));
        assert_eq!(bank.hold(1), Ok(()));
    }
}
