//! `GpioPlatform` implementation for the RP2040
//!
//! Pin identifiers are RP2040 GPIO numbers. Configuring a pin takes it from
//! the [`PinBank`] and turns it into an embassy-rp push-pull output driven
//! LOW. Holds busy-wait with `embassy_time::block_for`, so the stepping
//! loop keeps its blocking semantics inside an async executor.

use embassy_rp::gpio::{Level as RpLevel, Output};
use embassy_time::{block_for, Duration};
use quadstep_hal::{GpioPlatform, Level, PinId};

use crate::pins::{PinBank, PinError, GPIO_COUNT};

/// RP2040 GPIO errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GpioError {
    /// GPIO number out of range
    InvalidPin(PinId),
    /// Pin already owned by someone else
    AlreadyTaken(PinId),
    /// Write to a pin that was never configured as output
    NotConfigured(PinId),
}

/// RP2040 GPIO platform
pub struct Rp2040Gpio {
    bank: PinBank,
    outputs: [Option<Output<'static>>; GPIO_COUNT],
}

impl Rp2040Gpio {
    /// Create a platform that allocates outputs from `bank`
    pub fn new(bank: PinBank) -> Self {
        Self {
            bank,
            outputs: core::array::from_fn(|_| None),
        }
    }

    fn output_mut(&mut self, pin: PinId) -> Result<&mut Output<'static>, GpioError> {
        self.outputs
            .get_mut(pin as usize)
            .ok_or(GpioError::InvalidPin(pin))?
            .as_mut()
            .ok_or(GpioError::NotConfigured(pin))
    }
}

impl GpioPlatform for Rp2040Gpio {
    type Error = GpioError;

    fn is_valid_pin(&self, pin: PinId) -> bool {
        self.bank.is_available(pin)
            || self
                .outputs
                .get(pin as usize)
                .is_some_and(|slot| slot.is_some())
    }

    fn configure_output(&mut self, pin: PinId) -> Result<(), GpioError> {
        if let Ok(output) = self.output_mut(pin) {
            output.set_low();
            return Ok(());
        }

        let raw = self.bank.take(pin).map_err(|e| match e {
            PinError::InvalidPin => GpioError::InvalidPin(pin),
            PinError::AlreadyTaken => GpioError::AlreadyTaken(pin),
        })?;
        self.outputs[pin as usize] = Some(Output::new(raw, RpLevel::Low));

        #[cfg(feature = "defmt")]
        defmt::debug!("gpio{} configured as output", pin);
        Ok(())
    }

    fn write_level(&mut self, pin: PinId, level: Level) -> Result<(), GpioError> {
        let rp_level = match level {
            Level::High => RpLevel::High,
            Level::Low => RpLevel::Low,
        };
        self.output_mut(pin)?.set_level(rp_level);
        Ok(())
    }

    fn hold(&mut self, duration_ms: u32) -> Result<(), GpioError> {
        block_for(Duration::from_millis(duration_ms as u64));
        Ok(())
    }
}
