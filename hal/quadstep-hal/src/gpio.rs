//! GPIO platform abstraction
//!
//! The stepper driver only ever needs three things from the host platform:
//! mark a pin as a digital output, drive it to a level, and block for a
//! number of milliseconds.

/// Platform pin identifier (GPIO number)
pub type PinId = u8;

/// Digital output level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Logic 0, coil de-energized
    Low,
    /// Logic 1, coil energized
    High,
}

impl Level {
    /// Check if this is the high level
    pub fn is_high(self) -> bool {
        self == Level::High
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

impl From<Level> for bool {
    fn from(level: Level) -> Self {
        level.is_high()
    }
}

/// Host GPIO layer consumed by the stepper driver
///
/// Implementations own the physical pins. Errors are passed through the
/// driver untouched; the driver never retries.
pub trait GpioPlatform {
    /// Platform-specific failure (invalid pin, bus error, ...)
    type Error;

    /// Check whether `pin` names an output this platform can drive
    ///
    /// Used at driver construction to reject bad pin assignments before
    /// any pin is touched.
    fn is_valid_pin(&self, _pin: PinId) -> bool {
        true
    }

    /// Configure `pin` as a digital output
    ///
    /// Called once per pin when a driver is constructed.
    fn configure_output(&mut self, pin: PinId) -> Result<(), Self::Error>;

    /// Drive `pin` to `level`
    fn write_level(&mut self, pin: PinId, level: Level) -> Result<(), Self::Error>;

    /// Block the calling thread for `duration_ms` milliseconds
    fn hold(&mut self, duration_ms: u32) -> Result<(), Self::Error>;
}

impl<T: GpioPlatform + ?Sized> GpioPlatform for &mut T {
    type Error = T::Error;

    fn is_valid_pin(&self, pin: PinId) -> bool {
        (**self).is_valid_pin(pin)
    }

    fn configure_output(&mut self, pin: PinId) -> Result<(), Self::Error> {
        (**self).configure_output(pin)
    }

    fn write_level(&mut self, pin: PinId, level: Level) -> Result<(), Self::Error> {
        (**self).write_level(pin, level)
    }

    fn hold(&mut self, duration_ms: u32) -> Result<(), Self::Error> {
        (**self).hold(duration_ms)
    }
}
