//! RP2040-specific HAL for the quadstep firmware
//!
//! This crate implements the shared `quadstep-hal` platform trait on the
//! RP2040:
//!
//! - Dynamic pin allocation for config-driven pin assignment
//! - `GpioPlatform` over embassy-rp outputs with blocking embassy-time delays

#![no_std]

pub mod gpio;
pub mod pins;

pub use gpio::{GpioError, Rp2040Gpio};
pub use pins::{PinBank, PinError, GPIO_COUNT};
