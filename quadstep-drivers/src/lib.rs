//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in quadstep-core and quadstep-hal:
//!
//! - [`stepper::FourWireStepper`] - the 4-pin stepping engine
//! - [`platform::OutputBank`] - `GpioPlatform` over `embedded-hal` pins
//! - [`demo`] - scripted demonstration moves

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod demo;
pub mod platform;
pub mod stepper;

#[cfg(test)]
pub(crate) mod mock;
