//! Board-agnostic stepping logic for 4-wire stepper motors
//!
//! This crate contains everything about driving a unipolar/bipolar stepper
//! that does not touch hardware:
//!
//! - Coil-energization sequence tables (wave drive, full step, half step)
//! - Phase index generation for signed step counts
//! - Rotation math (revolutions and angles to elementary steps)
//! - The `StepperDriver` trait carrying the rotation API
//! - Configuration types and a small TOML-subset parser

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod phase;
pub mod rotation;
pub mod sequence;
pub mod traits;

pub use sequence::SteppingMethod;
