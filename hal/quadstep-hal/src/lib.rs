//! Quadstep Hardware Abstraction Layer
//!
//! This crate defines the platform boundary of the stepper driver: the three
//! GPIO primitives the stepping engine calls into. Chip-specific crates
//! (RP2040, or any `embedded-hal` board through the driver crate's adapter)
//! implement it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  quadstep-drivers (FourWireStepper)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  quadstep-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ quadstep-hal- │       │  OutputBank   │
//! │    rp2040     │       │ (embedded-hal)│
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::GpioPlatform`] - output configuration, level writes, timed hold

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;

pub use gpio::{GpioPlatform, Level, PinId};
