//! Hardware abstraction traits
//!
//! These traits define the interface between rotation logic and the
//! driver implementations that own the pins.

pub mod stepper;

pub use stepper::{StepperDriver, StepperError};
