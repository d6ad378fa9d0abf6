//! Rotation math
//!
//! Converts rotation requests into signed elementary step counts. The motor
//! is geared so a quarter revolution takes 512 steps at full resolution
//! (2048 per revolution) and twice that in half-step mode.
//!
//! Multiplications saturate at the `i32` bounds.

use crate::sequence::SteppingMethod;

/// Elementary steps per quarter revolution at full resolution
pub const STEPS_PER_QUARTER: i32 = 512;

/// Degrees in one revolution
const DEGREES_PER_REV: i32 = 360;

/// Elementary steps per quarter revolution for a method
pub const fn steps_per_quarter(method: SteppingMethod) -> i32 {
    match method {
        SteppingMethod::HalfStep => 2 * STEPS_PER_QUARTER,
        SteppingMethod::WaveDrive | SteppingMethod::FullStep => STEPS_PER_QUARTER,
    }
}

/// Elementary steps per full revolution for a method
pub const fn steps_per_revolution(method: SteppingMethod) -> i32 {
    4 * steps_per_quarter(method)
}

/// Steps for `quarters` quarter revolutions
pub fn quarter_rotation_steps(method: SteppingMethod, quarters: i32) -> i32 {
    quarters.saturating_mul(steps_per_quarter(method))
}

/// Steps for `halves` half revolutions
pub fn half_rotation_steps(method: SteppingMethod, halves: i32) -> i32 {
    quarter_rotation_steps(method, halves.saturating_mul(2))
}

/// Steps for `rotations` full revolutions
pub fn full_rotation_steps(method: SteppingMethod, rotations: i32) -> i32 {
    half_rotation_steps(method, rotations.saturating_mul(2))
}

/// Steps for an angle in degrees
///
/// The scaled angle is cast to an integer first, then divided by 360.
/// Both stages truncate toward zero, so `-30°` gives `-170` rather than
/// `-171`. A NaN angle maps to zero steps; out-of-range angles saturate.
pub fn angle_to_steps(method: SteppingMethod, degrees: f32) -> i32 {
    let scaled = (degrees * steps_per_revolution(method) as f32) as i32;
    scaled / DEGREES_PER_REV
}

/// A rotation request in any of the supported units
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    /// Raw elementary steps
    Steps(i32),
    /// Quarter revolutions
    Quarter(i32),
    /// Half revolutions
    Half(i32),
    /// Full revolutions
    Full(i32),
    /// Angle in degrees
    Angle(f32),
}

impl Rotation {
    /// Elementary steps this rotation issues under `method`
    pub fn to_steps(self, method: SteppingMethod) -> i32 {
        match self {
            Rotation::Steps(n) => n,
            Rotation::Quarter(n) => quarter_rotation_steps(method, n),
            Rotation::Half(n) => half_rotation_steps(method, n),
            Rotation::Full(n) => full_rotation_steps(method, n),
            Rotation::Angle(degrees) => angle_to_steps(method, degrees),
        }
    }
}
