//! Demonstration script
//!
//! Exercises every rotation command under each stepping method: full turns
//! in both directions, a half turn, a quarter turn and 30° moves, all at a
//! 3 ms step duration.

use quadstep_core::rotation::Rotation;
use quadstep_core::sequence::SteppingMethod;
use quadstep_core::traits::StepperDriver;

/// Step duration used by every demo move
pub const DEMO_STEP_DURATION_MS: u32 = 3;

/// One scripted move
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DemoMove {
    /// Human-readable description
    pub label: &'static str,
    /// Stepping method selected before the move
    pub method: SteppingMethod,
    /// Step duration selected before the move
    pub step_duration_ms: u32,
    /// The rotation performed
    pub rotation: Rotation,
}

impl DemoMove {
    const fn new(label: &'static str, method: SteppingMethod, rotation: Rotation) -> Self {
        Self {
            label,
            method,
            step_duration_ms: DEMO_STEP_DURATION_MS,
            rotation,
        }
    }

    /// Elementary steps this move issues
    pub fn steps(&self) -> i32 {
        self.rotation.to_steps(self.method)
    }

    /// Select the method and duration, then rotate
    pub fn apply<D: StepperDriver>(&self, driver: &mut D) -> Result<(), D::Error> {
        driver.set_stepping_method(self.method);
        driver.set_step_duration_ms(self.step_duration_ms);
        driver.rotate(self.rotation)
    }
}

/// The demonstration sequence
pub const DEMO_SCRIPT: [DemoMove; 7] = [
    DemoMove::new(
        "Full rotation clockwise, wave drive",
        SteppingMethod::WaveDrive,
        Rotation::Full(1),
    ),
    DemoMove::new(
        "Full rotation counterclockwise, full step",
        SteppingMethod::FullStep,
        Rotation::Full(-1),
    ),
    DemoMove::new(
        "Full rotation clockwise, half step",
        SteppingMethod::HalfStep,
        Rotation::Full(1),
    ),
    DemoMove::new(
        "Half rotation counterclockwise, full step",
        SteppingMethod::FullStep,
        Rotation::Half(-1),
    ),
    DemoMove::new(
        "Quarter rotation clockwise, full step",
        SteppingMethod::FullStep,
        Rotation::Quarter(1),
    ),
    DemoMove::new(
        "30 degrees counterclockwise, full step",
        SteppingMethod::FullStep,
        Rotation::Angle(-30.0),
    ),
    DemoMove::new(
        "30 degrees clockwise, half step",
        SteppingMethod::HalfStep,
        Rotation::Angle(30.0),
    ),
];

/// Run the whole script
///
/// `on_move` is called before each move starts. Returns the total number of
/// elementary steps issued. Stops at the first driver error.
pub fn run_demo<D, F>(driver: &mut D, mut on_move: F) -> Result<u32, D::Error>
where
    D: StepperDriver,
    F: FnMut(&DemoMove),
{
    let mut total = 0u32;
    for demo_move in DEMO_SCRIPT.iter() {
        on_move(demo_move);
        demo_move.apply(driver)?;
        total = total.saturating_add(demo_move.steps().unsigned_abs());
    }
    Ok(total)
}
