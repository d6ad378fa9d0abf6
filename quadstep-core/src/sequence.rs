//! Coil-energization sequence tables
//!
//! Each stepping method has a fixed table of 8 phases, each phase the
//! levels of pins A, B, C, D (`true` = HIGH). Phase indices are always
//! reduced modulo [`PHASE_COUNT`].
//!
//! The wave-drive and full-step tables hold identical values. They stay
//! separate constants so the two methods remain distinct in the API; a
//! true two-coil full-step pattern would only need `FULL_STEP_SEQUENCE`
//! to change.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of phases in every sequence table
pub const PHASE_COUNT: usize = 8;

/// Number of pins driven per phase
pub const PIN_COUNT: usize = 4;

/// One row of a sequence table: levels of pins A, B, C, D
pub type PhasePattern = [bool; PIN_COUNT];

/// A complete sequence table
pub type SequenceTable = [PhasePattern; PHASE_COUNT];

const L: bool = false;
const H: bool = true;

/// Wave drive: one coil at a time, 4-phase cycle written twice
pub const WAVE_DRIVE_SEQUENCE: SequenceTable = [
    [L, L, L, H],
    [L, L, H, L],
    [L, H, L, L],
    [H, L, L, L],
    [L, L, L, H],
    [L, L, H, L],
    [L, H, L, L],
    [H, L, L, L],
];

/// Full step: same pin-level sequence as wave drive
pub const FULL_STEP_SEQUENCE: SequenceTable = [
    [L, L, L, H],
    [L, L, H, L],
    [L, H, L, L],
    [H, L, L, L],
    [L, L, L, H],
    [L, L, H, L],
    [L, H, L, L],
    [H, L, L, L],
];

/// Half step: single-coil and dual-coil phases interleaved
pub const HALF_STEP_SEQUENCE: SequenceTable = [
    [L, L, L, H],
    [L, L, H, H],
    [L, L, H, L],
    [L, H, H, L],
    [L, H, L, L],
    [H, H, L, L],
    [H, L, L, L],
    [H, L, L, H],
];

/// Stepping method
///
/// Selects both the sequence table and the number of elementary steps
/// per revolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SteppingMethod {
    /// One coil energized per phase
    WaveDrive,
    /// Full-resolution stepping
    #[default]
    FullStep,
    /// Double resolution, alternating one and two coils
    HalfStep,
}

impl SteppingMethod {
    /// All methods, in table order
    pub const ALL: [SteppingMethod; 3] = [
        SteppingMethod::WaveDrive,
        SteppingMethod::FullStep,
        SteppingMethod::HalfStep,
    ];

    /// Get the sequence table for this method
    pub const fn sequence(self) -> &'static SequenceTable {
        match self {
            SteppingMethod::WaveDrive => &WAVE_DRIVE_SEQUENCE,
            SteppingMethod::FullStep => &FULL_STEP_SEQUENCE,
            SteppingMethod::HalfStep => &HALF_STEP_SEQUENCE,
        }
    }

    /// Parse a config name (`wave_drive`, `full_step`, `half_step`)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "wave_drive" => Some(SteppingMethod::WaveDrive),
            "full_step" => Some(SteppingMethod::FullStep),
            "half_step" => Some(SteppingMethod::HalfStep),
            _ => None,
        }
    }

    /// Config name of this method
    pub const fn name(self) -> &'static str {
        match self {
            SteppingMethod::WaveDrive => "wave_drive",
            SteppingMethod::FullStep => "full_step",
            SteppingMethod::HalfStep => "half_step",
        }
    }
}

/// Look up the pin pattern for `index` (taken modulo 8)
pub const fn phase_pattern(method: SteppingMethod, index: usize) -> PhasePattern {
    method.sequence()[index % PHASE_COUNT]
}
