//! Configuration types
//!
//! Board-agnostic stepper configuration plus a parser for the
//! `machine.toml` subset the firmware embeds.

pub mod parse;
pub mod types;

pub use parse::{parse_stepper_config, ParseError, ParseErrorKind};
pub use types::*;
