//! Parser for the stepper section of `machine.toml`
//!
//! This is a minimal line-based parser for the TOML subset the firmware
//! config uses. It does not allocate and does NOT support full TOML.
//!
//! Supported features:
//! - A single `[stepper]` section header
//! - Key = value pairs (string, integer, integer array)
//! - Comments (`# ...`), including trailing comments
//!
//! Recognized keys:
//! - `name = "feeder"`
//! - `pins = [2, 3, 4, 5]`, or `pin_a` .. `pin_d` one at a time
//! - `step_duration_ms = 3`
//! - `method = "wave_drive" | "full_step" | "half_step"`

use heapless::String;
use quadstep_hal::PinId;

use super::types::{validate_pins, ConfigError, StepperConfig, MAX_LABEL_LEN};
use crate::sequence::{SteppingMethod, PIN_COUNT};

/// What went wrong while parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseErrorKind {
    /// Line is neither a section header nor `key = value`
    Syntax,
    /// Section other than `[stepper]`
    UnknownSection,
    /// Key not recognized in this section
    UnknownKey,
    /// Value has the wrong type or is out of range
    InvalidValue,
    /// String value exceeds the label capacity
    ValueTooLong,
    /// Unknown stepping method name
    UnknownMethod,
    /// No `[stepper]` section in the input
    MissingSection,
    /// Fewer than four pins were assigned
    MissingPins,
    /// Pins parsed but the assignment is invalid
    Config(ConfigError),
}

/// Parse error with the 1-based line it occurred on
///
/// `line` is `None` for errors only detectable at end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ParseError {
    pub line: Option<usize>,
    pub kind: ParseErrorKind,
}

impl ParseError {
    fn at(line: usize, kind: ParseErrorKind) -> Self {
        Self {
            line: Some(line),
            kind,
        }
    }

    fn eof(kind: ParseErrorKind) -> Self {
        Self { line: None, kind }
    }
}

/// Parse the `[stepper]` section into a validated [`StepperConfig`]
pub fn parse_stepper_config(input: &str) -> Result<StepperConfig, ParseError> {
    let mut in_stepper = false;
    let mut seen_stepper = false;

    let mut name: String<MAX_LABEL_LEN> = String::new();
    let mut pins: [Option<PinId>; PIN_COUNT] = [None; PIN_COUNT];
    let mut step_duration_ms = super::types::DEFAULT_STEP_DURATION_MS;
    let mut method = SteppingMethod::default();

    for (idx, raw) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = strip_comment(raw).trim();

        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('[') {
            let header = header
                .strip_suffix(']')
                .ok_or(ParseError::at(line_no, ParseErrorKind::Syntax))?
                .trim();
            if header != "stepper" {
                return Err(ParseError::at(line_no, ParseErrorKind::UnknownSection));
            }
            in_stepper = true;
            seen_stepper = true;
            continue;
        }

        let (key, value) = line
            .split_once('=')
            .ok_or(ParseError::at(line_no, ParseErrorKind::Syntax))?;
        let key = key.trim();
        let value = value.trim();

        if !in_stepper {
            return Err(ParseError::at(line_no, ParseErrorKind::UnknownKey));
        }

        let err = |kind| ParseError::at(line_no, kind);

        match key {
            "name" => {
                let s = parse_string(value).ok_or(err(ParseErrorKind::InvalidValue))?;
                name.clear();
                name.push_str(s)
                    .map_err(|_| err(ParseErrorKind::ValueTooLong))?;
            }
            "pins" => {
                let parsed = parse_pin_array(value).ok_or(err(ParseErrorKind::InvalidValue))?;
                pins = parsed.map(Some);
            }
            "pin_a" | "pin_b" | "pin_c" | "pin_d" => {
                let slot = match key {
                    "pin_a" => 0,
                    "pin_b" => 1,
                    "pin_c" => 2,
                    _ => 3,
                };
                let pin = value
                    .parse::<PinId>()
                    .map_err(|_| err(ParseErrorKind::InvalidValue))?;
                pins[slot] = Some(pin);
            }
            "step_duration_ms" => {
                step_duration_ms = value
                    .parse::<u32>()
                    .map_err(|_| err(ParseErrorKind::InvalidValue))?;
            }
            "method" => {
                let s = parse_string(value).ok_or(err(ParseErrorKind::InvalidValue))?;
                method =
                    SteppingMethod::from_name(s).ok_or(err(ParseErrorKind::UnknownMethod))?;
            }
            _ => return Err(err(ParseErrorKind::UnknownKey)),
        }
    }

    if !seen_stepper {
        return Err(ParseError::eof(ParseErrorKind::MissingSection));
    }

    let [Some(a), Some(b), Some(c), Some(d)] = pins else {
        return Err(ParseError::eof(ParseErrorKind::MissingPins));
    };
    let pins = [a, b, c, d];
    validate_pins(&pins).map_err(|e| ParseError::eof(ParseErrorKind::Config(e)))?;

    Ok(StepperConfig {
        name,
        pins,
        step_duration_ms,
        method,
    })
}

/// Remove a trailing `# comment`, ignoring `#` inside double quotes
fn strip_comment(line: &str) -> &str {
    let mut in_string = false;
    for (i, c) in line.char_indices() {
        match c {
            '"' => in_string = !in_string,
            '#' if !in_string => return &line[..i],
            _ => {}
        }
    }
    line
}

/// Parse a double-quoted string value (no escapes)
fn parse_string(value: &str) -> Option<&str> {
    let inner = value.strip_prefix('"')?.strip_suffix('"')?;
    if inner.contains('"') {
        return None;
    }
    Some(inner)
}

/// Parse `[a, b, c, d]` into exactly four pin numbers
fn parse_pin_array(value: &str) -> Option<[PinId; PIN_COUNT]> {
    let inner = value.strip_prefix('[')?.strip_suffix(']')?;
    let mut pins = [0; PIN_COUNT];
    let mut count = 0;

    for item in inner.split(',') {
        let item = item.trim();
        if item.is_empty() {
            // Allow a trailing comma
            continue;
        }
        if count == PIN_COUNT {
            return None;
        }
        pins[count] = item.parse().ok()?;
        count += 1;
    }

    (count == PIN_COUNT).then_some(pins)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MACHINE_TOML: &str = r#"
# 28BYJ-48 on a ULN2003 board
[stepper]
name = "feeder"        # dispenser wheel
pins = [2, 3, 4, 5]
step_duration_ms = 3
method = "half_step"
"#;

    #[test]
    fn test_parse_full_config() {
        let config = parse_stepper_config(MACHINE_TOML).unwrap();
        assert_eq!(config.name.as_str(), "feeder");
        assert_eq!(config.pins, [2, 3, 4, 5]);
        assert_eq!(config.step_duration_ms, 3);
        assert_eq!(config.method, SteppingMethod::HalfStep);
    }

    #[test]
    fn test_individual_pin_keys() {
        let input = "[stepper]\npin_a = 1\npin_b = 2\npin_c = 3\npin_d = 4\n";
        let config = parse_stepper_config(input).unwrap();
        assert_eq!(config.pins, [1, 2, 3, 4]);
        assert_eq!(config.method, SteppingMethod::FullStep);
        assert_eq!(config.step_duration_ms, 3);
    }

    #[test]
    fn test_trailing_comma() {
        let config = parse_stepper_config("[stepper]\npins = [9, 8, 7, 6,]").unwrap();
        assert_eq!(config.pins, [9, 8, 7, 6]);
    }

    #[test]
    fn test_missing_section() {
        let err = parse_stepper_config("# nothing here\n").unwrap_err();
        assert_eq!(err, ParseError::eof(ParseErrorKind::MissingSection));
    }

    #[test]
    fn test_missing_pins() {
        let err = parse_stepper_config("[stepper]\npin_a = 1\npin_b = 2\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::MissingPins);
    }

    #[test]
    fn test_duplicate_pins_rejected() {
        let err = parse_stepper_config("[stepper]\npins = [1, 2, 2, 4]\n").unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::Config(ConfigError::DuplicatePin(2))
        );
    }

    #[test]
    fn test_error_lines() {
        let err = parse_stepper_config("[stepper]\n\nspeed = 10\n").unwrap_err();
        assert_eq!(err, ParseError::at(3, ParseErrorKind::UnknownKey));

        let err = parse_stepper_config("[motor]\n").unwrap_err();
        assert_eq!(err, ParseError::at(1, ParseErrorKind::UnknownSection));

        let err = parse_stepper_config("[stepper]\nmethod = \"micro\"\n").unwrap_err();
        assert_eq!(err, ParseError::at(2, ParseErrorKind::UnknownMethod));

        let err = parse_stepper_config("[stepper]\npins [1, 2, 3, 4]\n").unwrap_err();
        assert_eq!(err, ParseError::at(2, ParseErrorKind::Syntax));
    }

    #[test]
    fn test_invalid_values() {
        for input in [
            "[stepper]\npins = [1, 2, 3]\n",
            "[stepper]\npins = [1, 2, 3, 4, 5]\n",
            "[stepper]\npins = [1, 2, 3, 300]\n",
            "[stepper]\nstep_duration_ms = -1\n",
            "[stepper]\nmethod = full_step\n",
        ] {
            let err = parse_stepper_config(input).unwrap_err();
            assert_eq!(err.kind, ParseErrorKind::InvalidValue, "input: {:?}", input);
        }
    }

    #[test]
    fn test_name_too_long() {
        let err =
            parse_stepper_config("[stepper]\nname = \"a-very-long-stepper-name\"\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::ValueTooLong);
    }

    #[test]
    fn test_hash_inside_string() {
        let config =
            parse_stepper_config("[stepper]\nname = \"dial#2\" # second\npins = [1, 2, 3, 4]")
                .unwrap();
        assert_eq!(config.name.as_str(), "dial#2");
    }
}
