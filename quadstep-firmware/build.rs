//! Build script for quadstep-firmware
//!
//! - Sets up linker search paths and scripts for memory.x
//! - Validates machine.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Highest usable RP2040 GPIO number
const MAX_GPIO: i64 = 29;

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths and link scripts
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));

    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).expect("create memory.x in OUT_DIR");
    f.write_all(memory_x).expect("write memory.x");

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate machine.toml at compile time
///
/// The firmware parses the same file at boot with a small no_std parser;
/// this catches mistakes before flashing.
fn validate_config() {
    println!("cargo:rerun-if-changed=machine.toml");

    let config_path = Path::new("machine.toml");
    let content = fs::read_to_string(config_path).unwrap_or_else(|e| {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Failed to read machine.toml                              ║\n\
            ║                                                                  ║\n\
            ║  Error: {:<56} ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            e
        )
    });

    let config: toml::Value = toml::from_str(&content).unwrap_or_else(|e| {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid TOML syntax in machine.toml                      ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format_error_lines(&e.to_string())
        )
    });

    let errors = validate_stepper(&config);
    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid [stepper] section in machine.toml                ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=machine.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Check the stepper section; returns every problem found
fn validate_stepper(config: &toml::Value) -> Vec<String> {
    let mut errors = Vec::new();

    let stepper = match config.get("stepper") {
        Some(toml::Value::Table(t)) => t,
        Some(_) => return vec!["[stepper] must be a table".to_string()],
        None => return vec!["Missing [stepper] section".to_string()],
    };

    for key in stepper.keys() {
        if ![
            "name",
            "pins",
            "pin_a",
            "pin_b",
            "pin_c",
            "pin_d",
            "step_duration_ms",
            "method",
        ]
        .contains(&key.as_str())
        {
            errors.push(format!("[stepper] unknown key '{}'", key));
        }
    }

    let mut pins = Vec::new();
    match stepper.get("pins") {
        Some(toml::Value::Array(items)) => {
            if items.len() != 4 {
                errors.push("[stepper] 'pins' must list exactly 4 pins".to_string());
            }
            pins.extend(items.iter().map(|v| v.as_integer()));
        }
        Some(_) => errors.push("[stepper] 'pins' must be an array".to_string()),
        None => {
            for key in ["pin_a", "pin_b", "pin_c", "pin_d"] {
                match stepper.get(key) {
                    Some(v) => pins.push(v.as_integer()),
                    None => errors.push(format!("[stepper] missing '{}' (or 'pins')", key)),
                }
            }
        }
    }

    let mut seen = Vec::new();
    for pin in pins {
        match pin {
            Some(n) if (0..=MAX_GPIO).contains(&n) => {
                if seen.contains(&n) {
                    errors.push(format!("[stepper] gpio{} assigned twice", n));
                }
                seen.push(n);
            }
            _ => errors.push(format!("[stepper] pins must be integers 0-{}", MAX_GPIO)),
        }
    }

    if let Some(v) = stepper.get("step_duration_ms") {
        if !v.as_integer().is_some_and(|ms| ms >= 0 && ms <= u32::MAX as i64) {
            errors.push("[stepper] 'step_duration_ms' must be a non-negative integer".to_string());
        }
    }

    if let Some(v) = stepper.get("method") {
        if !v
            .as_str()
            .is_some_and(|m| ["wave_drive", "full_step", "half_step"].contains(&m))
        {
            errors.push(
                "[stepper] 'method' must be 'wave_drive', 'full_step' or 'half_step'".to_string(),
            );
        }
    }

    errors
}
