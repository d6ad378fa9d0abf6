//! Recording GPIO platform for tests

use std::vec::Vec;

use quadstep_hal::{GpioPlatform, Level, PinId};

/// One call into the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Configure(PinId),
    Write(PinId, Level),
    Hold(u32),
}

/// Injected platform failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockFault;

/// Platform that records every call
pub struct MockPlatform {
    pub events: Vec<Event>,
    levels: [Level; 256],
    /// Pins at or above this number are rejected as invalid
    limit: u16,
    /// Fail the write with this 0-based index
    fail_write: Option<usize>,
    writes: usize,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            levels: [Level::Low; 256],
            limit: 256,
            fail_write: None,
            writes: 0,
        }
    }

    /// Only pins below `limit` are valid
    pub fn with_pin_limit(mut self, limit: u16) -> Self {
        self.limit = limit;
        self
    }

    /// Fail the `n`th write (0-based)
    pub fn failing_write(mut self, n: usize) -> Self {
        self.fail_write = Some(n);
        self
    }

    pub fn level(&self, pin: PinId) -> Level {
        self.levels[pin as usize]
    }

    pub fn write_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::Write(..)))
            .count()
    }

    pub fn holds(&self) -> Vec<u32> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Hold(ms) => Some(*ms),
                _ => None,
            })
            .collect()
    }

    /// Levels of `pins` at each hold, i.e. the pattern each step showed
    pub fn held_patterns(&self, pins: [PinId; 4]) -> Vec<[bool; 4]> {
        let mut levels = [Level::Low; 256];
        let mut patterns = Vec::new();
        for event in &self.events {
            match *event {
                Event::Write(pin, level) => levels[pin as usize] = level,
                Event::Hold(_) => patterns.push(pins.map(|p| levels[p as usize].is_high())),
                Event::Configure(_) => {}
            }
        }
        patterns
    }

    /// Forget everything recorded so far
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl GpioPlatform for MockPlatform {
    type Error = MockFault;

    fn is_valid_pin(&self, pin: PinId) -> bool {
        (pin as u16) < self.limit
    }

    fn configure_output(&mut self, pin: PinId) -> Result<(), MockFault> {
        self.events.push(Event::Configure(pin));
        Ok(())
    }

    fn write_level(&mut self, pin: PinId, level: Level) -> Result<(), MockFault> {
        if self.fail_write == Some(self.writes) {
            return Err(MockFault);
        }
        self.writes += 1;
        self.levels[pin as usize] = level;
        self.events.push(Event::Write(pin, level));
        Ok(())
    }

    fn hold(&mut self, duration_ms: u32) -> Result<(), MockFault> {
        self.events.push(Event::Hold(duration_ms));
        Ok(())
    }
}
