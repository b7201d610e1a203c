//! Configuration type definitions
//!
//! The firmware has no config file. These types collect the constants the
//! main loop runs with so they can be overridden in one place and in tests.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::sensor::SensorSnapshot;
use crate::time::DateTime;

/// Inclusive range a synthetic reading is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValueRange {
    pub min: u16,
    pub max: u16,
}

impl ValueRange {
    pub const fn new(min: u16, max: u16) -> Self {
        Self { min, max }
    }

    /// Check whether `value` lies in the range
    pub fn contains(&self, value: u16) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// One range per reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReadingRanges {
    /// Volts
    pub voltage: ValueRange,
    /// Amperes
    pub current: ValueRange,
    /// Degrees Celsius
    pub temperature: ValueRange,
    /// Lux
    pub light: ValueRange,
    /// Field strength, arbitrary units
    pub magnetic_field: ValueRange,
}

impl ReadingRanges {
    /// Quiet meter, no interference
    pub const NORMAL: Self = Self {
        voltage: ValueRange::new(230, 240),
        current: ValueRange::new(1, 15),
        temperature: ValueRange::new(20, 35),
        light: ValueRange::new(0, 30),
        magnetic_field: ValueRange::new(0, 10),
    };

    /// Enclosure opened or a magnet held against the meter
    pub const TAMPER: Self = Self {
        voltage: ValueRange::new(230, 240),
        current: ValueRange::new(50, 150),
        temperature: ValueRange::new(40, 60),
        light: ValueRange::new(150, 250),
        magnetic_field: ValueRange::new(80, 150),
    };

    /// Check whether every reading of `snapshot` lies in its range
    pub fn contains(&self, snapshot: &SensorSnapshot) -> bool {
        self.voltage.contains(snapshot.voltage)
            && self.current.contains(snapshot.current)
            && self.temperature.contains(snapshot.temperature)
            && self.light.contains(snapshot.light)
            && self.magnetic_field.contains(snapshot.magnetic_field)
    }
}

/// Synthetic sensor source configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimulationConfig {
    /// Random generator seed
    pub seed: u32,
    /// Every n-th iteration is a tamper event (0 = never)
    pub tamper_period: u16,
    /// Ranges on quiet iterations
    pub normal: ReadingRanges,
    /// Ranges on tamper iterations
    pub tamper: ReadingRanges,
    /// Minutes the last-tamper clock advances per tamper event
    pub tamper_clock_step_min: u16,
    /// Readings shown before the first tamper event
    pub initial_history: SensorSnapshot,
    /// Tamper events already on record at boot
    pub initial_events: u16,
    /// Last-tamper timestamp at boot
    pub initial_last_tamper: DateTime,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: 12345,
            tamper_period: 4,
            normal: ReadingRanges::NORMAL,
            tamper: ReadingRanges::TAMPER,
            tamper_clock_step_min: 5,
            initial_history: SensorSnapshot {
                voltage: 237,
                current: 95,
                temperature: 48,
                light: 189,
                magnetic_field: 112,
            },
            initial_events: 1,
            initial_last_tamper: DateTime::new(10, 1, 2026, 1, 5, 0),
        }
    }
}

/// Main loop pacing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoopConfig {
    /// Delay between dashboard samples
    pub update_interval_ms: u32,
    /// Time each face expression stays on screen
    pub frame_interval_ms: u32,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            update_interval_ms: 3000,
            frame_interval_ms: 800,
        }
    }
}
