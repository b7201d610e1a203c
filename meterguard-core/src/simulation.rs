//! Simulation context
//!
//! Owns the random source and the tamper history shown on the dashboard.
//! Each call to [`SimulationContext::step`] is one main loop iteration.

use crate::config::{ReadingRanges, SimulationConfig};
use crate::rng::Lcg;
use crate::sensor::SensorSnapshot;
use crate::time::DateTime;

/// What the dashboard shows between tamper events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MeterState {
    /// Readings captured at the last tamper event
    pub history: SensorSnapshot,
    /// Number of tamper events so far
    pub events: u16,
    /// When the last tamper event happened
    pub last_tamper: DateTime,
}

/// Result of one iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sample {
    /// Iteration number, starting at 1
    pub iteration: u16,
    /// Whether this iteration is a tamper event
    pub tamper: bool,
    /// Fresh readings, reported on the serial link
    pub reading: SensorSnapshot,
}

/// Random source plus tamper history
#[derive(Debug, Clone)]
pub struct SimulationContext {
    config: SimulationConfig,
    rng: Lcg,
    iteration: u16,
    state: MeterState,
}

impl SimulationContext {
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            rng: Lcg::new(config.seed),
            iteration: 0,
            state: MeterState {
                history: config.initial_history,
                events: config.initial_events,
                last_tamper: config.initial_last_tamper,
            },
            config,
        }
    }

    /// Current history, event count and timestamp
    pub fn state(&self) -> &MeterState {
        &self.state
    }

    /// Number of completed iterations (wraps at `u16::MAX`)
    pub fn iteration(&self) -> u16 {
        self.iteration
    }

    /// Run one iteration
    ///
    /// On a tamper iteration the readings replace the history, the event
    /// count goes up and the last-tamper clock advances.
    pub fn step(&mut self) -> Sample {
        self.iteration = self.iteration.wrapping_add(1);
        let period = self.config.tamper_period;
        let tamper = period != 0 && self.iteration % period == 0;

        let ranges = if tamper {
            self.config.tamper
        } else {
            self.config.normal
        };
        let reading = self.draw(&ranges);

        if tamper {
            self.state.history = reading;
            self.state.events = self.state.events.wrapping_add(1);
            self.state
                .last_tamper
                .add_minutes(self.config.tamper_clock_step_min);
        }

        Sample {
            iteration: self.iteration,
            tamper,
            reading,
        }
    }

    // Field order fixes the generator sequence
    fn draw(&mut self, ranges: &ReadingRanges) -> SensorSnapshot {
        let voltage = self.rng.next_in(ranges.voltage);
        let current = self.rng.next_in(ranges.current);
        let temperature = self.rng.next_in(ranges.temperature);
        let light = self.rng.next_in(ranges.light);
        let magnetic_field = self.rng.next_in(ranges.magnetic_field);
        SensorSnapshot {
            voltage,
            current,
            temperature,
            light,
            magnetic_field,
        }
    }
}

impl Default for SimulationContext {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(v: u16, i: u16, t: u16, l: u16, m: u16) -> SensorSnapshot {
        SensorSnapshot {
            voltage: v,
            current: i,
            temperature: t,
            light: l,
            magnetic_field: m,
        }
    }

    #[test]
    fn test_initial_state() {
        let sim = SimulationContext::default();
        assert_eq!(sim.iteration(), 0);
        assert_eq!(sim.state().history, snapshot(237, 95, 48, 189, 112));
        assert_eq!(sim.state().events, 1);
        assert_eq!(sim.state().last_tamper, DateTime::new(10, 1, 2026, 1, 5, 0));
    }

    #[test]
    fn test_first_iterations_are_deterministic() {
        let mut sim = SimulationContext::default();

        let expected = [
            (false, snapshot(232, 6, 32, 9, 6)),
            (false, snapshot(233, 8, 21, 2, 2)),
            (false, snapshot(238, 8, 22, 3, 5)),
            (true, snapshot(230, 87, 54, 226, 85)),
        ];

        for (n, (tamper, reading)) in expected.into_iter().enumerate() {
            let sample = sim.step();
            assert_eq!(sample.iteration, n as u16 + 1);
            assert_eq!(sample.tamper, tamper);
            assert_eq!(sample.reading, reading);
        }
    }

    #[test]
    fn test_normal_iteration_keeps_history() {
        let mut sim = SimulationContext::default();
        let before = *sim.state();

        let sample = sim.step();
        assert!(!sample.tamper);
        assert!(ReadingRanges::NORMAL.contains(&sample.reading));
        assert_eq!(*sim.state(), before);
    }

    #[test]
    fn test_tamper_iteration_updates_history() {
        let mut sim = SimulationContext::default();
        for _ in 0..3 {
            sim.step();
        }

        let sample = sim.step();
        assert!(sample.tamper);
        assert!(ReadingRanges::TAMPER.contains(&sample.reading));

        let state = sim.state();
        assert_eq!(state.history, sample.reading);
        assert_eq!(state.events, 2);
        assert_eq!(state.last_tamper, DateTime::new(10, 1, 2026, 1, 10, 0));
    }

    #[test]
    fn test_every_fourth_iteration_is_tamper() {
        let mut sim = SimulationContext::default();
        for n in 1..=40u16 {
            assert_eq!(sim.step().tamper, n % 4 == 0);
        }
        assert_eq!(sim.state().events, 11);
        // 10 events x 5 minutes from 01:05
        assert_eq!(sim.state().last_tamper.hour, 1);
        assert_eq!(sim.state().last_tamper.minute, 55);
    }

    #[test]
    fn test_zero_period_never_tampers() {
        let mut sim = SimulationContext::new(SimulationConfig {
            tamper_period: 0,
            ..SimulationConfig::default()
        });
        for _ in 0..20 {
            assert!(!sim.step().tamper);
        }
        assert_eq!(sim.state().events, 1);
    }

    #[test]
    fn test_iteration_counter_wraps() {
        let mut sim = SimulationContext::default();
        sim.iteration = u16::MAX;
        // 0 % 4 == 0
        assert!(sim.step().tamper);
        assert_eq!(sim.iteration(), 0);
    }
}
