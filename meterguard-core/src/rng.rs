//! Deterministic pseudo-random source
//!
//! A 31-bit linear congruential generator. The same seed always yields the
//! same reading sequence, which keeps the simulated meter reproducible.

use crate::config::ValueRange;

const MULTIPLIER: u32 = 1_103_515_245;
const INCREMENT: u32 = 12_345;
const MASK: u32 = 0x7fff_ffff;

/// Linear congruential generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advance and return the next 31-bit value
    pub fn next_u31(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT) & MASK;
        self.state
    }

    /// Draw a value from an inclusive range
    pub fn next_in(&mut self, range: ValueRange) -> u16 {
        let span = (range.max as u32).saturating_sub(range.min as u32) + 1;
        range.min + (self.next_u31() % span) as u16
    }
}
