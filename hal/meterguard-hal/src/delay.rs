//! Busy-wait delay abstraction
//!
//! Delays are cycle-counted spins. Nothing else runs while waiting.

/// Calibrated busy-wait
pub trait BusyWait {
    /// Core clock cycles per millisecond
    fn cycles_per_ms(&self) -> u32;

    /// Spin for at least `cycles` core clock cycles
    fn delay_cycles(&mut self, cycles: u32);

    /// Spin for `ms` milliseconds, one calibrated chunk per millisecond
    fn delay_ms(&mut self, ms: u32) {
        let cycles = self.cycles_per_ms();
        for _ in 0..ms {
            self.delay_cycles(cycles);
        }
    }
}
