//! Cycle-counted busy wait

/// Core clock after reset (HSI, no PLL)
pub const HSI_HZ: u32 = 8_000_000;

/// Busy-wait calibrated to the core clock
#[derive(Debug, Clone, Copy)]
pub struct CycleDelay {
    cycles_per_ms: u32,
}

impl CycleDelay {
    pub const fn new(sysclk_hz: u32) -> Self {
        Self {
            cycles_per_ms: sysclk_hz / 1000,
        }
    }
}

impl Default for CycleDelay {
    fn default() -> Self {
        Self::new(HSI_HZ)
    }
}

impl meterguard_hal::BusyWait for CycleDelay {
    fn cycles_per_ms(&self) -> u32 {
        self.cycles_per_ms
    }

    fn delay_cycles(&mut self, cycles: u32) {
        cortex_m::asm::delay(cycles);
    }
}
