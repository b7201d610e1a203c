//! Byte transport over the panel SPI bus
//!
//! `send_byte` waits until the bus reports idle, then hands one byte to the
//! hardware. Nothing is buffered.

use meterguard_hal::SpiBus;

use crate::error::DisplayError;

/// How long to wait for the bus to go idle
///
/// Only buses that report busy between bytes can time out. Adapters that
/// finish every transfer inside `write_byte`, like the STM32F0 one, never
/// report busy, so a stuck peripheral hangs there regardless of policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WaitPolicy {
    /// Spin until idle. A stuck bus hangs forever.
    #[default]
    Unbounded,
    /// Give up with [`DisplayError::BusTimeout`] after `max_polls` busy reads
    Bounded { max_polls: u32 },
}

/// Blocking byte transport
pub struct Transport<SPI> {
    spi: SPI,
    policy: WaitPolicy,
}

impl<SPI: SpiBus> Transport<SPI> {
    /// Create a transport that waits forever
    pub fn new(spi: SPI) -> Self {
        Self::with_policy(spi, WaitPolicy::Unbounded)
    }

    pub fn with_policy(spi: SPI, policy: WaitPolicy) -> Self {
        Self { spi, policy }
    }

    pub fn policy(&self) -> WaitPolicy {
        self.policy
    }

    /// Block until the bus is idle
    pub fn await_ready(&mut self) -> Result<(), DisplayError> {
        match self.policy {
            WaitPolicy::Unbounded => {
                while self.spi.is_busy() {
                    core::hint::spin_loop();
                }
                Ok(())
            }
            WaitPolicy::Bounded { max_polls } => {
                let mut polls = 0;
                while self.spi.is_busy() {
                    if polls >= max_polls {
                        return Err(DisplayError::BusTimeout);
                    }
                    polls += 1;
                    core::hint::spin_loop();
                }
                Ok(())
            }
        }
    }

    /// Send one byte once the bus is idle
    pub fn send_byte(&mut self, byte: u8) -> Result<(), DisplayError> {
        self.await_ready()?;
        self.spi
            .write_byte(byte)
            .map_err(|_| DisplayError::Communication)
    }

    /// Give back the bus
    pub fn release(self) -> SPI {
        self.spi
    }
}
