//! SPI bus abstractions
//!
//! The panel bus is transmit-only. A byte is written into the transmit
//! register and the peripheral reports busy until it has been clocked out.

/// Transmit-only SPI master
pub trait SpiBus {
    /// Error type for SPI operations
    type Error;

    /// Hand one byte to the transmitter
    ///
    /// Returns once the byte has been accepted by hardware, not necessarily
    /// once it has been clocked out.
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Check whether a transfer is still in progress
    fn is_busy(&self) -> bool;
}

/// SPI configuration
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
    /// Clock mode
    pub mode: Mode,
}

impl Default for SpiConfig {
    fn default() -> Self {
        Self {
            frequency: 8_000_000, // 8 MHz, within both panel controllers' write limits
            mode: Mode::Mode0,
        }
    }
}

/// SPI clock mode (polarity and phase)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Mode 0: CPOL=0, CPHA=0
    Mode0,
    /// Mode 1: CPOL=0, CPHA=1
    Mode1,
    /// Mode 2: CPOL=1, CPHA=0
    Mode2,
    /// Mode 3: CPOL=1, CPHA=1
    Mode3,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SpiConfig::default();
        assert_eq!(config.frequency, 8_000_000);
        assert_eq!(config.mode, Mode::Mode0);
    }
}
