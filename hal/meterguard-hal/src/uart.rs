//! UART serial communication abstractions
//!
//! The telemetry link only transmits. Bytes are written one at a time,
//! each after the transmitter reports idle.

/// UART transmitter
pub trait UartTx {
    /// Error type for transmit operations
    type Error;

    /// Hand one byte to the transmitter
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Check whether the transmitter is still shifting out a byte
    fn is_busy(&self) -> bool;

    /// Write data to the UART
    ///
    /// Spins on [`UartTx::is_busy`] before every byte. There is no timeout:
    /// a transmitter stuck busy blocks forever.
    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        for &byte in data {
            while self.is_busy() {}
            self.write_byte(byte)?;
        }
        Ok(())
    }
}

/// UART configuration
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Number of data bits (typically 8)
    pub data_bits: DataBits,
    /// Parity mode
    pub parity: Parity,
    /// Number of stop bits
    pub stop_bits: StopBits,
}

impl Default for UartConfig {
    fn default() -> Self {
        Self {
            baudrate: 115200,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
        }
    }
}

/// Number of data bits per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataBits {
    Seven,
    Eight,
    Nine,
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopBits {
    One,
    Two,
}
