//! SPI adapter
//!
//! Each byte is written and flushed before returning, so the bus is never
//! left busy between calls. The wait happens inside embassy's `flush`, which
//! has no timeout.

use embedded_hal::spi::{Error as _, ErrorKind};

/// Error from SPI operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiBusError {
    /// Receive overrun
    Overrun,
    /// Mode fault
    ModeFault,
    /// Frame format error
    FrameFormat,
    /// Other error
    Other,
}

impl From<ErrorKind> for SpiBusError {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::Overrun => SpiBusError::Overrun,
            ErrorKind::ModeFault => SpiBusError::ModeFault,
            ErrorKind::FrameFormat => SpiBusError::FrameFormat,
            _ => SpiBusError::Other,
        }
    }
}

/// Blocking SPI bus adapter
pub struct SpiAdapter<S> {
    spi: S,
}

impl<S: embedded_hal::spi::SpiBus<u8>> SpiAdapter<S> {
    pub fn new(spi: S) -> Self {
        Self { spi }
    }
}

impl<S: embedded_hal::spi::SpiBus<u8>> meterguard_hal::SpiBus for SpiAdapter<S> {
    type Error = SpiBusError;

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.spi.write(&[byte]).map_err(|e| e.kind())?;
        self.spi.flush().map_err(|e| e.kind())?;
        Ok(())
    }

    fn is_busy(&self) -> bool {
        // write_byte flushes before returning
        false
    }
}
