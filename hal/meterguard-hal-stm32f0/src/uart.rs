//! UART transmit adapter for the telemetry link

use embedded_io::{Error as _, ErrorKind};

/// Error from UART operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UartBusError {
    /// Peripheral refused the write
    WriteZero,
    /// Hardware reported a fault
    Hardware,
    /// Other error
    Other,
}

impl From<ErrorKind> for UartBusError {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::WriteZero => UartBusError::WriteZero,
            ErrorKind::Other => UartBusError::Hardware,
            _ => UartBusError::Other,
        }
    }
}

/// Blocking UART transmitter adapter
pub struct UartAdapter<T> {
    tx: T,
}

impl<T: embedded_io::Write> UartAdapter<T> {
    pub fn new(tx: T) -> Self {
        Self { tx }
    }
}

impl<T: embedded_io::Write> meterguard_hal::UartTx for UartAdapter<T> {
    type Error = UartBusError;

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.tx.write_all(&[byte]).map_err(|e| e.kind())?;
        self.tx.flush().map_err(|e| e.kind())?;
        Ok(())
    }

    fn is_busy(&self) -> bool {
        // write_byte flushes before returning
        false
    }
}
