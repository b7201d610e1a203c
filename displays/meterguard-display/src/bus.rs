//! Panel command/data protocol
//!
//! The data/command line selects how the panel interprets each byte: low
//! for a command code, high for parameters and pixel data. Reset and
//! delays go through the same bus so init tables can be replayed in one
//! place.

use meterguard_hal::{BusyWait, OutputPin, SpiBus};

use crate::color::Color;
use crate::error::DisplayError;
use crate::transport::Transport;

/// One step of a panel init table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitStep {
    /// 8-bit command byte
    Command(u8),
    /// 8-bit parameter byte
    Data(u8),
    /// 16-bit register index followed by a 16-bit value
    Register(u16, u16),
    /// Busy-wait before the next step
    DelayMs(u16),
}

/// Command/data bus to a panel controller
pub struct PanelBus<SPI, DC, RST, D> {
    transport: Transport<SPI>,
    dc: DC,
    rst: RST,
    delay: D,
}

impl<SPI, DC, RST, D> PanelBus<SPI, DC, RST, D>
where
    SPI: SpiBus,
    DC: OutputPin,
    RST: OutputPin,
    D: BusyWait,
{
    /// Take ownership of the bus lines
    ///
    /// Leaves D/C low and reset released.
    pub fn new(transport: Transport<SPI>, mut dc: DC, mut rst: RST, delay: D) -> Self {
        dc.set_low();
        rst.set_high();
        Self {
            transport,
            dc,
            rst,
            delay,
        }
    }

    /// Send a command byte
    pub fn write_command(&mut self, code: u8) -> Result<(), DisplayError> {
        self.select(false)?;
        self.transport.send_byte(code)
    }

    /// Send a parameter or pixel byte
    pub fn write_data(&mut self, value: u8) -> Result<(), DisplayError> {
        self.select(true)?;
        self.transport.send_byte(value)
    }

    /// Send a 16-bit command, high byte first
    pub fn write_command16(&mut self, code: u16) -> Result<(), DisplayError> {
        let [hi, lo] = code.to_be_bytes();
        self.write_command(hi)?;
        self.write_command(lo)
    }

    /// Send 16 bits of data, high byte first
    pub fn write_data16(&mut self, value: u16) -> Result<(), DisplayError> {
        let [hi, lo] = value.to_be_bytes();
        self.write_data(hi)?;
        self.write_data(lo)
    }

    /// Register write: 16-bit index as command, then 16-bit value as data
    pub fn write_register(&mut self, reg: u16, value: u16) -> Result<(), DisplayError> {
        self.write_command16(reg)?;
        self.write_data16(value)
    }

    /// Emit one packed pixel
    pub fn write_pixel(&mut self, color: Color) -> Result<(), DisplayError> {
        self.write_data16(color.raw())
    }

    /// Pulse the reset line
    pub fn reset(&mut self, hold_ms: u32, settle_ms: u32) {
        self.rst.set_low();
        self.delay.delay_ms(hold_ms);
        self.rst.set_high();
        self.delay.delay_ms(settle_ms);
    }

    pub fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    /// Replay an init table in order
    pub fn run(&mut self, steps: &[InitStep]) -> Result<(), DisplayError> {
        for step in steps {
            match *step {
                InitStep::Command(code) => self.write_command(code)?,
                InitStep::Data(value) => self.write_data(value)?,
                InitStep::Register(reg, value) => self.write_register(reg, value)?,
                InitStep::DelayMs(ms) => self.delay_ms(ms as u32),
            }
        }
        Ok(())
    }

    // D/C must not change while a byte is still shifting out
    fn select(&mut self, data: bool) -> Result<(), DisplayError> {
        if self.dc.is_set_high() != data {
            self.transport.await_ready()?;
            self.dc.set_state(data);
        }
        Ok(())
    }
}
