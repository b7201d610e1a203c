//! ILI9341 driver
//!
//! 240x320 panel, 8-bit command set, 16-bit pixels. Configured for BGR
//! order with the orientation the dashboard is laid out for.

use meterguard_hal::{BusyWait, OutputPin, SpiBus};

use crate::bus::{InitStep, PanelBus};
use crate::color::Color;
use crate::controller::{clip_high_corner, PanelController};
use crate::error::DisplayError;

/// ILI9341 commands
mod cmd {
    pub const SLEEP_OUT: u8 = 0x11;
    pub const PIXEL_FORMAT: u8 = 0x3A;
    pub const MEMORY_ACCESS: u8 = 0x36;
    pub const DISPLAY_ON: u8 = 0x29;
    pub const COLUMN_ADDR: u8 = 0x2A;
    pub const PAGE_ADDR: u8 = 0x2B;
    pub const MEMORY_WRITE: u8 = 0x2C;
}

const RESET_HOLD_MS: u32 = 20;
const RESET_SETTLE_MS: u32 = 150;

/// Init sequence after reset
pub const INIT_SEQUENCE: &[InitStep] = &[
    InitStep::Command(cmd::SLEEP_OUT),
    InitStep::DelayMs(120),
    InitStep::Command(cmd::PIXEL_FORMAT),
    InitStep::Data(0x55), // 16 bits per pixel
    InitStep::Command(cmd::MEMORY_ACCESS),
    InitStep::Data(0xC8), // MY | MX | BGR
    InitStep::Command(cmd::DISPLAY_ON),
    InitStep::DelayMs(20),
];

/// ILI9341 panel
pub struct Ili9341<SPI, DC, RST, D> {
    bus: PanelBus<SPI, DC, RST, D>,
}

impl<SPI, DC, RST, D> Ili9341<SPI, DC, RST, D>
where
    SPI: SpiBus,
    DC: OutputPin,
    RST: OutputPin,
    D: BusyWait,
{
    pub fn new(bus: PanelBus<SPI, DC, RST, D>) -> Self {
        Self { bus }
    }
}

impl<SPI, DC, RST, D> PanelController for Ili9341<SPI, DC, RST, D>
where
    SPI: SpiBus,
    DC: OutputPin,
    RST: OutputPin,
    D: BusyWait,
{
    const WIDTH: u16 = 240;
    const HEIGHT: u16 = 320;

    fn reset(&mut self) -> Result<(), DisplayError> {
        self.bus.reset(RESET_HOLD_MS, RESET_SETTLE_MS);
        Ok(())
    }

    fn init(&mut self) -> Result<(), DisplayError> {
        self.reset()?;
        self.bus.run(INIT_SEQUENCE)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("ILI9341 ready");

        Ok(())
    }

    fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> Result<(), DisplayError> {
        let (x1, y1) = clip_high_corner(x1, y1, Self::WIDTH, Self::HEIGHT);

        self.bus.write_command(cmd::COLUMN_ADDR)?;
        self.bus.write_data16(x0)?;
        self.bus.write_data16(x1)?;

        self.bus.write_command(cmd::PAGE_ADDR)?;
        self.bus.write_data16(y0)?;
        self.bus.write_data16(y1)?;

        self.bus.write_command(cmd::MEMORY_WRITE)
    }

    fn stream_pixel(&mut self, color: Color) -> Result<(), DisplayError> {
        self.bus.write_pixel(color)
    }
}
