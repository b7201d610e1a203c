//! ILI9225 driver
//!
//! 176x220 panel driven through 16-bit register writes. The power-up
//! sequence below must run in order with its delays.

use meterguard_hal::{BusyWait, OutputPin, SpiBus};

use crate::bus::{InitStep, PanelBus};
use crate::color::Color;
use crate::controller::{clip_high_corner, PanelController};
use crate::error::DisplayError;

/// ILI9225 registers
mod reg {
    pub const DRIVER_OUTPUT: u16 = 0x01;
    pub const LCD_AC_DRIVING: u16 = 0x02;
    pub const ENTRY_MODE: u16 = 0x03;
    pub const DISPLAY_CONTROL: u16 = 0x07;
    pub const BLANK_PERIOD: u16 = 0x08;
    pub const FRAME_CYCLE: u16 = 0x0B;
    pub const INTERFACE: u16 = 0x0C;
    pub const OSCILLATOR: u16 = 0x0F;
    pub const POWER_1: u16 = 0x10;
    pub const POWER_2: u16 = 0x11;
    pub const POWER_3: u16 = 0x12;
    pub const POWER_4: u16 = 0x13;
    pub const POWER_5: u16 = 0x14;
    pub const RAM_ADDR_X: u16 = 0x20;
    pub const RAM_ADDR_Y: u16 = 0x21;
    pub const GRAM_WRITE: u16 = 0x22;
    pub const H_WINDOW_END: u16 = 0x36;
    pub const H_WINDOW_START: u16 = 0x37;
    pub const V_WINDOW_END: u16 = 0x38;
    pub const V_WINDOW_START: u16 = 0x39;
}

const RESET_HOLD_MS: u32 = 50;
const RESET_SETTLE_MS: u32 = 150;

/// Init sequence after reset
pub const INIT_SEQUENCE: &[InitStep] = &[
    // Power off
    InitStep::Register(reg::POWER_1, 0x0000),
    InitStep::Register(reg::POWER_2, 0x0000),
    InitStep::Register(reg::POWER_3, 0x0000),
    InitStep::Register(reg::POWER_4, 0x0000),
    InitStep::Register(reg::POWER_5, 0x0000),
    InitStep::DelayMs(40),
    // Power on
    InitStep::Register(reg::POWER_2, 0x0018),
    InitStep::Register(reg::POWER_3, 0x6121),
    InitStep::Register(reg::POWER_4, 0x006F),
    InitStep::Register(reg::POWER_5, 0x495F),
    InitStep::Register(reg::POWER_1, 0x0800),
    InitStep::DelayMs(10),
    InitStep::Register(reg::POWER_2, 0x103B),
    InitStep::DelayMs(50),
    // Panel geometry and timing
    InitStep::Register(reg::DRIVER_OUTPUT, 0x011C),
    InitStep::Register(reg::LCD_AC_DRIVING, 0x0100),
    InitStep::Register(reg::ENTRY_MODE, 0x1030),
    InitStep::Register(reg::DISPLAY_CONTROL, 0x0000),
    InitStep::Register(reg::BLANK_PERIOD, 0x0808),
    InitStep::Register(reg::FRAME_CYCLE, 0x1100),
    InitStep::Register(reg::INTERFACE, 0x0000),
    InitStep::Register(reg::OSCILLATOR, 0x0D01),
    InitStep::Register(reg::RAM_ADDR_X, 0x0000),
    InitStep::Register(reg::RAM_ADDR_Y, 0x0000),
    InitStep::Register(reg::DISPLAY_CONTROL, 0x0012),
    InitStep::DelayMs(50),
    InitStep::Register(reg::DISPLAY_CONTROL, 0x1017),
];

/// ILI9225 panel
pub struct Ili9225<SPI, DC, RST, D> {
    bus: PanelBus<SPI, DC, RST, D>,
}

impl<SPI, DC, RST, D> Ili9225<SPI, DC, RST, D>
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

impl<SPI, DC, RST, D> PanelController for Ili9225<SPI, DC, RST, D>
where
    SPI: SpiBus,
    DC: OutputPin,
    RST: OutputPin,
    D: BusyWait,
{
    const WIDTH: u16 = 176;
    const HEIGHT: u16 = 220;

    fn reset(&mut self) -> Result<(), DisplayError> {
        self.bus.reset(RESET_HOLD_MS, RESET_SETTLE_MS);
        Ok(())
    }

    fn init(&mut self) -> Result<(), DisplayError> {
        self.reset()?;
        self.bus.run(INIT_SEQUENCE)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("ILI9225 ready");

        Ok(())
    }

    fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> Result<(), DisplayError> {
        let (x1, y1) = clip_high_corner(x1, y1, Self::WIDTH, Self::HEIGHT);

        self.bus.write_register(reg::H_WINDOW_END, x1)?;
        self.bus.write_register(reg::H_WINDOW_START, x0)?;
        self.bus.write_register(reg::V_WINDOW_END, y1)?;
        self.bus.write_register(reg::V_WINDOW_START, y0)?;
        self.bus.write_register(reg::RAM_ADDR_X, x0)?;
        self.bus.write_register(reg::RAM_ADDR_Y, y0)?;
        self.bus.write_command16(reg::GRAM_WRITE)
    }

    fn stream_pixel(&mut self, color: Color) -> Result<(), DisplayError> {
        self.bus.write_pixel(color)
    }
}
