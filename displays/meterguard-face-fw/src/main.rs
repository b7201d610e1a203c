//! Meterguard Face Demo
//!
//! Cycles a cartoon face through smile, angry and sad on a 176x220 ILI9225
//! panel. No telemetry is sent.

#![no_std]
#![no_main]

use defmt::*;
use embassy_stm32::gpio::{Level, Output, Speed};
use embassy_stm32::spi::Spi;
use {defmt_rtt as _, panic_probe as _};

use meterguard_core::LoopConfig;
use meterguard_display::screens::{draw_expression, draw_head, Expression};
use meterguard_display::{Canvas, Ili9225, PanelBus, Transport};
use meterguard_hal::spi::SpiConfig;
use meterguard_hal::BusyWait;
use meterguard_hal_stm32f0::{board, CycleDelay, OutputLine, SpiAdapter};

#[cortex_m_rt::entry]
fn main() -> ! {
    info!("Meterguard face demo starting...");

    let p = embassy_stm32::init(Default::default());

    // Panel: PA5=SCK, PA7=MOSI, PB0=RS, PB1=RESET
    let spi = Spi::new_blocking_txonly(
        p.SPI1,
        p.PA5,
        p.PA7,
        board::spi_config(&SpiConfig::default()),
    );
    let rs = OutputLine::new(Output::new(p.PB0, Level::Low, Speed::VeryHigh), false);
    let rst = OutputLine::new(Output::new(p.PB1, Level::High, Speed::VeryHigh), true);
    let bus = PanelBus::new(
        Transport::new(SpiAdapter::new(spi)),
        rs,
        rst,
        CycleDelay::default(),
    );
    let mut canvas = Canvas::new(Ili9225::new(bus));

    unwrap!(canvas.init());
    unwrap!(draw_head(&mut canvas));
    info!("ILI9225 initialized");

    let frame_ms = LoopConfig::default().frame_interval_ms;
    let mut delay = CycleDelay::default();
    let mut expression = Expression::Smile;

    loop {
        trace!("Frame: {:?}", expression);
        if let Err(e) = draw_expression(&mut canvas, expression) {
            error!("Frame failed: {:?}", e);
        }
        delay.delay_ms(frame_ms);
        expression = expression.next();
    }
}
