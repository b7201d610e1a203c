//! Meterguard - Smart-Meter Tamper Dashboard
//!
//! Firmware for an STM32F042K6 driving an ILI9341 panel over SPI1 and
//! streaming one telemetry record per iteration over USART2.
//!
//! Sensor readings are synthetic. Every fourth iteration is a tamper event
//! that updates the history shown on screen.

#![no_std]
#![no_main]

use defmt::*;
use embassy_stm32::gpio::{Level, Output, Speed};
use embassy_stm32::spi::Spi;
use embassy_stm32::usart::UartTx;
use {defmt_rtt as _, panic_probe as _};

use meterguard_core::{LoopConfig, Sample, SimulationConfig, SimulationContext};
use meterguard_display::screens::{render_dashboard, MeterStatus};
use meterguard_display::{Canvas, Ili9341, PanelBus, Transport};
use meterguard_hal::spi::SpiConfig;
use meterguard_hal::uart::UartConfig;
use meterguard_hal::{BusyWait, UartTx as _};
use meterguard_hal_stm32f0::{board, CycleDelay, OutputLine, SpiAdapter, UartAdapter, UartBusError};
use meterguard_protocol::{RecordError, BOOT_BANNER};

/// Failure while sending a record
#[derive(Format)]
enum TelemetryError {
    Encode(RecordError),
    Uart(UartBusError),
}

#[cortex_m_rt::entry]
fn main() -> ! {
    info!("Meterguard dashboard starting...");

    // HSI 8 MHz, no PLL
    let p = embassy_stm32::init(Default::default());

    // Panel: PA5=SCK, PA7=MOSI, PB0=D/C, PB1=RESET
    let spi = Spi::new_blocking_txonly(
        p.SPI1,
        p.PA5,
        p.PA7,
        board::spi_config(&SpiConfig::default()),
    );
    let dc = OutputLine::new(Output::new(p.PB0, Level::Low, Speed::VeryHigh), false);
    let rst = OutputLine::new(Output::new(p.PB1, Level::High, Speed::VeryHigh), true);
    let bus = PanelBus::new(
        Transport::new(SpiAdapter::new(spi)),
        dc,
        rst,
        CycleDelay::default(),
    );
    let mut canvas = Canvas::new(Ili9341::new(bus));

    // Telemetry: PA2=TX
    let tx = unwrap!(UartTx::new_blocking(
        p.USART2,
        p.PA2,
        board::uart_config(&UartConfig::default()),
    ));
    let mut uart = UartAdapter::new(tx);

    unwrap!(canvas.init());
    info!("ILI9341 initialized");

    let loop_config = LoopConfig::default();
    let mut sim = SimulationContext::new(SimulationConfig::default());
    let mut delay = CycleDelay::default();

    if let Err(e) = uart.write_blocking(BOOT_BANNER.as_bytes()) {
        warn!("Boot banner failed: {:?}", e);
    }

    if let Err(e) = render_dashboard(&mut canvas, MeterStatus::Normal, sim.state()) {
        error!("Initial render failed: {:?}", e);
    }

    info!(
        "Entering main loop ({} ms per update)",
        loop_config.update_interval_ms
    );

    loop {
        let sample = sim.step();
        debug!(
            "Sample {}: tamper={} V={} I={} T={} L={} M={}",
            sample.iteration,
            sample.tamper,
            sample.reading.voltage,
            sample.reading.current,
            sample.reading.temperature,
            sample.reading.light,
            sample.reading.magnetic_field
        );

        if let Err(e) = send_record(&mut uart, &sample) {
            warn!("Telemetry failed: {:?}", e);
        }

        if sample.tamper {
            info!("Tamper event #{}", sim.state().events);
        }

        trace!("Redrawing dashboard");
        let status = MeterStatus::from_tamper(sample.tamper);
        if let Err(e) = render_dashboard(&mut canvas, status, sim.state()) {
            error!("Render failed: {:?}", e);
        }

        delay.delay_ms(loop_config.update_interval_ms);
    }
}

/// Encode a sample and write it to the telemetry link
fn send_record<U>(uart: &mut U, sample: &Sample) -> Result<(), TelemetryError>
where
    U: meterguard_hal::UartTx<Error = UartBusError>,
{
    let line = sample
        .reading
        .to_record(sample.tamper)
        .to_line()
        .map_err(TelemetryError::Encode)?;
    uart.write_blocking(line.as_bytes())
        .map_err(TelemetryError::Uart)
}
