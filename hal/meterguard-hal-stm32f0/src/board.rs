//! Reference board wiring and peripheral config
//!
//! | Signal        | Pin  | Peripheral |
//! |---------------|------|------------|
//! | Panel SCK     | PA5  | SPI1       |
//! | Panel MOSI    | PA7  | SPI1       |
//! | Panel D/C     | PB0  | GPIO       |
//! | Panel RESET   | PB1  | GPIO       |
//! | Telemetry TX  | PA2  | USART2     |

use embassy_stm32::spi;
use embassy_stm32::time::Hertz;
use embassy_stm32::usart;
use meterguard_hal::spi::{Mode, SpiConfig};
use meterguard_hal::uart::{DataBits, Parity, StopBits, UartConfig};

/// embassy SPI config from the board-neutral one
pub fn spi_config(config: &SpiConfig) -> spi::Config {
    let mut out = spi::Config::default();
    out.frequency = Hertz(config.frequency);
    out.mode = match config.mode {
        Mode::Mode0 => spi::MODE_0,
        Mode::Mode1 => spi::MODE_1,
        Mode::Mode2 => spi::MODE_2,
        Mode::Mode3 => spi::MODE_3,
    };
    out
}

/// embassy USART config from the board-neutral one
pub fn uart_config(config: &UartConfig) -> usart::Config {
    let mut out = usart::Config::default();
    out.baudrate = config.baudrate;
    out.data_bits = match config.data_bits {
        DataBits::Seven => usart::DataBits::DataBits7,
        DataBits::Eight => usart::DataBits::DataBits8,
        DataBits::Nine => usart::DataBits::DataBits9,
    };
    out.parity = match config.parity {
        Parity::None => usart::Parity::ParityNone,
        Parity::Even => usart::Parity::ParityEven,
        Parity::Odd => usart::Parity::ParityOdd,
    };
    out.stop_bits = match config.stop_bits {
        StopBits::One => usart::StopBits::STOP1,
        StopBits::Two => usart::StopBits::STOP2,
    };
    out
}
