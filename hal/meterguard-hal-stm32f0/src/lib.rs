//! STM32F0 board support for the Meterguard firmware
//!
//! This crate adapts embassy-stm32's blocking drivers to the
//! `meterguard-hal` traits. It supports:
//!
//! - STM32F042K6 (reference board)
//! - STM32F042F6
//!
//! # Features
//!
//! - `stm32f042k6` - Enable support for STM32F042K6T6
//! - `stm32f042f6` - Enable support for STM32F042F6P6
//! - `defmt` - Enable debug formatting support
//!
//! # Usage
//!
//! The firmware creates the embassy peripherals with [`board::spi_config`]
//! and [`board::uart_config`], then wraps them in [`SpiAdapter`],
//! [`OutputLine`] and [`UartAdapter`]. [`CycleDelay`] provides the
//! busy-wait.

#![no_std]

pub mod board;
pub mod delay;
pub mod gpio;
pub mod spi;
pub mod uart;

pub use delay::CycleDelay;
pub use gpio::OutputLine;
pub use spi::{SpiAdapter, SpiBusError};
pub use uart::{UartAdapter, UartBusError};
