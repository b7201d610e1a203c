//! Meterguard Board-Support Layer
//!
//! This crate defines the blocking hardware primitives the display and
//! telemetry code is written against. A chip-specific crate implements them
//! for real silicon; tests implement them with recorders.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Firmware (dashboard / face programs)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  meterguard-hal (this crate - traits)   │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ meterguard-   │       │  host mocks   │
//! │ hal-stm32f0   │       │  (tests)      │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Reset and data/command lines
//! - [`spi::SpiBus`] - Byte transmit with busy report (panel bus)
//! - [`uart::UartTx`] - Byte transmit with busy report (telemetry link)
//! - [`delay::BusyWait`] - Calibrated cycle-counted delay
//!
//! Every primitive blocks. There is no interrupt or DMA path.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod delay;
pub mod gpio;
pub mod spi;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use delay::BusyWait;
pub use gpio::OutputPin;
pub use spi::SpiBus;
pub use uart::UartTx;
