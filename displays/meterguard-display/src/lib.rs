//! Software graphics stack for small SPI TFT panels
//!
//! This crate provides:
//! - [`Transport`] - blocking byte send gated on the bus busy flag
//! - [`PanelBus`] - command/data protocol on top of the transport
//! - [`PanelController`] - reset, init and addressed-window streaming,
//!   implemented by [`Ili9341`] and [`Ili9225`]
//! - [`Canvas`] - pixel, rectangle, circle and arc rasterizer
//! - A scalable 5x7 bitmap font
//! - The dashboard and face screens
//!
//! # Architecture
//!
//! ```text
//! screens ──► Canvas / font ──► PanelController ──► PanelBus ──► Transport
//! ```
//!
//! There is no frame buffer. Every primitive programs a fresh window on the
//! panel and streams exactly one color per addressed pixel, row-major.
//!
//! With the `embedded-graphics` feature, [`Canvas`] is also a `DrawTarget`.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod bus;
pub mod canvas;
pub mod color;
pub mod controller;
pub mod error;
pub mod font;
pub mod ili9225;
pub mod ili9341;
pub mod screens;
pub mod transport;

#[cfg(feature = "embedded-graphics")]
pub mod graphics;

#[cfg(test)]
pub(crate) mod testing;

// Re-export key types
pub use bus::{InitStep, PanelBus};
pub use canvas::{Canvas, PixelStream};
pub use color::Color;
pub use controller::PanelController;
pub use error::DisplayError;
pub use ili9225::Ili9225;
pub use ili9341::Ili9341;
pub use transport::{Transport, WaitPolicy};
