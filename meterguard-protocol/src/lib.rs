//! Meterguard Serial Telemetry Protocol
//!
//! The meter reports every sample over the serial link as one flat text
//! record terminated by CRLF. This crate owns that record shape and the
//! decimal spelling shared with the on-screen numbers.
//!
//! # Record Overview
//!
//! ```text
//! {"voltage":237,"current":95,"temperature":48,"lightIntensity":189,"magneticField":112,"tamperFlag":0}\r\n
//! ```
//!
//! There is no framing, checksum or acknowledgement: the link is a
//! fire-and-forget log stream.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod decimal;
pub mod record;

pub use decimal::{format_decimal, parse_decimal, DecimalString, MAX_DECIMAL_DIGITS};
pub use record::{RecordError, TelemetryRecord, BOOT_BANNER, MAX_RECORD_LEN, RECORD_TERMINATOR};
