//! Unsigned decimal text conversion
//!
//! Used both for on-screen numbers and for the telemetry record, so the two
//! always agree on how a reading is spelled.

use core::fmt::Write;

use heapless::String;

/// Digits in the largest `u16` (65535)
pub const MAX_DECIMAL_DIGITS: usize = 5;

/// Fixed-capacity decimal text
pub type DecimalString = String<MAX_DECIMAL_DIGITS>;

/// Format an unsigned value in decimal
///
/// No leading zeros and no sign. Zero is spelled `"0"`.
pub fn format_decimal(value: u16) -> DecimalString {
    let mut out = DecimalString::new();
    // Capacity covers every u16
    let _ = write!(out, "{}", value);
    out
}

/// Parse unsigned decimal text
///
/// Accepts ASCII digits only. Returns `None` for empty input, any other
/// character, or a value that does not fit in `u16`.
pub fn parse_decimal(text: &str) -> Option<u16> {
    if text.is_empty() {
        return None;
    }

    let mut value: u16 = 0;
    for byte in text.bytes() {
        if !byte.is_ascii_digit() {
            return None;
        }
        value = value.checked_mul(10)?.checked_add((byte - b'0') as u16)?;
    }
    Some(value)
}
