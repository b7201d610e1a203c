//! Telemetry record encoding and decoding.
//!
//! Record format (one line per sample, fields in fixed order):
//!
//! ```text
//! {"voltage":V,"current":I,"temperature":T,"lightIntensity":L,"magneticField":M,"tamperFlag":F}\r\n
//! ```
//!
//! - V, I, T, L, M: unsigned decimal integers, no leading zeros
//! - F: `0` or `1`
//! - No whitespace, no escaping, no trailing comma

use heapless::String;

use crate::decimal::{format_decimal, parse_decimal};

/// Line terminator after every record
pub const RECORD_TERMINATOR: &str = "\r\n";

/// Line sent once when the firmware comes up
pub const BOOT_BANNER: &str = "Smart Meter System initialized\r\n";

/// Longest possible record, terminator included, rounded up
pub const MAX_RECORD_LEN: usize = 128;

/// Keys of the numeric fields, in wire order
const NUMERIC_KEYS: [&str; 5] = [
    "voltage",
    "current",
    "temperature",
    "lightIntensity",
    "magneticField",
];

/// Key of the trailing tamper flag
const TAMPER_KEY: &str = "tamperFlag";

/// Errors that can occur while encoding or parsing a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RecordError {
    /// Output buffer cannot hold the record
    BufferTooSmall,
    /// Line does not have the record shape (braces, keys, field count)
    Malformed,
    /// A numeric field is not an unsigned 16-bit decimal
    InvalidNumber,
}

/// One telemetry sample as sent over the serial link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TelemetryRecord {
    pub voltage: u16,
    pub current: u16,
    pub temperature: u16,
    pub light_intensity: u16,
    pub magnetic_field: u16,
    pub tamper: bool,
}

impl TelemetryRecord {
    fn numeric_fields(&self) -> [u16; 5] {
        [
            self.voltage,
            self.current,
            self.temperature,
            self.light_intensity,
            self.magnetic_field,
        ]
    }

    /// Append the encoded record, terminator included, to `out`
    pub fn encode<const N: usize>(&self, out: &mut String<N>) -> Result<(), RecordError> {
        push(out, "{")?;
        for (i, (key, value)) in NUMERIC_KEYS.iter().zip(self.numeric_fields()).enumerate() {
            if i > 0 {
                push(out, ",")?;
            }
            push_key(out, key)?;
            push(out, &format_decimal(value))?;
        }
        push(out, ",")?;
        push_key(out, TAMPER_KEY)?;
        push(out, if self.tamper { "1" } else { "0" })?;
        push(out, "}")?;
        push(out, RECORD_TERMINATOR)
    }

    /// Encode into a fresh line buffer
    pub fn to_line(&self) -> Result<String<MAX_RECORD_LEN>, RecordError> {
        let mut line = String::new();
        self.encode(&mut line)?;
        Ok(line)
    }

    /// Parse a record line
    ///
    /// The terminator is optional so lines split by a host reader parse too.
    /// Field order and key spelling must match exactly.
    pub fn parse(line: &str) -> Result<Self, RecordError> {
        let line = line.strip_suffix(RECORD_TERMINATOR).unwrap_or(line);
        let body = line
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
            .ok_or(RecordError::Malformed)?;

        let mut fields = body.split(',');
        let mut values = [0u16; 5];
        for (slot, key) in values.iter_mut().zip(NUMERIC_KEYS) {
            let raw = take_value(fields.next(), key)?;
            *slot = parse_decimal(raw).ok_or(RecordError::InvalidNumber)?;
        }

        let tamper = match take_value(fields.next(), TAMPER_KEY)? {
            "0" => false,
            "1" => true,
            _ => return Err(RecordError::Malformed),
        };

        if fields.next().is_some() {
            return Err(RecordError::Malformed);
        }

        Ok(Self {
            voltage: values[0],
            current: values[1],
            temperature: values[2],
            light_intensity: values[3],
            magnetic_field: values[4],
            tamper,
        })
    }
}

fn push<const N: usize>(out: &mut String<N>, text: &str) -> Result<(), RecordError> {
    out.push_str(text).map_err(|_| RecordError::BufferTooSmall)
}

fn push_key<const N: usize>(out: &mut String<N>, key: &str) -> Result<(), RecordError> {
    push(out, "\"")?;
    push(out, key)?;
    push(out, "\":")
}

/// Split `"key":value` and check the key
fn take_value<'a>(field: Option<&'a str>, key: &str) -> Result<&'a str, RecordError> {
    let (raw_key, value) = field
        .and_then(|f| f.split_once(':'))
        .ok_or(RecordError::Malformed)?;
    let unquoted = raw_key
        .strip_prefix('"')
        .and_then(|k| k.strip_suffix('"'))
        .ok_or(RecordError::Malformed)?;
    if unquoted != key {
        return Err(RecordError::Malformed);
    }
    Ok(value)
}
