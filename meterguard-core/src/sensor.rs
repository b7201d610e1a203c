//! Sensor snapshot

use meterguard_protocol::TelemetryRecord;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One set of meter readings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorSnapshot {
    /// Volts
    pub voltage: u16,
    /// Amperes
    pub current: u16,
    /// Degrees Celsius
    pub temperature: u16,
    /// Lux
    pub light: u16,
    /// Field strength
    pub magnetic_field: u16,
}

impl SensorSnapshot {
    /// Telemetry record for this snapshot
    pub fn to_record(&self, tamper: bool) -> TelemetryRecord {
        TelemetryRecord {
            voltage: self.voltage,
            current: self.current,
            temperature: self.temperature,
            light_intensity: self.light,
            magnetic_field: self.magnetic_field,
            tamper,
        }
    }
}
