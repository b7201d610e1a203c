//! Last-tamper timestamp
//!
//! A plain wall-clock record. Minutes carry into hours and hours carry into
//! days; day/month/year are never validated and never roll over into the
//! next month or year.

use core::fmt::Write;

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// `DD/MM/YYYY`
pub type DateText = String<10>;

/// `HH:MM:SS`
pub type TimeText = String<8>;

/// Calendar timestamp without validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DateTime {
    pub day: u8,
    pub month: u8,
    pub year: u16,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl DateTime {
    pub const fn new(day: u8, month: u8, year: u16, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            day,
            month,
            year,
            hour,
            minute,
            second,
        }
    }

    /// Advance the clock by `minutes`
    ///
    /// Carries minute → hour → day. The day counter is not bounded by the
    /// month length and month/year never change.
    pub fn add_minutes(&mut self, minutes: u16) {
        let total_minutes = self.minute as u32 + minutes as u32;
        self.minute = (total_minutes % 60) as u8;

        let total_hours = self.hour as u32 + total_minutes / 60;
        self.hour = (total_hours % 24) as u8;

        self.day = self.day.wrapping_add((total_hours / 24) as u8);
    }

    /// Date as `DD/MM/YYYY`, each field zero padded and cut to its width
    pub fn date_text(&self) -> DateText {
        let mut out = DateText::new();
        // Fields are reduced to their width so this always fits
        let _ = write!(
            out,
            "{:02}/{:02}/{:04}",
            self.day % 100,
            self.month % 100,
            self.year % 10_000
        );
        out
    }

    /// Time as `HH:MM:SS`
    pub fn time_text(&self) -> TimeText {
        let mut out = TimeText::new();
        let _ = write!(
            out,
            "{:02}:{:02}:{:02}",
            self.hour % 100,
            self.minute % 100,
            self.second % 100
        );
        out
    }
}
