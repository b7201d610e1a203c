//! Packed 16-bit colors
//!
//! Values are sent to the panel as-is. The channel order depends on how the
//! panel is configured; the dashboard panel runs in BGR mode.

/// 5-6-5 packed pixel value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color(pub u16);

impl Color {
    pub const BLACK: Self = Self(0x0000);
    pub const WHITE: Self = Self(0xFFFF);
    pub const YELLOW: Self = Self(0xFFE0);
    /// Dashboard background while tampering
    pub const TAMPER_BACKGROUND: Self = Self(0x52DF);
    /// Dashboard background in normal operation
    pub const NORMAL_BACKGROUND: Self = Self(0xDFE5);

    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Wire order: high byte first
    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

impl From<u16> for Color {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_bytes_high_first() {
        assert_eq!(Color::TAMPER_BACKGROUND.to_be_bytes(), [0x52, 0xDF]);
        assert_eq!(Color::NORMAL_BACKGROUND.to_be_bytes(), [0xDF, 0xE5]);
    }
}
