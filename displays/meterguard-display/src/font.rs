//! 5x7 bitmap font
//!
//! Each glyph is five column bytes, bit 0 at the top. Only the characters
//! the screens print are present; anything else is skipped but still
//! advances the pen.

use meterguard_protocol::format_decimal;

use crate::canvas::Canvas;
use crate::color::Color;
use crate::controller::PanelController;
use crate::error::DisplayError;

/// Glyph cell height in pixels at scale 1
pub const GLYPH_HEIGHT: u16 = 7;

/// Pen advance per character at scale 1
pub const ADVANCE: u16 = 6;

static GLYPHS: [[u8; 5]; 33] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], // space
    [0x3E, 0x51, 0x49, 0x45, 0x3E], // 0
    [0x00, 0x42, 0x7F, 0x40, 0x00], // 1
    [0x42, 0x61, 0x51, 0x49, 0x46], // 2
    [0x21, 0x41, 0x45, 0x4B, 0x31], // 3
    [0x18, 0x14, 0x12, 0x7F, 0x10], // 4
    [0x27, 0x45, 0x45, 0x45, 0x39], // 5
    [0x3C, 0x4A, 0x49, 0x49, 0x30], // 6
    [0x01, 0x71, 0x09, 0x05, 0x03], // 7
    [0x36, 0x49, 0x49, 0x49, 0x36], // 8
    [0x06, 0x49, 0x49, 0x29, 0x1E], // 9
    [0x00, 0x36, 0x36, 0x00, 0x00], // :
    [0x7C, 0x12, 0x11, 0x12, 0x7C], // A
    [0x3E, 0x41, 0x41, 0x41, 0x22], // C
    [0x7F, 0x41, 0x41, 0x22, 0x1C], // D
    [0x7F, 0x49, 0x49, 0x49, 0x41], // E
    [0x7F, 0x09, 0x09, 0x09, 0x01], // F
    [0x3E, 0x41, 0x49, 0x49, 0x7A], // G
    [0x7F, 0x08, 0x08, 0x08, 0x7F], // H
    [0x00, 0x41, 0x7F, 0x41, 0x00], // I
    [0x7F, 0x40, 0x40, 0x40, 0x40], // L
    [0x7F, 0x02, 0x0C, 0x02, 0x7F], // M
    [0x7F, 0x04, 0x08, 0x10, 0x7F], // N
    [0x3E, 0x41, 0x41, 0x41, 0x3E], // O
    [0x7F, 0x09, 0x09, 0x09, 0x06], // P
    [0x7F, 0x09, 0x19, 0x29, 0x46], // R
    [0x46, 0x49, 0x49, 0x49, 0x31], // S
    [0x01, 0x01, 0x7F, 0x01, 0x01], // T
    [0x3F, 0x40, 0x40, 0x40, 0x3F], // V
    [0x03, 0x04, 0x78, 0x04, 0x03], // Y
    [0x20, 0x10, 0x08, 0x04, 0x02], // /
    [0x00, 0x00, 0x7F, 0x00, 0x00], // l
    [0x63, 0x14, 0x08, 0x14, 0x63], // x
];

/// Position of `ch` in the glyph table
pub fn glyph_index(ch: char) -> Option<usize> {
    let index = match ch {
        ' ' => 0,
        '0'..='9' => 1 + (ch as usize - '0' as usize),
        ':' => 11,
        'A' => 12,
        'C' => 13,
        'D' => 14,
        'E' => 15,
        'F' => 16,
        'G' => 17,
        'H' => 18,
        'I' => 19,
        'L' => 20,
        'M' => 21,
        'N' => 22,
        'O' => 23,
        'P' => 24,
        'R' => 25,
        'S' => 26,
        'T' => 27,
        'V' => 28,
        'Y' => 29,
        '/' => 30,
        'l' => 31,
        'x' => 32,
        _ => return None,
    };
    Some(index)
}

/// Column bytes for `ch`, if the font has it
pub fn glyph(ch: char) -> Option<&'static [u8; 5]> {
    glyph_index(ch).map(|i| &GLYPHS[i])
}

/// Width covered by `len` characters at `scale`
pub const fn text_width(len: usize, scale: u8) -> u32 {
    len as u32 * ADVANCE as u32 * scale as u32
}

impl<P: PanelController> Canvas<P> {
    /// Draw one character with its top-left corner at `(x, y)`
    ///
    /// Every set bit becomes a `scale` x `scale` block.
    pub fn draw_char(
        &mut self,
        x: i32,
        y: i32,
        ch: char,
        color: Color,
        scale: u8,
    ) -> Result<(), DisplayError> {
        let Some(columns) = glyph(ch) else {
            return Ok(());
        };
        let step = scale as i32;

        for (col, &bits) in columns.iter().enumerate() {
            for row in 0..GLYPH_HEIGHT as i32 {
                if bits >> row & 1 != 0 {
                    self.fill_rect(
                        x.saturating_add(col as i32 * step),
                        y.saturating_add(row * step),
                        scale as u16,
                        scale as u16,
                        color,
                    )?;
                }
            }
        }
        Ok(())
    }

    /// Draw `text` left to right, advancing `6 * scale` per character
    pub fn draw_string(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        color: Color,
        scale: u8,
    ) -> Result<(), DisplayError> {
        let advance = ADVANCE as i32 * scale as i32;
        let mut pen = x;
        for ch in text.chars() {
            self.draw_char(pen, y, ch, color, scale)?;
            pen = pen.saturating_add(advance);
        }
        Ok(())
    }

    /// Draw `value` in decimal
    pub fn draw_number(
        &mut self,
        x: i32,
        y: i32,
        value: u16,
        color: Color,
        scale: u8,
    ) -> Result<(), DisplayError> {
        self.draw_string(x, y, &format_decimal(value), color, scale)
    }
}
