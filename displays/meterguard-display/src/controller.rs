//! Panel controller capability
//!
//! Both supported controllers expose the same four operations. Drawing code
//! is generic over this trait, so the panel is picked at build time.

use crate::color::Color;
use crate::error::DisplayError;

/// A panel controller that accepts addressed-window pixel streams
pub trait PanelController {
    /// Panel width in pixels
    const WIDTH: u16;
    /// Panel height in pixels
    const HEIGHT: u16;

    /// Pulse the hardware reset line and wait for the panel to settle
    fn reset(&mut self) -> Result<(), DisplayError>;

    /// Reset, then run the panel's init sequence
    fn init(&mut self) -> Result<(), DisplayError>;

    /// Program the write window `(x0, y0)..=(x1, y1)`
    ///
    /// The high corner is clipped to the panel. The low corner must lie on
    /// the panel and not exceed the high corner.
    fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> Result<(), DisplayError>;

    /// Emit one pixel into the current window
    fn stream_pixel(&mut self, color: Color) -> Result<(), DisplayError>;
}

/// Clip a window's high corner to a `width` x `height` panel
pub(crate) fn clip_high_corner(x1: u16, y1: u16, width: u16, height: u16) -> (u16, u16) {
    (
        x1.min(width.saturating_sub(1)),
        y1.min(height.saturating_sub(1)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_high_corner() {
        assert_eq!(clip_high_corner(10, 20, 240, 320), (10, 20));
        assert_eq!(clip_high_corner(500, 500, 240, 320), (239, 319));
        assert_eq!(clip_high_corner(175, 300, 176, 220), (175, 219));
    }
}
