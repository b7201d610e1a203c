//! Primitive rasterizer
//!
//! Every primitive opens a fresh window on the panel and streams exactly one
//! color per addressed pixel. Coordinates are signed so shapes may hang off
//! the panel edge; anything outside the panel is dropped, never wrapped.

use crate::color::Color;
use crate::controller::PanelController;
use crate::error::DisplayError;

/// Degrees to radians with pi cut to 3.14159
#[allow(clippy::approx_constant)]
const DEG_TO_RAD: f32 = 3.14159 / 180.0;

/// Drawing surface over a panel controller
pub struct Canvas<P> {
    panel: P,
}

/// Open write window
///
/// Counts the pixels the window still expects. Pushing past the end fails
/// with [`DisplayError::WindowOverrun`] instead of wrapping on the panel.
pub struct PixelStream<'a, P> {
    panel: &'a mut P,
    remaining: u32,
}

impl<P: PanelController> PixelStream<'_, P> {
    /// Emit one pixel
    pub fn push(&mut self, color: Color) -> Result<(), DisplayError> {
        if self.remaining == 0 {
            return Err(DisplayError::WindowOverrun);
        }
        self.panel.stream_pixel(color)?;
        self.remaining -= 1;
        Ok(())
    }

    /// Emit `count` pixels of one color
    pub fn fill(&mut self, color: Color, count: u32) -> Result<(), DisplayError> {
        if count > self.remaining {
            return Err(DisplayError::WindowOverrun);
        }
        for _ in 0..count {
            self.push(color)?;
        }
        Ok(())
    }

    /// Pixels left before the window is full
    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}

impl<P: PanelController> Canvas<P> {
    pub fn new(panel: P) -> Self {
        Self { panel }
    }

    /// Panel size as (width, height)
    pub fn size(&self) -> (u16, u16) {
        (P::WIDTH, P::HEIGHT)
    }

    pub fn panel_mut(&mut self) -> &mut P {
        &mut self.panel
    }

    pub fn release(self) -> P {
        self.panel
    }

    /// Reset and initialize the panel
    pub fn init(&mut self) -> Result<(), DisplayError> {
        self.panel.init()
    }

    /// Open the window `(x0, y0)..=(x1, y1)`
    ///
    /// The high corner is clipped to the panel. A window whose low corner is
    /// off the panel, or past its high corner, holds no pixels and is not
    /// sent to the panel.
    pub fn open_window(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
    ) -> Result<PixelStream<'_, P>, DisplayError> {
        let x1 = x1.min(P::WIDTH - 1);
        let y1 = y1.min(P::HEIGHT - 1);

        let remaining = if x0 >= P::WIDTH || y0 >= P::HEIGHT || x0 > x1 || y0 > y1 {
            0
        } else {
            self.panel.set_window(x0, y0, x1, y1)?;
            (x1 - x0 + 1) as u32 * (y1 - y0 + 1) as u32
        };

        Ok(PixelStream {
            panel: &mut self.panel,
            remaining,
        })
    }

    /// Set one pixel; off-panel coordinates are ignored
    pub fn draw_pixel(&mut self, x: i32, y: i32, color: Color) -> Result<(), DisplayError> {
        let Some((x, y)) = self.on_panel(x, y) else {
            return Ok(());
        };
        self.open_window(x, y, x, y)?.push(color)
    }

    /// Fill a `w` x `h` rectangle with its top-left corner at `(x, y)`
    ///
    /// Clipped to the panel. Empty rectangles draw nothing.
    pub fn fill_rect(
        &mut self,
        x: i32,
        y: i32,
        w: u16,
        h: u16,
        color: Color,
    ) -> Result<(), DisplayError> {
        if w == 0 || h == 0 {
            return Ok(());
        }

        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = x.saturating_add(w as i32 - 1).min(P::WIDTH as i32 - 1);
        let y1 = y.saturating_add(h as i32 - 1).min(P::HEIGHT as i32 - 1);
        if x0 > x1 || y0 > y1 {
            return Ok(());
        }

        let mut stream = self.open_window(x0 as u16, y0 as u16, x1 as u16, y1 as u16)?;
        let count = stream.remaining();
        stream.fill(color, count)
    }

    /// Fill the whole panel
    pub fn fill_screen(&mut self, color: Color) -> Result<(), DisplayError> {
        self.fill_rect(0, 0, P::WIDTH, P::HEIGHT, color)
    }

    /// Filled circle, drawn pixel by pixel
    ///
    /// Covers every `(cx + dx, cy + dy)` with `dx² + dy² <= r²`.
    pub fn fill_circle(&mut self, cx: i32, cy: i32, r: u16, color: Color) -> Result<(), DisplayError> {
        let r = r as i32;
        let r2 = (r as i64).pow(2);
        for dy in -r..=r {
            for dx in -r..=r {
                if (dx as i64).pow(2) + (dy as i64).pow(2) <= r2 {
                    self.draw_pixel(cx.saturating_add(dx), cy.saturating_add(dy), color)?;
                }
            }
        }
        Ok(())
    }

    /// One-pixel arc from `start_deg` to `end_deg` inclusive
    ///
    /// Plots one point per whole degree, truncating toward zero, with pi
    /// rounded to 3.14159. Angles grow
    /// clockwise on screen since y points down. Nothing is drawn when
    /// `start_deg > end_deg`.
    pub fn draw_arc(
        &mut self,
        cx: i32,
        cy: i32,
        r: u16,
        start_deg: i32,
        end_deg: i32,
        color: Color,
    ) -> Result<(), DisplayError> {
        let radius = r as f32;
        for deg in start_deg..=end_deg {
            let rad = deg as f32 * DEG_TO_RAD;
            let x = cx.saturating_add((radius * libm::cosf(rad)) as i32);
            let y = cy.saturating_add((radius * libm::sinf(rad)) as i32);
            self.draw_pixel(x, y, color)?;
        }
        Ok(())
    }

    fn on_panel(&self, x: i32, y: i32) -> Option<(u16, u16)> {
        let x = u16::try_from(x).ok().filter(|&x| x < P::WIDTH)?;
        let y = u16::try_from(y).ok().filter(|&y| y < P::HEIGHT)?;
        Some((x, y))
    }
}
