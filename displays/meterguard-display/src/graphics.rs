//! `embedded-graphics` integration
//!
//! Lets third-party drawables render through the same windowed pipeline.
//! `Rgb565` bits are passed to the panel unchanged, so on a BGR-configured
//! panel red and blue swap exactly as they do for [`Color`].

use embedded_graphics::pixelcolor::{IntoStorage, Rgb565};
use embedded_graphics::prelude::{Dimensions, OriginDimensions, Pixel, Size};
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::draw_target::DrawTarget;

use crate::canvas::Canvas;
use crate::color::Color;
use crate::controller::PanelController;
use crate::error::DisplayError;

impl From<Rgb565> for Color {
    fn from(color: Rgb565) -> Self {
        Color(color.into_storage())
    }
}

impl<P: PanelController> OriginDimensions for Canvas<P> {
    fn size(&self) -> Size {
        Size::new(P::WIDTH as u32, P::HEIGHT as u32)
    }
}

impl<P: PanelController> DrawTarget for Canvas<P> {
    type Color = Rgb565;
    type Error = DisplayError;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.draw_pixel(point.x, point.y, color.into())?;
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        if area.size.width == 0 || area.size.height == 0 {
            return Ok(());
        }
        self.fill_rect(
            area.top_left.x,
            area.top_left.y,
            area.size.width as u16,
            area.size.height as u16,
            color.into(),
        )
    }
}
