//! Animated face for the 176x220 panel
//!
//! The head is drawn once. Each frame repaints only the inside of the head
//! and then the features for one expression.

use crate::canvas::Canvas;
use crate::color::Color;
use crate::controller::PanelController;
use crate::error::DisplayError;

const CX: i32 = 88;
const CY: i32 = 110;

const HEAD_RADIUS: u16 = 50;
const INTERIOR_RADIUS: u16 = 45;

const EYE_DX: i32 = 17;
const EYE_DY: i32 = -12;
const EYE_RADIUS: u16 = 5;

/// Mouth is three concentric one-pixel arcs
const MOUTH_RADII: core::ops::RangeInclusive<u16> = 24..=26;

const FEATURE: Color = Color::BLACK;
const SKIN: Color = Color::YELLOW;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Expression {
    Smile,
    Angry,
    Sad,
}

impl Expression {
    /// Smile, angry, sad, then back to smile
    pub fn next(self) -> Self {
        match self {
            Self::Smile => Self::Angry,
            Self::Angry => Self::Sad,
            Self::Sad => Self::Smile,
        }
    }
}

/// Clear the panel and draw the empty head
pub fn draw_head<P: PanelController>(canvas: &mut Canvas<P>) -> Result<(), DisplayError> {
    canvas.fill_screen(Color::BLACK)?;
    canvas.fill_circle(CX, CY, HEAD_RADIUS, SKIN)
}

/// Repaint the inside of the head with `expression`
pub fn draw_expression<P: PanelController>(
    canvas: &mut Canvas<P>,
    expression: Expression,
) -> Result<(), DisplayError> {
    canvas.fill_circle(CX, CY, INTERIOR_RADIUS, SKIN)?;

    match expression {
        Expression::Smile => {
            draw_round_eyes(canvas)?;
            draw_mouth(canvas, CY + 8, 20, 160)
        }
        Expression::Angry => {
            // Brows slope down toward the nose
            for i in -6..=6 {
                canvas.draw_pixel(CX - EYE_DX + i, CY + EYE_DY - i / 2, FEATURE)?;
                canvas.draw_pixel(CX + EYE_DX + i, CY + EYE_DY + i / 2, FEATURE)?;
            }
            draw_mouth(canvas, CY + 14, 200, 340)
        }
        Expression::Sad => {
            draw_round_eyes(canvas)?;
            draw_mouth(canvas, CY + 18, 200, 340)
        }
    }
}

fn draw_round_eyes<P: PanelController>(canvas: &mut Canvas<P>) -> Result<(), DisplayError> {
    canvas.fill_circle(CX - EYE_DX, CY + EYE_DY, EYE_RADIUS, FEATURE)?;
    canvas.fill_circle(CX + EYE_DX, CY + EYE_DY, EYE_RADIUS, FEATURE)
}

fn draw_mouth<P: PanelController>(
    canvas: &mut Canvas<P>,
    cy: i32,
    start_deg: i32,
    end_deg: i32,
) -> Result<(), DisplayError> {
    for r in MOUTH_RADII {
        canvas.draw_arc(CX, cy, r, start_deg, end_deg, FEATURE)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingPanel;

    type Panel = RecordingPanel<176, 220>;

    fn head() -> Canvas<Panel> {
        let mut canvas = Canvas::new(Panel::new());
        draw_head(&mut canvas).unwrap();
        canvas
    }

    fn frame(expression: Expression) -> Panel {
        let mut canvas = head();
        draw_expression(&mut canvas, expression).unwrap();
        canvas.release()
    }

    #[test]
    fn test_cycle_order() {
        let mut e = Expression::Smile;
        e = e.next();
        assert_eq!(e, Expression::Angry);
        e = e.next();
        assert_eq!(e, Expression::Sad);
        assert_eq!(e.next(), Expression::Smile);
    }

    #[test]
    fn test_head() {
        let panel = head().release();
        assert_eq!(panel.windows()[0], (0, 0, 175, 219));
        assert_eq!(panel.pixel(0, 0), Some(Color::BLACK));
        assert_eq!(panel.pixel(88, 60), Some(Color::YELLOW));
        assert_eq!(panel.pixel(88, 59), Some(Color::BLACK));
        assert_eq!(panel.pixel(138, 110), Some(Color::YELLOW));
    }

    #[test]
    fn test_frame_touches_only_interior() {
        let mut canvas = head();
        canvas.panel_mut().clear();

        for expression in [Expression::Smile, Expression::Angry, Expression::Sad] {
            draw_expression(&mut canvas, expression).unwrap();
        }

        let panel = canvas.release();
        for &(x0, y0, x1, y1) in &panel.windows() {
            for (x, y) in [(x0, y0), (x1, y1)] {
                let dx = x as i32 - CX;
                let dy = y as i32 - CY;
                assert!(dx * dx + dy * dy <= 45 * 45, "({x}, {y}) outside interior");
            }
        }
        assert!(panel.windows_fully_streamed());
    }

    #[test]
    fn test_smile() {
        let panel = frame(Expression::Smile);
        // Eyes
        assert_eq!(panel.pixel(71, 98), Some(Color::BLACK));
        assert_eq!(panel.pixel(71, 93), Some(Color::BLACK));
        assert_eq!(panel.pixel(105, 98), Some(Color::BLACK));
        // Bottom of the mouth, 90 degrees
        for y in 142..=144 {
            assert_eq!(panel.pixel(88, y), Some(Color::BLACK));
        }
        assert_eq!(panel.pixel(88, 110), Some(Color::YELLOW));
    }

    #[test]
    fn test_angry() {
        let panel = frame(Expression::Angry);
        // Brow ends: i = -6 and i = 6
        assert_eq!(panel.pixel(65, 101), Some(Color::BLACK));
        assert_eq!(panel.pixel(77, 95), Some(Color::BLACK));
        assert_eq!(panel.pixel(99, 95), Some(Color::BLACK));
        assert_eq!(panel.pixel(111, 101), Some(Color::BLACK));
        // No round eyes
        assert_eq!(panel.pixel(71, 93), Some(Color::YELLOW));
        // Top of the frown, 270 degrees
        for y in 98..=100 {
            assert_eq!(panel.pixel(88, y), Some(Color::BLACK));
        }
    }

    #[test]
    fn test_angry_brow_truncates_toward_zero() {
        let panel = frame(Expression::Angry);
        // i = -1: -1 / 2 == 0, so the brow stays on the eye line
        assert_eq!(panel.pixel(70, 98), Some(Color::BLACK));
        assert_eq!(panel.pixel(104, 98), Some(Color::BLACK));
    }

    #[test]
    fn test_sad() {
        let panel = frame(Expression::Sad);
        assert_eq!(panel.pixel(71, 93), Some(Color::BLACK));
        for y in 102..=104 {
            assert_eq!(panel.pixel(88, y), Some(Color::BLACK));
        }
        // Smile's mouth is gone
        assert_eq!(panel.pixel(88, 142), Some(Color::YELLOW));
    }
}
