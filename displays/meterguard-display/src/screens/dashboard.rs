//! Tamper dashboard for the 240x320 panel
//!
//! ```text
//!  LATEST TAMPER
//!    DD/MM/YYYY
//!     HH:MM:SS
//!  ─────────────────────
//!  V :  237 V    ┌─────┐
//!  I :  95  A    │ icon│
//!  T :  48  C    │     │
//!  L :  189 lx   └─────┘
//!  M :  112 T
//!  E :  1
//!  ███ NORMAL / TAMPERING ███
//! ```

use meterguard_core::MeterState;

use crate::canvas::Canvas;
use crate::color::Color;
use crate::controller::PanelController;
use crate::error::DisplayError;

const TEXT: Color = Color::BLACK;
const TEXT_SCALE: u8 = 2;

const TITLE: (i32, i32) = (40, 8);
const DATE: (i32, i32) = (60, 28);
const TIME: (i32, i32) = (72, 46);

const RULE: (i32, i32, u16, u16) = (10, 64, 220, 2);

const LABEL_X: i32 = 10;
const VALUE_X: i32 = 52;
const UNIT_X: i32 = 88;
const FIRST_ROW_Y: i32 = 75;
const ROW_PITCH: i32 = 30;

const ICON: (i32, i32) = (160, 110);

const BANNER: (i32, i32, u16, u16) = (0, 270, 240, 50);
const BANNER_TEXT_Y: i32 = 283;
const BANNER_SCALE: u8 = 4;

/// What the banner and background show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MeterStatus {
    Normal,
    Tampering,
}

impl MeterStatus {
    pub fn from_tamper(tamper: bool) -> Self {
        if tamper {
            Self::Tampering
        } else {
            Self::Normal
        }
    }

    fn background(self) -> Color {
        match self {
            Self::Normal => Color::NORMAL_BACKGROUND,
            Self::Tampering => Color::TAMPER_BACKGROUND,
        }
    }

    fn banner(self) -> (i32, &'static str) {
        match self {
            Self::Normal => (48, "NORMAL"),
            Self::Tampering => (12, "TAMPERING"),
        }
    }
}

/// Draw the whole dashboard
///
/// Readings come from the tamper history, not the latest sample.
pub fn render_dashboard<P: PanelController>(
    canvas: &mut Canvas<P>,
    status: MeterStatus,
    state: &MeterState,
) -> Result<(), DisplayError> {
    canvas.fill_screen(status.background())?;

    canvas.draw_string(TITLE.0, TITLE.1, "LATEST TAMPER", TEXT, TEXT_SCALE)?;
    canvas.draw_string(DATE.0, DATE.1, &state.last_tamper.date_text(), TEXT, TEXT_SCALE)?;
    canvas.draw_string(TIME.0, TIME.1, &state.last_tamper.time_text(), TEXT, TEXT_SCALE)?;
    canvas.fill_rect(RULE.0, RULE.1, RULE.2, RULE.3, TEXT)?;

    let history = &state.history;
    let fields: [(&str, u16, &str); 6] = [
        ("V :  ", history.voltage, " V"),
        ("I :  ", history.current, " A"),
        ("T :  ", history.temperature, " C"),
        ("L :  ", history.light, " lx"),
        ("M :  ", history.magnetic_field, " T"),
        ("E :  ", state.events, ""),
    ];
    for (row, (label, value, unit)) in fields.into_iter().enumerate() {
        let y = FIRST_ROW_Y + ROW_PITCH * row as i32;
        canvas.draw_string(LABEL_X, y, label, TEXT, TEXT_SCALE)?;
        canvas.draw_number(VALUE_X, y, value, TEXT, TEXT_SCALE)?;
        canvas.draw_string(UNIT_X, y, unit, TEXT, TEXT_SCALE)?;
    }

    draw_status_icon(canvas, ICON.0, ICON.1, status == MeterStatus::Normal)?;

    canvas.fill_rect(BANNER.0, BANNER.1, BANNER.2, BANNER.3, Color::BLACK)?;
    let (text_x, text) = status.banner();
    canvas.draw_string(text_x, BANNER_TEXT_Y, text, Color::WHITE, BANNER_SCALE)
}

/// 70x90 frame with a face when `ok`, an exclamation mark otherwise
fn draw_status_icon<P: PanelController>(
    canvas: &mut Canvas<P>,
    x: i32,
    y: i32,
    ok: bool,
) -> Result<(), DisplayError> {
    // Outer frame
    canvas.fill_rect(x, y, 70, 3, TEXT)?;
    canvas.fill_rect(x, y + 87, 70, 3, TEXT)?;
    canvas.fill_rect(x, y, 3, 90, TEXT)?;
    canvas.fill_rect(x + 67, y, 3, 90, TEXT)?;

    if ok {
        // Inner frame
        canvas.fill_rect(x + 15, y + 15, 40, 3, TEXT)?;
        canvas.fill_rect(x + 15, y + 62, 40, 3, TEXT)?;
        canvas.fill_rect(x + 15, y + 15, 3, 50, TEXT)?;
        canvas.fill_rect(x + 52, y + 15, 3, 50, TEXT)?;
        // Eyes
        canvas.fill_rect(x + 25, y + 28, 6, 6, TEXT)?;
        canvas.fill_rect(x + 42, y + 28, 6, 6, TEXT)?;
        // Mouth
        canvas.fill_rect(x + 23, y + 48, 26, 3, TEXT)?;
        canvas.fill_rect(x + 23, y + 45, 3, 6, TEXT)?;
        canvas.fill_rect(x + 46, y + 45, 3, 6, TEXT)?;
    } else {
        canvas.fill_rect(x + 30, y + 15, 10, 45, TEXT)?;
        canvas.fill_rect(x + 30, y + 65, 10, 10, TEXT)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingPanel;
    use meterguard_core::{DateTime, SensorSnapshot, SimulationConfig};

    type Panel = RecordingPanel<240, 320>;

    fn state() -> MeterState {
        let config = SimulationConfig::default();
        MeterState {
            history: config.initial_history,
            events: config.initial_events,
            last_tamper: config.initial_last_tamper,
        }
    }

    fn render(status: MeterStatus, state: &MeterState) -> Panel {
        let mut canvas = Canvas::new(Panel::new());
        render_dashboard(&mut canvas, status, state).unwrap();
        canvas.release()
    }

    #[test]
    fn test_background_follows_status() {
        let normal = render(MeterStatus::Normal, &state());
        let tamper = render(MeterStatus::Tampering, &state());

        assert_eq!(normal.pixel(0, 100), Some(Color::NORMAL_BACKGROUND));
        assert_eq!(tamper.pixel(0, 100), Some(Color::TAMPER_BACKGROUND));
        assert_eq!(normal.windows()[0], (0, 0, 239, 319));
    }

    #[test]
    fn test_every_window_fully_streamed() {
        let panel = render(MeterStatus::Tampering, &state());
        assert!(panel.windows_fully_streamed());
        assert!(!panel.overrun);
    }

    #[test]
    fn test_rule_and_banner() {
        let panel = render(MeterStatus::Normal, &state());

        assert_eq!(panel.pixel(10, 64), Some(Color::BLACK));
        assert_eq!(panel.pixel(229, 65), Some(Color::BLACK));
        assert_eq!(panel.pixel(230, 64), Some(Color::NORMAL_BACKGROUND));
        assert_eq!(panel.pixel(0, 319), Some(Color::BLACK));
        assert_eq!(panel.pixel(239, 270), Some(Color::BLACK));
    }

    #[test]
    fn test_banner_text_position() {
        // Both 'N' and 'T' have ink in their top-left cell
        let normal = render(MeterStatus::Normal, &state());
        assert_eq!(normal.pixel(48, 283), Some(Color::WHITE));
        assert_eq!(normal.pixel(12, 283), Some(Color::BLACK));

        let tamper = render(MeterStatus::Tampering, &state());
        assert_eq!(tamper.pixel(12, 283), Some(Color::WHITE));
    }

    #[test]
    fn test_status_icon_variants() {
        let normal = render(MeterStatus::Normal, &state());
        let tamper = render(MeterStatus::Tampering, &state());

        // Outer frame in both
        assert_eq!(normal.pixel(160, 110), Some(Color::BLACK));
        assert_eq!(tamper.pixel(229, 199), Some(Color::BLACK));

        // Left eye only when ok
        assert_eq!(normal.pixel(185, 138), Some(Color::BLACK));
        assert_eq!(tamper.pixel(185, 138), Some(Color::TAMPER_BACKGROUND));

        // Exclamation dot only when tampering
        assert_eq!(tamper.pixel(195, 180), Some(Color::BLACK));
        assert_eq!(normal.pixel(195, 180), Some(Color::NORMAL_BACKGROUND));
    }

    #[test]
    fn test_date_and_values_are_drawn() {
        let panel = render(MeterStatus::Normal, &state());

        // '1' of 10/01/2026: column 1, row 1 at scale 2
        assert_eq!(panel.pixel(62, 30), Some(Color::BLACK));
        // '2' of 237: column 0, row 1
        assert_eq!(panel.pixel(52, 77), Some(Color::BLACK));
        // 'V' label: column 0, row 0
        assert_eq!(panel.pixel(10, 75), Some(Color::BLACK));
    }

    #[test]
    fn test_shows_history_not_latest() {
        let mut a = state();
        let b = state();
        a.history = SensorSnapshot {
            voltage: 999,
            ..a.history
        };
        assert_ne!(
            render(MeterStatus::Normal, &a).pixels,
            render(MeterStatus::Normal, &b).pixels
        );
    }

    #[test]
    fn test_timestamp_changes_screen() {
        let a = state();
        let mut b = state();
        b.last_tamper = DateTime::new(10, 1, 2026, 1, 10, 0);
        assert_ne!(
            render(MeterStatus::Normal, &a).pixels,
            render(MeterStatus::Normal, &b).pixels
        );
    }

    #[test]
    fn test_from_tamper() {
        assert_eq!(MeterStatus::from_tamper(true), MeterStatus::Tampering);
        assert_eq!(MeterStatus::from_tamper(false), MeterStatus::Normal);
    }
}
