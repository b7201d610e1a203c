//! Host-side mocks shared by the unit tests
//!
//! `mock_bus` builds a [`PanelBus`] whose SPI, pins and delay all write into
//! one [`BusLog`]. `RecordingPanel` skips the bus and replays windows into a
//! pixel map.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use meterguard_hal::{BusyWait, OutputPin, SpiBus};

use crate::bus::PanelBus;
use crate::color::Color;
use crate::controller::PanelController;
use crate::error::DisplayError;
use crate::transport::Transport;

/// Everything that reaches the hardware, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusEvent {
    /// Byte sent with D/C low
    Command(u8),
    /// Byte sent with D/C high
    Data(u8),
    /// Reset line driven to the given level
    Reset(bool),
    DelayMs(u32),
}

#[derive(Default)]
struct LogState {
    events: Vec<BusEvent>,
    dc_high: bool,
}

/// Shared handle to the recorded bus traffic
#[derive(Clone, Default)]
pub struct BusLog(Rc<RefCell<LogState>>);

impl BusLog {
    pub fn events(&self) -> Vec<BusEvent> {
        self.0.borrow().events.clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().events.clear();
    }

    pub fn dc_high(&self) -> bool {
        self.0.borrow().dc_high
    }

    /// Bytes sent with D/C high
    pub fn data(&self) -> Vec<u8> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                BusEvent::Data(b) => Some(b),
                _ => None,
            })
            .collect()
    }

    /// Bytes sent with D/C low
    pub fn commands(&self) -> Vec<u8> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                BusEvent::Command(b) => Some(b),
                _ => None,
            })
            .collect()
    }

    /// Number of bytes that went over SPI
    pub fn transfers(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, BusEvent::Command(_) | BusEvent::Data(_)))
            .count()
    }

    fn push(&self, event: BusEvent) {
        self.0.borrow_mut().events.push(event);
    }
}

pub struct MockSpi {
    log: BusLog,
}

impl SpiBus for MockSpi {
    type Error = ();

    fn write_byte(&mut self, byte: u8) -> Result<(), ()> {
        let event = if self.log.dc_high() {
            BusEvent::Data(byte)
        } else {
            BusEvent::Command(byte)
        };
        self.log.push(event);
        Ok(())
    }

    fn is_busy(&self) -> bool {
        false
    }
}

#[derive(Clone, Copy)]
enum PinRole {
    DataCommand,
    Reset,
}

pub struct MockPin {
    log: BusLog,
    role: PinRole,
    high: bool,
}

impl OutputPin for MockPin {
    fn set_high(&mut self) {
        self.set(true);
    }

    fn set_low(&mut self) {
        self.set(false);
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

impl MockPin {
    fn set(&mut self, high: bool) {
        self.high = high;
        match self.role {
            PinRole::DataCommand => self.log.0.borrow_mut().dc_high = high,
            PinRole::Reset => self.log.push(BusEvent::Reset(high)),
        }
    }
}

pub struct MockDelay {
    log: BusLog,
}

impl BusyWait for MockDelay {
    fn cycles_per_ms(&self) -> u32 {
        1
    }

    fn delay_cycles(&mut self, _cycles: u32) {}

    fn delay_ms(&mut self, ms: u32) {
        self.log.push(BusEvent::DelayMs(ms));
    }
}

pub type MockBus = PanelBus<MockSpi, MockPin, MockPin, MockDelay>;

/// A panel bus whose traffic lands in the returned log
pub fn mock_bus() -> (MockBus, BusLog) {
    let log = BusLog::default();
    let spi = MockSpi { log: log.clone() };
    let dc = MockPin {
        log: log.clone(),
        role: PinRole::DataCommand,
        high: true,
    };
    let rst = MockPin {
        log: log.clone(),
        role: PinRole::Reset,
        high: false,
    };
    let delay = MockDelay { log: log.clone() };
    (PanelBus::new(Transport::new(spi), dc, rst, delay), log)
}

/// Operation seen by a [`RecordingPanel`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelOp {
    Window(u16, u16, u16, u16),
    Pixel(Color),
}

/// Panel that keeps what was drawn
///
/// Pixels land in row-major order inside the last window, like real
/// controller RAM. Pushing past the window end is recorded as an overrun.
pub struct RecordingPanel<const W: u16, const H: u16> {
    pub ops: Vec<PanelOp>,
    pub pixels: HashMap<(u16, u16), Color>,
    pub overrun: bool,
    window: (u16, u16, u16, u16),
    cursor: Option<(u16, u16)>,
}

impl<const W: u16, const H: u16> RecordingPanel<W, H> {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            pixels: HashMap::new(),
            overrun: false,
            window: (0, 0, 0, 0),
            cursor: None,
        }
    }

    pub fn windows(&self) -> Vec<(u16, u16, u16, u16)> {
        self.ops
            .iter()
            .filter_map(|op| match *op {
                PanelOp::Window(x0, y0, x1, y1) => Some((x0, y0, x1, y1)),
                PanelOp::Pixel(_) => None,
            })
            .collect()
    }

    pub fn pixel_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, PanelOp::Pixel(_)))
            .count()
    }

    pub fn pixel(&self, x: u16, y: u16) -> Option<Color> {
        self.pixels.get(&(x, y)).copied()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
        self.pixels.clear();
        self.overrun = false;
        self.cursor = None;
    }

    /// Check that every pixel batch matches the window before it
    pub fn windows_fully_streamed(&self) -> bool {
        let mut expected: Option<usize> = None;
        let mut seen = 0;
        for op in &self.ops {
            match *op {
                PanelOp::Window(x0, y0, x1, y1) => {
                    if expected.is_some_and(|n| n != seen) {
                        return false;
                    }
                    expected = Some((x1 - x0 + 1) as usize * (y1 - y0 + 1) as usize);
                    seen = 0;
                }
                PanelOp::Pixel(_) => {
                    if expected.is_none() {
                        return false;
                    }
                    seen += 1;
                }
            }
        }
        expected.map_or(true, |n| n == seen)
    }
}

impl<const W: u16, const H: u16> PanelController for RecordingPanel<W, H> {
    const WIDTH: u16 = W;
    const HEIGHT: u16 = H;

    fn reset(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }

    fn init(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }

    fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> Result<(), DisplayError> {
        let x1 = x1.min(W - 1);
        let y1 = y1.min(H - 1);
        self.ops.push(PanelOp::Window(x0, y0, x1, y1));
        self.window = (x0, y0, x1, y1);
        self.cursor = Some((x0, y0));
        Ok(())
    }

    fn stream_pixel(&mut self, color: Color) -> Result<(), DisplayError> {
        self.ops.push(PanelOp::Pixel(color));
        let Some((x, y)) = self.cursor else {
            self.overrun = true;
            return Ok(());
        };
        self.pixels.insert((x, y), color);

        let (x0, _, x1, y1) = self.window;
        self.cursor = if x < x1 {
            Some((x + 1, y))
        } else if y < y1 {
            Some((x0, y + 1))
        } else {
            None
        };
        Ok(())
    }
}
