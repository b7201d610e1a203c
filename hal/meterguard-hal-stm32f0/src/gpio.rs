//! Output pin adapter
//!
//! embassy's `Output` cannot fail, and `embedded-hal` reads the pin state
//! through `&mut self`, so the adapter keeps its own copy of the level.

use core::convert::Infallible;

/// Push-pull output line (D/C, reset)
pub struct OutputLine<P> {
    pin: P,
    high: bool,
}

impl<P> OutputLine<P>
where
    P: embedded_hal::digital::OutputPin<Error = Infallible>,
{
    /// Wrap a pin that was created at `initial_high`
    pub fn new(pin: P, initial_high: bool) -> Self {
        Self {
            pin,
            high: initial_high,
        }
    }
}

impl<P> meterguard_hal::OutputPin for OutputLine<P>
where
    P: embedded_hal::digital::OutputPin<Error = Infallible>,
{
    fn set_high(&mut self) {
        self.pin.set_high().unwrap_or_else(|e| match e {});
        self.high = true;
    }

    fn set_low(&mut self) {
        self.pin.set_low().unwrap_or_else(|e| match e {});
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}
