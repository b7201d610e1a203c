//! GPIO pin abstractions
//!
//! The panel needs two push-pull outputs: the reset line and the
//! data/command select line.

/// Digital output pin
///
/// Implementations drive the actual port registers. Setting a pin is assumed
/// to take effect before the call returns.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}
