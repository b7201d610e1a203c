//! Display errors

/// Display errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with the panel (SPI write failed)
    Communication,
    /// Bus stayed busy past the bounded wait policy
    BusTimeout,
    /// More pixels pushed than the open window holds
    WindowOverrun,
}
