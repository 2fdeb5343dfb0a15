use embedded_hal::digital::InputPin;

use padprint_core::input::ResetLine;

/// Reprint request button sampled once per raster tick.
///
/// Level-triggered: the core reads whatever the pin says at the tick and
/// does its own edge handling (none), so no debouncing happens here either.
#[derive(Debug)]
pub struct ResetPin<PIN> {
    pin: PIN,
    active_low: bool,
}

impl<PIN: InputPin> ResetPin<PIN> {
    pub fn new(pin: PIN, active_low: bool) -> Self {
        Self { pin, active_low }
    }
}

impl<PIN: InputPin> ResetLine for ResetPin<PIN> {
    type Error = PIN::Error;

    fn is_asserted(&mut self) -> Result<bool, Self::Error> {
        let high = self.pin.is_high()?;
        Ok(high != self.active_low)
    }
}
