//! Activity LED mirroring the report stream.

use embedded_hal::digital::StatefulOutputPin;

/// LED toggled as reports go out, the firmware's only progress indicator.
#[derive(Debug)]
pub struct ActivityLed<PIN> {
    pin: PIN,
}

impl<PIN: StatefulOutputPin> ActivityLed<PIN> {
    pub fn new(pin: PIN) -> Self {
        Self { pin }
    }

    pub fn toggle(&mut self) -> Result<(), PIN::Error> {
        self.pin.toggle()
    }

    /// Parks the LED in its idle state.
    pub fn set_idle(&mut self) -> Result<(), PIN::Error> {
        self.pin.set_high()
    }
}
