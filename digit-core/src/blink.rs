use embedded_hal::digital::StatefulOutputPin;

use crate::Duration;

/// Toggles a status LED once per period.
///
/// The ticker does not keep time itself, the caller schedules [`tick`] every
/// [`period`].
///
/// [`tick`]: BlinkTicker::tick
/// [`period`]: BlinkTicker::period
pub struct BlinkTicker<P> {
    pin: P,
    period: Duration,
}

impl<P: StatefulOutputPin> BlinkTicker<P> {
    pub fn new(pin: P, period: Duration) -> Self {
        Self { pin, period }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Flips the output and returns the new level, `true` for high.
    pub fn tick(&mut self) -> Result<bool, P::Error> {
        let high = self.pin.is_set_high()?;
        if high {
            self.pin.set_low()?;
        } else {
            self.pin.set_high()?;
        }
        Ok(!high)
    }

    pub fn release(self) -> P {
        self.pin
    }
}
