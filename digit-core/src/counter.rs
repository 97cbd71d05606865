use core::fmt;

use crate::{Duration, Instant};

/// The two front panel buttons.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Counts up.
    A,
    /// Counts down.
    B,
}

/// A decimal digit, always in `0..=9`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Digit(u8);

impl Digit {
    pub const ZERO: Digit = Digit(0);
    pub const MAX: Digit = Digit(9);

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Next digit, 9 rolls over to 0.
    pub const fn wrapping_inc(self) -> Self {
        if self.0 >= Self::MAX.0 {
            Self::ZERO
        } else {
            Digit(self.0 + 1)
        }
    }

    /// Previous digit, stays at 0.
    pub const fn saturating_dec(self) -> Self {
        Digit(self.0.saturating_sub(1))
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitOutOfRange(pub u8);

impl fmt::Display for DigitOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is not a decimal digit", self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = DigitOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value <= Self::MAX.0 {
            Ok(Digit(value))
        } else {
            Err(DigitOutOfRange(value))
        }
    }
}

impl From<Digit> for u8 {
    fn from(d: Digit) -> u8 {
        d.0
    }
}

/// Time based debounce gate shared by all inputs.
///
/// An edge is accepted when at least `window` has passed since the last
/// accepted edge, regardless of which input produced it.
#[derive(Debug, Copy, Clone)]
pub struct Debouncer {
    last_accepted: Instant,
    window: Duration,
}

impl Debouncer {
    /// `now` counts as an accepted edge, so nothing gets through during the
    /// first window after start.
    pub const fn new(now: Instant, window: Duration) -> Self {
        Self {
            last_accepted: now,
            window,
        }
    }

    pub fn accept(&mut self, now: Instant) -> bool {
        match now.checked_duration_since(self.last_accepted) {
            Some(elapsed) if elapsed >= self.window => {
                self.last_accepted = now;
                true
            }
            _ => false,
        }
    }

    pub fn last_accepted(&self) -> Instant {
        self.last_accepted
    }
}

/// Digit selected with the buttons, guarded by a [`Debouncer`].
#[derive(Debug, Copy, Clone)]
pub struct DebouncedCounter {
    digit: Digit,
    debouncer: Debouncer,
}

impl DebouncedCounter {
    pub const fn new(now: Instant, window: Duration) -> Self {
        Self {
            digit: Digit::ZERO,
            debouncer: Debouncer::new(now, window),
        }
    }

    pub fn digit(&self) -> Digit {
        self.digit
    }

    /// Handles a falling edge on `button` at `now`.
    ///
    /// Returns the digit to show when the edge got past the debouncer. A
    /// press of B at 0 is still accepted and returns 0.
    pub fn on_edge(&mut self, button: Button, now: Instant) -> Option<Digit> {
        if !self.debouncer.accept(now) {
            return None;
        }
        self.digit = match button {
            Button::A => self.digit.wrapping_inc(),
            Button::B => self.digit.saturating_dec(),
        };
        Some(self.digit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEBOUNCE_WINDOW;

    fn at_ms(ms: u64) -> Instant {
        Instant::from_ticks(ms * 1_000)
    }

    #[test]
    fn digit_range() {
        assert_eq!(Digit::try_from(9).map(Digit::get), Ok(9));
        assert_eq!(Digit::try_from(10), Err(DigitOutOfRange(10)));
        assert_eq!(Digit::MAX.wrapping_inc(), Digit::ZERO);
        assert_eq!(Digit::ZERO.saturating_dec(), Digit::ZERO);
    }

    #[test]
    fn edges_inside_the_boot_window_are_dropped() {
        let mut counter = DebouncedCounter::new(at_ms(0), DEBOUNCE_WINDOW);
        assert_eq!(counter.on_edge(Button::A, at_ms(150)), None);
        assert_eq!(counter.digit(), Digit::ZERO);
        assert_eq!(counter.on_edge(Button::A, at_ms(200)), Some(Digit(1)));
    }

    #[test]
    fn window_is_shared_between_buttons() {
        let mut counter = DebouncedCounter::new(at_ms(0), DEBOUNCE_WINDOW);
        assert_eq!(counter.on_edge(Button::A, at_ms(1_000)), Some(Digit(1)));
        assert_eq!(counter.on_edge(Button::B, at_ms(1_199)), None);
        assert_eq!(counter.digit(), Digit(1));
        assert_eq!(counter.on_edge(Button::B, at_ms(1_200)), Some(Digit::ZERO));
    }

    #[test]
    fn rejected_edge_does_not_extend_the_window() {
        let mut debouncer = Debouncer::new(at_ms(0), DEBOUNCE_WINDOW);
        assert!(!debouncer.accept(at_ms(100)));
        assert!(!debouncer.accept(at_ms(199)));
        assert!(debouncer.accept(at_ms(200)));
        assert_eq!(debouncer.last_accepted(), at_ms(200));
    }

    #[test]
    fn edge_before_last_accepted_is_dropped() {
        let mut debouncer = Debouncer::new(at_ms(500), DEBOUNCE_WINDOW);
        assert!(!debouncer.accept(at_ms(100)));
        assert_eq!(debouncer.last_accepted(), at_ms(500));
    }

    #[test]
    fn increment_wraps_and_decrement_clamps() {
        let mut counter = DebouncedCounter::new(at_ms(0), DEBOUNCE_WINDOW);
        let mut t = 0;
        for expected in (1..=9).chain(core::iter::once(0)) {
            t += 250;
            assert_eq!(counter.on_edge(Button::A, at_ms(t)), Some(Digit(expected)));
        }
        t += 250;
        assert_eq!(counter.on_edge(Button::B, at_ms(t)), Some(Digit::ZERO));
        assert_eq!(counter.digit(), Digit::ZERO);
    }
}
