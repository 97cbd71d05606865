use atomic_polyfill::{AtomicU8, Ordering};

use crate::counter::Digit;

const EMPTY: u8 = u8::MAX;

/// Single slot that carries the digit to show from the button interrupts to
/// the idle loop.
///
/// Publishing overwrites whatever has not been consumed yet, so at most one
/// render is ever pending and it is always the newest value.
pub struct PendingDigit {
    slot: AtomicU8,
}

impl PendingDigit {
    pub const fn new() -> Self {
        Self {
            slot: AtomicU8::new(EMPTY),
        }
    }

    /// Returns `true` when an older, unconsumed digit got replaced.
    pub fn publish(&self, digit: Digit) -> bool {
        self.slot.swap(digit.get(), Ordering::AcqRel) != EMPTY
    }

    pub fn take(&self) -> Option<Digit> {
        match self.slot.swap(EMPTY, Ordering::AcqRel) {
            EMPTY => None,
            raw => Digit::try_from(raw).ok(),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.slot.load(Ordering::Acquire) != EMPTY
    }
}

impl Default for PendingDigit {
    fn default() -> Self {
        Self::new()
    }
}
