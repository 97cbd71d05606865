//! 5x5 bitmaps for the decimal digits.
//!
//! Rows are listed top to bottom in data line order. Several glyphs are
//! mirrored or shifted on purpose, they match the wiring of the matrix
//! rather than a flat row-major layout.

use crate::counter::Digit;
use crate::frame::PIXEL_COUNT;

/// Which pixels of the matrix are lit for one digit.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DigitMask([bool; PIXEL_COUNT]);

impl DigitMask {
    pub const fn is_lit(&self, index: usize) -> bool {
        index < PIXEL_COUNT && self.0[index]
    }

    pub fn lit(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, lit)| **lit)
            .map(|(i, _)| i)
    }
}

pub fn mask(digit: Digit) -> &'static DigitMask {
    &DIGITS[digit.get() as usize]
}

const O: bool = false;
const X: bool = true;

#[rustfmt::skip]
static DIGITS: [DigitMask; 10] = [
    DigitMask([
        O, X, X, X, O,
        O, X, O, X, O,
        O, X, O, X, O,
        O, X, O, X, O,
        O, X, X, X, O,
    ]),
    DigitMask([
        O, O, X, O, O,
        O, O, X, O, O,
        O, O, X, O, O,
        O, X, X, O, O,
        O, O, X, O, O,
    ]),
    DigitMask([
        O, X, X, X, O,
        O, X, O, O, O,
        O, X, X, X, O,
        O, O, O, X, O,
        O, X, X, X, O,
    ]),
    DigitMask([
        O, X, X, X, O,
        O, O, O, X, O,
        O, X, X, X, O,
        O, O, O, X, O,
        O, X, X, X, O,
    ]),
    DigitMask([
        O, X, O, O, O,
        O, O, O, X, O,
        O, X, X, X, O,
        O, X, O, X, O,
        O, X, O, X, O,
    ]),
    DigitMask([
        O, X, X, X, O,
        O, O, O, X, O,
        O, X, X, X, O,
        O, X, O, O, O,
        O, X, X, X, O,
    ]),
    DigitMask([
        O, X, X, X, O,
        O, X, O, X, O,
        O, X, X, X, O,
        O, X, O, O, O,
        O, X, X, X, O,
    ]),
    DigitMask([
        O, O, O, X, O,
        O, O, X, O, O,
        O, X, O, O, O,
        O, O, O, O, X,
        X, X, X, O, O,
    ]),
    DigitMask([
        O, X, X, X, O,
        O, X, O, X, O,
        O, X, X, X, O,
        O, X, O, X, O,
        O, X, X, X, O,
    ]),
    DigitMask([
        O, X, X, X, O,
        O, O, O, X, O,
        O, X, X, X, O,
        O, X, O, X, O,
        O, X, X, X, O,
    ]),
];
