use smart_leds::RGB8;

use crate::counter::Digit;
use crate::frame::{Frame, Pixel};
use crate::glyph;
use crate::strip::PixelBus;

/// Paints digit glyphs into a [`Frame`] in a single warm color.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DigitRenderer {
    color: Pixel,
}

impl DigitRenderer {
    /// Red at `brightness`, green at half and blue at a third of it.
    pub const fn new(brightness: u8) -> Self {
        Self {
            color: RGB8 {
                r: brightness,
                g: brightness / 2,
                b: brightness / 3,
            },
        }
    }

    pub const fn color(&self) -> Pixel {
        self.color
    }

    pub fn paint(&self, frame: &mut Frame, digit: Digit) {
        frame.clear();
        glyph::mask(digit)
            .lit()
            .for_each(|i| frame.set(i, self.color));
    }
}

/// The matrix: owns the frame and the bus it is sent over.
pub struct DigitDisplay<B> {
    bus: B,
    frame: Frame,
    renderer: DigitRenderer,
}

impl<B: PixelBus> DigitDisplay<B> {
    pub fn new(bus: B, renderer: DigitRenderer) -> Self {
        Self {
            bus,
            frame: Frame::new(),
            renderer,
        }
    }

    /// Turns every pixel off.
    pub fn blank(&mut self) {
        self.frame.clear();
        self.bus.transmit(&self.frame);
    }

    pub fn show(&mut self, digit: Digit) {
        self.renderer.paint(&mut self.frame, digit);
        self.bus.transmit(&self.frame);
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }
}
