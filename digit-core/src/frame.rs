use smart_leds::RGB8;

/// Side length of the square matrix.
pub const MATRIX_SIZE: usize = 5;
/// Number of addressable pixels on the matrix.
pub const PIXEL_COUNT: usize = MATRIX_SIZE * MATRIX_SIZE;

pub type Pixel = RGB8;

pub const OFF: Pixel = RGB8 { r: 0, g: 0, b: 0 };

/// One complete frame for the matrix. Index 0 is the first pixel on the
/// data line, indices follow the layout of the glyph table.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Frame {
    pixels: [Pixel; PIXEL_COUNT],
}

impl Frame {
    pub const fn new() -> Self {
        Self {
            pixels: [OFF; PIXEL_COUNT],
        }
    }

    pub fn clear(&mut self) {
        self.pixels.fill(OFF);
    }

    /// Sets a single pixel. Indices past the end of the matrix are ignored.
    pub fn set(&mut self, index: usize, pixel: Pixel) {
        if let Some(p) = self.pixels.get_mut(index) {
            *p = pixel;
        }
    }

    pub fn get(&self, index: usize) -> Option<Pixel> {
        self.pixels.get(index).copied()
    }

    pub fn pixels(&self) -> &[Pixel; PIXEL_COUNT] {
        &self.pixels
    }

    /// Indices of all pixels that are not fully off.
    pub fn lit(&self) -> impl Iterator<Item = usize> + '_ {
        self.pixels
            .iter()
            .enumerate()
            .filter(|(_, p)| **p != OFF)
            .map(|(i, _)| i)
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_frame_is_dark() {
        let frame = Frame::new();
        assert_eq!(frame.lit().count(), 0);
        assert!(frame.pixels().iter().all(|p| *p == OFF));
    }

    #[test]
    fn set_out_of_range_is_ignored() {
        let mut frame = Frame::new();
        frame.set(PIXEL_COUNT, RGB8::new(1, 2, 3));
        assert_eq!(frame, Frame::new());
        assert_eq!(frame.get(PIXEL_COUNT), None);
    }

    #[test]
    fn clear_resets_every_pixel() {
        let mut frame = Frame::new();
        frame.set(0, RGB8::new(9, 9, 9));
        frame.set(24, RGB8::new(1, 0, 0));
        assert_eq!(frame.lit().collect::<Vec<_>>(), vec![0, 24]);
        frame.clear();
        assert_eq!(frame.lit().count(), 0);
    }
}
