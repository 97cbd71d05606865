//! WS2812 output.
//!
//! The one-wire timing comes from an SPI peripheral clocked between roughly
//! 2 and 3.8 MHz, the bit encoding is done by `ws2812-spi`. MOSI has to idle
//! low between frames.

use embedded_hal::spi::SpiBus;
use smart_leds::SmartLedsWrite;
use ws2812_spi::Ws2812;

use crate::frame::Frame;

/// Sink for complete frames. Transmission is fire and forget.
pub trait PixelBus {
    fn transmit(&mut self, frame: &Frame);
}

impl<B: PixelBus + ?Sized> PixelBus for &mut B {
    fn transmit(&mut self, frame: &Frame) {
        (**self).transmit(frame)
    }
}

/// WS2812 chain driven from the MOSI line of an SPI bus.
pub struct Ws2812Spi<SPI> {
    leds: Ws2812<SPI>,
}

impl<SPI: SpiBus> Ws2812Spi<SPI> {
    pub fn new(spi: SPI) -> Self {
        Self {
            leds: Ws2812::new(spi),
        }
    }
}

impl<SPI: SpiBus> PixelBus for Ws2812Spi<SPI> {
    fn transmit(&mut self, frame: &Frame) {
        if let Err(_e) = self.leds.write(frame.pixels().iter().copied()) {
            #[cfg(feature = "defmt")]
            defmt::warn!("frame dropped: spi {}", defmt::Debug2Format(&_e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::PIXEL_COUNT;
    use embedded_hal::spi::{ErrorKind, ErrorType};
    use smart_leds::RGB8;

    /// Keeps everything written to MOSI, optionally failing every write.
    #[derive(Default)]
    struct Mosi {
        bytes: Vec<u8>,
        broken: bool,
    }

    impl ErrorType for Mosi {
        type Error = ErrorKind;
    }

    impl SpiBus for Mosi {
        fn read(&mut self, words: &mut [u8]) -> Result<(), ErrorKind> {
            words.fill(0);
            Ok(())
        }
        fn write(&mut self, words: &[u8]) -> Result<(), ErrorKind> {
            if self.broken {
                return Err(ErrorKind::Other);
            }
            self.bytes.extend_from_slice(words);
            Ok(())
        }
        fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), ErrorKind> {
            read.fill(0);
            self.write(write)
        }
        fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), ErrorKind> {
            self.bytes.extend_from_slice(words);
            words.fill(0);
            Ok(())
        }
        fn flush(&mut self) -> Result<(), ErrorKind> {
            Ok(())
        }
    }

    /// Data bits carried by one SPI byte, high time in each nibble.
    fn decode_symbol(symbol: u8) -> u8 {
        let bit = |nibble: u8| match nibble {
            0b1110 => 1,
            0b1000 => 0,
            other => panic!("not a WS2812 symbol: {other:#06b}"),
        };
        (bit(symbol >> 4) << 1) | bit(symbol & 0x0F)
    }

    fn decode_bytes(symbols: &[u8]) -> Vec<u8> {
        symbols
            .chunks_exact(4)
            .map(|c| c.iter().fold(0, |acc, s| (acc << 2) | decode_symbol(*s)))
            .collect()
    }

    fn send(frame: &Frame) -> Mosi {
        let mut mosi = Mosi::default();
        Ws2812Spi::new(&mut mosi).transmit(frame);
        mosi
    }

    #[test]
    fn channels_go_out_green_first() {
        let mut frame = Frame::new();
        frame.set(0, RGB8::new(10, 20, 30));
        let mosi = send(&frame);
        assert_eq!(decode_bytes(&mosi.bytes[..12]), vec![20, 10, 30]);
    }

    #[test]
    fn whole_frame_goes_out_in_pixel_order_then_latches_low() {
        let mut frame = Frame::new();
        frame.set(0, RGB8::new(10, 20, 30));
        frame.set(PIXEL_COUNT - 1, RGB8::new(255, 156, 1));
        let mosi = send(&frame);

        let data_len = PIXEL_COUNT * 3 * 4;
        assert!(mosi.bytes.len() > data_len);
        let data = decode_bytes(&mosi.bytes[..data_len]);
        assert_eq!(data[..3], [20, 10, 30]);
        assert!(data[3..data_len / 4 - 3].iter().all(|b| *b == 0));
        assert_eq!(data[data_len / 4 - 3..], [156, 255, 1]);
        assert!(mosi.bytes[data_len..].iter().all(|b| *b == 0));
    }

    #[test]
    fn every_transmit_is_a_complete_frame() {
        let frame = Frame::new();
        let mut mosi = Mosi::default();
        let mut strip = Ws2812Spi::new(&mut mosi);
        strip.transmit(&frame);
        strip.transmit(&frame);
        drop(strip);
        assert_eq!(mosi.bytes.len() % 2, 0);
        let (first, second) = mosi.bytes.split_at(mosi.bytes.len() / 2);
        assert_eq!(first, second);
    }

    #[test]
    fn bus_errors_are_swallowed() {
        let mut mosi = Mosi {
            broken: true,
            ..Mosi::default()
        };
        Ws2812Spi::new(&mut mosi).transmit(&Frame::new());
        assert!(mosi.bytes.is_empty());
    }
}
