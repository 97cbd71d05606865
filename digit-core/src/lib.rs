//! Target independent parts of the digit matrix firmware.
//!
//! Everything in here is plain `no_std` logic over `embedded-hal` traits so
//! it can be exercised on the host. The firmware crate owns the hardware and
//! the RTIC resources and drives these types from its tasks.
#![cfg_attr(not(test), no_std)]

pub mod blink;
pub mod counter;
pub mod frame;
pub mod glyph;
pub mod handoff;
pub mod render;
pub mod strip;

pub use blink::BlinkTicker;
pub use counter::{Button, DebouncedCounter, Debouncer, Digit, DigitOutOfRange};
pub use frame::{Frame, Pixel, PIXEL_COUNT};
pub use handoff::PendingDigit;
pub use render::{DigitDisplay, DigitRenderer};
pub use strip::{PixelBus, Ws2812Spi};

/// Monotonic microsecond timestamp used for debouncing.
pub type Instant = fugit::TimerInstantU64<1_000_000>;
/// Microsecond duration matching [`Instant`].
pub type Duration = fugit::TimerDurationU64<1_000_000>;

/// Minimum time between two accepted button edges.
pub const DEBOUNCE_WINDOW: Duration = Duration::millis(200);
/// Half period of the status LED, 5 Hz blink.
pub const BLINK_PERIOD: Duration = Duration::millis(100);
/// Full scale of the lit channel. Green and blue are derived from it.
pub const DEFAULT_BRIGHTNESS: u8 = 50;
