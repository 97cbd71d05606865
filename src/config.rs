//! Board level constants. Nothing is configurable at runtime.

use digit_core::Duration;

/// Core clock, HSI driven PLL.
pub const SYSCLK_HZ: u32 = 168_000_000;
/// Input clock of the APB1 timers (2 x PCLK1 at 42 MHz).
pub const APB1_TIMER_HZ: u32 = 84_000_000;
/// Tick rate of the uptime monotonic.
pub const UPTIME_HZ: u32 = 1_000_000;

/// Requested SPI1 clock for the LED data line. SPI1 sits on the 84 MHz APB2
/// bus so the prescaler lands on 2.625 MHz, inside the window the WS2812
/// encoding needs.
pub const STRIP_SPI_HZ: u32 = 3_000_000;

pub const BRIGHTNESS: u8 = digit_core::DEFAULT_BRIGHTNESS;
pub const DEBOUNCE_WINDOW: Duration = digit_core::DEBOUNCE_WINDOW;
pub const BLINK_PERIOD: Duration = digit_core::BLINK_PERIOD;
