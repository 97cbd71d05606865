use digit_core::Ws2812Spi;
use embedded_hal::spi::MODE_0;

use hal::gpio::{Edge, ExtiPin, Input, Output, Pin, PinState};
use hal::prelude::*;
use hal::spi::{Spi, Spi1};
use stm32f4xx_hal as hal;

use crate::config::{STRIP_SPI_HZ, SYSCLK_HZ};

pub mod timer;

/// Count up, PB0 to ground.
pub type ButtonA = Pin<'B', 0, Input>;
/// Count down, PB1 to ground.
pub type ButtonB = Pin<'B', 1, Input>;
/// Red channel of the RGB status LED.
pub type StatusLed = Pin<'C', 0, Output>;
/// 5x5 WS2812 matrix, data in on PA7.
pub type Strip = Ws2812Spi<Spi1>;

pub struct Hardware {
    pub button_a: ButtonA,
    pub button_b: ButtonB,
    pub status_led: StatusLed,
    pub strip: Strip,
}

pub fn setup(peripherals: hal::pac::Peripherals) -> Hardware {
    peripherals.RCC.apb1enr.modify(|_, w| w.tim2en().enabled());
    // Keep the debug link alive while idle sleeps in WFI
    peripherals.DBGMCU.cr.modify(|_, w| w.dbg_sleep().set_bit());
    let rcc = peripherals.RCC.constrain();
    let clocks = rcc.cfgr.sysclk(SYSCLK_HZ.Hz()).freeze();
    let mut syscfg = peripherals.SYSCFG.constrain();
    let mut exti = peripherals.EXTI;

    let gpiob = peripherals.GPIOB.split();
    let mut button_a = gpiob.pb0.into_pull_up_input();
    button_a.make_interrupt_source(&mut syscfg);
    button_a.enable_interrupt(&mut exti);
    button_a.trigger_on_edge(&mut exti, Edge::Falling);

    let mut button_b = gpiob.pb1.into_pull_up_input();
    button_b.make_interrupt_source(&mut syscfg);
    button_b.enable_interrupt(&mut exti);
    button_b.trigger_on_edge(&mut exti, Edge::Falling);

    let gpioc = peripherals.GPIOC.split();
    let status_led = gpioc.pc0.into_push_pull_output_in_state(PinState::Low);
    // Green and blue are never used, park them low
    let _led_g = gpioc.pc1.into_push_pull_output_in_state(PinState::Low);
    let _led_b = gpioc.pc2.into_push_pull_output_in_state(PinState::Low);

    let gpioa = peripherals.GPIOA.split();
    let spi1_sclk = gpioa.pa5.into_alternate();
    let spi1_miso = gpioa.pa6.into_alternate();
    let spi1_mosi = gpioa.pa7.into_alternate();

    let spi1 = Spi::new(
        peripherals.SPI1,
        (spi1_sclk, spi1_miso, spi1_mosi),
        MODE_0,
        STRIP_SPI_HZ.Hz(),
        &clocks,
    );

    Hardware {
        button_a,
        button_b,
        status_led,
        strip: Ws2812Spi::new(spi1),
    }
}
