#![no_main]
#![no_std]
use digit_core::{Button, DebouncedCounter, Instant, PendingDigit};
use digit_matrix as _;
use rtic::app;

/// Runs an edge through the debouncer and queues the resulting digit for
/// the idle loop.
fn accept_edge(
    counter: &mut DebouncedCounter,
    button: Button,
    now: Instant,
    pending: &PendingDigit,
) {
    match counter.on_edge(button, now) {
        Some(digit) => {
            defmt::info!("button {}: digit {}", button, digit.get());
            if pending.publish(digit) {
                defmt::debug!("overwrote a digit that was not shown yet");
            }
        }
        None => defmt::trace!("button {}: bounce dropped", button),
    }
}

#[app(
    device = stm32f4xx_hal::pac,
    peripherals = true,
    dispatchers = [TIM3]
)]
mod app {
    use digit_core::{BlinkTicker, Button, DebouncedCounter, DigitDisplay, DigitRenderer, PendingDigit};
    use digit_matrix::config;
    use digit_matrix::hardware::timer::Uptime;
    use digit_matrix::hardware::{ButtonA, ButtonB, StatusLed, Strip};
    use rtic_time::Monotonic;
    use stm32f4xx_hal::gpio::ExtiPin;

    defmt::timestamp!("{=u64:us}", Uptime::now().ticks());

    #[shared]
    struct Shared {
        counter: DebouncedCounter,
    }

    #[local]
    struct Local {
        button_a: ButtonA,
        button_b: ButtonB,
        pending_a: &'static PendingDigit,
        pending_b: &'static PendingDigit,
        pending_idle: &'static PendingDigit,
        display: DigitDisplay<Strip>,
        blinker: BlinkTicker<StatusLed>,
    }

    #[init(local = [pending: PendingDigit = PendingDigit::new()])]
    fn init(cx: init::Context) -> (Shared, Local) {
        defmt::info!("init");

        // Initialize hardware
        let hardware = digit_matrix::hardware::setup(cx.device);

        defmt::info!("uptime timer setup");
        Uptime::start();

        defmt::info!("matrix setup");
        let mut display =
            DigitDisplay::new(hardware.strip, DigitRenderer::new(config::BRIGHTNESS));
        display.blank();

        // Seeding with the boot instant drops edges from the first window
        let counter = DebouncedCounter::new(Uptime::now(), config::DEBOUNCE_WINDOW);
        display.show(counter.digit());

        let blinker = BlinkTicker::new(hardware.status_led, config::BLINK_PERIOD);
        blink::spawn().unwrap();

        let pending: &'static PendingDigit = cx.local.pending;
        (
            Shared { counter },
            Local {
                button_a: hardware.button_a,
                button_b: hardware.button_b,
                pending_a: pending,
                pending_b: pending,
                pending_idle: pending,
                display,
                blinker,
            },
        )
    }

    #[idle(local = [display, pending_idle])]
    fn idle(cx: idle::Context) -> ! {
        defmt::info!("idle");
        let display = cx.local.display;
        let pending = *cx.local.pending_idle;

        loop {
            if let Some(digit) = pending.take() {
                display.show(digit);
                defmt::debug!("frame sent for {}", digit.get());
            }
            // An edge between the check and WFI still wakes the core, the
            // interrupt is only serviced after leaving the critical section
            cortex_m::interrupt::free(|_| {
                if !pending.is_pending() {
                    cortex_m::asm::wfi();
                }
            });
        }
    }

    #[task(priority = 2, local = [blinker])]
    async fn blink(cx: blink::Context) {
        let blinker = cx.local.blinker;
        let mut next = Uptime::now();
        loop {
            if blinker.tick().is_err() {
                defmt::warn!("status led write failed");
            }
            next += blinker.period();
            Uptime::delay_until(next).await;
        }
    }

    #[task(binds = EXTI0, priority = 2, local = [button_a, pending_a], shared = [counter])]
    fn on_button_a(mut cx: on_button_a::Context) {
        cx.local.button_a.clear_interrupt_pending_bit();
        let now = Uptime::now();
        let pending = *cx.local.pending_a;
        cx.shared
            .counter
            .lock(|counter| super::accept_edge(counter, Button::A, now, pending));
    }

    #[task(binds = EXTI1, priority = 2, local = [button_b, pending_b], shared = [counter])]
    fn on_button_b(mut cx: on_button_b::Context) {
        cx.local.button_b.clear_interrupt_pending_bit();
        let now = Uptime::now();
        let pending = *cx.local.pending_b;
        cx.shared
            .counter
            .lock(|counter| super::accept_edge(counter, Button::B, now, pending));
    }

    #[task(binds = TIM2, priority = 3)]
    fn uptime_irq(_cx: uptime_irq::Context) {
        unsafe {
            Uptime::queue().on_monotonic_interrupt();
        }
    }
}
