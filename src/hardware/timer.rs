use atomic_polyfill::{AtomicU64, Ordering};
use digit_core::{Duration, Instant};
use rtic_time::half_period_counter::calculate_now;
use rtic_time::{Monotonic, TimerQueue};

use super::hal;
use crate::config::{APB1_TIMER_HZ, UPTIME_HZ};

/// Half range of the 32 bit counter, where compare channel 2 fires.
const HALF_RANGE: u32 = 1 << 31;

static HALF_PERIODS: AtomicU64 = AtomicU64::new(0);
static QUEUE: TimerQueue<Uptime> = TimerQueue::new();

fn tim2() -> &'static hal::pac::tim2::RegisterBlock {
    unsafe { &*hal::pac::TIM2::ptr() }
}

/// Microsecond monotonic on TIM2.
///
/// The 32 bit counter runs at 1 MHz. Compare channel 2 sits at half range and
/// together with the update event counts half periods, which extends the
/// counter to 64 bits. Compare channel 1 serves the timer queue.
pub struct Uptime;

impl Uptime {
    /// TIM2 has to be clocked already, see [`super::setup`].
    pub fn start() {
        let tim = tim2();
        let prescaler = (APB1_TIMER_HZ / UPTIME_HZ - 1) as u16;

        #[allow(unused_unsafe)]
        tim.psc.write(|w| unsafe { w.psc().bits(prescaler) });
        tim.arr.write(|w| w.arr().bits(u32::MAX));
        tim.ccr2().write(|w| w.ccr().bits(HALF_RANGE));
        tim.dier.write(|w| w.uie().enabled().cc2ie().enabled());

        // Latch the prescaler, the update flag it raises is not an overflow
        tim.egr.write(|w| w.ug().set_bit());
        tim.sr.modify(|_, w| w.uif().clear_bit());

        HALF_PERIODS.store(0, Ordering::SeqCst);
        QUEUE.initialize(Uptime);

        tim.cr1.write(|w| w.ckd().div1().cen().enabled());
    }

    pub fn queue() -> &'static TimerQueue<Uptime> {
        &QUEUE
    }

    #[inline]
    pub async fn delay_until(instant: Instant) {
        QUEUE.delay_until(instant).await;
    }

    /// Overflows land on odd counts, half range compares on even ones.
    fn count_half_period(overflow: bool) {
        let prev = HALF_PERIODS.fetch_add(1, Ordering::Relaxed);
        assert_eq!(prev % 2 == 1, overflow, "uptime missed a half period");
    }
}

impl Monotonic for Uptime {
    const ZERO: Instant = Instant::from_ticks(0);
    const TICK_PERIOD: Duration = Duration::from_ticks(1);

    type Instant = Instant;
    type Duration = Duration;

    #[inline(always)]
    fn now() -> Instant {
        Instant::from_ticks(calculate_now(
            || HALF_PERIODS.load(Ordering::Relaxed),
            || tim2().cnt.read().cnt().bits(),
        ))
    }

    fn set_compare(instant: Instant) {
        // A compare value only reaches one counter period ahead, later
        // deadlines get re-armed when the queue wakes up on the way there.
        let in_reach = instant
            .checked_duration_since(Self::now())
            .is_some_and(|ahead| ahead.ticks() <= u64::from(u32::MAX));
        let val = if in_reach { instant.ticks() as u32 } else { 0 };
        tim2().ccr1().write(|w| w.ccr().bits(val));
    }

    fn clear_compare_flag() {
        tim2().sr.modify(|_, w| w.cc1if().clear_bit());
    }

    fn pend_interrupt() {
        cortex_m::peripheral::NVIC::pend(hal::pac::Interrupt::TIM2);
    }

    fn enable_timer() {
        tim2().dier.modify(|_, w| w.cc1ie().set_bit());
    }

    fn disable_timer() {
        tim2().dier.modify(|_, w| w.cc1ie().clear_bit());
    }

    fn on_interrupt() {
        let tim = tim2();
        let sr = tim.sr.read();
        if sr.uif().bit_is_set() {
            tim.sr.modify(|_, w| w.uif().clear_bit());
            Self::count_half_period(true);
        }
        if sr.cc2if().bit_is_set() {
            tim.sr.modify(|_, w| w.cc2if().clear_bit());
            Self::count_half_period(false);
        }
    }
}
