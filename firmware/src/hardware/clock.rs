use debounced_switch::Clock;
use embassy_time::{Duration, Instant, block_for};

/// Millisecond clock backed by the embassy time driver.
///
/// `block_ms` uses `embassy_time::block_for`, which halts the whole executor
/// thread for the wait. That is exactly what the blocking reader asks for;
/// the poll-mode reader only ever calls `now_ms`.
#[derive(Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }

    fn block_ms(&self, ms: u32) {
        block_for(Duration::from_millis(ms as u64));
    }
}
