use crate::circuit::{DebounceConfig, Level, SwitchCircuit};

/// On-demand digital sample of the switch input line.
pub trait InputSignal {
    fn read(&mut self) -> Level;
}

/// Monotonic millisecond clock.
///
/// The counter wraps at `u32::MAX`; elapsed time is computed with
/// `wrapping_sub`, which stays correct across a single wraparound.
pub trait Clock {
    /// Current value of the millisecond counter.
    fn now_ms(&self) -> u32;

    /// Suspend the calling context for `ms` milliseconds.
    fn block_ms(&self, ms: u32);
}

/// Debounced reader for one push-button.
///
/// Owns the signal source, the clock, the resolved circuit polarity and the
/// poll-mode debounce state. One instance per physical switch; it must not be
/// shared between concurrent callers. The two read variants keep no common
/// mutable state: [`read_blocking`](Self::read_blocking) never touches the
/// state that [`poll`](Self::poll) persists between calls.
pub struct DebouncedSwitch<S, C> {
    signal: S,
    clock: C,
    circuit: SwitchCircuit,
    window_ms: u32,
    pending: bool,
    press_started_at: u32,
}

impl<S, C> DebouncedSwitch<S, C>
where
    S: InputSignal,
    C: Clock,
{
    pub fn new(signal: S, clock: C, circuit: SwitchCircuit, config: DebounceConfig) -> Self {
        DebouncedSwitch {
            signal,
            clock,
            circuit,
            window_ms: config.window_ms,
            pending: false,
            press_started_at: 0,
        }
    }

    /// Non-blocking reader. Call on every iteration of the control loop;
    /// returns `true` exactly once per completed press/release cycle.
    ///
    /// Every active-level sample restarts the debounce timer, so a press is
    /// confirmed only after the line has stayed inactive for a full window
    /// past the last observed press activity. Between calls nothing is
    /// sampled: if the loop polls too coarsely to catch a brief active-level
    /// bounce, the window can elapse unobserved and confirm early. That is an
    /// accepted consequence of sampling, not something this reader tries to
    /// paper over — poll often enough relative to the window.
    pub fn poll(&mut self) -> bool {
        let sample = self.signal.read();

        if sample == self.circuit.active_level() {
            // Press activity restarts the timer; confirmation only happens
            // from a later inactive sample.
            self.pending = true;
            self.press_started_at = self.clock.now_ms();
            return false;
        }

        if self.pending {
            let elapsed = self.clock.now_ms().wrapping_sub(self.press_started_at);
            if elapsed > self.window_ms {
                self.pending = false;
                return true;
            }
        }

        false
    }

    /// Blocking reader. Returns immediately with `false` if the button is not
    /// down; otherwise suspends the caller, one debounce window at a time,
    /// until a re-sample finds the line inactive, then returns `true`.
    ///
    /// The whole calling context stops for the wait — with a held button that
    /// is the hold time plus one trailing window, unbounded in principle.
    /// There is no way to abort once the wait has begun.
    pub fn read_blocking(&mut self) -> bool {
        let mut pressed = false;
        let mut sample = self.signal.read();

        while sample == self.circuit.active_level() {
            pressed = true;
            self.clock.block_ms(self.window_ms);
            sample = self.signal.read();
        }

        pressed
    }
}
