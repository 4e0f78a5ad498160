//! Rate limiting for noisy browser events, as clock-driven state machines.
//!
//! The web layer owns the actual timers; these types only decide whether a
//! call runs now, later, or not at all.

use instant::Instant;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gate {
    /// Run the handler now.
    Run,
    /// Schedule one trailing run after this delay.
    Defer(Duration),
    /// A trailing run is already scheduled; it will see the latest state.
    Skip,
}

/// Leading-edge throttle with a cooldown window. Calls that land inside the
/// window collapse into a single trailing run when it closes.
#[derive(Clone, Debug)]
pub struct Throttle {
    window: Duration,
    cooldown_until: Option<Instant>,
    trailing: bool,
}

impl Throttle {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            cooldown_until: None,
            trailing: false,
        }
    }

    pub fn call(&mut self, now: Instant) -> Gate {
        match self.cooldown_until {
            Some(until) if now < until => {
                if self.trailing {
                    Gate::Skip
                } else {
                    self.trailing = true;
                    Gate::Defer(until - now)
                }
            }
            _ => {
                self.cooldown_until = Some(now + self.window);
                Gate::Run
            }
        }
    }

    /// The deferred timer fired. Returns whether a trailing run was owed;
    /// running it opens a fresh window.
    pub fn flush(&mut self, now: Instant) -> bool {
        if !self.trailing {
            return false;
        }
        self.trailing = false;
        self.cooldown_until = Some(now + self.window);
        true
    }
}

/// Fire once after `wait` of quiet; every call pushes the deadline back.
#[derive(Clone, Debug)]
pub struct Debounce {
    wait: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            deadline: None,
        }
    }

    /// Register a call; returns how long until it may fire.
    pub fn call(&mut self, now: Instant) -> Duration {
        self.deadline = Some(now + self.wait);
        self.wait
    }

    /// A timer fired. True when the quiet period has elapsed and the pending
    /// call should run; stale timers from superseded calls get false.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(d) if now >= d => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
