//! Clock-injected rate limiters for high-frequency layout events.
//!
//! Neither type owns a timer. The host passes the current `Instant` to every
//! call and polls on its own schedule (an event loop tick, a repaint), using
//! `deadline()` to know when the next poll matters.

use std::time::{Duration, Instant};

/// Outcome of feeding one event into a [`Throttle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThrottleDecision {
    /// Execute the throttled work now.
    Run,
    /// Inside the current window; one trailing run is queued.
    Deferred,
}

/// Leading-edge throttle with a single trailing call.
///
/// The first event while idle runs immediately and opens a window of
/// `interval`. Further events inside the window collapse into one pending
/// trailing run, reported by `poll` once the window has elapsed. The
/// trailing run opens a fresh window, so two runs are never closer than
/// `interval`.
#[derive(Clone, Debug)]
pub struct Throttle {
    interval: Duration,
    window_end: Option<Instant>,
    pending: bool,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            window_end: None,
            pending: false,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn call(&mut self, now: Instant) -> ThrottleDecision {
        if self.in_window(now) {
            self.pending = true;
            return ThrottleDecision::Deferred;
        }
        // A trailing run that was due but never polled is subsumed by this one.
        self.pending = false;
        self.window_end = Some(now + self.interval);
        ThrottleDecision::Run
    }

    /// Returns true exactly once per queued trailing run, after its window ends.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.pending || self.in_window(now) {
            return false;
        }
        self.pending = false;
        self.window_end = Some(now + self.interval);
        true
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// When a queued trailing run becomes due, if any.
    pub fn deadline(&self) -> Option<Instant> {
        if self.pending {
            self.window_end
        } else {
            None
        }
    }

    fn in_window(&self, now: Instant) -> bool {
        self.window_end.is_some_and(|end| now < end)
    }
}

/// Trailing-edge debounce: fires once after `delay` without new calls.
#[derive(Clone, Debug)]
pub struct Debounce {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Restart the quiet period.
    pub fn call(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}
