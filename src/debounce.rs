// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A cancellable single-shot timer with no threads in it.
//!
//! This is the `clearTimeout(t); t = setTimeout(fn, ms)` idiom turned inside
//! out: instead of the timer calling us, the host asks "anything due?" from
//! its own event loop, passing the current time. That keeps the debouncer a
//! plain value that works the same natively, under WASM and in tests, where
//! time is whatever the test says it is.
//!
//! # Invariants
//!
//! - At most one value is pending.
//! - A value is released at most once, and never before its deadline
//!   (except through [`Debouncer::flush`]).
//! - Every [`Debouncer::call`] pushes the deadline to `now + delay`.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Duration)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replace whatever is pending with `value`, due at `now + delay`.
    pub fn call(&mut self, value: T, now: Duration) {
        self.pending = Some((value, now.saturating_add(self.delay)));
    }

    /// Release the pending value if its deadline has passed.
    pub fn poll(&mut self, now: Duration) -> Option<T> {
        match self.pending {
            Some((_, deadline)) if now >= deadline => self.pending.take().map(|(value, _)| value),
            _ => None,
        }
    }

    /// Release the pending value now, deadline or not.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }

    /// Drop the pending value.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// When the host should poll next, if anything is pending.
    pub fn deadline(&self) -> Option<Duration> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Monotonic time since construction, for hosts that have a real clock.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    pub fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}
