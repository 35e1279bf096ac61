#![forbid(unsafe_code)]

//! Timed phases without nested callbacks.
//!
//! A [`Schedule`] is a table of named phases, each with a delay relative to
//! the previous one. Starting a schedule expands it into absolute deadlines
//! on a [`TimerQueue`], which the host drains as time advances.
//!
//! # Invariants
//!
//! 1. Queue entries are always sorted by deadline (maintained on insertion).
//! 2. Entries with equal deadlines pop in insertion order.
//! 3. [`TimerQueue::pop_due`] never yields an entry whose deadline is in the
//!    future.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use retrofolio_core::schedule::{Schedule, TimerQueue};
//!
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! enum Banner { SlideIn, SlideOut, Remove }
//!
//! let banner = Schedule::new()
//!     .then(Banner::SlideIn, Duration::from_millis(100))
//!     .then(Banner::SlideOut, Duration::from_millis(3900))
//!     .then(Banner::Remove, Duration::from_millis(300));
//! assert_eq!(banner.total(), Duration::from_millis(4300));
//!
//! let mut queue = TimerQueue::new();
//! for (phase, at) in banner.offsets_from(Duration::from_secs(1)) {
//!     queue.schedule(at, phase);
//! }
//! assert_eq!(queue.pop_due(Duration::from_millis(1100)), Some(Banner::SlideIn));
//! assert_eq!(queue.pop_due(Duration::from_millis(1100)), None);
//! ```

use std::time::Duration;

// ---------------------------------------------------------------------------
// Schedule
// ---------------------------------------------------------------------------

/// Ordered table of phases with relative delays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule<K> {
    steps: Vec<(K, Duration)>,
}

impl<K> Default for Schedule<K> {
    fn default() -> Self {
        Self { steps: Vec::new() }
    }
}

impl<K: Copy> Schedule<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `phase`, due `delay` after the previous phase (builder pattern).
    #[must_use]
    pub fn then(mut self, phase: K, delay: Duration) -> Self {
        self.steps.push((phase, delay));
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Sum of all delays.
    #[must_use]
    pub fn total(&self) -> Duration {
        self.steps
            .iter()
            .fold(Duration::ZERO, |acc, (_, delay)| acc.saturating_add(*delay))
    }

    /// Absolute deadline of every phase when started at `start`.
    pub fn offsets_from(&self, start: Duration) -> impl Iterator<Item = (K, Duration)> + '_ {
        self.steps.iter().scan(start, |at, (phase, delay)| {
            *at = at.saturating_add(*delay);
            Some((*phase, *at))
        })
    }
}

// ---------------------------------------------------------------------------
// Timer queue
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
struct Entry<T> {
    deadline: Duration,
    task: T,
}

/// Deadline-ordered pending tasks.
#[derive(Debug, Clone)]
pub struct TimerQueue<T> {
    entries: Vec<Entry<T>>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> TimerQueue<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Queue `task` for `deadline`.
    pub fn schedule(&mut self, deadline: Duration, task: T) {
        let at = self.entries.partition_point(|e| e.deadline <= deadline);
        self.entries.insert(at, Entry { deadline, task });
    }

    /// Earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.entries.first().map(|e| e.deadline)
    }

    /// Remove and return the earliest task if it is due at `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<T> {
        if self.next_deadline()? <= now {
            Some(self.entries.remove(0).task)
        } else {
            None
        }
    }

    /// Drop every pending task matching `predicate`; returns how many.
    pub fn cancel(&mut self, mut predicate: impl FnMut(&T) -> bool) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| !predicate(&e.task));
        before - self.entries.len()
    }

    /// Whether any pending task matches `predicate`.
    pub fn any(&self, mut predicate: impl FnMut(&T) -> bool) -> bool {
        self.entries.iter().any(|e| predicate(&e.task))
    }
}
