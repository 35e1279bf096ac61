#![forbid(unsafe_code)]

//! Frame throttling and debouncing for high-frequency page events.
//!
//! Scroll and pointer events can arrive many times per rendered frame. The
//! controller keeps only the latest sample and recomputes at most once per
//! animation frame ([`FrameThrottle`]). Resize handling waits until events
//! stop arriving for a quiet period ([`Debouncer`]).
//!
//! # Usage
//!
//! ```
//! use std::time::Duration;
//! use retrofolio_core::throttle::{Debouncer, FrameThrottle};
//!
//! let mut scroll = FrameThrottle::new();
//! assert!(scroll.request(42.0));   // first sample queues a frame
//! assert!(!scroll.request(43.0));  // later samples only update the value
//! assert_eq!(scroll.take(), Some(43.0));
//! assert_eq!(scroll.take(), None);
//!
//! let mut resize = Debouncer::new(Duration::from_millis(150));
//! resize.poke(1024.0, Duration::ZERO);
//! resize.poke(900.0, Duration::from_millis(100)); // restarts the quiet period
//! assert_eq!(resize.fire(Duration::from_millis(200)), None);
//! assert_eq!(resize.fire(Duration::from_millis(250)), Some(900.0));
//! ```

use std::time::Duration;

/// Latest-wins sample with a "frame already requested" token.
#[derive(Debug, Clone, Default)]
pub struct FrameThrottle<T> {
    pending: Option<T>,
}

impl<T> FrameThrottle<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Record a sample. Returns `true` when no frame was queued yet, i.e.
    /// the caller should request one.
    pub fn request(&mut self, sample: T) -> bool {
        let was_idle = self.pending.is_none();
        self.pending = Some(sample);
        was_idle
    }

    /// Whether a frame is owed to this throttle.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Consume the sample inside the frame callback, releasing the token.
    pub fn take(&mut self) -> Option<T> {
        self.pending.take()
    }
}

/// Trailing-edge debouncer over host-supplied time.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    quiet: Duration,
    pending: Option<(Duration, T)>,
}

impl<T> Debouncer<T> {
    #[must_use]
    pub const fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// Record a sample at `now`, clearing any pending deadline first.
    pub fn poke(&mut self, sample: T, now: Duration) {
        self.pending = Some((now.saturating_add(self.quiet), sample));
    }

    /// When the pending sample becomes due.
    #[must_use]
    pub fn deadline(&self) -> Option<Duration> {
        self.pending.as_ref().map(|(deadline, _)| *deadline)
    }

    /// Yield the sample once the quiet period has elapsed.
    pub fn fire(&mut self, now: Duration) -> Option<T> {
        match self.deadline() {
            Some(deadline) if now >= deadline => self.pending.take().map(|(_, sample)| sample),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn throttle_requests_one_frame_per_burst() {
        let mut throttle = FrameThrottle::new();
        let requested: usize = (0..50).map(|i| usize::from(throttle.request(i))).sum();
        assert_eq!(requested, 1);
        assert!(throttle.is_pending());
        assert_eq!(throttle.take(), Some(49));
        assert!(!throttle.is_pending());
        assert!(throttle.request(50));
    }

    #[test]
    fn debouncer_fires_once_after_quiet_period() {
        let mut debouncer = Debouncer::new(Duration::from_millis(100));
        assert_eq!(debouncer.fire(Duration::from_secs(10)), None);
        debouncer.poke("a", Duration::from_millis(0));
        assert_eq!(debouncer.deadline(), Some(Duration::from_millis(100)));
        assert_eq!(debouncer.fire(Duration::from_millis(99)), None);
        assert_eq!(debouncer.fire(Duration::from_millis(100)), Some("a"));
        assert_eq!(debouncer.fire(Duration::from_millis(500)), None);
    }

    #[test]
    fn zero_quiet_fires_immediately() {
        let mut debouncer = Debouncer::new(Duration::ZERO);
        debouncer.poke(7, Duration::from_millis(3));
        assert_eq!(debouncer.fire(Duration::from_millis(3)), Some(7));
    }
}
