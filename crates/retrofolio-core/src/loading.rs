#![forbid(unsafe_code)]

//! Loading screen progress.
//!
//! Progress is deliberately indeterminate: every tick adds a random share of
//! `max_step` percent until it reaches 100. The generator is a seeded
//! xorshift so hosts and tests see the same sequence for the same seed.

/// Progress bar value in percent, `0.0..=100.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadingProgress {
    percent: f64,
    max_step: f64,
    state: u64,
}

impl LoadingProgress {
    #[must_use]
    pub fn new(seed: u64, max_step: f64) -> Self {
        Self {
            percent: 0.0,
            max_step,
            // xorshift has a fixed point at zero.
            state: if seed == 0 { 0x9e37_79b9_7f4a_7c15 } else { seed },
        }
    }

    #[must_use]
    pub fn percent(&self) -> f64 {
        self.percent
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.percent >= 100.0
    }

    /// Advance one tick and return the new value.
    pub fn tick(&mut self) -> f64 {
        if !self.is_complete() {
            self.percent = (self.percent + self.next_unit() * self.max_step).min(100.0);
        }
        self.percent
    }

    /// CSS width for the bar.
    #[must_use]
    pub fn width_css(&self) -> String {
        format!("{}%", self.percent)
    }

    /// Uniform sample in `[0, 1)`.
    fn next_unit(&mut self) -> f64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        // Top 53 bits map exactly onto an f64 mantissa.
        (x >> 11) as f64 / (1u64 << 53) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_monotone_and_bounded() {
        let mut progress = LoadingProgress::new(42, 15.0);
        let mut last = 0.0;
        for _ in 0..10_000 {
            let now = progress.tick();
            assert!(now >= last);
            assert!(now - last <= 15.0);
            assert!(now <= 100.0);
            last = now;
        }
        assert!(progress.is_complete());
        assert_eq!(progress.width_css(), "100%");
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = LoadingProgress::new(7, 15.0);
        let mut b = LoadingProgress::new(7, 15.0);
        for _ in 0..20 {
            assert_eq!(a.tick(), b.tick());
        }
    }

    #[test]
    fn zero_seed_still_progresses() {
        let mut progress = LoadingProgress::new(0, 15.0);
        progress.tick();
        progress.tick();
        assert!(progress.percent() > 0.0);
    }
}
