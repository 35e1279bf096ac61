#![forbid(unsafe_code)]

//! Konami code matcher.
//!
//! # State Machine
//!
//! ```text
//!            expected code                 10th expected code
//!   ┌──────┐ ────────────▶ ┌──────────┐ ───────────────────▶ ┌──────────┐
//!   │  0   │               │ 1 ..= 9  │                      │ Complete │
//!   └──────┘ ◀──────────── └──────────┘                      └──────────┘
//!       ▲       any other code                                     │
//!       └──────────────────────────────────────────────────────────┘
//!                           progress reset to 0
//! ```
//!
//! A mismatch always resets to 0, even when the mismatching code is itself
//! the first code of the sequence.

/// The fixed sequence, as `KeyboardEvent.code` values.
pub const KONAMI_SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "KeyB",
    "KeyA",
];

/// Result of feeding one key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KonamiStep {
    /// Matched the next code; carries the new progress.
    Advanced(usize),
    /// Mismatch; progress is back at 0.
    Reset,
    /// Final code matched; progress is back at 0.
    Complete,
}

/// Progress cursor into [`KONAMI_SEQUENCE`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KonamiMatcher {
    progress: usize,
}

impl KonamiMatcher {
    #[must_use]
    pub const fn new() -> Self {
        Self { progress: 0 }
    }

    /// Current match length, `0..10`.
    #[must_use]
    pub const fn progress(&self) -> usize {
        self.progress
    }

    /// Feed a keydown `code`.
    pub fn feed(&mut self, code: &str) -> KonamiStep {
        if KONAMI_SEQUENCE[self.progress] != code {
            self.progress = 0;
            return KonamiStep::Reset;
        }
        self.progress += 1;
        if self.progress == KONAMI_SEQUENCE.len() {
            self.progress = 0;
            KonamiStep::Complete
        } else {
            KonamiStep::Advanced(self.progress)
        }
    }
}
