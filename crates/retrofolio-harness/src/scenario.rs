#![forbid(unsafe_code)]

//! Deterministic driver for a controller over a [`FakePage`].
//!
//! Owns a virtual clock. [`Scenario::advance_by`] steps through every
//! intermediate deadline in order, so chained timers fire exactly when a
//! browser would run them.

use std::time::Duration;

use retrofolio_core::{AdvanceReport, InteractionConfig, PageController};
use tracing::trace;

use crate::fake_page::FakePage;
use crate::fixture::portfolio_fixture;

#[derive(Debug)]
pub struct Scenario {
    controller: PageController<FakePage>,
    now: Duration,
}

impl Scenario {
    /// Reference fixture with default config, not yet started.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(InteractionConfig::default())
    }

    #[must_use]
    pub fn with_config(config: InteractionConfig) -> Self {
        Self::with_page(portfolio_fixture(), config)
    }

    #[must_use]
    pub fn with_page(page: FakePage, config: InteractionConfig) -> Self {
        Self {
            controller: PageController::new(page, config),
            now: Duration::ZERO,
        }
    }

    /// Started and past the activation delay.
    #[must_use]
    pub fn active() -> Self {
        let mut scenario = Self::new();
        scenario.start();
        scenario.activate();
        scenario
    }

    pub fn controller(&self) -> &PageController<FakePage> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut PageController<FakePage> {
        &mut self.controller
    }

    pub fn page(&self) -> &FakePage {
        self.controller.page()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn start(&mut self) {
        self.controller.start(self.now);
    }

    /// Advance exactly to the activation deadline.
    pub fn activate(&mut self) {
        let delay = self.controller.config().activation_delay;
        let elapsed = self.now;
        self.advance_by(delay.saturating_sub(elapsed));
    }

    /// Move the clock forward by `step`, firing every deadline on the way.
    pub fn advance_by(&mut self, step: Duration) -> AdvanceReport {
        let target = self.now.saturating_add(step);
        let mut total = AdvanceReport::default();
        while let Some(deadline) = self.controller.next_deadline() {
            if deadline > target {
                break;
            }
            self.now = self.now.max(deadline);
            let report = self.controller.advance(self.now);
            trace!(now_ms = self.now.as_millis() as u64, ?report, "scenario step");
            total.activated |= report.activated;
            total.resized |= report.resized;
            total.tasks_run += report.tasks_run;
        }
        self.now = target;
        total
    }

    pub fn advance_ms(&mut self, ms: u64) -> AdvanceReport {
        self.advance_by(Duration::from_millis(ms))
    }

    /// Run animation frames until the controller stops asking, at most `max`.
    pub fn frames(&mut self, max: usize) -> usize {
        let mut ran = 0;
        while ran < max && self.controller.wants_frame() {
            self.controller.on_frame();
            ran += 1;
        }
        ran
    }

    /// Scroll the window and run one frame.
    pub fn scroll_to(&mut self, scroll_y: f64) {
        self.page().set_scroll_y(scroll_y);
        if self.controller.on_scroll(scroll_y) {
            self.controller.on_frame();
        }
    }

    /// Move the pointer and run one frame.
    pub fn pointer_at(&mut self, x: f64, y: f64) {
        if self.controller.on_pointer_move(x, y) {
            self.controller.on_frame();
        }
    }

    /// Resize the window and let the debounce settle.
    pub fn resize(&mut self, width: f64) -> AdvanceReport {
        self.page().set_width(width);
        self.controller.on_resize(width, self.now);
        let quiet = self.controller.config().resize_debounce;
        self.advance_by(quiet)
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self::new()
    }
}
