//! Structured log events emitted by the controller.

use std::sync::{Arc, Mutex};

use retrofolio_core::theme::THEME_STORAGE_KEY;
use retrofolio_core::{InteractionConfig, Theme};
use retrofolio_harness::{Scenario, StorageMode, portfolio_fixture};
use tracing::Subscriber;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::{Context, SubscriberExt};

#[derive(Debug, Default, Clone)]
struct Captured {
    level: String,
    message: String,
}

struct EventCapture {
    events: Arc<Mutex<Vec<Captured>>>,
}

impl<S: Subscriber> Layer<S> for EventCapture {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        #[derive(Default)]
        struct MessageVisitor {
            message: String,
        }

        impl tracing::field::Visit for MessageVisitor {
            fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
                if field.name() == "message" {
                    self.message = value.to_owned();
                }
            }

            fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
                if field.name() == "message" {
                    self.message = format!("{value:?}");
                }
            }
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        self.events.lock().expect("capture lock").push(Captured {
            level: event.metadata().level().to_string(),
            message: visitor.message,
        });
    }
}

fn capture<R>(f: impl FnOnce() -> R) -> (R, Vec<Captured>) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry().with(EventCapture {
        events: Arc::clone(&events),
    });
    let result = tracing::subscriber::with_default(subscriber, || {
        tracing::callsite::rebuild_interest_cache();
        f()
    });
    tracing::callsite::rebuild_interest_cache();
    let events = events.lock().expect("capture lock").clone();
    (result, events)
}

fn has(events: &[Captured], level: &str, message: &str) -> bool {
    events
        .iter()
        .any(|e| e.level == level && e.message == message)
}

#[test]
fn theme_toggle_is_logged_at_info() {
    let (_, events) = capture(|| {
        let mut scenario = Scenario::new();
        scenario.start();
        let now = scenario.now();
        scenario.controller_mut().toggle_theme(now);
    });
    assert!(has(&events, "INFO", "theme toggled"), "{events:?}");
}

#[test]
fn storage_fallback_is_logged_at_debug() {
    let (theme, events) = capture(|| {
        let page = portfolio_fixture();
        page.set_storage_mode(StorageMode::Unavailable);
        let mut scenario = Scenario::with_page(page, InteractionConfig::default());
        scenario.start();
        scenario.controller().theme()
    });
    assert_eq!(theme, Theme::Light);
    assert!(
        has(&events, "DEBUG", "theme storage unavailable, using default"),
        "{events:?}"
    );
}

#[test]
fn unknown_stored_theme_is_logged_and_ignored() {
    let (theme, events) = capture(|| {
        let page = portfolio_fixture();
        page.seed_preference(THEME_STORAGE_KEY, "sepia");
        let mut scenario = Scenario::with_page(page, InteractionConfig::default());
        scenario.start();
        scenario.controller().theme()
    });
    assert_eq!(theme, Theme::Light);
    assert!(
        has(&events, "DEBUG", "ignoring unknown stored theme"),
        "{events:?}"
    );
}

#[test]
fn activation_and_submission_are_logged() {
    let (_, events) = capture(|| {
        let mut scenario = Scenario::active();
        let page = scenario.page();
        page.set_value(page.by_id("name"), "Ada");
        page.set_value(page.by_id("email"), "ada@example.com");
        page.set_value(page.by_id("message"), "Hello");
        let now = scenario.now();
        scenario.controller_mut().submit_form(now)
    });
    assert!(has(&events, "INFO", "interactions active"), "{events:?}");
    assert!(has(&events, "INFO", "contact form submitted"), "{events:?}");
}
