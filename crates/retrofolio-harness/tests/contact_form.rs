//! Contact form: validation display, live edits and the submit sequence.

use pretty_assertions::assert_eq;
use retrofolio_core::markup::{SUBMIT_SENDING_HTML, SUBMIT_SENT_HTML, SUCCESS_BANNER_TEXT};
use retrofolio_core::page::{Page, Role};
use retrofolio_core::validation::{ERROR_BORDER, NEUTRAL_BORDER};
use retrofolio_core::{Field, FieldError};
use retrofolio_harness::fixture::SUBMIT_LABEL_HTML;
use retrofolio_harness::{NodeId, Scenario};

fn fill(scenario: &Scenario, name: &str, email: &str, message: &str) {
    let page = scenario.page();
    page.set_value(page.by_id("name"), name);
    page.set_value(page.by_id("email"), email);
    page.set_value(page.by_id("message"), message);
}

fn error_label(scenario: &Scenario, field: Field) -> NodeId {
    scenario.page().find(Role::FieldError(field)).unwrap()
}

fn error_shown(scenario: &Scenario, field: Field) -> bool {
    scenario
        .page()
        .has_class(&error_label(scenario, field), "show")
}

fn border(scenario: &Scenario, field: Field) -> Option<String> {
    let page = scenario.page();
    page.style(page.by_id(field.name()), "border-color")
}

fn submit_button(scenario: &Scenario) -> NodeId {
    scenario.page().find(Role::SubmitButton).unwrap()
}

fn banners(scenario: &Scenario) -> Vec<NodeId> {
    scenario.page().find_by_class("success-message")
}

#[test]
fn empty_form_flags_every_field() {
    let mut scenario = Scenario::new();
    scenario.start();
    let now = scenario.now();
    assert!(!scenario.controller_mut().submit_form(now));

    for (field, message) in [
        (Field::Name, "Name is required"),
        (Field::Email, "Email is required"),
        (Field::Message, "Message is required"),
    ] {
        assert!(error_shown(&scenario, field));
        assert_eq!(scenario.page().text(error_label(&scenario, field)), message);
        assert_eq!(border(&scenario, field).as_deref(), Some(ERROR_BORDER));
    }
    assert!(!scenario.controller().is_submitting());
}

#[test]
fn malformed_email_is_the_only_error() {
    let mut scenario = Scenario::new();
    scenario.start();
    fill(&scenario, "Ada", "ada@example", "Hello");
    let report = scenario.controller_mut().validate_form();

    assert_eq!(report.check(Field::Email).error, Some(FieldError::InvalidEmail));
    assert!(report.check(Field::Name).is_valid());
    assert!(report.check(Field::Message).is_valid());
    assert_eq!(
        scenario.page().text(error_label(&scenario, Field::Email)),
        "Please enter a valid email"
    );
    assert!(!error_shown(&scenario, Field::Name));
    assert_eq!(border(&scenario, Field::Name).as_deref(), Some(NEUTRAL_BORDER));
}

#[test]
fn revalidation_hides_fixed_errors() {
    let mut scenario = Scenario::new();
    scenario.start();
    scenario.controller_mut().validate_form();
    assert!(error_shown(&scenario, Field::Name));

    fill(&scenario, "Ada", "a@b.co", "Hi");
    assert!(scenario.controller_mut().validate_form().is_valid());
    for field in Field::ALL {
        assert!(!error_shown(&scenario, field));
        assert_eq!(border(&scenario, field).as_deref(), Some(NEUTRAL_BORDER));
    }
}

#[test]
fn live_input_clears_error_once_non_blank() {
    let mut scenario = Scenario::active();
    scenario.controller_mut().validate_form();
    assert!(error_shown(&scenario, Field::Name));

    let name = scenario.page().by_id("name");
    scenario.page().set_value(name, "   ");
    scenario.controller_mut().on_field_input(Field::Name);
    assert!(error_shown(&scenario, Field::Name));

    scenario.page().set_value(name, "A");
    scenario.controller_mut().on_field_input(Field::Name);
    assert!(!error_shown(&scenario, Field::Name));
    assert_eq!(border(&scenario, Field::Name).as_deref(), Some(NEUTRAL_BORDER));
}

#[test]
fn live_input_waits_for_activation() {
    let mut scenario = Scenario::new();
    scenario.start();
    scenario.controller_mut().validate_form();
    let name = scenario.page().by_id("name");
    scenario.page().set_value(name, "Ada");
    scenario.controller_mut().on_field_input(Field::Name);
    assert!(error_shown(&scenario, Field::Name));
}

#[test]
fn focus_lifts_and_blur_keeps_glow_while_filled() {
    let mut scenario = Scenario::active();
    let email = scenario.page().by_id("email");

    scenario.controller_mut().on_field_focus(Field::Email);
    assert_eq!(
        scenario.page().style(email, "transform").as_deref(),
        Some("translateY(-2px)")
    );
    assert_eq!(
        scenario.page().style(email, "box-shadow").as_deref(),
        Some("0 0 0 3px var(--glow)")
    );

    scenario.page().set_value(email, "a@b.co");
    scenario.controller_mut().on_field_blur(Field::Email);
    assert_eq!(
        scenario.page().style(email, "transform").as_deref(),
        Some("translateY(0)")
    );
    assert_eq!(
        scenario.page().style(email, "box-shadow").as_deref(),
        Some("0 0 0 3px var(--glow)")
    );

    scenario.page().set_value(email, "");
    scenario.controller_mut().on_field_blur(Field::Email);
    assert_eq!(scenario.page().style(email, "box-shadow").as_deref(), Some("none"));
}

#[test]
fn valid_submit_runs_the_full_sequence() {
    let mut scenario = Scenario::new();
    scenario.start();
    fill(&scenario, "Ada", "ada@example.com", "Hello there");
    let button = submit_button(&scenario);

    let now = scenario.now();
    assert!(scenario.controller_mut().submit_form(now));
    assert_eq!(scenario.page().html(&button), SUBMIT_SENDING_HTML);
    assert!(scenario.page().is_disabled(button));

    scenario.advance_ms(1499);
    assert_eq!(scenario.page().html(&button), SUBMIT_SENDING_HTML);
    scenario.advance_ms(1);
    assert_eq!(scenario.page().html(&button), SUBMIT_SENT_HTML);
    assert!(scenario.page().is_disabled(button));

    scenario.advance_ms(2000);
    assert_eq!(scenario.page().html(&button), SUBMIT_LABEL_HTML);
    assert!(!scenario.page().is_disabled(button));
    assert!(!scenario.controller().is_submitting());
    assert_eq!(scenario.page().value(&scenario.page().by_id("name")), "");

    let banner = banners(&scenario);
    assert_eq!(banner.len(), 1);
    let banner = banner[0];
    assert_eq!(scenario.page().text(banner), SUCCESS_BANNER_TEXT);
    assert_eq!(
        scenario.page().style(banner, "transform").as_deref(),
        Some("translateX(100%)")
    );

    scenario.advance_ms(100);
    assert_eq!(
        scenario.page().style(banner, "transform").as_deref(),
        Some("translateX(0)")
    );
    scenario.advance_ms(3900);
    assert_eq!(
        scenario.page().style(banner, "transform").as_deref(),
        Some("translateX(100%)")
    );
    assert!(scenario.page().is_attached(banner));
    scenario.advance_ms(300);
    assert!(!scenario.page().is_attached(banner));
}

#[test]
fn second_submit_during_sequence_is_ignored() {
    let mut scenario = Scenario::new();
    scenario.start();
    fill(&scenario, "Ada", "ada@example.com", "Hello");
    let now = scenario.now();
    assert!(scenario.controller_mut().submit_form(now));
    scenario.advance_ms(500);
    let now = scenario.now();
    assert!(!scenario.controller_mut().submit_form(now));

    scenario.advance_ms(3000);
    assert!(!scenario.controller().is_submitting());
    assert_eq!(banners(&scenario).len(), 1);
    assert_eq!(
        scenario.page().html(&submit_button(&scenario)),
        SUBMIT_LABEL_HTML
    );
}

#[test]
fn invalid_submit_leaves_button_untouched() {
    let mut scenario = Scenario::new();
    scenario.start();
    fill(&scenario, "Ada", "not-an-email", "Hello");
    let now = scenario.now();
    assert!(!scenario.controller_mut().submit_form(now));
    let button = submit_button(&scenario);
    assert_eq!(scenario.page().html(&button), SUBMIT_LABEL_HTML);
    assert!(!scenario.page().is_disabled(button));
}
