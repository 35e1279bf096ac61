//! Theme persistence, mobile menu and in-page navigation.

use retrofolio_core::page::{Page, Role};
use retrofolio_core::theme::{THEME_ATTRIBUTE, THEME_STORAGE_KEY};
use retrofolio_core::{InteractionConfig, Theme};
use retrofolio_harness::{Scenario, StorageMode, init_test_logging, portfolio_fixture};

fn root_theme(scenario: &Scenario) -> Option<String> {
    let page = scenario.page();
    page.attribute(&page.root(), THEME_ATTRIBUTE)
}

fn menu_open(scenario: &Scenario) -> (bool, bool) {
    let page = scenario.page();
    let button = page.by_id("mobileMenuBtn");
    let nav = page.find(Role::Nav).unwrap();
    (page.has_class(&button, "active"), page.has_class(&nav, "active"))
}

#[test]
fn default_theme_is_light() {
    init_test_logging();
    let mut scenario = Scenario::new();
    scenario.start();
    assert_eq!(scenario.controller().theme(), Theme::Light);
    assert_eq!(root_theme(&scenario).as_deref(), Some("light"));
}

#[test]
fn stored_theme_is_applied_at_start() {
    let page = portfolio_fixture();
    page.seed_preference(THEME_STORAGE_KEY, "dark");
    let mut scenario = Scenario::with_page(page, InteractionConfig::default());
    scenario.start();
    assert_eq!(scenario.controller().theme(), Theme::Dark);
    assert_eq!(root_theme(&scenario).as_deref(), Some("dark"));
}

#[test]
fn toggling_twice_restores_the_persisted_value() {
    let mut scenario = Scenario::new();
    scenario.start();
    let now = scenario.now();

    scenario.controller_mut().toggle_theme(now);
    assert_eq!(scenario.page().stored(THEME_STORAGE_KEY).as_deref(), Some("dark"));
    assert_eq!(root_theme(&scenario).as_deref(), Some("dark"));

    scenario.controller_mut().toggle_theme(now);
    assert_eq!(scenario.page().stored(THEME_STORAGE_KEY).as_deref(), Some("light"));
    assert_eq!(root_theme(&scenario).as_deref(), Some("light"));
}

#[test]
fn theme_transition_is_cleared_after_its_duration() {
    let mut scenario = Scenario::new();
    scenario.start();
    let now = scenario.now();
    scenario.controller_mut().toggle_theme(now);
    let body = scenario.page().body();
    assert_eq!(
        scenario.page().style(body, "transition").as_deref(),
        Some("all 0.3s ease")
    );
    scenario.advance_ms(299);
    assert!(scenario.page().style(body, "transition").is_some());
    scenario.advance_ms(1);
    assert_eq!(scenario.page().style(body, "transition"), None);
}

#[test]
fn unavailable_storage_falls_back_to_memory() {
    let page = portfolio_fixture();
    page.set_storage_mode(StorageMode::Unavailable);
    let mut scenario = Scenario::with_page(page, InteractionConfig::default());
    scenario.start();
    assert_eq!(scenario.controller().theme(), Theme::Light);

    let now = scenario.now();
    assert_eq!(scenario.controller_mut().toggle_theme(now), Theme::Dark);
    assert_eq!(root_theme(&scenario).as_deref(), Some("dark"));
    assert_eq!(scenario.page().stored(THEME_STORAGE_KEY), None);
}

#[test]
fn rejected_writes_keep_the_in_memory_theme() {
    let page = portfolio_fixture();
    page.set_storage_mode(StorageMode::ReadOnly);
    let mut scenario = Scenario::with_page(page, InteractionConfig::default());
    scenario.start();
    let now = scenario.now();
    scenario.controller_mut().toggle_theme(now);
    assert_eq!(scenario.controller().theme(), Theme::Dark);
    assert_eq!(scenario.page().stored(THEME_STORAGE_KEY), None);
}

#[test]
fn unknown_stored_theme_is_ignored() {
    let page = portfolio_fixture();
    page.seed_preference(THEME_STORAGE_KEY, "sepia");
    let mut scenario = Scenario::with_page(page, InteractionConfig::default());
    scenario.start();
    assert_eq!(scenario.controller().theme(), Theme::Light);
}

#[test]
fn mobile_menu_toggles_button_and_nav_together() {
    let mut scenario = Scenario::new();
    scenario.start();
    scenario.controller_mut().toggle_mobile_menu();
    assert_eq!(menu_open(&scenario), (true, true));
    scenario.controller_mut().toggle_mobile_menu();
    assert_eq!(menu_open(&scenario), (false, false));
}

#[test]
fn nav_link_click_scrolls_below_header_and_closes_menu() {
    let mut scenario = Scenario::new();
    scenario.start();
    scenario.controller_mut().toggle_mobile_menu();

    assert!(scenario.controller_mut().on_nav_link_click("#about"));
    assert_eq!(scenario.page().scroll_log(), vec![730.0]);
    assert_eq!(menu_open(&scenario), (false, false));
}

#[test]
fn nav_link_to_missing_section_still_closes_menu() {
    let mut scenario = Scenario::new();
    scenario.start();
    scenario.controller_mut().toggle_mobile_menu();
    scenario.controller_mut().on_nav_link_click("#blog");
    assert!(scenario.page().scroll_log().is_empty());
    assert_eq!(menu_open(&scenario), (false, false));
}

#[test]
fn anchors_wait_for_activation() {
    let mut scenario = Scenario::new();
    scenario.start();
    assert!(!scenario.controller_mut().follow_anchor("#contact"));
    assert!(scenario.page().scroll_log().is_empty());

    scenario.activate();
    assert!(scenario.controller_mut().follow_anchor("#contact"));
    assert_eq!(scenario.page().scroll_log(), vec![2630.0]);
}

#[test]
fn anchor_to_missing_target_leaves_menu_open() {
    let mut scenario = Scenario::active();
    scenario.controller_mut().toggle_mobile_menu();
    assert!(scenario.controller_mut().follow_anchor("#nowhere"));
    assert!(scenario.page().scroll_log().is_empty());
    assert_eq!(menu_open(&scenario), (true, true));

    scenario.controller_mut().follow_anchor("#projects");
    assert_eq!(menu_open(&scenario), (false, false));
}

#[test]
fn context_menu_is_suppressed_on_mobile_widths() {
    let scenario = Scenario::new();
    assert!(scenario.controller().allows_context_menu());
    scenario.page().set_width(768.0);
    assert!(!scenario.controller().allows_context_menu());
}
