#![forbid(unsafe_code)]

//! Page interaction controller.
//!
//! [`PageController`] owns every piece of interaction state (theme, Konami
//! progress, throttle tokens, trail, pending timers) and reaches the page only
//! through the injected [`Page`] capability. The host forwards events and
//! drives time:
//!
//! - [`start`](PageController::start) once the document is ready,
//! - event methods (`on_scroll`, `on_pointer_move`, `toggle_theme`, ...) as
//!   listeners fire,
//! - [`advance`](PageController::advance) whenever
//!   [`next_deadline`](PageController::next_deadline) has passed,
//! - [`on_frame`](PageController::on_frame) on each animation frame while
//!   [`wants_frame`](PageController::wants_frame) is true.
//!
//! # Lifecycle
//!
//! ```text
//! new ──start──▶ Booting ──activation_delay──▶ Active
//!                  │                             │
//!                  │ theme, menu, nav links,     │ + parallax, reveal, filter,
//!                  │ form submit                 │   live validation, header,
//!                  │                             │   nav highlight, tilt, trail,
//!                  │                             │   anchors, konami
//! ```
//!
//! # Failure Modes
//!
//! - Missing element: the operation is skipped and logged at `trace`.
//! - Storage failure: logged at `debug`; the theme lives in memory only.

mod form;
mod task;

pub use task::{BannerPhase, LoadingPhase, SubmitPhase};

use std::time::Duration;

use tracing::{debug, info, trace};

use crate::config::InteractionConfig;
use crate::filter::{self, CardPlan};
use crate::header::HeaderTracker;
use crate::konami::{KonamiMatcher, KonamiStep};
use crate::loading::LoadingProgress;
use crate::markup;
use crate::motion::{Parallax, Tilt};
use crate::nav::{self, ACTIVE_CLASS};
use crate::page::{Page, Role};
use crate::schedule::{Schedule, TimerQueue};
use crate::theme::{THEME_ATTRIBUTE, THEME_STORAGE_KEY, Theme};
use crate::throttle::{Debouncer, FrameThrottle};
use crate::trail::{CursorTrail, MARKER_SIZE_PX, Point};
use crate::typewriter::Typewriter;

use task::Task;

/// Class added once to revealed elements.
pub const REVEAL_CLASS: &str = "animate";

/// Class marking cards removed by the project filter.
pub const HIDDEN_CLASS: &str = "hidden";

/// Outcome of one [`PageController::advance`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdvanceReport {
    /// Deferred features switched on during this call; the host should start
    /// observing reveal and lazy-animation targets.
    pub activated: bool,
    /// Timed tasks executed.
    pub tasks_run: usize,
    /// A debounced resize was applied.
    pub resized: bool,
}

/// Loading overlay handles.
#[derive(Debug)]
struct LoadingScreen<E> {
    screen: E,
    bar: Option<E>,
    progress: LoadingProgress,
}

/// The page interaction controller.
#[derive(Debug)]
pub struct PageController<P: Page> {
    page: P,
    config: InteractionConfig,
    theme: Theme,
    started: bool,
    active: bool,
    konami: KonamiMatcher,
    header: HeaderTracker,
    scroll: FrameThrottle<f64>,
    pointer: FrameThrottle<Point>,
    resize: Debouncer<f64>,
    trail: Option<CursorTrail>,
    trail_markers: Vec<P::Element>,
    timers: TimerQueue<Task<P::Element>>,
    loading: Option<LoadingScreen<P::Element>>,
    typewriter: Option<Typewriter>,
    submit_schedule: Schedule<SubmitPhase>,
    banner_schedule: Schedule<BannerPhase>,
    loading_exit: Schedule<LoadingPhase>,
    submitting: bool,
    submit_label: Option<String>,
}

impl<P: Page> PageController<P> {
    /// Create a controller over `page`. Nothing touches the page until
    /// [`start`](Self::start).
    pub fn new(page: P, config: InteractionConfig) -> Self {
        let config = config.validated();
        let submit_schedule = Schedule::new()
            .then(SubmitPhase::Sent, config.submit_sending)
            .then(SubmitPhase::Restore, config.submit_sent);
        let banner_schedule = Schedule::new()
            .then(BannerPhase::SlideIn, config.banner_enter_delay)
            .then(BannerPhase::SlideOut, config.banner_visible)
            .then(BannerPhase::Remove, config.banner_exit);
        let loading_exit = Schedule::new()
            .then(LoadingPhase::Fade, config.loading_hold)
            .then(LoadingPhase::Remove, config.loading_fade);
        Self {
            header: HeaderTracker::new(
                0.0,
                config.header_blur_threshold,
                config.header_hide_threshold,
            ),
            resize: Debouncer::new(config.resize_debounce),
            page,
            theme: Theme::default(),
            started: false,
            active: false,
            konami: KonamiMatcher::new(),
            scroll: FrameThrottle::new(),
            pointer: FrameThrottle::new(),
            trail: None,
            trail_markers: Vec::new(),
            timers: TimerQueue::new(),
            loading: None,
            typewriter: None,
            submit_schedule,
            banner_schedule,
            loading_exit,
            submitting: false,
            submit_label: None,
            config,
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Whether the deferred features are running.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn konami_progress(&self) -> usize {
        self.konami.progress()
    }

    /// Trail markers currently on the page.
    pub fn trail_len(&self) -> usize {
        self.trail_markers.len()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Whether a frame callback is owed: a throttled sample is queued or the
    /// trail is animating.
    pub fn wants_frame(&self) -> bool {
        self.scroll.is_pending() || self.pointer.is_pending() || self.trail.is_some()
    }

    /// Earliest time [`advance`](Self::advance) has work to do.
    pub fn next_deadline(&self) -> Option<Duration> {
        match (self.timers.next_deadline(), self.resize.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    // -----------------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------------

    /// Apply the stored theme, inject shared styles, show the loading screen
    /// and schedule activation. Calling it twice is a no-op.
    pub fn start(&mut self, now: Duration) {
        if self.started {
            return;
        }
        self.started = true;

        if self.page.inject_style(markup::KEYFRAMES_CSS).is_none() {
            trace!("keyframe stylesheet not injected");
        }
        self.theme = self.load_theme();
        self.apply_theme_attribute();
        self.show_loading_screen(now);
        self.start_typewriter(now);
        self.timers
            .schedule(now.saturating_add(self.config.activation_delay), Task::Activate);
        debug!(theme = %self.theme, "page controller started");
    }

    /// Run every timer due at `now` and any settled resize.
    pub fn advance(&mut self, now: Duration) -> AdvanceReport {
        let mut report = AdvanceReport::default();
        if let Some(width) = self.resize.fire(now) {
            self.apply_resize(width);
            report.resized = true;
        }
        while let Some(task) = self.timers.pop_due(now) {
            trace!(task = task.label(), "timer fired");
            if matches!(task, Task::Activate) {
                report.activated = !self.active;
            }
            self.run_task(task, now);
            report.tasks_run += 1;
        }
        report
    }

    fn activate(&mut self) {
        if self.active {
            return;
        }
        self.active = true;
        let viewport = self.page.viewport();
        self.header = HeaderTracker::new(
            viewport.scroll_y,
            self.config.header_blur_threshold,
            self.config.header_hide_threshold,
        );
        if self.config.is_desktop(viewport.width) {
            self.create_trail();
        }
        info!(width = viewport.width, "interactions active");
    }

    fn run_task(&mut self, task: Task<P::Element>, now: Duration) {
        match task {
            Task::Activate => self.activate(),
            Task::EndThemeTransition => {
                if let Some(body) = self.page.find(Role::Body) {
                    self.page.set_style(&body, "transition", "");
                }
            }
            Task::LoadingTick => self.loading_tick(now),
            Task::Loading(phase) => self.loading_phase(phase),
            Task::FillSkillBar { bar, width } => self.page.set_style(&bar, "width", &width),
            Task::CardFadeIn { card } => {
                self.page.set_style(&card, "opacity", "1");
                self.page.set_style(&card, "transform", "translateY(0)");
            }
            Task::CardCollapse { card } => {
                self.page.set_style(&card, "display", "none");
                self.page.add_class(&card, HIDDEN_CLASS);
            }
            Task::Submit(phase) => self.submit_phase(phase, now),
            Task::Banner { banner, phase } => self.banner_phase(&banner, phase),
            Task::EndEasterEgg { banner, style } => {
                for el in [banner, style].into_iter().flatten() {
                    self.page.remove(&el);
                }
                debug!("easter egg finished");
            }
            Task::TypeNext => self.type_next(now),
        }
    }

    // -----------------------------------------------------------------------
    // Theme
    // -----------------------------------------------------------------------

    fn load_theme(&self) -> Theme {
        match self.page.load_preference(THEME_STORAGE_KEY) {
            Ok(Some(value)) => Theme::parse(&value).unwrap_or_else(|| {
                debug!(%value, "ignoring unknown stored theme");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(err) => {
                debug!(error = %err, "theme storage unavailable, using default");
                Theme::default()
            }
        }
    }

    fn apply_theme_attribute(&self) {
        match self.page.find(Role::Root) {
            Some(root) => self
                .page
                .set_attribute(&root, THEME_ATTRIBUTE, self.theme.as_str()),
            None => trace!("no root element for theme attribute"),
        }
    }

    /// Flip the theme, persist it, and run the transition effect.
    pub fn toggle_theme(&mut self, now: Duration) -> Theme {
        self.theme = self.theme.toggled();
        self.apply_theme_attribute();
        if let Err(err) = self
            .page
            .store_preference(THEME_STORAGE_KEY, self.theme.as_str())
        {
            debug!(error = %err, "theme not persisted");
        }
        if let Some(body) = self.page.find(Role::Body) {
            self.page.set_style(&body, "transition", "all 0.3s ease");
            self.timers
                .cancel(|task| matches!(task, Task::EndThemeTransition));
            self.timers.schedule(
                now.saturating_add(self.config.theme_transition),
                Task::EndThemeTransition,
            );
        }
        info!(theme = %self.theme, "theme toggled");
        self.theme
    }

    // -----------------------------------------------------------------------
    // Navigation
    // -----------------------------------------------------------------------

    pub fn toggle_mobile_menu(&mut self) {
        let (Some(button), Some(nav)) = (
            self.page.find(Role::MobileMenuButton),
            self.page.find(Role::Nav),
        ) else {
            trace!("mobile menu elements missing");
            return;
        };
        self.page.toggle_class(&button, ACTIVE_CLASS);
        self.page.toggle_class(&nav, ACTIVE_CLASS);
    }

    pub fn close_mobile_menu(&mut self) {
        for role in [Role::MobileMenuButton, Role::Nav] {
            if let Some(el) = self.page.find(role) {
                self.page.remove_class(&el, ACTIVE_CLASS);
            }
        }
    }

    /// Smooth-scroll so section `id` sits below the header. Always closes the
    /// mobile menu.
    pub fn scroll_to_section(&mut self, id: &str) {
        match self.page.find_by_id(id) {
            Some(section) => {
                let span = self.page.offset(&section);
                self.page
                    .scroll_to(nav::scroll_target(span, self.config.header_height));
            }
            None => trace!(id, "scroll target missing"),
        }
        self.close_mobile_menu();
    }

    /// Navigation link click. Returns whether default navigation should be
    /// prevented.
    pub fn on_nav_link_click(&mut self, href: &str) -> bool {
        if let Some(id) = nav::fragment(href) {
            self.scroll_to_section(id);
        }
        true
    }

    /// Click on any in-page anchor. Closes the menu only when the target
    /// exists. Returns whether default navigation should be prevented.
    pub fn follow_anchor(&mut self, href: &str) -> bool {
        if !self.active {
            return false;
        }
        let Some(target) = nav::fragment(href).and_then(|id| self.page.find_by_id(id)) else {
            return true;
        };
        let span = self.page.offset(&target);
        self.page
            .scroll_to(nav::scroll_target(span, self.config.header_height));
        self.close_mobile_menu();
        true
    }

    // -----------------------------------------------------------------------
    // Scroll, pointer and resize
    // -----------------------------------------------------------------------

    /// Record a scroll position. Returns `true` when the host should request
    /// an animation frame.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        self.active && self.scroll.request(scroll_y)
    }

    /// Record the pointer position. Returns `true` when the host should
    /// request an animation frame.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) -> bool {
        if let Some(trail) = self.trail.as_mut() {
            trail.set_pointer(x, y);
        }
        self.active && self.pointer.request(Point::new(x, y))
    }

    /// Record a window resize; handled after the debounce window.
    pub fn on_resize(&mut self, width: f64, now: Duration) {
        self.resize.poke(width, now);
    }

    /// Whether the context menu may open (suppressed on mobile widths).
    pub fn allows_context_menu(&self) -> bool {
        self.config.is_desktop(self.page.viewport().width)
    }

    fn apply_resize(&mut self, width: f64) {
        let desktop = self.config.is_desktop(width);
        if desktop {
            self.close_mobile_menu();
        }
        self.remove_trail();
        if desktop && self.active {
            self.create_trail();
        }
        debug!(width, desktop, markers = self.trail_markers.len(), "resize applied");
    }

    /// Run the work queued for this animation frame. Returns whether another
    /// frame is wanted.
    pub fn on_frame(&mut self) -> bool {
        if let Some(scroll_y) = self.scroll.take() {
            self.update_header(scroll_y);
            self.update_active_link(scroll_y);
        }
        if let Some(pointer) = self.pointer.take() {
            self.update_parallax(pointer);
        }
        self.step_trail();
        self.wants_frame()
    }

    fn update_header(&mut self, scroll_y: f64) {
        let frame = self.header.observe(scroll_y);
        let Some(header) = self.page.find(Role::Header) else {
            return;
        };
        self.page
            .set_style(&header, "background", self.theme.header_background());
        self.page
            .set_style(&header, "backdrop-filter", &frame.backdrop_filter());
        self.page.set_style(&header, "transform", frame.transform());
    }

    fn update_active_link(&mut self, scroll_y: f64) {
        let sections: Vec<(String, _)> = self
            .page
            .find_all(Role::Section)
            .iter()
            .filter_map(|section| {
                let id = self.page.attribute(section, "id")?;
                Some((id, self.page.offset(section)))
            })
            .collect();
        let Some(active) = nav::active_section(
            scroll_y,
            self.config.nav_lookahead,
            sections.iter().map(|(id, span)| (id.as_str(), *span)),
        ) else {
            return;
        };
        for link in self.page.find_all(Role::NavLink) {
            self.page.remove_class(&link, ACTIVE_CLASS);
            let href = self.page.attribute(&link, "href").unwrap_or_default();
            if nav::links_to(&href, active) {
                self.page.add_class(&link, ACTIVE_CLASS);
            }
        }
    }

    fn update_parallax(&mut self, pointer: Point) {
        let viewport = self.page.viewport();
        if !self.config.is_desktop(viewport.width) {
            return;
        }
        let parallax = Parallax {
            strength: self.config.parallax_strength,
            speed_step: self.config.parallax_speed_step,
            grid_strength: self.config.grid_strength,
        };
        let centred = Parallax::centred(pointer.x, pointer.y, viewport.width, viewport.height);
        for (index, shape) in self.page.find_all(Role::Shape).iter().enumerate() {
            let offset = parallax.layer_offset(index, centred);
            self.page.set_style(shape, "transform", &offset.translate_css());
        }
        if let Some(grid) = self.page.find(Role::PixelGrid) {
            let offset = parallax.grid_offset(centred);
            self.page.set_style(&grid, "transform", &offset.translate_css());
        }
    }

    // -----------------------------------------------------------------------
    // Cursor trail
    // -----------------------------------------------------------------------

    fn create_trail(&mut self) {
        let trail = CursorTrail::new(self.config.trail_length, self.config.trail_ease);
        for index in 0..trail.len() {
            let Some(marker) = self
                .page
                .append_to_body("div", markup::TRAIL_MARKER_CLASS)
            else {
                trace!(index, "trail marker not created");
                continue;
            };
            self.page
                .set_attribute(&marker, "style", &trail.marker_style(index));
            self.trail_markers.push(marker);
        }
        self.trail = Some(trail);
    }

    fn remove_trail(&mut self) {
        self.trail = None;
        self.trail_markers.clear();
        for marker in self.page.find_all(Role::TrailMarker) {
            self.page.remove(&marker);
        }
    }

    fn step_trail(&mut self) {
        let Some(trail) = self.trail.as_mut() else {
            return;
        };
        let half = MARKER_SIZE_PX / 2.0;
        for (marker, point) in self.trail_markers.iter().zip(trail.step()) {
            self.page
                .set_style(marker, "left", &format!("{}px", point.x - half));
            self.page
                .set_style(marker, "top", &format!("{}px", point.y - half));
        }
    }

    // -----------------------------------------------------------------------
    // Reveal and lazy animation
    // -----------------------------------------------------------------------

    /// A reveal target became visible. Returns `true` once the element is
    /// revealed and no longer needs observing.
    pub fn on_reveal_visible(&mut self, el: &P::Element, now: Duration) -> bool {
        if !self.active {
            return false;
        }
        if self.page.has_class(el, REVEAL_CLASS) {
            return true;
        }
        self.page.add_class(el, REVEAL_CLASS);

        if self.page.matches(el, Role::SkillItem) {
            let bar = self.page.find_within(el, Role::SkillProgress);
            let width = bar
                .as_ref()
                .and_then(|bar| self.page.attribute(bar, "data-width"));
            if let (Some(bar), Some(width)) = (bar, width) {
                self.timers.schedule(
                    now.saturating_add(self.config.skill_fill_delay),
                    Task::FillSkillBar { bar, width },
                );
            }
        }
        if self.page.matches(el, Role::ProjectCard)
            && let Some(index) = self
                .page
                .find_all(Role::ProjectCard)
                .iter()
                .position(|card| card == el)
        {
            let delay_ms = self.config.reveal_stagger.as_millis() * index as u128;
            self.page
                .set_style(el, "animation-delay", &format!("{delay_ms}ms"));
        }
        true
    }

    /// A lazily animated element became visible. Returns `true` once its
    /// animation is running and it no longer needs observing.
    pub fn on_lazy_visible(&mut self, el: &P::Element) -> bool {
        if !self.active {
            return false;
        }
        for (class, animation) in markup::LAZY_ANIMATIONS {
            if self.page.has_class(el, class) {
                self.page.set_style(el, "animation", animation);
            }
        }
        true
    }

    // -----------------------------------------------------------------------
    // Project filter and card tilt
    // -----------------------------------------------------------------------

    /// Activate filter `button` and fade cards in or out by category.
    pub fn select_filter(&mut self, button: &P::Element, now: Duration) {
        if !self.active {
            return;
        }
        let Some(filter) = self.page.attribute(button, "data-filter") else {
            trace!("filter button without data-filter");
            return;
        };
        for other in self.page.find_all(Role::FilterButton) {
            self.page.remove_class(&other, ACTIVE_CLASS);
        }
        self.page.add_class(button, ACTIVE_CLASS);

        let cards = self.page.find_all(Role::ProjectCard);
        let categories: Vec<Option<String>> = cards
            .iter()
            .map(|card| self.page.attribute(card, "data-category"))
            .collect();
        let plans = filter::plan(
            &filter,
            categories.iter().map(Option::as_deref),
            self.config.filter_stagger,
        );
        for (card, plan) in cards.into_iter().zip(plans) {
            self.timers.cancel(|task| task.targets_card(&card));
            match plan {
                CardPlan::Show { delay } => {
                    self.page.set_style(&card, "display", "block");
                    self.page.remove_class(&card, HIDDEN_CLASS);
                    self.timers
                        .schedule(now.saturating_add(delay), Task::CardFadeIn { card });
                }
                CardPlan::Hide => {
                    self.page.set_style(&card, "opacity", "0");
                    self.page.set_style(&card, "transform", "translateY(30px)");
                    self.timers.schedule(
                        now.saturating_add(self.config.filter_fade),
                        Task::CardCollapse { card },
                    );
                }
            }
        }
        debug!(%filter, "project filter applied");
    }

    pub fn on_card_pointer_move(&mut self, card: &P::Element, x: f64, y: f64) {
        if !self.active {
            return;
        }
        let rect = self.page.bounding_rect(card);
        let tilt = Tilt::from_pointer(rect, x, y, self.config.tilt_divisor);
        self.page.set_style(
            card,
            "transform",
            &tilt.transform_css(self.config.tilt_perspective, self.config.tilt_lift),
        );
    }

    pub fn on_card_pointer_leave(&mut self, card: &P::Element) {
        if !self.active {
            return;
        }
        self.page.set_style(
            card,
            "transform",
            &Tilt::resting_css(self.config.tilt_perspective),
        );
    }

    // -----------------------------------------------------------------------
    // Konami code
    // -----------------------------------------------------------------------

    /// Feed a keydown `code`. Returns `true` when it completed the sequence.
    pub fn on_key_down(&mut self, code: &str, now: Duration) -> bool {
        if !self.active {
            return false;
        }
        match self.konami.feed(code) {
            KonamiStep::Complete => {
                self.trigger_easter_egg(now);
                true
            }
            KonamiStep::Advanced(_) | KonamiStep::Reset => false,
        }
    }

    fn trigger_easter_egg(&mut self, now: Duration) {
        let style = self.page.inject_style(markup::RAINBOW_CSS);
        let banner = self.page.append_to_body("div", markup::EASTER_EGG_CLASS);
        if let Some(banner) = banner.as_ref() {
            self.page.set_text(banner, markup::EASTER_EGG_TEXT);
            self.page
                .set_attribute(banner, "style", markup::EASTER_EGG_STYLE);
        }
        self.timers.schedule(
            now.saturating_add(self.config.easter_egg_duration),
            Task::EndEasterEgg { banner, style },
        );
        info!("konami code activated");
    }

    // -----------------------------------------------------------------------
    // Loading screen and typewriter
    // -----------------------------------------------------------------------

    fn show_loading_screen(&mut self, now: Duration) {
        let Some(screen) = self
            .page
            .append_to_body("div", markup::LOADING_SCREEN_CLASS)
        else {
            trace!("loading screen not created");
            return;
        };
        let page = &self.page;
        page.set_attribute(&screen, "style", markup::LOADING_SCREEN_STYLE);
        let bar = page
            .append_child(&screen, "div", "loading-content")
            .and_then(|content| {
                page.set_attribute(&content, "style", markup::LOADING_CONTENT_STYLE);
                page.append_child(&content, "div", "loading-logo")
            })
            .and_then(|logo| {
                if let Some(title) = page.append_child(&logo, "h1", "loading-title") {
                    page.set_text(&title, markup::LOADING_TITLE_TEXT);
                    page.set_attribute(&title, "style", markup::LOADING_TITLE_STYLE);
                }
                page.append_child(&logo, "div", "loading-bar")
            })
            .and_then(|track| {
                page.set_attribute(&track, "style", markup::LOADING_BAR_STYLE);
                page.append_child(&track, "div", "loading-progress")
            });
        if let Some(bar) = bar.as_ref() {
            page.set_attribute(bar, "style", markup::LOADING_PROGRESS_STYLE);
        }
        self.loading = Some(LoadingScreen {
            screen,
            bar,
            progress: LoadingProgress::new(self.config.loading_seed, self.config.loading_max_step),
        });
        self.timers.schedule(
            now.saturating_add(self.config.loading_tick),
            Task::LoadingTick,
        );
    }

    fn loading_tick(&mut self, now: Duration) {
        let Some(loading) = self.loading.as_mut() else {
            return;
        };
        loading.progress.tick();
        if let Some(bar) = loading.bar.as_ref() {
            self.page
                .set_style(bar, "width", &loading.progress.width_css());
        }
        if loading.progress.is_complete() {
            for (phase, at) in self.loading_exit.offsets_from(now) {
                self.timers.schedule(at, Task::Loading(phase));
            }
        } else {
            self.timers.schedule(
                now.saturating_add(self.config.loading_tick),
                Task::LoadingTick,
            );
        }
    }

    fn loading_phase(&mut self, phase: LoadingPhase) {
        match phase {
            LoadingPhase::Fade => {
                if let Some(loading) = self.loading.as_ref() {
                    self.page.set_style(&loading.screen, "opacity", "0");
                }
            }
            LoadingPhase::Remove => {
                if let Some(loading) = self.loading.take() {
                    self.page.remove(&loading.screen);
                    debug!("loading screen removed");
                }
            }
        }
    }

    /// Whether the loading overlay is still on the page.
    pub fn is_loading(&self) -> bool {
        self.loading.is_some()
    }

    fn start_typewriter(&mut self, now: Duration) {
        let Some(config) = self.config.typewriter.as_ref() else {
            return;
        };
        let Some(title) = self.page.find(Role::HeroTitle) else {
            trace!("typewriter enabled but hero title missing");
            return;
        };
        self.page.set_html(&title, "");
        self.typewriter = Some(Typewriter::new(&config.text, &config.highlight));
        self.timers
            .schedule(now.saturating_add(config.start_delay), Task::TypeNext);
    }

    fn type_next(&mut self, now: Duration) {
        let Some(markup) = self.typewriter.as_mut().and_then(Typewriter::advance) else {
            self.typewriter = None;
            return;
        };
        if let Some(title) = self.page.find(Role::HeroTitle) {
            self.page.set_html(&title, &markup);
        }
        let interval = self
            .config
            .typewriter
            .as_ref()
            .map_or(Duration::ZERO, |tw| tw.char_interval);
        self.timers
            .schedule(now.saturating_add(interval), Task::TypeNext);
    }

    // -----------------------------------------------------------------------
    // Banners
    // -----------------------------------------------------------------------

    fn show_success_banner(&mut self, now: Duration) {
        let Some(banner) = self
            .page
            .append_to_body("div", markup::SUCCESS_BANNER_CLASS)
        else {
            trace!("success banner not created");
            return;
        };
        self.page.set_text(&banner, markup::SUCCESS_BANNER_TEXT);
        self.page
            .set_attribute(&banner, "style", markup::SUCCESS_BANNER_STYLE);
        for (phase, at) in self.banner_schedule.offsets_from(now) {
            self.timers.schedule(
                at,
                Task::Banner {
                    banner: banner.clone(),
                    phase,
                },
            );
        }
    }

    fn banner_phase(&mut self, banner: &P::Element, phase: BannerPhase) {
        match phase {
            BannerPhase::SlideIn => self.page.set_style(banner, "transform", "translateX(0)"),
            BannerPhase::SlideOut => {
                self.page.set_style(banner, "transform", "translateX(100%)");
            }
            BannerPhase::Remove => self.page.remove(banner),
        }
    }
}
