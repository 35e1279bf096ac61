#![forbid(unsafe_code)]

//! Browser host: wires DOM events into the controller and pumps its timers
//! and animation frames.
//!
//! # Pumping
//!
//! After every handler the host re-arms two things from the controller's
//! answers: one `requestAnimationFrame` while
//! [`wants_frame`](PageController::wants_frame) holds, and one `setTimeout`
//! for [`next_deadline`](PageController::next_deadline). Neither is ever
//! queued twice.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use gloo::events::{EventListener, EventListenerOptions};
use gloo::render::{AnimationFrame, request_animation_frame};
use gloo::timers::callback::Timeout;
use retrofolio_core::page::{Page, Role};
use retrofolio_core::{Field, InteractionConfig, PageController};
use tracing::{debug, info, trace};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, MouseEvent,
};

use crate::dom::DomPage;
use crate::settings::{self, Clock};

/// Reveal fires once a tenth of the element is visible, 50 px before the
/// bottom edge.
const REVEAL_THRESHOLD: f64 = 0.1;
const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Watch {
    Reveal,
    Lazy,
}

struct Observer {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

pub(crate) struct App {
    controller: RefCell<PageController<DomPage>>,
    clock: Clock,
    frame: RefCell<Option<AnimationFrame>>,
    timer: RefCell<Option<(Duration, Timeout)>>,
    listeners: RefCell<Vec<EventListener>>,
    observers: RefCell<Vec<Observer>>,
}

impl App {
    pub(crate) fn new(page: DomPage, config: InteractionConfig) -> Rc<Self> {
        Rc::new(Self {
            controller: RefCell::new(PageController::new(page, config)),
            clock: Clock::start(),
            frame: RefCell::new(None),
            timer: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
            observers: RefCell::new(Vec::new()),
        })
    }

    /// Start the controller and attach every listener.
    pub(crate) fn boot(self: &Rc<Self>) {
        let now = self.clock.now();
        self.with_controller(|c| c.start(now));
        self.install_listeners();
        self.rearm(now);
        info!(listeners = self.listeners.borrow().len(), "retrofolio booted");
    }

    /// Run `f` against the controller unless a handler is already inside it
    /// (a synchronous DOM event raised by our own mutation).
    fn with_controller<R>(&self, f: impl FnOnce(&mut PageController<DomPage>) -> R) -> Option<R> {
        match self.controller.try_borrow_mut() {
            Ok(mut controller) => Some(f(&mut controller)),
            Err(_) => {
                trace!("re-entrant event dropped");
                None
            }
        }
    }

    fn page_elements(&self, role: Role) -> Vec<Element> {
        self.controller.borrow().page().find_all(role)
    }

    // -----------------------------------------------------------------------
    // Pump
    // -----------------------------------------------------------------------

    fn pump(self: &Rc<Self>) {
        let now = self.clock.now();
        let report = self.with_controller(|c| c.advance(now)).unwrap_or_default();
        if report.activated {
            self.install_observers();
        }
        self.rearm(now);
    }

    fn on_frame(self: &Rc<Self>) {
        let _spent = self.frame.borrow_mut().take();
        self.with_controller(|c| c.on_frame());
        self.rearm(self.clock.now());
    }

    fn rearm(self: &Rc<Self>, now: Duration) {
        let Some((wants_frame, deadline)) =
            self.with_controller(|c| (c.wants_frame(), c.next_deadline()))
        else {
            return;
        };

        if wants_frame && self.frame.borrow().is_none() {
            let app = Rc::downgrade(self);
            let frame = request_animation_frame(move |_| {
                if let Some(app) = app.upgrade() {
                    app.on_frame();
                }
            });
            *self.frame.borrow_mut() = Some(frame);
        }

        let armed = self.timer.borrow().as_ref().map(|(at, _)| *at);
        match deadline {
            Some(at) if armed != Some(at) => {
                let app = Rc::downgrade(self);
                let timeout = Timeout::new(settings::timeout_millis(at, now), move || {
                    if let Some(app) = app.upgrade() {
                        let _spent = app.timer.borrow_mut().take();
                        app.pump();
                    }
                });
                *self.timer.borrow_mut() = Some((at, timeout));
            }
            Some(_) => {}
            None => {
                self.timer.borrow_mut().take();
            }
        }
    }

    // -----------------------------------------------------------------------
    // Listeners
    // -----------------------------------------------------------------------

    fn listen(
        self: &Rc<Self>,
        target: &EventTarget,
        event: &'static str,
        prevent_default: bool,
        handler: impl Fn(&Rc<Self>, &Event, Duration) + 'static,
    ) {
        let app = Rc::downgrade(self);
        let options = if prevent_default {
            EventListenerOptions::enable_prevent_default()
        } else {
            EventListenerOptions::default()
        };
        let listener = EventListener::new_with_options(target, event, options, move |event| {
            let Some(app) = app.upgrade() else {
                return;
            };
            let now = app.clock.now();
            handler(&app, event, now);
            app.rearm(now);
        });
        self.listeners.borrow_mut().push(listener);
    }

    fn install_listeners(self: &Rc<Self>) {
        let window: EventTarget = gloo::utils::window().into();
        let document: EventTarget = gloo::utils::document().into();

        if let Some(toggle) = self.page_elements(Role::ThemeToggle).first() {
            self.listen(toggle, "click", false, |app, _, now| {
                app.with_controller(|c| c.toggle_theme(now));
            });
        }
        if let Some(button) = self.page_elements(Role::MobileMenuButton).first() {
            self.listen(button, "click", false, |app, _, _| {
                app.with_controller(PageController::toggle_mobile_menu);
            });
        }
        for link in self.page_elements(Role::NavLink) {
            let href = link.get_attribute("href").unwrap_or_default();
            self.listen(&link, "click", true, move |app, event, _| {
                if app.with_controller(|c| c.on_nav_link_click(&href)) == Some(true) {
                    event.prevent_default();
                }
            });
        }
        for anchor in self.page_elements(Role::Anchor) {
            let href = anchor.get_attribute("href").unwrap_or_default();
            self.listen(&anchor, "click", true, move |app, event, _| {
                if app.with_controller(|c| c.follow_anchor(&href)) == Some(true) {
                    event.prevent_default();
                }
            });
        }

        self.listen(&window, "scroll", false, |app, _, _| {
            let scroll_y = gloo::utils::window().scroll_y().unwrap_or(0.0);
            app.with_controller(|c| c.on_scroll(scroll_y));
        });
        self.listen(&document, "mousemove", false, |app, event, _| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                let (x, y) = (f64::from(event.client_x()), f64::from(event.client_y()));
                app.with_controller(|c| c.on_pointer_move(x, y));
            }
        });
        self.listen(&window, "resize", false, |app, _, now| {
            app.with_controller(|c| {
                let width = c.page().viewport().width;
                c.on_resize(width, now);
            });
        });
        self.listen(&document, "keydown", false, |app, event, now| {
            if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                let code = event.code();
                app.with_controller(|c| c.on_key_down(&code, now));
            }
        });
        self.listen(&document, "contextmenu", true, |app, event, _| {
            if app.with_controller(|c| c.allows_context_menu()) == Some(false) {
                event.prevent_default();
            }
        });

        for button in self.page_elements(Role::FilterButton) {
            let target = button.clone();
            self.listen(&button, "click", false, move |app, _, now| {
                app.with_controller(|c| c.select_filter(&target, now));
            });
        }
        for card in self.page_elements(Role::ProjectCard) {
            let target = card.clone();
            self.listen(&card, "mousemove", false, move |app, event, _| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    let (x, y) = (f64::from(event.client_x()), f64::from(event.client_y()));
                    app.with_controller(|c| c.on_card_pointer_move(&target, x, y));
                }
            });
            let target = card.clone();
            self.listen(&card, "mouseleave", false, move |app, _, _| {
                app.with_controller(|c| c.on_card_pointer_leave(&target));
            });
        }

        if let Some(form) = self.page_elements(Role::ContactForm).first() {
            self.listen(form, "submit", true, |app, event, now| {
                event.prevent_default();
                app.with_controller(|c| c.submit_form(now));
            });
        }
        for field in Field::ALL {
            let Some(input) = self.page_elements(Role::FieldInput(field)).into_iter().next() else {
                debug!(field = field.name(), "form field missing");
                continue;
            };
            self.listen(&input, "input", false, move |app, _, _| {
                app.with_controller(|c| c.on_field_input(field));
            });
            self.listen(&input, "focus", false, move |app, _, _| {
                app.with_controller(|c| c.on_field_focus(field));
            });
            self.listen(&input, "blur", false, move |app, _, _| {
                app.with_controller(|c| c.on_field_blur(field));
            });
        }
    }

    // -----------------------------------------------------------------------
    // Intersection observers
    // -----------------------------------------------------------------------

    fn install_observers(self: &Rc<Self>) {
        if !self.observers.borrow().is_empty() {
            return;
        }
        let reveal = IntersectionObserverInit::new();
        reveal.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        reveal.set_root_margin(REVEAL_ROOT_MARGIN);
        let watches = [
            (Watch::Reveal, Role::RevealTarget, reveal),
            (Watch::Lazy, Role::LazyAnimated, IntersectionObserverInit::new()),
        ];
        for (watch, role, init) in watches {
            match self.observe(watch, role, &init) {
                Ok(observer) => self.observers.borrow_mut().push(observer),
                Err(err) => debug!(?watch, error = ?err, "intersection observer unavailable"),
            }
        }
    }

    fn observe(
        self: &Rc<Self>,
        watch: Watch,
        role: Role,
        init: &IntersectionObserverInit,
    ) -> Result<Observer, JsValue> {
        let app: Weak<Self> = Rc::downgrade(self);
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let Some(app) = app.upgrade() else {
                    return;
                };
                app.on_intersections(watch, &entries, &observer);
            },
        );
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), init)?;
        let targets = self.page_elements(role);
        for target in &targets {
            observer.observe(target);
        }
        debug!(?watch, targets = targets.len(), "observing");
        Ok(Observer {
            observer,
            _callback: callback,
        })
    }

    fn on_intersections(
        self: &Rc<Self>,
        watch: Watch,
        entries: &js_sys::Array,
        observer: &IntersectionObserver,
    ) {
        let now = self.clock.now();
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if !entry.is_intersecting() {
                continue;
            }
            let target = entry.target();
            let done = self.with_controller(|c| match watch {
                Watch::Reveal => c.on_reveal_visible(&target, now),
                Watch::Lazy => c.on_lazy_visible(&target),
            });
            if done == Some(true) {
                observer.unobserve(&target);
            }
        }
        self.rearm(now);
    }
}

impl Drop for App {
    fn drop(&mut self) {
        for observer in self.observers.get_mut().drain(..) {
            observer.observer.disconnect();
        }
    }
}
