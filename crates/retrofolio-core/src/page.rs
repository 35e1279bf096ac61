#![forbid(unsafe_code)]

//! The page markup as an injected capability.
//!
//! The controller never reaches for globals. Everything it reads or mutates
//! goes through [`Page`], addressed by [`Role`]. The browser host implements
//! it over `web-sys`; tests implement it over an in-memory tree.
//!
//! All mutators take `&self`: DOM handles are shared references into a tree
//! the host owns, and the controller runs on a single UI thread.

use crate::error::PageError;
use crate::validation::Field;

/// Elements the controller knows how to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// `<html>`, carrier of `data-theme`.
    Root,
    Body,
    Header,
    ThemeToggle,
    MobileMenuButton,
    /// Navigation container toggled alongside the menu button.
    Nav,
    NavLink,
    /// In-page anchors (`a[href^="#"]`).
    Anchor,
    /// Sections with an id, used for active-link highlighting.
    Section,
    /// Decorative parallax shapes, in document order.
    Shape,
    PixelGrid,
    FilterButton,
    ProjectCard,
    SkillItem,
    /// Progress bar nested inside a skill item.
    SkillProgress,
    ContactForm,
    SubmitButton,
    FieldInput(Field),
    FieldError(Field),
    HeroTitle,
    TrailMarker,
    /// Progress bar nested inside the loading screen.
    LoadingProgress,
    /// Elements that receive the one-shot `animate` class.
    RevealTarget,
    /// Elements with an expensive looping animation started on first sight.
    LazyAnimated,
}

impl Role {
    /// CSS selector matching this role in the portfolio markup.
    #[must_use]
    pub const fn selector(self) -> &'static str {
        match self {
            Self::Root => ":root",
            Self::Body => "body",
            Self::Header => ".header",
            Self::ThemeToggle => "#themeToggle",
            Self::MobileMenuButton => "#mobileMenuBtn",
            Self::Nav => ".nav",
            Self::NavLink => ".nav-link",
            Self::Anchor => "a[href^=\"#\"]",
            Self::Section => "section[id]",
            Self::Shape => ".shape",
            Self::PixelGrid => ".pixel-grid",
            Self::FilterButton => ".filter-btn",
            Self::ProjectCard => ".project-card",
            Self::SkillItem => ".skill-item",
            Self::SkillProgress => ".skill-progress",
            Self::ContactForm => "#contactForm",
            Self::SubmitButton => ".submit-btn",
            Self::FieldInput(Field::Name) => "#name",
            Self::FieldInput(Field::Email) => "#email",
            Self::FieldInput(Field::Message) => "#message",
            Self::FieldError(Field::Name) => "#nameError",
            Self::FieldError(Field::Email) => "#emailError",
            Self::FieldError(Field::Message) => "#messageError",
            Self::HeroTitle => ".hero-title",
            Self::TrailMarker => ".cursor-trail",
            Self::LoadingProgress => ".loading-progress",
            Self::RevealTarget => {
                ".section-title, .about-avatar .avatar-frame, .about-text, .skill-item, \
                 .project-card, .contact-form, .social-links"
            }
            Self::LazyAnimated => ".computer-mascot, .sparkle",
        }
    }
}

/// Element box relative to the viewport (`getBoundingClientRect`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// Vertical extent in document coordinates (`offsetTop`, `offsetHeight`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Span {
    pub top: f64,
    pub height: f64,
}

impl Span {
    #[must_use]
    pub const fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Half-open containment: `top <= y < top + height`.
    #[must_use]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Window metrics sampled by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub scroll_y: f64,
}

/// DOM capability consumed by [`PageController`](crate::controller::PageController).
///
/// Missing elements are reported as `None` / empty vectors, never as errors;
/// the controller skips whatever it cannot find.
pub trait Page {
    /// Host handle to one element.
    type Element: Clone + PartialEq + core::fmt::Debug;

    /// Every element matching `role`, in document order.
    fn find_all(&self, role: Role) -> Vec<Self::Element>;

    /// First element matching `role`.
    fn find(&self, role: Role) -> Option<Self::Element> {
        self.find_all(role).into_iter().next()
    }

    /// Element by its `id` attribute.
    fn find_by_id(&self, id: &str) -> Option<Self::Element>;

    /// First descendant of `parent` matching `role`.
    fn find_within(&self, parent: &Self::Element, role: Role) -> Option<Self::Element>;

    /// Whether `el` currently matches `role`.
    fn matches(&self, el: &Self::Element, role: Role) -> bool;

    fn attribute(&self, el: &Self::Element, name: &str) -> Option<String>;
    fn set_attribute(&self, el: &Self::Element, name: &str, value: &str);

    fn has_class(&self, el: &Self::Element, class: &str) -> bool;
    fn add_class(&self, el: &Self::Element, class: &str);
    fn remove_class(&self, el: &Self::Element, class: &str);

    /// Flip `class`; returns whether it is now present.
    fn toggle_class(&self, el: &Self::Element, class: &str) -> bool {
        if self.has_class(el, class) {
            self.remove_class(el, class);
            false
        } else {
            self.add_class(el, class);
            true
        }
    }

    /// Set an inline style property; an empty value clears it.
    fn set_style(&self, el: &Self::Element, property: &str, value: &str);

    fn set_text(&self, el: &Self::Element, text: &str);
    fn html(&self, el: &Self::Element) -> String;
    fn set_html(&self, el: &Self::Element, html: &str);

    /// Current value of a form control; empty for anything else.
    fn value(&self, el: &Self::Element) -> String;
    fn set_disabled(&self, el: &Self::Element, disabled: bool);
    /// Reset a form to its initial values.
    fn reset_form(&self, form: &Self::Element);

    fn offset(&self, el: &Self::Element) -> Span;
    fn bounding_rect(&self, el: &Self::Element) -> Rect;

    /// Create an element with `class` and append it to the body.
    fn append_to_body(&self, tag: &str, class: &str) -> Option<Self::Element>;
    /// Create an element with `class` as the last child of `parent`.
    fn append_child(&self, parent: &Self::Element, tag: &str, class: &str)
    -> Option<Self::Element>;
    /// Append a `<style>` sheet to the document head.
    fn inject_style(&self, css: &str) -> Option<Self::Element>;
    /// Detach `el` from the document.
    fn remove(&self, el: &Self::Element);

    /// Request a smooth window scroll to `top`.
    fn scroll_to(&self, top: f64);
    fn viewport(&self) -> Viewport;

    fn load_preference(&self, key: &str) -> Result<Option<String>, PageError>;
    fn store_preference(&self, key: &str, value: &str) -> Result<(), PageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_contains_is_half_open() {
        let span = Span::new(100.0, 50.0);
        assert!(span.contains(100.0));
        assert!(span.contains(149.9));
        assert!(!span.contains(150.0));
        assert!(!span.contains(99.9));
    }

    #[test]
    fn field_roles_select_by_id() {
        assert_eq!(Role::FieldInput(Field::Email).selector(), "#email");
        assert_eq!(Role::FieldError(Field::Message).selector(), "#messageError");
    }
}
