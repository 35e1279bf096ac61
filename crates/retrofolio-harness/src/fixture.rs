#![forbid(unsafe_code)]

//! Reference portfolio markup.
//!
//! | Section | Top | Height |
//! |---------|-----|--------|
//! | `#home` | 0 | 800 |
//! | `#about` | 800 | 900 |
//! | `#projects` | 1700 | 1000 |
//! | `#contact` | 2700 | 800 |
//!
//! Project cards, in order: `web`, `mobile`, `web`, `design`. Each card is
//! 300x200 with its top-left corner at `(100 + 320·i, 400)`.

use retrofolio_core::page::Rect;

use crate::fake_page::{FakePage, NodeSpec};

/// Section ids with their offsets, in document order.
pub const SECTIONS: [(&str, f64, f64); 4] = [
    ("home", 0.0, 800.0),
    ("about", 800.0, 900.0),
    ("projects", 1700.0, 1000.0),
    ("contact", 2700.0, 800.0),
];

/// Category of each project card, in document order.
pub const CARD_CATEGORIES: [&str; 4] = ["web", "mobile", "web", "design"];

/// Label the submit button starts with.
pub const SUBMIT_LABEL_HTML: &str = "<span>Send Message</span><div class=\"btn-glow\"></div>";

/// Build the reference page.
#[must_use]
pub fn portfolio_fixture() -> FakePage {
    let page = FakePage::new();
    let body = page.body();

    let header = page.insert(body, NodeSpec::new("header").class("header"));
    page.insert(header, NodeSpec::new("button").id("themeToggle"));
    page.insert(
        header,
        NodeSpec::new("button").id("mobileMenuBtn").class("mobile-menu-btn"),
    );
    let nav = page.insert(header, NodeSpec::new("nav").class("nav"));
    for (id, _, _) in SECTIONS {
        page.insert(
            nav,
            NodeSpec::new("a")
                .class("nav-link")
                .attr("href", &format!("#{id}")),
        );
    }

    let [home, about, projects, contact] =
        SECTIONS.map(|(id, top, height)| {
            page.insert(body, NodeSpec::new("section").id(id).offset(top, height))
        });

    // Hero
    page.insert(home, NodeSpec::new("h1").class("hero-title").html("Hi, I'm Ada"));
    for _ in 0..3 {
        page.insert(home, NodeSpec::new("div").class("shape"));
    }
    page.insert(home, NodeSpec::new("div").class("pixel-grid"));
    page.insert(home, NodeSpec::new("div").class("computer-mascot"));
    page.insert(home, NodeSpec::new("span").class("sparkle"));
    page.insert(
        home,
        NodeSpec::new("a").class("btn").attr("href", "#projects"),
    );

    // About
    page.insert(about, NodeSpec::new("h2").class("section-title"));
    page.insert(about, NodeSpec::new("div").class("about-text"));
    for width in ["90%", "75%"] {
        let item = page.insert(about, NodeSpec::new("div").class("skill-item"));
        let bar = page.insert(item, NodeSpec::new("div").class("skill-bar"));
        page.insert(
            bar,
            NodeSpec::new("div")
                .class("skill-progress")
                .attr("data-width", width),
        );
    }

    // Projects
    page.insert(projects, NodeSpec::new("h2").class("section-title"));
    for filter in ["all", "web", "mobile", "design"] {
        let class = if filter == "all" {
            "filter-btn active"
        } else {
            "filter-btn"
        };
        page.insert(
            projects,
            NodeSpec::new("button").class(class).attr("data-filter", filter),
        );
    }
    for (index, category) in CARD_CATEGORIES.iter().enumerate() {
        let left = 100.0 + 320.0 * index as f64;
        page.insert(
            projects,
            NodeSpec::new("div")
                .class("project-card")
                .attr("data-category", category)
                .rect(Rect::new(left, 400.0, 300.0, 200.0)),
        );
    }

    // Contact
    page.insert(contact, NodeSpec::new("h2").class("section-title"));
    let form = page.insert(
        contact,
        NodeSpec::new("form").id("contactForm").class("contact-form"),
    );
    for (id, tag) in [("name", "input"), ("email", "input"), ("message", "textarea")] {
        page.insert(form, NodeSpec::new(tag).id(id).attr("name", id));
        page.insert(
            form,
            NodeSpec::new("span")
                .id(&format!("{id}Error"))
                .class("error-message"),
        );
    }
    page.insert(
        form,
        NodeSpec::new("button")
            .class("submit-btn")
            .html(SUBMIT_LABEL_HTML),
    );
    page.insert(contact, NodeSpec::new("div").class("social-links"));
    page.insert(
        contact,
        NodeSpec::new("a").class("back-to-top").attr("href", "#nowhere"),
    );

    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use retrofolio_core::page::{Page, Role};

    #[test]
    fn fixture_exposes_every_role() {
        let page = portfolio_fixture();
        assert_eq!(page.find_all(Role::Section).len(), 4);
        assert_eq!(page.find_all(Role::NavLink).len(), 4);
        assert_eq!(page.find_all(Role::Shape).len(), 3);
        assert_eq!(page.find_all(Role::ProjectCard).len(), 4);
        assert_eq!(page.find_all(Role::FilterButton).len(), 4);
        assert_eq!(page.find_all(Role::SkillItem).len(), 2);
        assert_eq!(page.find_all(Role::LazyAnimated).len(), 2);
        assert!(page.find(Role::SubmitButton).is_some());
        assert!(page.find(Role::PixelGrid).is_some());
        assert!(page.find(Role::TrailMarker).is_none());
    }
}
