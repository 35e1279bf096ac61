#![forbid(unsafe_code)]

//! Section navigation: scroll targets and active-link selection.

use crate::page::Span;

/// Class marking the highlighted navigation link.
pub const ACTIVE_CLASS: &str = "active";

/// Scroll offset that puts `section` just below a fixed header.
#[must_use]
pub fn scroll_target(section: Span, header_height: f64) -> f64 {
    section.top - header_height
}

/// Id of the section containing `scroll_y + lookahead`.
///
/// Sections are expected not to overlap; if they do, the last one in
/// document order wins.
#[must_use]
pub fn active_section<'a, I>(scroll_y: f64, lookahead: f64, sections: I) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a str, Span)>,
{
    let probe = scroll_y + lookahead;
    sections
        .into_iter()
        .filter(|(_, span)| span.contains(probe))
        .last()
        .map(|(id, _)| id)
}

/// Whether a link `href` points at section `id`.
#[must_use]
pub fn links_to(href: &str, id: &str) -> bool {
    href.strip_prefix('#') == Some(id)
}

/// Section id addressed by an in-page `href`, if any.
#[must_use]
pub fn fragment(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Vec<(&'static str, Span)> {
        vec![
            ("home", Span::new(0.0, 600.0)),
            ("about", Span::new(600.0, 800.0)),
            ("projects", Span::new(1400.0, 1000.0)),
        ]
    }

    #[test]
    fn picks_section_under_lookahead() {
        assert_eq!(active_section(0.0, 100.0, layout()), Some("home"));
        // 550 + 100 crosses into about.
        assert_eq!(active_section(550.0, 100.0, layout()), Some("about"));
        assert_eq!(active_section(1299.0, 100.0, layout()), Some("about"));
        assert_eq!(active_section(1300.0, 100.0, layout()), Some("projects"));
    }

    #[test]
    fn past_last_section_selects_nothing() {
        assert_eq!(active_section(5000.0, 100.0, layout()), None);
    }

    #[test]
    fn scroll_target_clears_header() {
        assert_eq!(scroll_target(Span::new(600.0, 10.0), 70.0), 530.0);
    }

    #[test]
    fn hrefs_resolve_to_fragments() {
        assert!(links_to("#about", "about"));
        assert!(!links_to("about", "about"));
        assert!(!links_to("#about-me", "about"));
        assert_eq!(fragment("#contact"), Some("contact"));
        assert_eq!(fragment("#"), None);
        assert_eq!(fragment("https://example.com"), None);
    }
}
