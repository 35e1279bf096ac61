#![forbid(unsafe_code)]

//! Hero title typewriter.
//!
//! Reveals a title one character per step. Characters from the start of the
//! highlight onwards land inside a `gradient-text` span.

/// Escape text for insertion as HTML content.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    chars: Vec<char>,
    /// Char index where the highlight begins, if the text contains it.
    highlight_at: Option<usize>,
    typed: usize,
}

impl Typewriter {
    #[must_use]
    pub fn new(text: &str, highlight: &str) -> Self {
        let highlight_at = if highlight.is_empty() {
            None
        } else {
            text.find(highlight)
                .map(|byte_idx| text[..byte_idx].chars().count())
        };
        Self {
            chars: text.chars().collect(),
            highlight_at,
            typed: 0,
        }
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.typed >= self.chars.len()
    }

    /// Type one more character and return the title markup, or `None` once
    /// everything is typed.
    pub fn advance(&mut self) -> Option<String> {
        if self.is_done() {
            return None;
        }
        self.typed += 1;
        Some(self.markup())
    }

    /// Markup for the characters typed so far.
    #[must_use]
    pub fn markup(&self) -> String {
        let split = self.highlight_at.unwrap_or(usize::MAX).min(self.typed);
        let plain: String = self.chars[..split].iter().collect();
        let mut html = escape_html(&plain);
        if self.highlight_at.is_some_and(|at| self.typed > at) {
            let highlighted: String = self.chars[split..self.typed].iter().collect();
            html.push_str("<span class=\"gradient-text\">");
            html.push_str(&escape_html(&highlighted));
            html.push_str("</span>");
        }
        html
    }
}
