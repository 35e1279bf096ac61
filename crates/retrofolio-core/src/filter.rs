#![forbid(unsafe_code)]

//! Project card filtering.

use std::time::Duration;

/// Filter value that matches every card.
pub const FILTER_ALL: &str = "all";

/// What to do with one card when a filter is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardPlan {
    /// Put back in layout, then fade in after `delay`.
    Show { delay: Duration },
    /// Fade out, then drop from layout after the fade.
    Hide,
}

impl CardPlan {
    #[must_use]
    pub const fn is_shown(&self) -> bool {
        matches!(self, Self::Show { .. })
    }
}

/// Whether a card with `category` passes `filter`.
#[must_use]
pub fn matches(filter: &str, category: Option<&str>) -> bool {
    filter == FILTER_ALL || category == Some(filter)
}

/// Plan every card. Shown cards are staggered by their index among all cards.
#[must_use]
pub fn plan<'a, I>(filter: &str, categories: I, stagger: Duration) -> Vec<CardPlan>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    categories
        .into_iter()
        .enumerate()
        .map(|(index, category)| {
            if matches(filter, category) {
                let index = u32::try_from(index).unwrap_or(u32::MAX);
                CardPlan::Show {
                    delay: stagger.saturating_mul(index),
                }
            } else {
                CardPlan::Hide
            }
        })
        .collect()
}
