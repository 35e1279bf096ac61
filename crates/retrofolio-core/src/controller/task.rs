#![forbid(unsafe_code)]

//! Deferred work owned by the controller's timer queue.

/// Phases of the simulated form submission after "Sending...".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    /// Show the confirmation label.
    Sent,
    /// Restore the button, reset the form, show the success banner.
    Restore,
}

/// Phases of a transient banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerPhase {
    SlideIn,
    SlideOut,
    Remove,
}

/// Phases of the loading screen once progress reaches 100%.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingPhase {
    Fade,
    Remove,
}

/// One timed callback. `E` is the host's element handle.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Task<E> {
    /// Start the decorative and deferred features.
    Activate,
    EndThemeTransition,
    LoadingTick,
    Loading(LoadingPhase),
    FillSkillBar { bar: E, width: String },
    CardFadeIn { card: E },
    CardCollapse { card: E },
    Submit(SubmitPhase),
    Banner { banner: E, phase: BannerPhase },
    EndEasterEgg { banner: Option<E>, style: Option<E> },
    TypeNext,
}

impl<E: PartialEq> Task<E> {
    /// Whether this task animates `card`.
    pub(crate) fn targets_card(&self, card: &E) -> bool {
        match self {
            Self::CardFadeIn { card: c } | Self::CardCollapse { card: c } => c == card,
            _ => false,
        }
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::Activate => "activate",
            Self::EndThemeTransition => "end_theme_transition",
            Self::LoadingTick => "loading_tick",
            Self::Loading(LoadingPhase::Fade) => "loading_fade",
            Self::Loading(LoadingPhase::Remove) => "loading_remove",
            Self::FillSkillBar { .. } => "fill_skill_bar",
            Self::CardFadeIn { .. } => "card_fade_in",
            Self::CardCollapse { .. } => "card_collapse",
            Self::Submit(SubmitPhase::Sent) => "submit_sent",
            Self::Submit(SubmitPhase::Restore) => "submit_restore",
            Self::Banner { .. } => "banner",
            Self::EndEasterEgg { .. } => "end_easter_egg",
            Self::TypeNext => "type_next",
        }
    }
}
