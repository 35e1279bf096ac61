#![forbid(unsafe_code)]

//! Core: interaction logic for the retro portfolio page.
//!
//! # Role in Retrofolio
//! `retrofolio-core` owns every behavior of the page (theme, navigation,
//! reveal, filtering, validation, motion effects, timed sequences) as plain
//! Rust with no browser dependency. The page itself is reached only through
//! the [`Page`] capability, so the same controller runs in the browser
//! (`retrofolio-web`) and against an in-memory fake (`retrofolio-harness`).
//!
//! # Primary responsibilities
//! - **PageController**: owned state plus event entry points.
//! - **Schedule / TimerQueue**: named timed phases on a deterministic clock.
//! - **FrameThrottle / Debouncer**: at most one recomputation per frame.
//! - **Pure helpers**: validation, Konami matching, filter plans, geometry.
//!
//! # How it fits in the system
//! The host forwards DOM events, calls [`PageController::advance`] when
//! [`PageController::next_deadline`] passes and [`PageController::on_frame`]
//! on animation frames. Time is always supplied by the host, so tests replay
//! sequences exactly.

pub mod config;
pub mod controller;
pub mod error;
pub mod filter;
pub mod header;
pub mod konami;
pub mod loading;
pub mod markup;
pub mod motion;
pub mod nav;
pub mod page;
pub mod schedule;
pub mod theme;
pub mod throttle;
pub mod trail;
pub mod typewriter;
pub mod validation;

pub use config::{InteractionConfig, TypewriterConfig};
pub use controller::{AdvanceReport, PageController};
pub use error::{ConfigError, PageError};
pub use page::{Page, Rect, Role, Span, Viewport};
pub use theme::Theme;
pub use validation::{Field, FieldError, FormReport};
