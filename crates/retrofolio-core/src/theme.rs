#![forbid(unsafe_code)]

//! Light/dark theme preference.

/// Storage key holding the preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Root attribute the stylesheet keys off.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Visual mode persisted across visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a stored value. Anything unrecognised yields `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Translucent header background for this theme.
    #[must_use]
    pub const fn header_background(self) -> &'static str {
        match self {
            Self::Light => "rgba(255, 255, 255, 0.95)",
            Self::Dark => "rgba(15, 23, 42, 0.95)",
        }
    }
}

impl core::fmt::Display for Theme {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_known_values() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::parse(theme.as_str()), Some(theme));
        }
        assert_eq!(Theme::parse("Dark"), None);
        assert_eq!(Theme::parse(""), None);
    }

    #[test]
    fn toggling_twice_is_identity() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }
}
