#![forbid(unsafe_code)]

//! Error types shared by the controller and its hosts.
//!
//! Nothing here is fatal to the page. Storage errors make the controller fall
//! back to an in-memory preference; config errors make the host fall back to
//! [`InteractionConfig::default`](crate::config::InteractionConfig).

/// Failure reported by a [`Page`](crate::page::Page) capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    /// The host has no preference storage (private mode, sandboxed frame).
    StorageUnavailable,
    /// Storage exists but refused the operation (quota, security policy).
    StorageRejected {
        /// Key being read or written.
        key: String,
        /// Host-supplied reason.
        reason: String,
    },
}

impl core::fmt::Display for PageError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::StorageUnavailable => write!(f, "preference storage unavailable"),
            Self::StorageRejected { key, reason } => {
                write!(f, "preference storage rejected key {key:?}: {reason}")
            }
        }
    }
}

impl std::error::Error for PageError {}

/// Failure while loading an [`InteractionConfig`](crate::config::InteractionConfig).
#[derive(Debug)]
pub enum ConfigError {
    /// The JSON payload could not be parsed.
    Json(serde_json::Error),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid interaction config: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}
