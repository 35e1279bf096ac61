#![forbid(unsafe_code)]

//! Test harness and reference fixtures for Retrofolio.
//!
//! - [`FakePage`]: in-memory [`Page`](retrofolio_core::Page) with inspection
//!   helpers and failure injection for storage.
//! - [`portfolio_fixture`]: the reference portfolio markup.
//! - [`Scenario`]: controller plus virtual clock.

pub mod fake_page;
pub mod fixture;
pub mod scenario;

pub use fake_page::{FakePage, NodeId, NodeSpec, StorageMode};
pub use fixture::portfolio_fixture;
pub use scenario::Scenario;

/// Install a test-writer subscriber honoring `RUST_LOG`. Safe to call from
/// every test; only the first call installs.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
