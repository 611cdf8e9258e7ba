//! Shared test utilities for the strata workspace.
//!
//! This crate provides standardised test fixtures to eliminate duplication
//! across test suites. It is a dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`dirs`]: [`ConfigDirs`], temporary global/user config directories
//! - [`fixtures`]: the canonical registrations and documents

pub mod dirs;
pub mod fixtures;

pub use dirs::ConfigDirs;

use std::sync::Once;

static TRACING: Once = Once::new();

/// Install a fmt subscriber when `STRATA_DEBUG` is truthy.
///
/// The filter comes from `RUST_LOG`, defaulting to `debug` for the strata
/// crates. Safe to call from every test.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let enabled = std::env::var("STRATA_DEBUG")
            .map(|v| matches!(v.to_lowercase().as_str(), "1" | "t" | "true" | "yes"))
            .unwrap_or(false);
        if !enabled {
            return;
        }
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("strata_core=debug,strata_fs=debug"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
