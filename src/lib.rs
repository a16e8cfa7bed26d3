#![doc(test(attr(deny(warnings))))]

//! Lending Core models a small lending-library catalog: items that can be
//! checked out and returned, the users who borrow them, and an append-only log
//! of every borrow/return action.

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod library;
pub mod utils;

pub use crate::core::services::{BorrowOutcome, LendingService, ReturnOutcome};
pub use errors::{LibraryError, LibraryResult};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    init_with(&config::LibraryConfig::default());
}

/// Like [`init`], using the log filter from `config`.
pub fn init_with(config: &config::LibraryConfig) {
    INIT_TRACING.call_once(|| {
        utils::init_tracing(&config.log_filter);
        tracing::info!(filter = %config.log_filter, "Lending Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
