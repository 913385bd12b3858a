//! next-review - Start your next gerrit code review without any hassle
//!
//! This library queries a gerrit server for the open changes visible to the
//! user, drops the ones a reviewer cannot act on, and ranks the rest so that
//! long-waiting, CI-clean changes come first.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod gerrit;
pub mod models;
pub mod output;
pub mod ranker;
