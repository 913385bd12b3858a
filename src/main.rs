//! next-review - Start your next gerrit code review without any hassle
//!
//! Queries gerrit for the code reviews that need attention and surfaces the
//! one to review next, without navigating the gerrit UI by hand.

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

mod cli;

/// Main entry point for the next-review CLI
///
/// The exit status carries the count of remaining actionable reviews, so
/// scripts can tell "nothing to review" (0) from "more waiting" (>0).
fn main() {
    match cli::run() {
        Ok(count) => std::process::exit(i32::from(count)),
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        },
    }
}
