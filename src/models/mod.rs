//! Data models for next-review
//!
//! Core abstractions:
//! - `ChangeRecord`: one open gerrit change, snapshotted at fetch time
//! - `CiVerdict`: tri-state CI outcome (a vote that was never cast is
//!   neutral, not failing)

pub mod change;

pub use change::{ChangeRecord, CiVerdict};
