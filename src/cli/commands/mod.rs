//! Command implementations

mod review;

pub use review::review;
