//! Double-entry suggestion assembly.

pub mod accounts;
mod builder;

pub use builder::{build_suggestions, reconcile};
