//! mindcare-core
//!
//! Pure domain types shared by the scoring, insight, and export crates.
//! No I/O. This is the shared vocabulary of the mindcare system.

pub mod error;
pub mod models;
