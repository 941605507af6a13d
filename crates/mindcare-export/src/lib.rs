//! mindcare-export
//!
//! Plain-text reports for finished assessments and chat sessions, rendered
//! from Tera templates bundled with the crate.

pub mod error;
pub mod render;
pub mod report;
