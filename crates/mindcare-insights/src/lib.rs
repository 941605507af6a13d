//! mindcare-insights
//!
//! Keyword and threshold heuristics behind the support chat: sentiment
//! tagging, voice emotion estimates, personalized recommendations, session
//! summaries, counselor guidance, and scripted replies.
//!
//! All of it is rules over static word lists. Thresholds and rule order
//! are part of the observable behavior.

pub mod emotion;
pub mod guidance;
pub mod keywords;
pub mod recommendations;
pub mod reply;
pub mod sentiment;
pub mod session;
pub mod summary;
