//! mindcare-audit
//!
//! Safety side channel. Content that trips the sentiment escalation rule is
//! turned into a [`events::SevereContentEvent`] and handed to a
//! [`sink::SafetySink`] for logging, alerting, or human review.

pub mod events;
pub mod sink;
