use std::sync::{Mutex, PoisonError};

use crate::events::SevereContentEvent;

/// Receiver for severe-content events.
pub trait SafetySink: Send + Sync {
    fn severe_content_detected(&self, event: &SevereContentEvent);
}

/// Logs each event through `tracing`. The default sink.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl SafetySink for TracingSink {
    fn severe_content_detected(&self, event: &SevereContentEvent) {
        event.emit();
    }
}

/// Logs each event and keeps a copy for later review.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<SevereContentEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SevereContentEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Take every recorded event, leaving the sink empty.
    pub fn drain(&self) -> Vec<SevereContentEvent> {
        std::mem::take(&mut *self.events.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl SafetySink for RecordingSink {
    fn severe_content_detected(&self, event: &SevereContentEvent) {
        event.emit();
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }
}

impl<S: SafetySink + ?Sized> SafetySink for &S {
    fn severe_content_detected(&self, event: &SevereContentEvent) {
        (**self).severe_content_detected(event);
    }
}

impl<S: SafetySink + ?Sized> SafetySink for std::sync::Arc<S> {
    fn severe_content_detected(&self, event: &SevereContentEvent) {
        (**self).severe_content_detected(event);
    }
}
