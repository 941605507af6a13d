use std::sync::Arc;

use mindcare_audit::events::SevereContentEvent;
use mindcare_audit::sink::{RecordingSink, SafetySink, TracingSink};
use uuid::Uuid;

#[test]
fn recording_sink_keeps_events_in_order() {
    let sink = RecordingSink::new();
    assert!(sink.is_empty());

    let first = SevereContentEvent::new(Some(Uuid::new_v4()), -2.0, vec!["die".to_string()]);
    let second = SevereContentEvent::new(None, -1.75, Vec::new());
    sink.severe_content_detected(&first);
    sink.severe_content_detected(&second);

    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0], first);
    assert_eq!(events[1].message_id, None);
}

#[test]
fn drain_empties_the_sink() {
    let sink = RecordingSink::new();
    sink.severe_content_detected(&SevereContentEvent::new(None, -3.0, Vec::new()));
    assert_eq!(sink.drain().len(), 1);
    assert!(sink.is_empty());
}

#[test]
fn shared_sink_records_through_arc() {
    let sink = Arc::new(RecordingSink::new());
    let handle: Arc<dyn SafetySink> = sink.clone();
    handle.severe_content_detected(&SevereContentEvent::new(None, -2.5, Vec::new()));
    assert_eq!(sink.len(), 1);
}

#[test]
fn tracing_sink_accepts_events_without_a_subscriber() {
    TracingSink.severe_content_detected(&SevereContentEvent::new(None, -2.0, Vec::new()));
}

#[test]
fn event_serializes_score_and_terms() {
    let event = SevereContentEvent::new(None, -2.0, vec!["kill".to_string()]);
    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["score"], -2.0);
    assert_eq!(json["severe_terms"][0], "kill");
    assert!(json.get("details").is_none());
    assert!(json["message_id"].is_null());
}
