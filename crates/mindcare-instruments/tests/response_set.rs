use mindcare_core::models::assessment::AssessmentType;
use mindcare_instruments::error::InstrumentError;
use mindcare_instruments::session::ResponseSet;

#[test]
fn rerecording_a_question_replaces_the_answer() {
    let mut set = ResponseSet::new(AssessmentType::Gad7);
    set.record("gad7_1", 1).unwrap();
    set.record("gad7_1", 3).unwrap();
    assert_eq!(set.responses().len(), 1);
    assert_eq!(set.responses()[0].value, 3);
}

#[test]
fn unknown_question_is_rejected() {
    let mut set = ResponseSet::new(AssessmentType::Phq9);
    let err = set.record("gad7_1", 1).unwrap_err();
    match err {
        InstrumentError::UnknownQuestion {
            instrument_id,
            question_id,
        } => {
            assert_eq!(instrument_id, "phq9");
            assert_eq!(question_id, "gad7_1");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(set.responses().is_empty());
}

#[test]
fn value_outside_options_is_rejected() {
    let mut set = ResponseSet::new(AssessmentType::Phq9);
    let err = set.record("phq9_1", 4).unwrap_err();
    assert!(matches!(err, InstrumentError::Validation(ref v) if v.value == 4));
    assert!(set.responses().is_empty());
}

#[test]
fn unanswered_tracks_progress() {
    let mut set = ResponseSet::new(AssessmentType::Pcl5);
    assert_eq!(set.unanswered().len(), 5);
    set.record("pcl5_3", 2).unwrap();
    assert_eq!(set.unanswered(), vec!["pcl5_1", "pcl5_2", "pcl5_4", "pcl5_5"]);
    assert!(!set.is_complete());
}

#[test]
fn complete_set_finishes_with_band() {
    let mut set = ResponseSet::new(AssessmentType::Phq9);
    for (i, value) in [2, 2, 2, 1, 1, 1, 1, 1, 1].into_iter().enumerate() {
        set.record(format!("phq9_{}", i + 1), value).unwrap();
    }
    assert!(set.is_complete());

    let outcome = set.finish();
    assert_eq!(outcome.score, 12);
    assert_eq!(outcome.max_score, 27);
    assert_eq!(outcome.band.label, "Moderate");
    assert!(outcome.is_complete());
}

#[test]
fn partial_set_still_finishes() {
    let mut set = ResponseSet::new(AssessmentType::Gad7);
    set.record("gad7_2", 3).unwrap();
    let outcome = set.finish();
    assert_eq!(outcome.score, 3);
    assert_eq!(outcome.answered, 1);
    assert_eq!(outcome.total_questions, 7);
    assert!(!outcome.is_complete());
    assert_eq!(outcome.band.label, "Minimal anxiety");
}
