use mindcare_core::models::assessment::AssessmentType;
use mindcare_instruments::error::InstrumentError;
use mindcare_instruments::{
    Instrument, all_instruments, definition, get_instrument, instrument, lookup_instrument,
};

#[test]
fn every_assessment_type_has_an_instrument() {
    let all = all_instruments();
    assert_eq!(all.len(), AssessmentType::ALL.len());
    for (inst, t) in all.iter().zip(AssessmentType::ALL) {
        assert_eq!(inst.assessment_type(), t);
        assert_eq!(inst.id(), t.as_str());
        assert_eq!(inst.definition().assessment_type, t);
    }
}

#[test]
fn unknown_id_is_absent() {
    assert!(get_instrument("bdi2").is_none());
    assert!(get_instrument("").is_none());
    assert!(get_instrument("PHQ9").is_none());
}

#[test]
fn shipped_definitions_match_the_questionnaires() {
    let phq9 = definition(AssessmentType::Phq9);
    assert_eq!(phq9.title, "PHQ-9 (Patient Health Questionnaire)");
    assert_eq!(phq9.questions.len(), 9);
    assert_eq!(phq9.max_score, 27);
    assert_eq!(phq9.severity_bands.len(), 5);

    let gad7 = definition(AssessmentType::Gad7);
    assert_eq!(gad7.questions.len(), 7);
    assert_eq!(gad7.max_score, 21);
    assert_eq!(gad7.severity_bands.len(), 4);

    let pcl5 = definition(AssessmentType::Pcl5);
    assert_eq!(pcl5.questions.len(), 5);
    assert_eq!(pcl5.max_score, 80);
    assert_eq!(pcl5.severity_bands.len(), 2);
    assert!(pcl5.questions.iter().all(|q| q.options.len() == 5));
}

#[test]
fn question_ids_are_unique_and_prefixed() {
    for t in AssessmentType::ALL {
        let def = definition(t);
        let mut ids: Vec<&str> = def.questions.iter().map(|q| q.id.as_str()).collect();
        assert!(ids.iter().all(|id| id.starts_with(t.as_str())));
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), def.questions.len());
    }
}

#[test]
fn shipped_band_tables_cover_their_score_range() {
    for t in AssessmentType::ALL {
        let inst = instrument(t);
        assert!(inst.coverage_gaps().is_empty(), "{t} has gaps");

        let def = inst.definition();
        for score in 0..=def.max_score {
            let matching = def
                .severity_bands
                .iter()
                .filter(|b| b.range.contains(score))
                .count();
            assert_eq!(matching, 1, "{t} score {score} matched {matching} bands");
        }
    }
}

#[test]
fn pcl5_splits_at_thirty_three() {
    let bands = &definition(AssessmentType::Pcl5).severity_bands;
    assert_eq!((bands[0].range.low, bands[0].range.high), (0, 32));
    assert_eq!((bands[1].range.low, bands[1].range.high), (33, 80));
}

#[test]
fn lookup_instrument_reports_unknown_ids() {
    assert_eq!(lookup_instrument("pcl5").unwrap().name(), "PCL-5");
    match lookup_instrument("bdi2") {
        Err(InstrumentError::UnknownInstrument(id)) => assert_eq!(id, "bdi2"),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("bdi2 should not resolve"),
    }
}
