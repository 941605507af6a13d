use mindcare_core::models::emotion::{Emotion, EmotionResult};
use mindcare_insights::guidance::counselor_guidance;

fn emotion(primary: Emotion, secondary: Option<Emotion>) -> EmotionResult {
    EmotionResult {
        primary,
        confidence: 0.7,
        secondary,
        indicators: Vec::new(),
    }
}

#[test]
fn sad_guidance() {
    let g = counselor_guidance(&emotion(Emotion::Sad, None));
    assert_eq!(g.suggested_questions.len(), 4);
    assert_eq!(g.suggested_questions[0], "When did you first notice feeling this way?");
    assert_eq!(g.potential_diagnoses, vec!["Depression", "Adjustment Disorder", "Grief"]);
    assert_eq!(g.recommended_approach, "Behavioral Activation and Supportive Listening");
}

#[test]
fn anxious_with_fearful_secondary_adds_a_question() {
    let g = counselor_guidance(&emotion(Emotion::Anxious, Some(Emotion::Fearful)));
    assert_eq!(g.suggested_questions.len(), 5);
    assert_eq!(
        g.suggested_questions[4],
        "I notice some signs of fear - is there something specific you're worried about?"
    );
    assert_eq!(g.potential_diagnoses[0], "Generalized Anxiety Disorder");
}

#[test]
fn sad_and_angry_secondaries_add_their_questions() {
    let g = counselor_guidance(&emotion(Emotion::Neutral, Some(Emotion::Sad)));
    assert!(g.suggested_questions.last().unwrap().contains("sadness in your voice"));

    let g = counselor_guidance(&emotion(Emotion::Happy, Some(Emotion::Angry)));
    assert!(g.suggested_questions.last().unwrap().contains("frustration beneath your words"));
}

#[test]
fn other_secondaries_add_nothing() {
    for secondary in [Emotion::Happy, Emotion::Neutral, Emotion::Anxious, Emotion::Surprised] {
        let g = counselor_guidance(&emotion(Emotion::Angry, Some(secondary)));
        assert_eq!(g.suggested_questions.len(), 4);
    }
}

#[test]
fn neutral_and_surprised_use_the_default_case() {
    for primary in [Emotion::Neutral, Emotion::Surprised] {
        let g = counselor_guidance(&emotion(primary, None));
        assert_eq!(g.suggested_questions[1], "What brings you in today?");
        assert!(g.potential_diagnoses.is_empty());
        assert_eq!(g.recommended_approach, "General assessment and client-centered approach");
    }
}

#[test]
fn every_specific_emotion_has_diagnoses() {
    for primary in [Emotion::Sad, Emotion::Anxious, Emotion::Angry, Emotion::Fearful, Emotion::Happy] {
        let g = counselor_guidance(&emotion(primary, None));
        assert!(!g.potential_diagnoses.is_empty(), "{primary}");
        assert_eq!(g.suggested_questions.len(), 4);
    }
}
