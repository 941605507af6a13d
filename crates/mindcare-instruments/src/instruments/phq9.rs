use std::sync::LazyLock;

use mindcare_core::models::assessment::AssessmentType;

use super::{FREQUENCY_SCALE, band, questions};
use crate::Instrument;
use crate::scoring::AssessmentDefinition;

/// PHQ-9: Patient Health Questionnaire.
/// 9 items, each rated 0–3 over the last two weeks. Total 0–27.
pub struct Phq9;

impl Instrument for Phq9 {
    fn assessment_type(&self) -> AssessmentType {
        AssessmentType::Phq9
    }

    fn name(&self) -> &str {
        "PHQ-9"
    }

    fn definition(&self) -> &AssessmentDefinition {
        definition()
    }
}

pub(crate) fn definition() -> &'static AssessmentDefinition {
    static DEFINITION: LazyLock<AssessmentDefinition> = LazyLock::new(|| {
        let items = [
            "Little interest or pleasure in doing things",
            "Feeling down, depressed, or hopeless",
            "Trouble falling or staying asleep, or sleeping too much",
            "Feeling tired or having little energy",
            "Poor appetite or overeating",
            "Feeling bad about yourself — or that you are a failure or have let yourself or your family down",
            "Trouble concentrating on things, such as reading the newspaper or watching television",
            "Moving or speaking so slowly that other people could have noticed? Or the opposite — being so fidgety or restless that you have been moving around a lot more than usual",
            "Thoughts that you would be better off dead or of hurting yourself in some way",
        ];

        AssessmentDefinition {
            assessment_type: AssessmentType::Phq9,
            title: "PHQ-9 (Patient Health Questionnaire)".to_string(),
            description: "Screens for depression and measures severity.".to_string(),
            questions: questions("phq9", &items, &FREQUENCY_SCALE),
            max_score: 27,
            severity_bands: vec![
                band(
                    0,
                    4,
                    "Minimal or none",
                    "Patient may not require depression treatment",
                    "#4ade80",
                    &[
                        "Monitor and reassess if symptoms change",
                        "Provide education on mental health maintenance",
                        "Encourage regular exercise and healthy lifestyle",
                    ],
                ),
                band(
                    5,
                    9,
                    "Mild",
                    "Watchful waiting; repeat PHQ-9 at follow-up",
                    "#facc15",
                    &[
                        "Supportive counseling",
                        "Psychoeducation on depression",
                        "Behavioral activation strategies",
                        "Consider follow-up in 2-4 weeks",
                    ],
                ),
                band(
                    10,
                    14,
                    "Moderate",
                    "Treatment plan, considering counseling and/or pharmacotherapy",
                    "#fb923c",
                    &[
                        "Cognitive Behavioral Therapy (CBT)",
                        "Consider antidepressant medication",
                        "Regular monitoring and follow-up",
                        "Sleep hygiene guidance",
                        "Mindfulness-based interventions",
                    ],
                ),
                band(
                    15,
                    19,
                    "Moderately Severe",
                    "Active treatment with pharmacotherapy and/or psychotherapy",
                    "#f87171",
                    &[
                        "Antidepressant medication highly recommended",
                        "Intensive psychotherapy (CBT or IPT)",
                        "Weekly monitoring initially",
                        "Consider referral to mental health specialist",
                        "Safety planning if needed",
                    ],
                ),
                band(
                    20,
                    27,
                    "Severe",
                    "Immediate initiation of pharmacotherapy and expedited referral to mental health specialist",
                    "#ef4444",
                    &[
                        "Immediate psychiatric consultation",
                        "Consider hospitalization if safety is a concern",
                        "Combination therapy (medication + psychotherapy)",
                        "Crisis intervention if needed",
                        "Close monitoring and regular follow-up",
                    ],
                ),
            ],
        }
    });
    &DEFINITION
}
