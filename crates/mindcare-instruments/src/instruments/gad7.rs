use std::sync::LazyLock;

use mindcare_core::models::assessment::AssessmentType;

use super::{FREQUENCY_SCALE, band, questions};
use crate::Instrument;
use crate::scoring::AssessmentDefinition;

/// GAD-7: Generalized Anxiety Disorder scale.
/// 7 items, each rated 0–3. Total 0–21.
pub struct Gad7;

impl Instrument for Gad7 {
    fn assessment_type(&self) -> AssessmentType {
        AssessmentType::Gad7
    }

    fn name(&self) -> &str {
        "GAD-7"
    }

    fn definition(&self) -> &AssessmentDefinition {
        definition()
    }
}

pub(crate) fn definition() -> &'static AssessmentDefinition {
    static DEFINITION: LazyLock<AssessmentDefinition> = LazyLock::new(|| {
        let items = [
            "Feeling nervous, anxious, or on edge",
            "Not being able to stop or control worrying",
            "Worrying too much about different things",
            "Trouble relaxing",
            "Being so restless that it is hard to sit still",
            "Becoming easily annoyed or irritable",
            "Feeling afraid, as if something awful might happen",
        ];

        AssessmentDefinition {
            assessment_type: AssessmentType::Gad7,
            title: "GAD-7 (Generalized Anxiety Disorder Scale)".to_string(),
            description: "Screens for anxiety disorders and measures severity.".to_string(),
            questions: questions("gad7", &items, &FREQUENCY_SCALE),
            max_score: 21,
            severity_bands: vec![
                band(
                    0,
                    4,
                    "Minimal anxiety",
                    "Patient may not require anxiety treatment",
                    "#4ade80",
                    &[
                        "Monitor and reassess if symptoms change",
                        "Provide education on stress management",
                        "Teach basic relaxation techniques",
                    ],
                ),
                band(
                    5,
                    9,
                    "Mild anxiety",
                    "Watchful waiting; repeat GAD-7 at follow-up",
                    "#facc15",
                    &[
                        "Supportive counseling",
                        "Stress management techniques",
                        "Mindfulness and relaxation exercises",
                        "Consider follow-up in 2-4 weeks",
                    ],
                ),
                band(
                    10,
                    14,
                    "Moderate anxiety",
                    "Treatment plan, considering counseling and/or pharmacotherapy",
                    "#fb923c",
                    &[
                        "Cognitive Behavioral Therapy (CBT)",
                        "Consider anti-anxiety medication",
                        "Regular monitoring and follow-up",
                        "Breathing exercises and progressive muscle relaxation",
                        "Regular physical activity",
                    ],
                ),
                band(
                    15,
                    21,
                    "Severe anxiety",
                    "Active treatment with pharmacotherapy and/or psychotherapy",
                    "#ef4444",
                    &[
                        "Immediate psychiatric consultation",
                        "Anti-anxiety medication often indicated",
                        "Intensive CBT or exposure therapy",
                        "Weekly monitoring initially",
                        "Consider specialist referral",
                        "Crisis intervention if needed",
                    ],
                ),
            ],
        }
    });
    &DEFINITION
}
