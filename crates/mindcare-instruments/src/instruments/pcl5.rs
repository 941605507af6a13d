use std::sync::LazyLock;

use mindcare_core::models::assessment::AssessmentType;

use super::{INTENSITY_SCALE, band, questions};
use crate::Instrument;
use crate::scoring::AssessmentDefinition;

/// PCL-5: PTSD Checklist for DSM-5, short form.
/// 5 of the 20 items, each rated 0–4. The 0–80 maximum and the 33-point
/// cutoff are those of the full checklist, so the short form tops out at
/// 20 and never reaches "Probable PTSD" on its own.
pub struct Pcl5;

impl Instrument for Pcl5 {
    fn assessment_type(&self) -> AssessmentType {
        AssessmentType::Pcl5
    }

    fn name(&self) -> &str {
        "PCL-5"
    }

    fn definition(&self) -> &AssessmentDefinition {
        definition()
    }
}

pub(crate) fn definition() -> &'static AssessmentDefinition {
    static DEFINITION: LazyLock<AssessmentDefinition> = LazyLock::new(|| {
        let items = [
            "Repeated, disturbing, and unwanted memories of the stressful experience",
            "Repeated, disturbing dreams of the stressful experience",
            "Suddenly feeling or acting as if the stressful experience were actually happening again (as if you were actually back there reliving it)",
            "Feeling very upset when something reminded you of the stressful experience",
            "Having strong physical reactions when something reminded you of the stressful experience (for example, heart pounding, trouble breathing, sweating)",
        ];

        AssessmentDefinition {
            assessment_type: AssessmentType::Pcl5,
            title: "PCL-5 (PTSD Checklist)".to_string(),
            description: "Screens for PTSD and measures symptom severity.".to_string(),
            questions: questions("pcl5", &items, &INTENSITY_SCALE),
            max_score: 80,
            severity_bands: vec![
                band(
                    0,
                    32,
                    "Below threshold",
                    "Does not meet criteria for probable PTSD diagnosis",
                    "#4ade80",
                    &[
                        "Monitor and reassess if symptoms change",
                        "Provide education on trauma responses",
                        "Teach basic grounding techniques",
                    ],
                ),
                band(
                    33,
                    80,
                    "Probable PTSD",
                    "Meets criteria for probable PTSD diagnosis",
                    "#ef4444",
                    &[
                        "Refer to trauma specialist",
                        "Consider trauma-focused therapy (CPT, PE, EMDR)",
                        "Assess for comorbid conditions",
                        "Medication evaluation may be warranted",
                        "Safety planning if needed",
                    ],
                ),
            ],
        }
    });
    &DEFINITION
}
