pub mod gad7;
pub mod pcl5;
pub mod phq9;

use crate::scoring::{Question, ResponseOption, ScoreRange, SeverityBand};

/// Answer scale shared by PHQ-9 and GAD-7 (frequency over the last two weeks).
pub(crate) const FREQUENCY_SCALE: [(i32, &str); 4] = [
    (0, "Not at all"),
    (1, "Several days"),
    (2, "More than half the days"),
    (3, "Nearly every day"),
];

/// Answer scale for the PCL-5 (how much the problem bothered the client).
pub(crate) const INTENSITY_SCALE: [(i32, &str); 5] = [
    (0, "Not at all"),
    (1, "A little bit"),
    (2, "Moderately"),
    (3, "Quite a bit"),
    (4, "Extremely"),
];

/// Build questions `{prefix}_1..=n` that all share one answer scale.
pub(crate) fn questions(prefix: &str, items: &[&str], scale: &[(i32, &str)]) -> Vec<Question> {
    items
        .iter()
        .enumerate()
        .map(|(i, text)| Question {
            id: format!("{prefix}_{}", i + 1),
            text: text.to_string(),
            options: scale
                .iter()
                .map(|(value, label)| ResponseOption {
                    value: *value,
                    label: label.to_string(),
                })
                .collect(),
        })
        .collect()
}

pub(crate) fn band(
    low: i32,
    high: i32,
    label: &str,
    description: &str,
    color: &str,
    recommendations: &[&str],
) -> SeverityBand {
    SeverityBand {
        range: ScoreRange { low, high },
        label: label.to_string(),
        description: description.to_string(),
        color: color.to_string(),
        recommendations: recommendations.iter().map(|r| r.to_string()).collect(),
    }
}
