//! Voice emotion estimate from amplitude statistics.
//!
//! Not a trained classifier: the only features are the mean and the
//! variance of absolute amplitude, run through a fixed decision table.

use mindcare_core::models::emotion::{Emotion, EmotionResult};

/// Aggregate statistics of an audio sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioFeatures {
    /// Mean absolute amplitude.
    pub avg_volume: f64,
    /// Population variance of absolute amplitude around `avg_volume`.
    pub volume_variance: f64,
}

impl AudioFeatures {
    /// `None` for an empty sample.
    pub fn from_samples(samples: &[f32]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let n = samples.len() as f64;
        let avg_volume = samples.iter().map(|s| f64::from(s.abs())).sum::<f64>() / n;
        let volume_variance = samples
            .iter()
            .map(|s| (f64::from(s.abs()) - avg_volume).powi(2))
            .sum::<f64>()
            / n;
        Some(Self {
            avg_volume,
            volume_variance,
        })
    }

    /// Apply the decision table. Rules are checked in order; the first
    /// match wins.
    pub fn classify(&self) -> EmotionResult {
        let (avg, var) = (self.avg_volume, self.volume_variance);
        if avg > 0.7 && var > 0.3 {
            estimate(Emotion::Angry, 0.8, None, ["Elevated volume", "High variability"])
        } else if avg < 0.3 && var < 0.1 {
            estimate(Emotion::Sad, 0.75, None, ["Low volume", "Monotone delivery"])
        } else if avg > 0.5 && var > 0.2 {
            estimate(
                Emotion::Anxious,
                0.7,
                Some(Emotion::Fearful),
                ["Variable pitch", "Rapid speech pattern"],
            )
        } else if avg > 0.4 && var < 0.2 {
            estimate(Emotion::Happy, 0.65, None, ["Moderate pitch variance", "Positive tone"])
        } else {
            neutral()
        }
    }
}

/// Estimate the speaker's emotion from raw signed samples.
///
/// An empty sample carries no signal and is reported as neutral.
pub fn analyze_audio_emotion(samples: &[f32]) -> EmotionResult {
    match AudioFeatures::from_samples(samples) {
        Some(features) => features.classify(),
        None => neutral(),
    }
}

fn neutral() -> EmotionResult {
    estimate(Emotion::Neutral, 0.6, None, ["Regular speech pattern", "Moderate tone"])
}

fn estimate(
    primary: Emotion,
    confidence: f64,
    secondary: Option<Emotion>,
    indicators: [&str; 2],
) -> EmotionResult {
    EmotionResult {
        primary,
        confidence,
        secondary,
        indicators: indicators.iter().map(|s| s.to_string()).collect(),
    }
}
