use mindcare_core::models::emotion::Emotion;
use mindcare_insights::emotion::{AudioFeatures, analyze_audio_emotion};

#[test]
fn quiet_steady_voice_is_sad() {
    let samples = vec![0.1_f32; 256];
    let result = analyze_audio_emotion(&samples);
    assert_eq!(result.primary, Emotion::Sad);
    assert_eq!(result.confidence, 0.75);
    assert_eq!(result.secondary, None);
    assert_eq!(result.indicators, vec!["Low volume", "Monotone delivery"]);
}

#[test]
fn features_use_absolute_amplitude() {
    let features = AudioFeatures::from_samples(&[0.5, -0.5, 0.5, -0.5]).unwrap();
    assert!((features.avg_volume - 0.5).abs() < 1e-9);
    assert!(features.volume_variance.abs() < 1e-9);
}

#[test]
fn loud_and_erratic_voice_is_angry() {
    // |x| alternates 0.0 and 2.0: mean 1.0, variance 1.0
    let samples = [0.0_f32, 2.0, 0.0, -2.0];
    let result = analyze_audio_emotion(&samples);
    assert_eq!(result.primary, Emotion::Angry);
    assert_eq!(result.confidence, 0.8);
    assert_eq!(result.indicators, vec!["Elevated volume", "High variability"]);
}

#[test]
fn moderately_loud_variable_voice_is_anxious() {
    // |x| alternates 0.0 and 1.2: mean 0.6, variance 0.36
    let samples = [0.0_f32, 1.2, 0.0, -1.2];
    let result = analyze_audio_emotion(&samples);
    assert_eq!(result.primary, Emotion::Anxious);
    assert_eq!(result.confidence, 0.7);
    assert_eq!(result.secondary, Some(Emotion::Fearful));
}

#[test]
fn steady_moderate_voice_is_happy() {
    let samples = vec![-0.45_f32; 64];
    let result = analyze_audio_emotion(&samples);
    assert_eq!(result.primary, Emotion::Happy);
    assert_eq!(result.confidence, 0.65);
}

#[test]
fn everything_else_is_neutral() {
    let samples = vec![0.35_f32; 64];
    let result = analyze_audio_emotion(&samples);
    assert_eq!(result.primary, Emotion::Neutral);
    assert_eq!(result.confidence, 0.6);
    assert_eq!(result.indicators, vec!["Regular speech pattern", "Moderate tone"]);
}

#[test]
fn angry_rule_takes_priority_over_anxious() {
    // satisfies both the angry and anxious conditions
    let features = AudioFeatures {
        avg_volume: 0.9,
        volume_variance: 0.5,
    };
    assert_eq!(features.classify().primary, Emotion::Angry);
}

#[test]
fn empty_sample_is_neutral() {
    assert!(AudioFeatures::from_samples(&[]).is_none());
    let result = analyze_audio_emotion(&[]);
    assert_eq!(result.primary, Emotion::Neutral);
    assert_eq!(result.confidence, 0.6);
}
