use mindcare_core::models::emotion::{Emotion, EmotionResult};
use mindcare_core::models::guidance::CounselorGuidance;

/// Talking points for the clinician, keyed on the primary emotion.
///
/// A secondary emotion of fearful, sad, or angry adds one more question.
pub fn counselor_guidance(emotion: &EmotionResult) -> CounselorGuidance {
    let (questions, diagnoses, approach): (&[&str], &[&str], &str) = match emotion.primary {
        Emotion::Sad => (
            &[
                "When did you first notice feeling this way?",
                "How has your sleep been lately?",
                "Have you lost interest in activities you used to enjoy?",
                "How would you rate your energy levels day to day?",
            ],
            &["Depression", "Adjustment Disorder", "Grief"],
            "Behavioral Activation and Supportive Listening",
        ),
        Emotion::Anxious => (
            &[
                "What specific things are making you feel worried right now?",
                "How often do you experience physical symptoms like racing heart or shortness of breath?",
                "Do these feelings come suddenly or build gradually?",
                "How are these feelings affecting your daily activities?",
            ],
            &["Generalized Anxiety Disorder", "Panic Disorder", "Social Anxiety"],
            "CBT focusing on cognitive restructuring and relaxation techniques",
        ),
        Emotion::Angry => (
            &[
                "What situations tend to trigger these strong feelings?",
                "How do you typically express your anger?",
                "Have these feelings caused problems in your relationships?",
                "What strategies have you tried to manage these emotions?",
            ],
            &["Intermittent Explosive Disorder", "PTSD", "Adjustment Disorder"],
            "Anger management techniques and identifying triggers",
        ),
        Emotion::Fearful => (
            &[
                "Can you identify what specifically you're afraid of?",
                "How do you respond when you encounter this fear?",
                "Has anything happened in the past that might be related to this fear?",
                "How much does this fear interfere with your normal activities?",
            ],
            &["Specific Phobia", "PTSD", "Panic Disorder"],
            "Gradual exposure therapy and anxiety management",
        ),
        Emotion::Happy => (
            &[
                "Have there been any significant positive changes in your life recently?",
                "How stable would you say your mood has been lately?",
                "Are there times when you feel your energy or mood is unusually high?",
                "How is your sleep pattern when you're feeling this good?",
            ],
            &["Positive Adjustment", "Consider ruling out Hypomania"],
            "Supportive therapy and maintaining wellness strategies",
        ),
        Emotion::Neutral | Emotion::Surprised => (
            &[
                "How would you describe your mood over the past few weeks?",
                "What brings you in today?",
                "Are there specific concerns you'd like to address?",
                "How have things been going in your major life areas - work, relationships, health?",
            ],
            &[],
            "General assessment and client-centered approach",
        ),
    };

    let mut suggested_questions: Vec<String> = questions.iter().map(|q| q.to_string()).collect();
    let follow_up = match emotion.secondary {
        Some(Emotion::Fearful) => {
            Some("I notice some signs of fear - is there something specific you're worried about?")
        }
        Some(Emotion::Sad) => Some(
            "I'm also picking up on some sadness in your voice. Could you tell me more about that?",
        ),
        Some(Emotion::Angry) => Some(
            "There seems to be some frustration beneath your words. Is that something you're experiencing?",
        ),
        _ => None,
    };
    if let Some(question) = follow_up {
        suggested_questions.push(question.to_string());
    }

    CounselorGuidance {
        suggested_questions,
        potential_diagnoses: diagnoses.iter().map(|d| d.to_string()).collect(),
        recommended_approach: approach.to_string(),
    }
}
