use mindcare_core::models::message::Message;
use mindcare_core::models::recommendation::Recommendation;
use mindcare_core::models::therapy::TherapyType;

use crate::keywords::{KeywordGroup, user_text};

pub const MAX_RECOMMENDATIONS: usize = 3;

/// A keyword group with the two suggestions it contributes: a general
/// self-help tip, then a therapy-tagged one.
struct Rule {
    group: KeywordGroup,
    general: &'static str,
    therapy: (&'static str, TherapyType),
}

/// Tested in this order; earlier groups win under the cap.
const RULES: &[Rule] = &[
    Rule {
        group: KeywordGroup {
            name: "anxiety",
            keywords: &[
                "anxious", "anxiety", "worry", "worried", "panic", "stress", "stressed", "overwhelm",
            ],
        },
        general: "Practice deep breathing exercises: Try 4-7-8 breathing (inhale for 4 seconds, hold for 7, exhale for 8) to activate your parasympathetic nervous system.",
        therapy: (
            "Consider Cognitive Behavioral Therapy (CBT) techniques to identify and challenge anxious thoughts.",
            TherapyType::Cbt,
        ),
    },
    Rule {
        group: KeywordGroup {
            name: "depression",
            keywords: &[
                "sad", "depress", "hopeless", "unmotivated", "tired", "exhausted", "no energy",
                "can't enjoy",
            ],
        },
        general: "Try scheduling one small pleasurable activity each day, even when you don't feel like it.",
        therapy: (
            "Behavioral Activation can help break the cycle of low mood and inactivity.",
            TherapyType::BehavioralActivation,
        ),
    },
    Rule {
        group: KeywordGroup {
            name: "sleep",
            keywords: &[
                "sleep", "insomnia", "tired", "exhausted", "can't sleep", "nightmares", "wake up",
            ],
        },
        general: "Establish a consistent sleep schedule and bedtime routine. Avoid screens for at least 30 minutes before bed.",
        therapy: (
            "Mindfulness meditation before bed may help calm racing thoughts.",
            TherapyType::Mindfulness,
        ),
    },
    Rule {
        group: KeywordGroup {
            name: "relationships",
            keywords: &[
                "relationship", "partner", "spouse", "marriage", "boyfriend", "girlfriend", "family",
                "parent", "child",
            ],
        },
        general: "Practice active listening techniques in conversations with your loved ones.",
        therapy: (
            "Interpersonal Therapy (IPT) focuses on improving communication and relationships.",
            TherapyType::Ipt,
        ),
    },
    Rule {
        group: KeywordGroup {
            name: "trauma",
            keywords: &[
                "trauma", "ptsd", "flashback", "nightmare", "abuse", "assault", "accident",
                "hypervigilant",
            ],
        },
        general: "Ground yourself when distressed with the 5-4-3-2-1 technique: Notice 5 things you see, 4 things you feel, 3 things you hear, 2 things you smell, and 1 thing you taste.",
        therapy: (
            "Exposure therapy can help process traumatic memories in a safe environment.",
            TherapyType::Exposure,
        ),
    },
];

const FALLBACK_EXERCISE: &str = "Regular physical activity, even just a 10-minute walk, can significantly improve mood and reduce stress.";
const FALLBACK_MINDFULNESS: &str =
    "Practice mindfulness to stay present and reduce rumination on past or future concerns.";

/// Names of the recommendation keyword groups matched by the user's text,
/// in test order.
pub fn matched_groups(messages: &[Message]) -> Vec<&'static str> {
    let text = user_text(messages);
    RULES
        .iter()
        .filter(|rule| rule.group.matches(&text))
        .map(|rule| rule.group.name)
        .collect()
}

/// Up to three suggestions drawn from what the user has written so far.
pub fn personalized_recommendations(messages: &[Message]) -> Vec<Recommendation> {
    let text = user_text(messages);
    let mut recommendations = Vec::new();

    for rule in RULES.iter().filter(|rule| rule.group.matches(&text)) {
        recommendations.push(Recommendation::general(rule.general));
        let (therapy_text, therapy_type) = rule.therapy;
        recommendations.push(Recommendation::therapy(therapy_text, therapy_type));
    }

    if recommendations.len() < 2 {
        recommendations.push(Recommendation::general(FALLBACK_EXERCISE));
        recommendations.push(Recommendation::therapy(
            FALLBACK_MINDFULNESS,
            TherapyType::Mindfulness,
        ));
    }

    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}
