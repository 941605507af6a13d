//! Therapy guide catalog.
//!
//! One read-only guide per [`TherapyType`]. Recommendation entries carry a
//! therapy tag that resolves against this catalog.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use mindcare_core::models::therapy::TherapyType;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TherapyGuide {
    pub therapy_type: TherapyType,
    pub name: String,
    pub description: String,
    pub key_principles: Vec<String>,
    pub indications: Vec<String>,
    /// Empty when the guide lists none.
    pub contraindications: Vec<String>,
    pub structure: TherapyStructure,
    /// Session titles in delivery order.
    pub sessions: Vec<String>,
    pub resources: Vec<TherapyResource>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TherapyStructure {
    pub format: String,
    pub typical_duration: String,
    pub session_frequency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TherapyResource {
    pub title: String,
    pub url: String,
    pub description: String,
}

pub fn therapy_guide(therapy_type: TherapyType) -> Option<&'static TherapyGuide> {
    GUIDES.iter().find(|g| g.therapy_type == therapy_type)
}

pub fn all_therapy_guides() -> &'static [TherapyGuide] {
    &GUIDES
}

/// Guides listing an indication that contains `condition` (case-insensitive).
pub fn guides_indicated_for(condition: &str) -> Vec<&'static TherapyGuide> {
    let needle = condition.to_lowercase();
    all_therapy_guides()
        .iter()
        .filter(|g| g.indications.iter().any(|i| i.to_lowercase().contains(&needle)))
        .collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn resource(title: &str, url: &str, description: &str) -> TherapyResource {
    TherapyResource {
        title: title.to_string(),
        url: url.to_string(),
        description: description.to_string(),
    }
}

static GUIDES: LazyLock<Vec<TherapyGuide>> = LazyLock::new(|| {
    vec![
        TherapyGuide {
            therapy_type: TherapyType::Cbt,
            name: "Cognitive Behavioral Therapy (CBT)".to_string(),
            description: "A structured, time-limited approach that focuses on the relationship between thoughts, emotions, and behaviors.".to_string(),
            key_principles: strings(&[
                "Thoughts influence emotions and behaviors",
                "Cognitive distortions contribute to psychological distress",
                "Cognitive restructuring can modify unhelpful thought patterns",
                "Behavioral experiments test and challenge maladaptive beliefs",
            ]),
            indications: strings(&[
                "Depression",
                "Anxiety disorders",
                "Panic disorder",
                "Social phobia",
                "PTSD",
                "OCD",
                "Insomnia",
                "Chronic pain",
            ]),
            contraindications: strings(&[
                "Acute psychosis (unless adapted specifically)",
                "Severe cognitive impairment",
                "Unwillingness to engage in homework",
            ]),
            structure: TherapyStructure {
                format: "Individual or group".to_string(),
                typical_duration: "12-20 sessions".to_string(),
                session_frequency: "Weekly, 45-60 minutes".to_string(),
            },
            sessions: strings(&[
                "Session 1: Introduction to CBT",
                "Session 2: Identifying Cognitive Distortions",
                "Session 3: Cognitive Restructuring",
            ]),
            resources: vec![
                resource(
                    "Feeling Good: The New Mood Therapy",
                    "https://feelinggood.com/books/feeling-good-the-new-mood-therapy/",
                    "Classic CBT self-help book by David Burns",
                ),
                resource(
                    "Center for Clinical Interventions - CBT Workbooks",
                    "https://www.cci.health.wa.gov.au/Resources/Looking-After-Yourself",
                    "Free CBT workbooks and worksheets",
                ),
                resource(
                    "Beck Institute for Cognitive Behavior Therapy",
                    "https://beckinstitute.org/",
                    "Training and resources from Aaron Beck's institute",
                ),
            ],
        },
        TherapyGuide {
            therapy_type: TherapyType::Dbt,
            name: "Dialectical Behavior Therapy (DBT)".to_string(),
            description: "A cognitive-behavioral approach that emphasizes emotional regulation, distress tolerance, interpersonal effectiveness, and mindfulness.".to_string(),
            key_principles: strings(&[
                "Dialectical thinking: balancing acceptance and change",
                "Biosocial theory of emotional dysregulation",
                "Mindfulness as core skill",
                "Building a life worth living",
            ]),
            indications: strings(&[
                "Borderline personality disorder",
                "Chronic suicidality and self-harm",
                "Emotion dysregulation disorders",
                "Substance use disorders",
                "Eating disorders",
                "PTSD with emotional dysregulation",
            ]),
            contraindications: strings(&[]),
            structure: TherapyStructure {
                format: "Individual therapy, skills group, phone coaching, consultation team".to_string(),
                typical_duration: "6-12 months (standard)".to_string(),
                session_frequency: "Weekly individual (50-60 min) and group (2-2.5 hours)".to_string(),
            },
            sessions: strings(&[
                "Session 1: Introduction to DBT and Mindfulness",
            ]),
            resources: vec![
                resource(
                    "DBT Skills Training Manual",
                    "https://behavioraltech.org/resources/books/dbt-skills-training-manual/",
                    "Comprehensive guide by Marsha Linehan",
                ),
                resource(
                    "Behavioral Tech",
                    "https://behavioraltech.org/",
                    "Training organization founded by Marsha Linehan",
                ),
                resource(
                    "DBT Self-Help",
                    "https://www.dbtselfhelp.com/",
                    "Free online DBT skills resources",
                ),
            ],
        },
        TherapyGuide {
            therapy_type: TherapyType::Act,
            name: "Acceptance and Commitment Therapy (ACT)".to_string(),
            description: "A form of behavioral therapy that uses acceptance and mindfulness strategies, together with commitment and behavior change strategies, to increase psychological flexibility.".to_string(),
            key_principles: strings(&[
                "Psychological flexibility",
                "Experiential acceptance vs. avoidance",
                "Cognitive defusion",
                "Self-as-context",
                "Values clarification",
                "Committed action",
            ]),
            indications: strings(&[
                "Anxiety disorders",
                "Depression",
                "Chronic pain",
                "OCD",
                "Stress",
                "Substance use disorders",
            ]),
            contraindications: strings(&[]),
            structure: TherapyStructure {
                format: "Individual or group".to_string(),
                typical_duration: "8-12 sessions".to_string(),
                session_frequency: "Weekly, 50-60 minutes".to_string(),
            },
            sessions: strings(&[
                "Session 1: Creative Hopelessness and Introduction to ACT",
            ]),
            resources: vec![
                resource(
                    "Get Out of Your Mind and Into Your Life",
                    "https://www.newharbinger.com/9781572244252/get-out-of-your-mind-and-into-your-life/",
                    "Self-help ACT workbook by Steven Hayes",
                ),
                resource(
                    "Association for Contextual Behavioral Science",
                    "https://contextualscience.org/",
                    "Professional organization for ACT practitioners",
                ),
                resource(
                    "Happiness Trap",
                    "https://thehappinesstrap.com/",
                    "Resources from Russ Harris",
                ),
            ],
        },
        TherapyGuide {
            therapy_type: TherapyType::Ipt,
            name: "Interpersonal Therapy (IPT)".to_string(),
            description: "A time-limited approach focusing on interpersonal issues as a way to improve depressive symptoms.".to_string(),
            key_principles: strings(&[
                "Depression occurs in interpersonal context",
                "Focus on one of four interpersonal problem areas",
                "Here-and-now focus rather than childhood experiences",
                "Communication analysis and development of social skills",
            ]),
            indications: strings(&[
                "Major depression",
                "Bipolar disorder",
                "Eating disorders",
                "Perinatal depression",
                "Interpersonal difficulties",
            ]),
            contraindications: strings(&[]),
            structure: TherapyStructure {
                format: "Individual".to_string(),
                typical_duration: "12-16 sessions".to_string(),
                session_frequency: "Weekly, 50-60 minutes".to_string(),
            },
            sessions: strings(&[
                "Session 1-3: Initial Phase - Assessment and Focus Area Selection",
            ]),
            resources: vec![
                resource(
                    "Comprehensive Guide to Interpersonal Psychotherapy",
                    "https://www.guilford.com/books/Comprehensive-Guide-to-Interpersonal-Psychotherapy/Weissman-Markowitz-Klerman/9781462538584",
                    "Detailed manual by Weissman, Markowitz & Klerman",
                ),
                resource(
                    "International Society for Interpersonal Psychotherapy",
                    "https://interpersonalpsychotherapy.org/",
                    "Professional organization for IPT",
                ),
                resource(
                    "IPT Institute",
                    "https://iptinstitute.com/",
                    "Training and certification in IPT",
                ),
            ],
        },
        TherapyGuide {
            therapy_type: TherapyType::Psychodynamic,
            name: "Psychodynamic Therapy".to_string(),
            description: "An approach that focuses on unconscious processes and how they influence current behavior, especially through the therapeutic relationship.".to_string(),
            key_principles: strings(&[
                "Unconscious motivation and conflict",
                "Importance of early development and attachment",
                "Transference and countertransference",
                "Defense mechanisms",
                "Gaining insight",
            ]),
            indications: strings(&[
                "Depression",
                "Anxiety",
                "Personality disorders",
                "Relationship difficulties",
                "Identity issues",
                "Complex trauma",
            ]),
            contraindications: strings(&[]),
            structure: TherapyStructure {
                format: "Individual".to_string(),
                typical_duration: "6 months to several years".to_string(),
                session_frequency: "1-2 times weekly, 45-50 minutes".to_string(),
            },
            sessions: strings(&[
                "Early Sessions: Building Alliance and Assessment",
            ]),
            resources: vec![
                resource(
                    "Psychodynamic Diagnostic Manual (PDM-2)",
                    "https://www.guilford.com/books/Psychodynamic-Diagnostic-Manual/Lingiardi-McWilliams/9781462538010",
                    "Comprehensive diagnostic reference",
                ),
                resource(
                    "American Psychoanalytic Association",
                    "https://apsa.org/",
                    "Professional organization for psychodynamic therapy",
                ),
                resource(
                    "Psychotherapy.net",
                    "https://www.psychotherapy.net/",
                    "Training videos and resources",
                ),
            ],
        },
        TherapyGuide {
            therapy_type: TherapyType::Exposure,
            name: "Exposure Therapy".to_string(),
            description: "A behavioral therapy approach that involves exposing clients to feared stimuli in a safe, controlled manner to reduce anxiety and avoidance.".to_string(),
            key_principles: strings(&[
                "Emotional processing theory",
                "Habituation to feared stimuli",
                "Inhibitory learning",
                "Fear extinction",
                "Eliminating safety behaviors and avoidance",
            ]),
            indications: strings(&[
                "Specific phobias",
                "Social anxiety disorder",
                "Panic disorder",
                "OCD",
                "PTSD",
                "Health anxiety",
            ]),
            contraindications: strings(&[]),
            structure: TherapyStructure {
                format: "Individual primarily".to_string(),
                typical_duration: "8-15 sessions".to_string(),
                session_frequency: "Weekly, 60-90 minutes".to_string(),
            },
            sessions: strings(&[
                "Session 1: Psychoeducation and Treatment Planning",
                "Session 2: First Exposure Practice",
            ]),
            resources: vec![
                resource(
                    "Exposure Therapy for Anxiety: Principles and Practice",
                    "https://www.guilford.com/books/Exposure-Therapy-for-Anxiety/Abramowitz-Deacon-Whiteside/9781462530298",
                    "Comprehensive guide by Abramowitz, Deacon & Whiteside",
                ),
                resource(
                    "Center for the Treatment and Study of Anxiety",
                    "https://www.med.upenn.edu/ctsa/",
                    "Research center with exposure therapy protocols",
                ),
                resource(
                    "Anxiety and Depression Association of America",
                    "https://adaa.org/",
                    "Resources for professionals and patients",
                ),
            ],
        },
        TherapyGuide {
            therapy_type: TherapyType::Mindfulness,
            name: "Mindfulness-Based Interventions".to_string(),
            description: "Approaches that incorporate mindfulness meditation and present-moment awareness to improve psychological well-being.".to_string(),
            key_principles: strings(&[
                "Present-moment awareness",
                "Non-judgmental observation",
                "Acceptance of experience",
                "Decentering from thoughts",
                "Self-compassion",
            ]),
            indications: strings(&[
                "Stress",
                "Anxiety",
                "Depression relapse prevention",
                "Chronic pain",
                "Emotion dysregulation",
                "Addictive behaviors",
            ]),
            contraindications: strings(&[]),
            structure: TherapyStructure {
                format: "Individual or group".to_string(),
                typical_duration: "8 weeks (MBSR/MBCT format)".to_string(),
                session_frequency: "Weekly, 90-120 minutes for groups; 50-60 minutes individual".to_string(),
            },
            sessions: strings(&[
                "Session 1: Introduction to Mindfulness",
            ]),
            resources: vec![
                resource(
                    "Mindfulness-Based Cognitive Therapy for Depression",
                    "https://www.guilford.com/books/Mindfulness-Based-Cognitive-Therapy-for-Depression/Segal-Williams-Teasdale/9781462537037",
                    "Definitive MBCT guide by Segal, Williams & Teasdale",
                ),
                resource(
                    "Center for Mindfulness",
                    "https://www.umassmed.edu/cfm/",
                    "Birthplace of MBSR with Jon Kabat-Zinn",
                ),
                resource(
                    "Insight Timer",
                    "https://insighttimer.com/",
                    "Free meditation app with guided practices",
                ),
            ],
        },
        TherapyGuide {
            therapy_type: TherapyType::BehavioralActivation,
            name: "Behavioral Activation".to_string(),
            description: "A structured approach that helps clients increase engagement in rewarding activities and reduce avoidance behaviors.".to_string(),
            key_principles: strings(&[
                "Activity affects mood (not vice versa)",
                "Gradual re-engagement with rewarding activities",
                "Breaking avoidance cycles",
                "External focus rather than internal rumination",
                "Schedule-based rather than mood-based activity",
            ]),
            indications: strings(&[
                "Depression",
                "Low motivation",
                "Behavioral avoidance",
                "Social withdrawal",
                "Anhedonia",
            ]),
            contraindications: strings(&[]),
            structure: TherapyStructure {
                format: "Individual or group".to_string(),
                typical_duration: "8-12 sessions".to_string(),
                session_frequency: "Weekly, 50-60 minutes".to_string(),
            },
            sessions: strings(&[
                "Session 1: BA Rationale and Assessment",
                "Session 2: Activity Scheduling",
            ]),
            resources: vec![
                resource(
                    "Behavioral Activation for Depression: A Clinician's Guide",
                    "https://www.guilford.com/books/Behavioral-Activation-for-Depression/Martell-Dimidjian-Herman-Dunn/9781462510177",
                    "Comprehensive clinical guide by Martell et al.",
                ),
                resource(
                    "The Depression Workbook",
                    "https://www.newharbinger.com/9781684035861/the-depression-workbook/",
                    "Self-help workbook with behavioral activation components",
                ),
                resource(
                    "BATD Treatment Manual",
                    "https://www.div12.org/wp-content/uploads/2016/10/BATD-Protocol-Modified-for-Veterans.pdf",
                    "Brief Behavioral Activation Treatment for Depression protocol",
                ),
            ],
        },
    ]
});
