use std::path::Path;

use eyre::{WrapErr, eyre};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use mindcare_audit::sink::RecordingSink;
use mindcare_core::models::message::Message;
use mindcare_core::models::recommendation::Recommendation;
use mindcare_core::models::therapy::TherapyType;
use mindcare_export::report::{AssessmentReport, SessionReport};
use mindcare_insights::emotion::{AudioFeatures, analyze_audio_emotion};
use mindcare_insights::guidance::counselor_guidance;
use mindcare_insights::session::ChatSession;
use mindcare_instruments::scoring::Response;
use mindcare_instruments::session::ResponseSet;
use mindcare_instruments::therapy::{
    TherapyGuide, all_therapy_guides, guides_indicated_for, therapy_guide,
};
use mindcare_instruments::{Instrument, all_instruments, lookup_instrument};

use mindcare_cli::config::{MindcareConfig, OutputFormat};

fn read_json<T: DeserializeOwned>(path: &Path) -> eyre::Result<T> {
    let contents = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&contents).wrap_err_with(|| format!("invalid JSON in {}", path.display()))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> eyre::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn score(cfg: &MindcareConfig, assessment: &str, responses_path: &Path) -> eyre::Result<()> {
    let instrument = lookup_instrument(assessment)?;
    let responses: Vec<Response> = read_json(responses_path)?;

    let mut set = ResponseSet::new(instrument.assessment_type());
    for response in &responses {
        set.record(response.question_id.clone(), response.value)?;
    }
    let unanswered: Vec<String> = set.unanswered().into_iter().map(str::to_string).collect();
    if !unanswered.is_empty() {
        warn!(?unanswered, "scoring a partial response set");
    }
    let recorded = set.responses().to_vec();
    let outcome = set.finish();

    match cfg.output {
        OutputFormat::Json => print_json(&outcome),
        OutputFormat::Text => {
            let report = AssessmentReport::new(
                &outcome,
                instrument.as_ref(),
                &recorded,
                cfg.clinician.as_deref(),
            );
            print!("{}", report.render()?);
            Ok(())
        }
    }
}

pub fn catalog(cfg: &MindcareConfig, assessment: Option<&str>) -> eyre::Result<()> {
    let instruments = match assessment {
        Some(id) => vec![lookup_instrument(id)?],
        None => all_instruments(),
    };

    for instrument in &instruments {
        let gaps = instrument.coverage_gaps();
        if !gaps.is_empty() {
            warn!(instrument = instrument.id(), ?gaps, "severity bands leave scores uncovered");
        }
    }

    match cfg.output {
        OutputFormat::Json => {
            let definitions: Vec<_> = instruments.iter().map(|i| i.definition()).collect();
            print_json(&definitions)
        }
        OutputFormat::Text => {
            for instrument in &instruments {
                let def = instrument.definition();
                println!("{} [{}]", def.title, instrument.id());
                println!("  {}", def.description);
                println!("  {} questions, max score {}", def.questions.len(), def.max_score);
                for band in &def.severity_bands {
                    println!("  {:>2}-{:<2} {}", band.range.low, band.range.high, band.label);
                }
                println!();
            }
            Ok(())
        }
    }
}

#[derive(Serialize)]
struct ChatOutput<'a> {
    messages: &'a [Message],
    summary: &'a str,
    recommendations: &'a [Recommendation],
    flagged_messages: usize,
}

pub fn chat(cfg: &MindcareConfig, transcript_path: &Path) -> eyre::Result<()> {
    let lines: Vec<String> = read_json(transcript_path)?;

    let mut session = ChatSession::with_sink(RecordingSink::new());
    for line in &lines {
        session.send(line);
    }
    session.refresh_insights();

    let flagged = session.sink().len();
    if flagged > 0 {
        warn!(flagged, "messages flagged for human review");
    }
    info!(messages = session.messages().len(), "transcript replayed");

    match cfg.output {
        OutputFormat::Json => print_json(&ChatOutput {
            messages: session.messages(),
            summary: session.summary().unwrap_or_default(),
            recommendations: session.recommendations(),
            flagged_messages: flagged,
        }),
        OutputFormat::Text => {
            let report = SessionReport::from_messages(session.messages(), cfg.clinician.as_deref());
            print!("{}", report.render()?);
            if flagged > 0 {
                println!("{flagged} message(s) flagged for review");
            }
            Ok(())
        }
    }
}

pub fn emotion(cfg: &MindcareConfig, samples_path: &Path) -> eyre::Result<()> {
    let samples: Vec<f32> = read_json(samples_path)?;
    if let Some(features) = AudioFeatures::from_samples(&samples) {
        info!(
            avg_volume = features.avg_volume,
            volume_variance = features.volume_variance,
            "audio features"
        );
    }
    let result = analyze_audio_emotion(&samples);
    let guidance = counselor_guidance(&result);

    match cfg.output {
        OutputFormat::Json => print_json(&serde_json::json!({
            "emotion": result,
            "guidance": guidance,
        })),
        OutputFormat::Text => {
            let secondary = result
                .secondary
                .map(|s| format!(" (secondary: {s})"))
                .unwrap_or_default();
            println!(
                "Emotion: {} at {:.0}% confidence{secondary}",
                result.primary,
                result.confidence * 100.0
            );
            println!("Indicators: {}", result.indicators.join(", "));
            println!("\nSuggested questions:");
            for q in &guidance.suggested_questions {
                println!("- {q}");
            }
            if !guidance.potential_diagnoses.is_empty() {
                println!("\nConsider: {}", guidance.potential_diagnoses.join(", "));
            }
            println!("Approach: {}", guidance.recommended_approach);
            Ok(())
        }
    }
}

pub fn guide(
    cfg: &MindcareConfig,
    therapy: Option<&str>,
    indication: Option<&str>,
) -> eyre::Result<()> {
    let guides: Vec<&TherapyGuide> = match (therapy, indication) {
        (Some(id), _) => {
            let therapy_type: TherapyType = id.parse()?;
            let guide = therapy_guide(therapy_type)
                .ok_or_else(|| eyre!("no guide for therapy type '{therapy_type}'"))?;
            vec![guide]
        }
        (None, Some(condition)) => guides_indicated_for(condition),
        (None, None) => all_therapy_guides().iter().collect(),
    };

    match cfg.output {
        OutputFormat::Json => print_json(&guides),
        OutputFormat::Text => {
            for g in &guides {
                println!("{} [{}]", g.name, g.therapy_type);
                println!("  {}", g.description);
                println!(
                    "  {} | {} | {}",
                    g.structure.format, g.structure.typical_duration, g.structure.session_frequency
                );
                println!("  Indications: {}", g.indications.join(", "));
                if !g.contraindications.is_empty() {
                    println!("  Contraindications: {}", g.contraindications.join(", "));
                }
                for session in &g.sessions {
                    println!("  - {session}");
                }
                for r in &g.resources {
                    println!("  * {} <{}>", r.title, r.url);
                }
                println!();
            }
            Ok(())
        }
    }
}
