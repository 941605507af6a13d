use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use mindcare_cli::config::{self, LogFormat, OutputFormat};

#[derive(Parser, Debug)]
#[command(
    name = "mindcare",
    about = "Score mental-health questionnaires and analyze support chat transcripts",
    version
)]
struct Cli {
    /// Config file location (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Override the configured output format
    #[arg(long, global = true, value_enum)]
    output: Option<OutputFormat>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a completed (or partial) questionnaire
    Score(ScoreArgs),
    /// List questionnaire definitions and check their severity bands
    Catalog {
        /// Only show this assessment (phq9, gad7, pcl5)
        #[arg(long)]
        assessment: Option<String>,
    },
    /// Replay a chat transcript and report sentiment, summary, and suggestions
    Chat {
        /// JSON array of user message strings
        #[arg(long)]
        transcript: PathBuf,
    },
    /// Estimate emotion from an audio sample and suggest counselor questions
    Emotion {
        /// JSON array of signed amplitude samples
        #[arg(long)]
        samples: PathBuf,
    },
    /// Show a therapy guide
    Guide(GuideArgs),
    /// Manage the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Args, Debug)]
struct ScoreArgs {
    /// Assessment id (phq9, gad7, pcl5)
    #[arg(long)]
    assessment: String,
    /// JSON array of {"question_id": ..., "value": ...} objects
    #[arg(long)]
    responses: PathBuf,
}

#[derive(Args, Debug)]
struct GuideArgs {
    /// Therapy type (e.g. cbt, behavioral-activation)
    therapy: Option<String>,
    /// List guides indicated for a condition instead
    #[arg(long, conflicts_with = "therapy")]
    indication: Option<String>,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a config file with the given settings
    Init {
        #[arg(long)]
        clinician: Option<String>,
        #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
        log_format: LogFormat,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },
    /// Print the active config
    Show,
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };
    let loaded = config::load_config(&config_path)?;
    let mut cfg = loaded.config;
    if let Some(output) = cli.output {
        cfg.output = output;
    }

    init_tracing(cfg.log_format);
    if let Some(from) = loaded.migrated_from {
        tracing::info!(
            path = %config_path.display(),
            from,
            to = config::CURRENT_VERSION,
            "migrated config"
        );
    }

    match cli.command {
        Command::Score(args) => commands::score(&cfg, &args.assessment, &args.responses),
        Command::Catalog { assessment } => commands::catalog(&cfg, assessment.as_deref()),
        Command::Chat { transcript } => commands::chat(&cfg, &transcript),
        Command::Emotion { samples } => commands::emotion(&cfg, &samples),
        Command::Guide(args) => {
            commands::guide(&cfg, args.therapy.as_deref(), args.indication.as_deref())
        }
        Command::Config { command } => match command {
            ConfigCommand::Init {
                clinician,
                log_format,
                output,
            } => {
                let new_cfg = config::MindcareConfig {
                    log_format,
                    output,
                    clinician,
                    ..config::MindcareConfig::default()
                };
                config::save_config(&config_path, &new_cfg)?;
                println!("wrote {}", config_path.display());
                Ok(())
            }
            ConfigCommand::Show => {
                println!("{}", serde_json::to_string_pretty(&cfg)?);
                Ok(())
            }
        },
    }
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_env("MINDCARE_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
