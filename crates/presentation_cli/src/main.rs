//! Productive Panda CLI
//!
//! Command-line front end for text normalization, mood analysis and task
//! recommendation. Results are printed as pretty JSON on stdout.

#![allow(clippy::print_stdout)]

use std::{path::Path, path::PathBuf, sync::Arc};

use anyhow::Context;
use application::{
    MoodClassifier, MoodService, SelectionPolicy, SentimentService, TaskRanker,
    TaskRecommendationService, TextNormalizer,
};
use clap::{Parser, Subcommand, ValueEnum};
use domain::Task;
use infrastructure::{AppConfig, SentimentAdapter, init_telemetry};
use serde_json::Value;
use tracing::debug;

/// Productive Panda CLI
#[derive(Debug, Parser)]
#[command(name = "panda-cli")]
#[command(author, version, about = "Mood analysis and task recommendation", long_about = None)]
struct Cli {
    /// Verbosity level (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (default: ./config.toml when present)
    #[arg(short, long, global = true, env = "PANDA_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the normalized form of a text
    Normalize {
        /// Text to normalize
        text: String,
    },

    /// Score a text and classify the mood
    Analyze {
        /// Free-text mood entry
        text: String,

        /// Threshold pair used for classification
        #[arg(long, value_enum, default_value_t = ThresholdSet::Dashboard)]
        thresholds: ThresholdSet,
    },

    /// Score every task and order the list for a mood score
    Rank {
        /// JSON file with a list of tasks
        #[arg(short, long)]
        tasks: PathBuf,

        /// Mood score in [-1, 1]; its sign picks the ordering
        #[arg(short, long, allow_negative_numbers = true)]
        mood_score: f64,
    },

    /// Derive the mood from a task list and recommend tasks
    Recommend {
        /// JSON file with a list of tasks
        #[arg(short, long)]
        tasks: PathBuf,

        /// Selection policy (match-mood or rank)
        #[arg(long, default_value_t = SelectionPolicy::MatchMood)]
        policy: SelectionPolicy,
    },

    /// Print the effective configuration with secrets redacted
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ThresholdSet {
    Dashboard,
    TaskAnalysis,
}

fn load_config(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let config = match path {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => AppConfig::load().context("Failed to load configuration")?,
    };
    Ok(config)
}

/// Read a task list, either a bare array or an object with a `tasks` array
fn read_tasks(path: &Path) -> anyhow::Result<Vec<Task>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let mut value: Value = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;

    if let Some(tasks) = value.get_mut("tasks") {
        value = tasks.take();
    }

    let tasks = Task::list_from_json(&value)
        .with_context(|| format!("Invalid task list in {}", path.display()))?;
    debug!(count = tasks.len(), "Tasks loaded");
    Ok(tasks)
}

fn sentiment_service(config: &AppConfig) -> anyhow::Result<Arc<SentimentService>> {
    let adapter = SentimentAdapter::new(config.sentiment.to_client_config())?;
    let overrides = config.mood.to_score_overrides()?;
    Ok(Arc::new(
        SentimentService::new(Arc::new(adapter)).with_overrides(overrides),
    ))
}

fn print_json(value: &impl serde::Serialize) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    init_telemetry(&config.telemetry.clone().with_verbosity(cli.verbose))?;

    let normalizer = TextNormalizer::english();

    match cli.command {
        Commands::Normalize { text } => {
            print_json(&serde_json::json!({
                "input": text,
                "normalized": normalizer.normalize(&text),
            }))?;
        },

        Commands::Analyze { text, thresholds } => {
            let thresholds = match thresholds {
                ThresholdSet::Dashboard => config.mood.dashboard_thresholds()?,
                ThresholdSet::TaskAnalysis => config.mood.task_analysis_thresholds()?,
            };
            let service = MoodService::new(normalizer, sentiment_service(&config)?)
                .with_classifier(MoodClassifier::new(thresholds));

            print_json(&service.analyze_mood(&text).await?)?;
        },

        Commands::Rank { tasks, mood_score } => {
            let tasks = read_tasks(&tasks)?;
            let ranker = TaskRanker::new(normalizer, sentiment_service(&config)?);

            print_json(&ranker.rank(&tasks, mood_score).await)?;
        },

        Commands::Recommend { tasks, policy } => {
            let tasks = read_tasks(&tasks)?;
            let service = TaskRecommendationService::new(normalizer, sentiment_service(&config)?)
                .with_thresholds(config.mood.task_analysis_thresholds()?);

            print_json(&service.recommend(&tasks, policy).await?)?;
        },

        Commands::Config => {
            print_json(&config.to_redacted_json())?;
        },
    }

    Ok(())
}
