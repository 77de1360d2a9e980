use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use osborn_case_engine::{
    CaseEngine, CaseStore, FindOptions, JsonFileStore, KeywordAnalysis, NineDimensions, QualityTier, RandomSource,
    SeededRandom, SqliteStore, ThreadRandom,
};

#[derive(Parser)]
#[command(name = "osborn-case-cli")]
#[command(about = "Osborn checklist local case library", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Case store path (.db/.sqlite for SQLite, anything else for a JSON file)
    #[arg(short, long, default_value = "osborn_cases.json")]
    store: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Find stored cases similar to a topic
    Search {
        topic: String,

        #[arg(long, default_value = "0.3")]
        min_similarity: f64,

        #[arg(short, long, default_value = "10")]
        max_results: usize,

        /// Only cases of this tier (high, medium, low)
        #[arg(short, long)]
        quality: Option<QualityTier>,

        /// Disable the keyword-overlap rescue
        #[arg(long)]
        no_semantic: bool,
    },

    /// Save a case from a JSON file holding keywordAnalysis and nineDimensions
    Save {
        topic: String,

        #[arg(short, long)]
        input: PathBuf,
    },

    /// Delete a stored case
    Delete { topic: String },

    /// Library statistics
    Stats,

    /// Analyse a topic from the library and generate suggestions
    Analyze {
        topic: String,

        /// Seed for reproducible inspiration draws
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct CasePayload {
    keyword_analysis: KeywordAnalysis,
    nine_dimensions: NineDimensions,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Analysis {
    topic: String,
    keyword_analysis: KeywordAnalysis,
    nine_dimensions: NineDimensions,
}

fn open_store(path: &Path) -> anyhow::Result<Arc<dyn CaseStore>> {
    let is_sqlite = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("db") | Some("sqlite")
    );

    if is_sqlite {
        let path = path
            .to_str()
            .ok_or_else(|| anyhow::anyhow!("store path is not valid UTF-8: {}", path.display()))?;
        Ok(Arc::new(SqliteStore::new(path)?))
    } else {
        Ok(Arc::new(JsonFileStore::new(path)))
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr, stdout carries JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("osborn_case_engine=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let engine = CaseEngine::new(open_store(&cli.store)?);

    match cli.command {
        Commands::Search {
            topic,
            min_similarity,
            max_results,
            quality,
            no_semantic,
        } => {
            let mut options = FindOptions::default()
                .with_min_similarity(min_similarity)
                .with_max_results(max_results);
            if let Some(tier) = quality {
                options = options.with_quality_filter(tier);
            }
            if no_semantic {
                options = options.without_semantic_search();
            }

            print_json(&engine.find_similar_cases(&topic, &options))?;
        }

        Commands::Save { topic, input } => {
            let payload: CasePayload = serde_json::from_str(&std::fs::read_to_string(&input)?)?;
            let record = engine.save_case(&topic, payload.keyword_analysis, payload.nine_dimensions)?;
            print_json(&record)?;
        }

        Commands::Delete { topic } => {
            let deleted = engine.delete_case(&topic)?;
            print_json(&serde_json::json!({ "topic": topic, "deleted": deleted }))?;
        }

        Commands::Stats => {
            print_json(&engine.case_stats())?;
        }

        Commands::Analyze { topic, seed } => {
            let mut random: Box<dyn RandomSource> = match seed {
                Some(seed) => Box::new(SeededRandom::new(seed)),
                None => Box::new(ThreadRandom),
            };

            let analysis = Analysis {
                keyword_analysis: engine.analyze_topic(&topic),
                nine_dimensions: engine.generate_nine_dimensions(&topic, random.as_mut()),
                topic,
            };
            print_json(&analysis)?;
        }
    }

    Ok(())
}
