use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use gazette::config::{Config, VectorizerBackend};
use gazette::normalize::Normalizer;
use gazette::vectorize::embedding::EmbeddingVectorizer;
use gazette::vectorize::encoder::HttpSentenceEncoder;
use gazette::vectorize::tfidf::TfIdfVectorizer;
use gazette::vectorize::traits::Vectorizer;
use gazette::{ingest, output, pipeline};

/// Gazette: near-duplicate detection for aggregated news articles.
///
/// Normalizes article text, vectorizes the batch, and reports pairs of
/// articles similar enough to be the same underlying story.
#[derive(Parser)]
#[command(name = "gazette", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a batch of articles and write the CSV output
    Normalize {
        /// JSON file containing the raw articles
        input: PathBuf,

        /// Destination CSV file
        #[arg(long, default_value = "news_combined.csv")]
        output: PathBuf,
    },

    /// Run the full pipeline: normalize, persist, detect duplicates
    Detect {
        /// JSON file containing the raw articles
        input: PathBuf,

        /// Destination CSV file for the normalized batch
        #[arg(long, default_value = "news_combined.csv")]
        output: PathBuf,

        /// Similarity threshold, inclusive (overrides GAZETTE_THRESHOLD)
        #[arg(long)]
        threshold: Option<f64>,

        /// Vectorization strategy: tfidf or embedding (overrides GAZETTE_VECTORIZER)
        #[arg(long)]
        vectorizer: Option<String>,

        /// Skip writing the CSV file
        #[arg(long)]
        no_csv: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("gazette=info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = Config::load()?;

    match cli.command {
        Commands::Normalize { input, output } => {
            let documents = ingest::load_documents(&input)?;
            println!("Normalizing {} articles...", documents.len());

            let normalizer = Normalizer::new(config.language);
            let documents = pipeline::normalize_batch(documents, &normalizer);

            output::csv::write_documents(&documents, &output)?;
            println!(
                "{}",
                format!("Normalized batch saved to: {}", output.display()).bold()
            );
        }

        Commands::Detect {
            input,
            output,
            threshold,
            vectorizer,
            no_csv,
        } => {
            if let Some(threshold) = threshold {
                config.threshold = threshold;
            }
            if let Some(ref name) = vectorizer {
                config.vectorizer_backend = parse_backend(name)?;
            }

            let documents = ingest::load_documents(&input)?;
            println!("Normalizing {} articles...", documents.len());

            let normalizer = Normalizer::new(config.language);
            let documents = pipeline::normalize_batch(documents, &normalizer);

            // Persist the normalized batch before detection, so a later
            // vectorization failure doesn't cost us the cleaned data.
            if !no_csv {
                output::csv::write_documents(&documents, &output)?;
                println!("Normalized batch saved to: {}", output.display());
            }

            let vectorizer = create_vectorizer(&config)?;

            println!(
                "Detecting duplicates (threshold {:.2})...",
                config.threshold
            );
            let report =
                pipeline::detect_duplicates(&documents, vectorizer.as_ref(), config.threshold)
                    .await?;

            output::terminal::display_report(&report);
        }
    }

    Ok(())
}

/// Build the vectorizer for the configured backend.
fn create_vectorizer(config: &Config) -> Result<Box<dyn Vectorizer>> {
    match config.vectorizer_backend {
        VectorizerBackend::TfIdf => {
            info!("Using TF-IDF vectorizer");
            Ok(Box::new(TfIdfVectorizer))
        }
        VectorizerBackend::Embedding => {
            config.require_encoder()?;
            info!(endpoint = %config.encoder_url, "Using sentence-encoder vectorizer");
            let encoder = HttpSentenceEncoder::new(
                config.encoder_url.clone(),
                config.encoder_api_key.clone(),
                config.encoder_timeout_secs,
            );
            Ok(Box::new(EmbeddingVectorizer::new(
                Arc::new(encoder),
                config.encoder_concurrency,
            )))
        }
    }
}

fn parse_backend(name: &str) -> Result<VectorizerBackend> {
    match name {
        "tfidf" => Ok(VectorizerBackend::TfIdf),
        "embedding" => Ok(VectorizerBackend::Embedding),
        other => anyhow::bail!("unknown vectorizer '{other}' (expected: tfidf, embedding)"),
    }
}
