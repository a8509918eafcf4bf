//! Command-line interface.
//!
//! Thin presentation shell over the ingestion and session core. Acquires a
//! file from a path, runs it through the same validation gate as any other
//! acquisition path, submits it, and renders the outcome.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use console::style;
use tracing::debug;

use textgrab::client::{ExtractionClient, HealthProbe};
use textgrab::config::{BackendConfig, DEFAULT_BASE_URL};
use textgrab::ingest::IngestionController;
use textgrab::models::{BackendStatus, CandidateFile, ExtractionResult};
use textgrab::session::{SessionCoordinator, SessionState};

/// Image text extraction client.
#[derive(Debug, Parser)]
#[command(name = "textgrab", version, about)]
struct Cli {
    /// Backend base URL.
    #[arg(long, global = true, env = "TEXTGRAB_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Command,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Extract text from a single JPG/JPEG image (max 10MB).
    Extract {
        /// Path to the image file.
        file: PathBuf,
    },
    /// Check backend reachability.
    Health,
}

/// Run the CLI.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = BackendConfig::new(&cli.base_url)?;

    match cli.command {
        Command::Extract { file } => extract(&config, &file).await,
        Command::Health => health(&config).await,
    }
}

async fn health(config: &BackendConfig) -> anyhow::Result<()> {
    match HealthProbe::new(config).check().await {
        BackendStatus::Online(health) => {
            println!("Status: {}", style(&health.status).green());
            if let Some(engine) = &health.ocr_engine {
                println!("Engine: {}", engine.to_uppercase());
            }
        }
        BackendStatus::Offline => {
            println!("Status: {}", style("offline").red());
            println!("Backend is not reachable at {}", config.base_url);
        }
    }
    Ok(())
}

async fn extract(config: &BackendConfig, path: &Path) -> anyhow::Result<()> {
    // Reachability only annotates output; a failed probe never blocks the
    // submission below.
    if !HealthProbe::new(config).check().await.is_online() {
        eprintln!(
            "{}",
            style("Warning: backend is not reachable, submitting anyway").yellow()
        );
    }

    let file = CandidateFile::from_path(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let controller = IngestionController::new();
    if let Err(reason) = controller.select_from_picker(file).await {
        anyhow::bail!("{reason}");
    }
    controller.settle_preview().await;
    if let Some(preview) = controller.preview().await {
        debug!(preview_bytes = preview.data_uri().len(), "preview ready");
    }

    let candidate = controller
        .candidate()
        .await
        .context("No file selected for submission")?;
    println!(
        "Selected: {} ({:.2} KB)",
        candidate.name,
        candidate.byte_size() as f64 / 1024.0
    );

    let session = SessionCoordinator::new(ExtractionClient::new(config));
    match session.submit(candidate).await? {
        SessionState::Succeeded(result) => {
            render_result(&result);
            Ok(())
        }
        SessionState::Failed(error) => Err(anyhow::anyhow!("{error}")),
        state => Err(anyhow::anyhow!("session did not settle: {state:?}")),
    }
}

fn render_result(result: &ExtractionResult) {
    println!();
    println!("{}", style("Extraction Results").bold());
    println!("Engine: {}", result.ocr_engine.to_uppercase());
    println!("Confidence: {}%", result.confidence_percent());
    println!("Processing time: {}ms", result.processing_time_ms);
    println!();

    if result.text.is_empty() {
        println!("{}", style("No text detected in the image").italic());
    } else {
        println!("{}", result.text);
        println!();
        println!(
            "{} characters, {} words",
            result.character_count(),
            result.word_count()
        );
    }
}
