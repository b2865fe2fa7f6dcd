//! Command-line entry point for the Bloom analyzer.
//!
//! Reads an already-extracted plain-text question paper, runs the analysis
//! pipeline, and writes CSV reports. Binary formats (PDF/DOCX) must be
//! converted to text upstream.

use std::fs;
use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bloom_analyzer::adapters::report;
use bloom_analyzer::application::PaperAnalyzer;
use bloom_analyzer::config::AppConfig;
use bloom_analyzer::domain::taxonomy::Vocabulary;
use bloom_analyzer::ports::TracingObserver;

/// Analyze a question paper against Bloom's Taxonomy.
#[derive(Debug, Parser)]
#[command(name = "bloom-analyzer", version, about)]
struct Cli {
    /// Path to the plain-text question paper
    input: PathBuf,

    /// Write the question-wise CSV report here instead of stdout
    #[arg(long)]
    questions_csv: Option<PathBuf>,

    /// Also write the per-level summary CSV report here
    #[arg(long)]
    summary_csv: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter.clone())),
        )
        .with_writer(io::stderr)
        .init();

    let text = fs::read_to_string(&cli.input)?;
    info!(input = %cli.input.display(), bytes = text.len(), "loaded document");

    let analyzer = PaperAnalyzer::new(
        Vocabulary::default(),
        config.analysis.ideal_distribution()?,
    )
    .with_suggestion_count(config.analysis.suggestion_count)
    .with_observer(Box::new(TracingObserver));

    let analysis = analyzer.analyze(&text);
    info!(
        questions = analysis.summary.total_questions,
        "analysis complete"
    );

    match &cli.questions_csv {
        Some(path) => {
            report::write_question_report(&analysis, fs::File::create(path)?)?;
            info!(path = %path.display(), "wrote question report");
        }
        None => report::write_question_report(&analysis, io::stdout().lock())?,
    }

    if let Some(path) = &cli.summary_csv {
        report::write_summary_report(&analysis.summary, fs::File::create(path)?)?;
        info!(path = %path.display(), "wrote summary report");
    }

    Ok(())
}
