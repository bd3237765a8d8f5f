use clap::Parser;
use prometheus::Registry;
use tracing::info;

use script_obfuscator::artifacts::transform_artifacts;
use script_obfuscator::config::load_config;
use script_obfuscator::errors::AppError;
use script_obfuscator::logger;
use script_obfuscator::metrics::Metrics;
use script_obfuscator::obfuscator::Obfuscator;
use script_obfuscator::report::{self, ObfuscationReport};

#[derive(Parser)]
#[command(name = "script-obfuscator", version)]
struct Cli {
    /// Build output directory to scan for script artifacts
    #[arg(short, long)]
    build_dir: Option<String>,

    /// Newline-delimited list of identifiers approved for renaming
    #[arg(short, long, default_value = "config/obfuscation_words.txt")]
    words: String,

    /// Artifact name suffix selecting which files get rewritten
    #[arg(long, default_value = ".user.js")]
    extension: String,

    /// Where the mapping and unused-word report is written
    #[arg(long)]
    report: Option<String>,
}

fn main() -> Result<(), AppError> {
    logger::init_logging();
    let cli = Cli::parse();
    let cfg = load_config(&cli.words, &cli.build_dir, &cli.extension, &cli.report)?;

    let registry = Registry::new();
    let metrics = Metrics::new(&registry);

    info!(
        "loaded {} eligible words from {}",
        cfg.words.len(),
        cli.words
    );

    let mut obfuscator = Obfuscator::new(cfg.words.clone());
    let transformed = transform_artifacts(&mut obfuscator, &cfg.build_dir, &cfg.extension)?;
    metrics.artifacts_transformed.inc_by(transformed.len() as u64);
    metrics.words_mapped.inc_by(obfuscator.mapping().len() as u64);

    let run_report = ObfuscationReport::from_run(&cfg.words, &obfuscator);
    report::write_report(&cfg.report_file, &run_report)?;

    info!(
        "transformed {} artifacts, mapped {} words, report at {}",
        transformed.len(),
        obfuscator.mapping().len(),
        cfg.report_file
    );
    Ok(())
}
