use config as config_rs;
use std::fs;
use thiserror::Error;

/// Resolved run settings plus the eligible-word list.
#[derive(Debug)]
pub struct AppConfig {
    pub words: Vec<String>,
    pub build_dir: String,
    pub extension: String,
    pub report_file: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config error: {0}")]
    Config(#[from] config_rs::ConfigError),
}

/// Reads the newline-delimited eligible-word list (lines trimmed, blanks
/// ignored; a missing file fails the run) and layers the remaining settings:
/// defaults, then `OBFUSCATOR_*` environment variables, then CLI flags.
pub fn load_config(
    words_path: &str,
    build_dir: &Option<String>,
    extension: &str,
    report_file: &Option<String>,
) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(words_path)?;
    let words: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    let mut builder = config_rs::Config::builder()
        .set_default("build_dir", "dist")?
        .set_default("report_file", "obfuscation-report.json")?;

    if let Ok(dir) = std::env::var("OBFUSCATOR_BUILD_DIR") {
        builder = builder.set_override("build_dir", dir)?;
    }
    if let Ok(path) = std::env::var("OBFUSCATOR_REPORT_FILE") {
        builder = builder.set_override("report_file", path)?;
    }

    // CLI flags take precedence
    if let Some(dir) = build_dir {
        builder = builder.set_override("build_dir", dir.clone())?;
    }
    if let Some(path) = report_file {
        builder = builder.set_override("report_file", path.clone())?;
    }

    let cfg = builder.build()?;

    Ok(AppConfig {
        words,
        build_dir: cfg.get::<String>("build_dir")?,
        extension: extension.to_string(),
        report_file: cfg.get::<String>("report_file")?,
    })
}
