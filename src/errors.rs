use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] crate::config::ConfigError),
    #[error("artifact error: {0}")]
    Artifact(#[from] crate::artifacts::ArtifactError),
    #[error("report error: {0}")]
    Report(#[from] crate::report::ReportError),
}
