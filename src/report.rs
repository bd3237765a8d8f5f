use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use thiserror::Error;

use crate::obfuscator::Obfuscator;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// End-of-run report: the unused-words section comes first and is omitted
/// when every configured word was substituted; the mapping follows in
/// sorted order.
#[derive(Debug, Serialize)]
pub struct ObfuscationReport {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unused_words: Vec<String>,
    pub mapping: BTreeMap<String, String>,
}

impl ObfuscationReport {
    /// `eligible` supplies word-list order for the unused section.
    pub fn from_run(eligible: &[String], obfuscator: &Obfuscator) -> Self {
        let used = obfuscator.used_words();
        let unused_words = eligible
            .iter()
            .filter(|word| !used.contains(*word))
            .cloned()
            .collect();
        let mapping = obfuscator
            .mapping()
            .iter()
            .map(|(word, token)| (word.clone(), token.clone()))
            .collect();
        Self {
            unused_words,
            mapping,
        }
    }
}

/// Overwrites `path` with the serialized report. A missing parent directory
/// is fatal to the run; the report is required output.
pub fn write_report(path: &str, report: &ObfuscationReport) -> Result<(), ReportError> {
    let body = serde_json::to_string_pretty(report)?;
    fs::write(path, body)?;
    Ok(())
}
