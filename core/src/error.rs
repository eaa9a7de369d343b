//! Error types for termcloud.
//!
//! Scoring itself never fails on well-formed input; every error here is a
//! defect in caller-supplied data or configuration, reported once.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScoreError>;

#[derive(Error, Debug)]
pub enum ScoreError {
    /// A document is missing its identifier or text, or has the wrong shape.
    #[error("invalid document at position {index}: {reason}")]
    InvalidDocument { index: usize, reason: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON in a corpus file; `line` is set for JSONL input.
    #[error("malformed JSON in {path}{}: {source}", .line.map(|l| format!(" line {l}")).unwrap_or_default())]
    Json {
        path: PathBuf,
        line: Option<usize>,
        #[source]
        source: serde_json::Error,
    },
}

impl ScoreError {
    pub fn invalid_document(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidDocument { index, reason: reason.into() }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}
