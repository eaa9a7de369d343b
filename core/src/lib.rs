pub mod config;
pub mod document;
pub mod error;
pub mod scale;
pub mod scorer;
pub mod source;
pub mod tokenizer;

pub use config::{OutputRange, ScoreConfig};
pub use document::{Document, TokenizedDocument};
pub use error::{Result, ScoreError};
pub use scorer::{score, ScoredTerm};
