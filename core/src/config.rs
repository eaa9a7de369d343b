use crate::error::{Result, ScoreError};
use crate::tokenizer::DEFAULT_MIN_TERM_LENGTH;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TOP_K: usize = 100;

/// Bounds of the display scale, inclusive at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutputRange {
    pub min: f64,
    pub max: f64,
}

impl Default for OutputRange {
    fn default() -> Self { Self { min: 14.0, max: 60.0 } }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreConfig {
    /// Maximum number of terms kept after ranking.
    pub top_k: usize,
    pub output_range: OutputRange,
    pub min_term_length: usize,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            output_range: OutputRange::default(),
            min_term_length: DEFAULT_MIN_TERM_LENGTH,
        }
    }
}

impl ScoreConfig {
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_output_range(mut self, min: f64, max: f64) -> Self {
        self.output_range = OutputRange { min, max };
        self
    }

    pub fn with_min_term_length(mut self, min_term_length: usize) -> Self {
        self.min_term_length = min_term_length;
        self
    }

    /// `top_k == 0` is accepted and simply produces an empty cloud.
    pub fn validate(&self) -> Result<()> {
        let OutputRange { min, max } = self.output_range;
        if !min.is_finite() || !max.is_finite() {
            return Err(ScoreError::invalid_config(format!("output range bounds must be finite, got [{min}, {max}]")));
        }
        if min > max {
            return Err(ScoreError::invalid_config(format!("output range is inverted: [{min}, {max}]")));
        }
        if self.min_term_length == 0 {
            return Err(ScoreError::invalid_config("min_term_length must be at least 1"));
        }
        Ok(())
    }
}
