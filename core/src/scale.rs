//! Square-root scale from a score domain onto a display range.
//!
//! Term scores are roughly power-law distributed; interpolating on the square
//! root keeps the largest terms from dwarfing everything else.

use crate::config::OutputRange;

#[derive(Debug, Clone, Copy)]
pub struct SqrtScale {
    lo: f64,
    hi: f64,
    range: OutputRange,
}

impl SqrtScale {
    /// `domain` is `(min, max)` of the scores being mapped; both must be `>= 0`.
    pub fn new(domain: (f64, f64), range: OutputRange) -> Self {
        Self { lo: domain.0.max(0.0).sqrt(), hi: domain.1.max(0.0).sqrt(), range }
    }

    /// Map `x` onto the range. The domain endpoints land exactly on the range
    /// endpoints; a degenerate domain maps everything to `range.max`.
    pub fn apply(&self, x: f64) -> f64 {
        let OutputRange { min, max } = self.range;
        let span = self.hi - self.lo;
        if span <= 0.0 {
            return max;
        }
        let t = ((x.max(0.0).sqrt() - self.lo) / span).clamp(0.0, 1.0);
        // min + (max-min)*t can round past max, so pin the top end
        if t >= 1.0 {
            max
        } else {
            (min + (max - min) * t).min(max)
        }
    }
}
