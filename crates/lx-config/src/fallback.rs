use std::fmt;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// IntRange / FloatRange
// ---------------------------------------------------------------------------

/// Inclusive integer range, written as `[min, max]` in TOML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "(i64, i64)")]
pub struct IntRange {
    pub min: i64,
    pub max: i64,
}

impl IntRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, v: i64) -> bool {
        (self.min..=self.max).contains(&v)
    }
}

impl From<(i64, i64)> for IntRange {
    fn from((min, max): (i64, i64)) -> Self {
        Self { min, max }
    }
}

impl fmt::Display for IntRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// Half-open float range `[min, max)`, written as `[min, max]` in TOML.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(from = "(f64, f64)")]
pub struct FloatRange {
    pub min: f64,
    pub max: f64,
}

impl FloatRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, v: f64) -> bool {
        (self.min..self.max).contains(&v)
    }
}

impl From<(f64, f64)> for FloatRange {
    fn from((min, max): (f64, f64)) -> Self {
        Self { min, max }
    }
}

impl fmt::Display for FloatRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.min, self.max)
    }
}

// ---------------------------------------------------------------------------
// FallbackRanges
// ---------------------------------------------------------------------------

/// Ranges the transformer draws from when a source field is missing.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct FallbackRanges {
    pub process_count: IntRange,
    pub cpu_percent: FloatRange,
    pub mem_percent: FloatRange,
}

impl FallbackRanges {
    /// Every range must hold at least one value: `min <= max` for the
    /// inclusive integer range, finite `min < max` for the float ranges.
    pub fn validate(&self) -> anyhow::Result<()> {
        let pc = self.process_count;
        if pc.min > pc.max {
            anyhow::bail!("fallback.process_count: min ({}) exceeds max ({})", pc.min, pc.max);
        }
        check_float_range("fallback.cpu_percent", &self.cpu_percent)?;
        check_float_range("fallback.mem_percent", &self.mem_percent)?;
        Ok(())
    }
}

fn check_float_range(key: &str, range: &FloatRange) -> anyhow::Result<()> {
    if !range.min.is_finite() || !range.max.is_finite() {
        anyhow::bail!("{key}: bounds must be finite, got {range}");
    }
    // half-open: an empty range has nothing to sample
    if range.min >= range.max {
        anyhow::bail!("{key}: min ({}) must be < max ({})", range.min, range.max);
    }
    Ok(())
}

impl Default for FallbackRanges {
    fn default() -> Self {
        Self {
            process_count: IntRange::new(600, 700),
            cpu_percent: FloatRange::new(0.0, 100.0),
            mem_percent: FloatRange::new(70.0, 80.0),
        }
    }
}
