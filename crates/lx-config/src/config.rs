use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

use crate::fallback::FallbackRanges;
use crate::logging::LoggingConfig;
use crate::validate;

pub const DEFAULT_INPUT: &str = "Project exhibition/src/data/synthetic_logs.jsonl";
pub const DEFAULT_OUTPUT: &str = "Project exhibition/data/logs.jsonl";
pub const DEFAULT_LIMIT: usize = 1000;

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// `[paths]` — where to read source samples and write target records.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

/// `[transform]` — line cap and optional RNG seed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    /// Maximum number of input lines inspected (not records emitted).
    pub limit: usize,
    /// Seed for fallback values. `None` draws from the thread-local RNG.
    pub seed: Option<u64>,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            seed: None,
        }
    }
}

// ---------------------------------------------------------------------------
// XformConfig
// ---------------------------------------------------------------------------

/// Resolved, validated contents of `logxform.toml`.
///
/// Every section is optional; [`XformConfig::default`] is what a run without
/// a config file uses.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct XformConfig {
    pub paths: PathsConfig,
    pub transform: TransformConfig,
    pub fallback: FallbackRanges,
    pub logging: LoggingConfig,
}

impl XformConfig {
    /// Read and parse a `logxform.toml` file.
    ///
    /// Relative `paths.*` and `logging.file` entries are resolved against the
    /// config file's parent directory.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
        let mut config: XformConfig = content.parse()?;
        if let Some(base_dir) = path.parent() {
            config.rebase(base_dir);
        }
        Ok(config)
    }

    fn rebase(&mut self, base_dir: &Path) {
        let join = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base_dir.join(&*p);
            }
        };
        join(&mut self.paths.input);
        join(&mut self.paths.output);
        if let Some(file) = self.logging.file.as_mut() {
            join(file);
        }
    }
}

impl FromStr for XformConfig {
    type Err = anyhow::Error;

    /// Parse a TOML string into a validated [`XformConfig`]. Paths are left
    /// as written.
    fn from_str(toml_str: &str) -> anyhow::Result<Self> {
        let config: XformConfig = toml::from_str(toml_str)?;
        validate::validate(&config)?;
        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
