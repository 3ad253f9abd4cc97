use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

/// Logging configuration. All fields have defaults so the entire `[logging]`
/// section may be omitted from `logxform.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Global log level filter (e.g. `"warn"`, `"debug"`).
    pub level: String,
    /// Per-module level overrides, e.g. `{ "lx_core::transform" = "debug" }`.
    pub modules: HashMap<String, String>,
    /// Optional file path for log output. Relative paths are resolved against
    /// the config file's parent directory.
    pub file: Option<PathBuf>,
    /// Output format: `plain` (human-readable) or `json` (structured).
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        // stdout carries the run summary; keep stderr quiet unless asked.
        Self {
            level: "warn".to_string(),
            modules: HashMap::new(),
            file: None,
            format: LogFormat::Plain,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Plain,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        #[serde(default)]
        logging: LoggingConfig,
    }

    #[test]
    fn missing_section_uses_defaults() {
        let w: Wrapper = toml::from_str("").unwrap();
        assert_eq!(w.logging.level, "warn");
        assert!(w.logging.modules.is_empty());
        assert!(w.logging.file.is_none());
        assert_eq!(w.logging.format, LogFormat::Plain);
    }

    #[test]
    fn json_format_and_module_overrides() {
        let w: Wrapper = toml::from_str(
            r#"
[logging]
level = "info"
format = "json"
file = "logs/logxform.log"
modules = { "lx_core::transform" = "debug" }
"#,
        )
        .unwrap();
        assert_eq!(w.logging.level, "info");
        assert_eq!(w.logging.format, LogFormat::Json);
        assert_eq!(
            w.logging.file.as_deref(),
            Some(std::path::Path::new("logs/logxform.log"))
        );
        assert_eq!(
            w.logging.modules.get("lx_core::transform").map(String::as_str),
            Some("debug")
        );
    }

    #[test]
    fn unknown_format_is_rejected() {
        let err = toml::from_str::<Wrapper>("[logging]\nformat = \"yaml\"\n");
        assert!(err.is_err());
    }
}
