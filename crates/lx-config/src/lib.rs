pub mod config;
pub mod fallback;
pub mod logging;
mod validate;

pub use config::{
    DEFAULT_INPUT, DEFAULT_LIMIT, DEFAULT_OUTPUT, PathsConfig, TransformConfig, XformConfig,
};
pub use fallback::{FallbackRanges, FloatRange, IntRange};
pub use logging::{LogFormat, LoggingConfig};
