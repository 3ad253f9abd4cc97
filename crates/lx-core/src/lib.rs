#[macro_use]
mod log_macros;

pub mod check;
pub mod clock;
pub mod error;
pub mod jsonl;
pub mod record;
pub mod tracing_init;
pub mod transform;

pub use check::{CheckProblem, CheckReport, check_output};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{XformError, XformReason, XformResult};
pub use record::{SourceError, SourceRecord, TIMESTAMP_FORMAT, TargetRecord};
pub use transform::{TransformBatch, TransformOutcome, TransformSummary, Transformer, transform};
