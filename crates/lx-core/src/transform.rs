
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use lx_config::{DEFAULT_LIMIT, FallbackRanges};
use orion_error::ErrorOweBase;
use orion_error::prelude::*;
use rand::Rng;

use crate::clock::{Clock, SystemClock};
use crate::error::{XformReason, XformResult};
use crate::jsonl::write_records_jsonl;
use crate::record::{SourceRecord, TargetRecord};

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// Records accumulated from one pass over an input stream.
#[derive(Debug, Default)]
pub struct TransformBatch {
    pub records: Vec<TargetRecord>,
    /// Lines consumed, including empty and discarded ones. Never exceeds the
    /// transformer's limit.
    pub lines_read: usize,
    /// Non-empty lines that did not yield a record.
    pub skipped: usize,
}

/// What a completed file run reports back to the caller.
#[derive(Debug)]
pub struct TransformSummary {
    pub output: PathBuf,
    pub count: usize,
    /// First record written, if any.
    pub sample: Option<TargetRecord>,
    pub lines_read: usize,
    pub skipped: usize,
}

#[derive(Debug)]
pub enum TransformOutcome {
    Written(TransformSummary),
    /// The input file does not exist; nothing was written.
    InputMissing(PathBuf),
}

// ---------------------------------------------------------------------------
// Transformer
// ---------------------------------------------------------------------------

/// Maps source metric samples onto the target schema.
///
/// The clock is a type parameter and the RNG is passed per call so tests can
/// pin both.
#[derive(Debug, Clone)]
pub struct Transformer<C = SystemClock> {
    clock: C,
    limit: usize,
    fallback: FallbackRanges,
}

impl Transformer<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Transformer<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Transformer<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            limit: DEFAULT_LIMIT,
            fallback: FallbackRanges::default(),
        }
    }

    /// Maximum number of input lines inspected per run.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Replace the fallback ranges. Ranges that hold no value are rejected,
    /// since drawing from them would panic.
    pub fn fallback(mut self, fallback: FallbackRanges) -> XformResult<Self> {
        fallback.validate().owe(XformReason::Fallback)?;
        self.fallback = fallback;
        Ok(self)
    }

    /// Transform one source record, reading the clock once.
    pub fn transform_entry<R: Rng>(&self, source: &SourceRecord, rng: &mut R) -> TargetRecord {
        TargetRecord::build(source, self.clock.now(), &self.fallback, rng)
    }

    /// Consume at most `limit` lines from `reader`, keeping the records of
    /// every line that parses as a usable JSON object.
    ///
    /// Empty, malformed and non-object lines are dropped without error. Read
    /// failures (including invalid UTF-8) abort the pass.
    pub fn transform_reader<B, R>(&self, reader: B, rng: &mut R) -> XformResult<TransformBatch>
    where
        B: BufRead,
        R: Rng,
    {
        let mut batch = TransformBatch::default();

        for (idx, line) in reader.lines().take(self.limit).enumerate() {
            let line_no = idx + 1;
            let line = line
                .owe(XformReason::Input)
                .position(format!("line {line_no}"))?;
            batch.lines_read = line_no;

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let value: serde_json::Value = match serde_json::from_str(trimmed) {
                Ok(v) => v,
                Err(e) => {
                    lx_debug!(pipe, line = line_no, error = %e, "discarding malformed line");
                    batch.skipped += 1;
                    continue;
                }
            };
            let source = match SourceRecord::from_value(&value) {
                Ok(s) => s,
                Err(e) => {
                    lx_debug!(pipe, line = line_no, error = %e, "discarding unusable record");
                    batch.skipped += 1;
                    continue;
                }
            };

            batch.records.push(self.transform_entry(&source, rng));
        }

        Ok(batch)
    }

    /// Transform `input` into `output`.
    ///
    /// A missing input file yields [`TransformOutcome::InputMissing`] and
    /// leaves `output` untouched. The output file is only opened once every
    /// input line has been processed.
    pub fn transform_file<R: Rng>(
        &self,
        input: &Path,
        output: &Path,
        rng: &mut R,
    ) -> XformResult<TransformOutcome> {
        let file = match File::open(input) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                lx_warn!(res, path = %input.display(), "input file not found");
                return Ok(TransformOutcome::InputMissing(input.to_path_buf()));
            }
            Err(e) => {
                return StructError::from(XformReason::Input)
                    .with_detail(format!("open {}: {e}", input.display()))
                    .err();
            }
        };
        lx_debug!(res, path = %input.display(), limit = self.limit, "reading input");

        let batch = self
            .transform_reader(BufReader::new(file), rng)
            .position(input.display().to_string())?;

        write_records_jsonl(&batch.records, output)?;
        lx_info!(
            sys,
            records = batch.records.len(),
            lines = batch.lines_read,
            skipped = batch.skipped,
            output = %output.display(),
            "transform complete"
        );

        let TransformBatch {
            records,
            lines_read,
            skipped,
        } = batch;
        Ok(TransformOutcome::Written(TransformSummary {
            output: output.to_path_buf(),
            count: records.len(),
            sample: records.into_iter().next(),
            lines_read,
            skipped,
        }))
    }
}

/// Run one transform with the system clock, the thread-local RNG and default
/// fallback ranges.
pub fn transform(input: &Path, output: &Path, limit: usize) -> XformResult<TransformOutcome> {
    Transformer::new()
        .limit(limit)
        .transform_file(input, output, &mut rand::rng())
}
