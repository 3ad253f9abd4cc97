use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDateTime, Timelike};
use orion_error::ErrorOweBase;
use orion_error::prelude::*;
use serde::Serialize;

use crate::error::{XformReason, XformResult};
use crate::record::{TIMESTAMP_FORMAT, TargetRecord};

/// A structural problem found on one output line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckProblem {
    /// 1-based line number.
    pub line: usize,
    pub message: String,
}

/// Result of checking a transformed JSONL file.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub path: PathBuf,
    pub records: usize,
    pub problems: Vec<CheckProblem>,
}

impl CheckReport {
    pub fn is_ok(&self) -> bool {
        self.problems.is_empty()
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.is_ok() { "pass" } else { "fail" };
        writeln!(
            f,
            "{}: {} records, {} problem(s) [{status}]",
            self.path.display(),
            self.records,
            self.problems.len()
        )?;
        for p in &self.problems {
            writeln!(f, "  line {}: {}", p.line, p.message)?;
        }
        Ok(())
    }
}

/// Verify that every non-empty line of `path` is a well-formed target record.
///
/// Metric values are not range-checked: source values pass through the
/// transform unvalidated.
pub fn check_output(path: &Path) -> XformResult<CheckReport> {
    let position = path.display().to_string();
    let file = File::open(path)
        .owe(XformReason::Check)
        .position(position.clone())?;

    let mut report = CheckReport {
        path: path.to_path_buf(),
        records: 0,
        problems: Vec::new(),
    };

    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line = line.owe(XformReason::Check).position(position.clone())?;
        if line.trim().is_empty() {
            continue;
        }
        match check_line(&line) {
            Ok(()) => report.records += 1,
            Err(message) => report.problems.push(CheckProblem {
                line: idx + 1,
                message,
            }),
        }
    }

    Ok(report)
}

fn check_line(line: &str) -> Result<(), String> {
    let rec: TargetRecord = serde_json::from_str(line).map_err(|e| e.to_string())?;

    if rec.hour > 23 {
        return Err(format!("hour {} out of range 0..=23", rec.hour));
    }
    if rec.weekday > 6 {
        return Err(format!("weekday {} out of range 0..=6", rec.weekday));
    }
    let ts = NaiveDateTime::parse_from_str(&rec.timestamp, TIMESTAMP_FORMAT)
        .map_err(|e| format!("timestamp {:?}: {e}", rec.timestamp))?;
    // parsing accepts a missing or short fraction; require the exact shape
    if ts.format(TIMESTAMP_FORMAT).to_string() != rec.timestamp {
        return Err(format!(
            "timestamp {:?}: expected microsecond precision",
            rec.timestamp
        ));
    }
    if ts.hour() != rec.hour {
        return Err(format!(
            "hour {} disagrees with timestamp {}",
            rec.hour, rec.timestamp
        ));
    }
    if ts.weekday().num_days_from_monday() != rec.weekday {
        return Err(format!(
            "weekday {} disagrees with timestamp {}",
            rec.weekday, rec.timestamp
        ));
    }
    Ok(())
}
