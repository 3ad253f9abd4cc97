use std::fmt;

use chrono::{Datelike, NaiveDateTime, Timelike};
use lx_config::FallbackRanges;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `chrono` format of [`TargetRecord::timestamp`]: ISO-8601 local time with
/// microsecond precision and no offset.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

// ---------------------------------------------------------------------------
// SourceRecord
// ---------------------------------------------------------------------------

/// One synthetic metric sample as read from the input file.
///
/// Each field is `None` when the key is absent or `null`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceRecord {
    pub processes: Option<i64>,
    pub cpu: Option<f64>,
    pub ram: Option<f64>,
}

/// Why a parsed JSON value could not be used as a source record.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SourceError {
    #[error("expected a JSON object")]
    NotObject,
    #[error("field '{0}' is not numeric")]
    NotNumeric(&'static str),
}

impl SourceRecord {
    /// Extract the known keys from a parsed JSON line, coercing numbers and
    /// numeric strings. Unknown keys are ignored.
    pub fn from_value(value: &Value) -> Result<Self, SourceError> {
        let obj = value.as_object().ok_or(SourceError::NotObject)?;
        Ok(Self {
            processes: field(obj, "processes", coerce_int)?,
            cpu: field(obj, "cpu", coerce_float)?,
            ram: field(obj, "ram", coerce_float)?,
        })
    }
}

fn field<T>(
    obj: &Map<String, Value>,
    key: &'static str,
    coerce: fn(&Value) -> Option<T>,
) -> Result<Option<T>, SourceError> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => coerce(v).map(Some).ok_or(SourceError::NotNumeric(key)),
    }
}

/// Integers pass through; floats and float strings truncate toward zero.
/// Values outside the `i64` range are not coercible.
fn coerce_int(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().and_then(truncate_to_i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| parse_finite(s).and_then(truncate_to_i64))
        }
        _ => None,
    }
}

fn truncate_to_i64(f: f64) -> Option<i64> {
    let t = f.trunc();
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range
    (t.is_finite() && t >= i64::MIN as f64 && t < i64::MAX as f64).then_some(t as i64)
}

fn coerce_float(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_finite(s.trim()),
        _ => None,
    }
}

fn parse_finite(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|f| f.is_finite())
}

// ---------------------------------------------------------------------------
// TargetRecord
// ---------------------------------------------------------------------------

/// One line of the output file. Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetRecord {
    pub timestamp: String,
    pub hour: u32,
    /// Monday = 0 … Sunday = 6.
    pub weekday: u32,
    pub process_count: i64,
    pub cpu_percent: f64,
    pub mem_percent: f64,
}

impl TargetRecord {
    /// Map a source record onto the target schema.
    ///
    /// `timestamp`, `hour` and `weekday` all come from `now`; missing metric
    /// fields are drawn from `ranges`.
    pub fn build<R: Rng>(
        source: &SourceRecord,
        now: NaiveDateTime,
        ranges: &FallbackRanges,
        rng: &mut R,
    ) -> Self {
        let pc = ranges.process_count;
        let cpu = ranges.cpu_percent;
        let mem = ranges.mem_percent;
        Self {
            timestamp: now.format(TIMESTAMP_FORMAT).to_string(),
            hour: now.hour(),
            weekday: now.weekday().num_days_from_monday(),
            process_count: source
                .processes
                .unwrap_or_else(|| rng.random_range(pc.min..=pc.max)),
            cpu_percent: source
                .cpu
                .unwrap_or_else(|| rng.random_range(cpu.min..cpu.max)),
            mem_percent: source
                .ram
                .unwrap_or_else(|| rng.random_range(mem.min..mem.max)),
        }
    }
}

impl fmt::Display for TargetRecord {
    /// Compact JSON, identical to the output line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
