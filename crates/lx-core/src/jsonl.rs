use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use orion_error::ErrorOweBase;
use orion_error::prelude::*;

use crate::error::{XformReason, XformResult};
use crate::record::TargetRecord;

/// Write records as JSONL (one JSON object per line), truncating any
/// existing file.
pub fn write_records_jsonl(records: &[TargetRecord], output_path: &Path) -> XformResult<()> {
    let position = output_path.display().to_string();

    // Create parent directories if needed
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .owe(XformReason::Output)
            .position(position.clone())?;
    }

    let file = File::create(output_path)
        .owe(XformReason::Output)
        .position(position.clone())?;
    let mut writer = BufWriter::new(file);

    for record in records {
        serde_json::to_writer(&mut writer, record)
            .owe(XformReason::Output)
            .position(position.clone())?;
        writer
            .write_all(b"\n")
            .owe(XformReason::Output)
            .position(position.clone())?;
    }

    writer
        .flush()
        .owe(XformReason::Output)
        .position(position)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(process_count: i64) -> TargetRecord {
        TargetRecord {
            timestamp: "2024-03-09T14:05:06.000007".to_string(),
            hour: 14,
            weekday: 5,
            process_count,
            cpu_percent: 1.5,
            mem_percent: 72.0,
        }
    }

    #[test]
    fn writes_one_line_per_record_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/logs.jsonl");

        write_records_jsonl(&[record(1), record(2), record(3)], &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.ends_with('\n'));
        let counts: Vec<i64> = content
            .lines()
            .map(|l| serde_json::from_str::<TargetRecord>(l).unwrap().process_count)
            .collect();
        assert_eq!(counts, vec![1, 2, 3]);
    }

    #[test]
    fn truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs.jsonl");
        std::fs::write(&path, "old\nold\nold\nold\n").unwrap();

        write_records_jsonl(&[record(7)], &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
    }

    #[test]
    fn empty_slice_creates_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs.jsonl");

        write_records_jsonl(&[], &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        // a directory cannot be opened as a file
        let err = write_records_jsonl(&[record(1)], dir.path());
        assert!(err.is_err());
    }
}
