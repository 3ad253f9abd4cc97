use std::fmt::Write as _;
use std::path::Path;

use lx_core::{TargetRecord, TransformOutcome, check_output, transform};

fn write_samples(path: &Path, n: usize) {
    let mut content = String::new();
    for i in 0..n {
        // every third sample drops a field
        let line = match i % 3 {
            0 => format!(r#"{{"processes": {}, "cpu": 10.5, "ram": 71.25}}"#, 600 + i % 100),
            1 => format!(r#"{{"processes": {}, "cpu": 55.0}}"#, 600 + i % 100),
            _ => "{}".to_string(),
        };
        writeln!(content, "{line}").unwrap();
    }
    std::fs::write(path, content).unwrap();
}

fn read_records(path: &Path) -> Vec<TargetRecord> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

fn expect_written(outcome: TransformOutcome) -> lx_core::TransformSummary {
    match outcome {
        TransformOutcome::Written(summary) => summary,
        TransformOutcome::InputMissing(p) => panic!("input unexpectedly missing: {}", p.display()),
    }
}

#[test]
fn fifteen_hundred_lines_yield_one_thousand_records() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("synthetic_logs.jsonl");
    let output = dir.path().join("data/logs.jsonl");
    write_samples(&input, 1500);

    let summary = expect_written(transform(&input, &output, 1000).unwrap());

    assert_eq!(summary.count, 1000);
    assert_eq!(summary.lines_read, 1000);
    let records = read_records(&output);
    assert_eq!(records.len(), 1000);
    assert_eq!(summary.sample.as_ref(), records.first());

    for (i, rec) in records.iter().enumerate() {
        assert!(rec.hour <= 23);
        assert!(rec.weekday <= 6);
        match i % 3 {
            0 => {
                assert_eq!(rec.process_count, (600 + i % 100) as i64);
                assert_eq!(rec.cpu_percent, 10.5);
                assert_eq!(rec.mem_percent, 71.25);
            }
            1 => {
                assert_eq!(rec.cpu_percent, 55.0);
                assert!((70.0..80.0).contains(&rec.mem_percent));
            }
            _ => {
                assert!((600..=700).contains(&rec.process_count));
                assert!((0.0..100.0).contains(&rec.cpu_percent));
                assert!((70.0..80.0).contains(&rec.mem_percent));
            }
        }
    }

    let report = check_output(&output).unwrap();
    assert!(report.is_ok(), "{report}");
    assert_eq!(report.records, 1000);
}

#[test]
fn reruns_produce_the_same_structure() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.jsonl");
    write_samples(&input, 30);
    let first = dir.path().join("first.jsonl");
    let second = dir.path().join("second.jsonl");

    expect_written(transform(&input, &first, 1000).unwrap());
    expect_written(transform(&input, &second, 1000).unwrap());

    let a = read_records(&first);
    let b = read_records(&second);
    assert_eq!(a.len(), b.len());
    // timestamps are time-dependent; only pass-through fields must match
    for (ra, rb) in a.iter().zip(&b).step_by(3) {
        assert_eq!(ra.process_count, rb.process_count);
        assert_eq!(ra.cpu_percent, rb.cpu_percent);
        assert_eq!(ra.mem_percent, rb.mem_percent);
    }
}

#[test]
fn timestamps_track_processing_order() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.jsonl");
    let output = dir.path().join("out.jsonl");
    write_samples(&input, 200);

    expect_written(transform(&input, &output, 1000).unwrap());

    let records = read_records(&output);
    for pair in records.windows(2) {
        assert!(pair[0].timestamp <= pair[1].timestamp);
    }
}

#[test]
fn absent_input_leaves_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("missing.jsonl");
    let output = dir.path().join("logs.jsonl");

    let outcome = transform(&input, &output, 1000).unwrap();

    assert!(matches!(outcome, TransformOutcome::InputMissing(ref p) if p == &input));
    assert!(!output.exists());
}
