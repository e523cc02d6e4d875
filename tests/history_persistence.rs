//! Integration tests for JSON output and results history

use probebench::bench::SuiteRunner;
use probebench::config::persistence::ResultsStorage;
use probebench::config::{OutputFormat, SuiteConfig};
use probebench::models::{ProbeKind, SuiteReport};
use tempfile::TempDir;

#[test]
fn test_json_output_matches_report() {
    let runner = SuiteRunner::new(SuiteConfig::new().with_output(OutputFormat::Json))
        .expect("runner create");
    let mut out = Vec::new();
    let report = runner.run(&mut out).expect("suite run");

    let parsed: SuiteReport = serde_json::from_slice(&out).expect("valid JSON report");
    assert_eq!(parsed.probes, report.probes);
    assert_eq!(
        parsed.get(ProbeKind::Iteration).map(|p| p.value),
        Some(499_999_500_000)
    );
}

#[test]
fn test_runs_are_recorded_with_rotation() {
    let temp_dir = TempDir::new().unwrap();
    let history_path = temp_dir.path().join("history.json");
    let config = SuiteConfig::new()
        .with_record_history(true)
        .with_history_limit(2);
    let runner = SuiteRunner::new(config).unwrap().with_history_path(&history_path);

    for _ in 0..3 {
        runner.run(&mut std::io::sink()).unwrap();
    }

    let storage = ResultsStorage::with_path(&history_path, 10);
    let history = storage.load_results().unwrap();
    assert_eq!(history.len(), 2);
    assert!(history[0].timestamp <= history[1].timestamp);
    for report in &history {
        assert_eq!(report.get(ProbeKind::MapAccess).map(|p| p.value), Some(99_999));
        assert!(report.summary().contains("map_access=99999"));
    }
}

#[test]
fn test_default_runner_records_nothing() {
    let runner = SuiteRunner::new(SuiteConfig::default()).unwrap();
    assert!(!runner.config().record_history);
    assert!(format!("{:?}", runner).contains("storage: None"));
}
