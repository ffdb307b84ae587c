//! Report aggregation and export tests.

use jiff::civil::date;

use crate::report::Report;

#[test]
fn test_report_assembles_all_sections() {
    let report = Report::assemble(date(2026, 8, 31));

    assert_eq!(report.summary.len(), 4);
    assert_eq!(report.performance.len(), 4);
    assert_eq!(report.sectoral_impacts.len(), 4);
    assert_eq!(report.findings.len(), 3);
    assert_eq!(report.recommendations.len(), 4);
    assert_eq!(report.conclusion.len(), 3);
}

#[test]
fn test_report_file_name_carries_the_date() {
    let report = Report::assemble(date(2026, 8, 31));
    assert_eq!(report.file_name(), "laporan-analisis-2026-08-31.json");
}

#[test]
fn test_write_json_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let report = Report::assemble(date(2026, 8, 31));

    let path = report.write_json(dir.path()).unwrap();
    assert!(path.exists());

    let contents = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();

    assert_eq!(value["title"], "Laporan Analisis Input-Output");
    assert_eq!(value["generated"], "2026-08-31");
    assert_eq!(value["summary"].as_array().unwrap().len(), 4);
    assert_eq!(value["performance"][1]["sector"], "Industri");
    assert_eq!(value["performance"][1]["multiplier"], 1.97);
    assert_eq!(value["findings"][2]["status"], "warning");
}

#[test]
fn test_write_json_creates_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("laporan").join("2026");

    let report = Report::assemble(date(2026, 8, 31));
    let path = report.write_json(&nested).unwrap();
    assert!(path.starts_with(&nested));
    assert!(path.exists());
}
