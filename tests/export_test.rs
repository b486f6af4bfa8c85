mod common;

use anyhow::Result;
use billsplit::cli::{SessionOptions, SessionOutcome};
use billsplit::io::{export_report_to_file, ReportFormat};
use common::{run_session, Dinner};
use tempfile::TempDir;

#[test]
fn test_export_report_as_json_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("report.json");
    let report = Dinner::create()?.settle()?;

    export_report_to_file(&path, &report, ReportFormat::Json)?;

    let value: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
    assert_eq!(value["total"], 120.0);
    assert_eq!(value["charges"].as_array().map(|c| c.len()), Some(2));
    assert_eq!(value["charges"][0]["items"][1], "drinks");
    assert!(value["warnings"].as_array().is_some_and(|w| w.is_empty()));
    Ok(())
}

#[test]
fn test_export_warning_is_tagged() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("report.json");
    let report = common::test_ledger(40.0, &["a"])?.settle()?;

    export_report_to_file(&path, &report, ReportFormat::Json)?;

    let value: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
    let kinds: Vec<&str> = value["warnings"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|w| w["kind"].as_str())
        .collect();
    assert_eq!(kinds, vec!["residual_undistributed", "discrepancy"]);
    Ok(())
}

#[test]
fn test_session_writes_report_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("split.csv");
    let options = SessionOptions {
        total: Some(120.0),
        people: Some("a,b".into()),
        assume_yes: true,
        format: ReportFormat::Csv,
        output: Some(path.clone()),
    };

    let (outcome, output, _) = run_session("food:90:a,b\ndrinks:10:a\nd\n", options)?;

    assert!(matches!(outcome, SessionOutcome::Settled(_)));
    assert!(output.contains("Report written to"));
    let contents = std::fs::read_to_string(&path)?;
    assert_eq!(
        contents.lines().collect::<Vec<_>>(),
        vec![
            "name,direct,charge,items",
            "a,55.00,66.00,food;drinks",
            "b,45.00,54.00,food"
        ]
    );
    Ok(())
}

#[test]
fn test_export_to_missing_directory_fails() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("missing").join("report.csv");
    let report = Dinner::create()?.settle()?;

    let err = export_report_to_file(&path, &report, ReportFormat::Csv).unwrap_err();
    assert!(err.to_string().contains("Failed to create report file"));
    Ok(())
}

#[test]
fn test_unwritable_report_file_still_settles() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("missing").join("split.csv");
    let options = SessionOptions {
        total: Some(120.0),
        people: Some("a,b".into()),
        assume_yes: true,
        format: ReportFormat::Csv,
        output: Some(path.clone()),
    };

    let (outcome, output, _) = run_session("food:90:a,b\nd\n", options)?;

    let SessionOutcome::Settled(report) = outcome else {
        panic!("expected a settled session, output:\n{output}");
    };
    assert_eq!(report.charges.len(), 2);
    assert!(output.contains("a,45.00,60.00,food"));
    assert!(output.contains("Failed to create report file"));
    assert!(!output.contains("Report written to"));
    assert!(output.trim_end().ends_with("Goodbye!"));
    assert!(!path.exists());
    Ok(())
}
