mod common;
use common::{approx, sample_records, temp_dir, temp_out, tp, write_config, write_sample_csv};
use predicates::str::contains;
use std::fs;
use trackpie::config::Config;
use trackpie::export::{ConvertLogic, ExportFormat};
use trackpie::load::load_records;

#[test]
fn test_summary_prints_the_pies() {
    let cfg = write_config("cli_summary", ".");
    let csv = write_sample_csv("cli_summary");

    tp().args(["--config", &cfg, "summary", &csv, "--tag", "coding"])
        .assert()
        .success()
        .stdout(contains("Project Distribution"))
        .stdout(contains("Tags Distribution for Project: Alpha"))
        .stdout(contains("Project Distribution for Tag: coding"))
        .stdout(contains("Total Hours in Selected Range:"))
        .stdout(contains("4.00"))
        .stdout(contains("Alpha"))
        .stdout(contains("2.25"));
}

#[test]
fn test_summary_json() {
    let cfg = write_config("cli_json", ".");
    let csv = write_sample_csv("cli_json");

    let output = tp()
        .args(["--config", &cfg, "summary", &csv, "--json", "--by", "tags"])
        .output()
        .expect("run summary");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is pure JSON");

    assert_eq!(value["rows"], 4);
    assert_eq!(value["total_days"], 4);
    assert!(approx(value["total_hours"].as_f64().unwrap(), 4.0));
    assert_eq!(value["main"]["title"], "Tags Distribution");
    assert_eq!(value["range"][0], "2025-09-05");
    assert_eq!(value["range"][1], "2025-09-08");
}

#[test]
fn test_summary_all_keeps_undated_rows() {
    let cfg = write_config("cli_all", ".");
    let csv = write_sample_csv("cli_all");

    let output = tp()
        .args(["--config", &cfg, "summary", &csv, "--range", "all", "--json"])
        .output()
        .expect("run summary");
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["rows"], 5);
    assert!(value["range"].is_null());
}

#[test]
fn test_summary_weekend_average() {
    let cfg = write_config("cli_weekend", ".");
    let csv = write_sample_csv("cli_weekend");

    tp().args([
        "--config",
        &cfg,
        "summary",
        &csv,
        "--day-type",
        "weekend",
        "--average",
    ])
    .assert()
    .success()
    .stdout(contains("values in hours/day"))
    .stdout(contains("Rows: 2 | Days: 2"));
}

#[test]
fn test_summary_unknown_tag_warns() {
    let cfg = write_config("cli_nope", ".");
    let csv = write_sample_csv("cli_nope");

    tp().args(["--config", &cfg, "summary", &csv, "--tag", "nope"])
        .assert()
        .success()
        .stderr(contains("No project data for tag 'nope'"));
}

#[test]
fn test_summary_range_outside_data() {
    let cfg = write_config("cli_empty_range", ".");
    let csv = write_sample_csv("cli_empty_range");

    tp().args(["--config", &cfg, "summary", &csv, "-r", "2024"])
        .assert()
        .success()
        .stderr(contains("No project data"));
}

#[test]
fn test_summary_bad_range_fails() {
    let cfg = write_config("cli_bad_range", ".");
    let csv = write_sample_csv("cli_bad_range");

    tp().args(["--config", &cfg, "summary", &csv, "-r", "2025-09-07:2025-09-01"])
        .assert()
        .failure()
        .stderr(contains("Invalid range"));
}

#[test]
fn test_summary_without_source_file() {
    let dir = temp_dir("cli_no_source");
    let cfg = write_config("cli_no_source", &dir.to_string_lossy());

    tp().args(["--config", &cfg, "summary"])
        .assert()
        .failure()
        .stderr(contains("No input file found"));
}

#[test]
fn test_summary_picks_first_xlsx_of_source_dir() {
    let dir = temp_dir("cli_source_dir");
    let cfg = write_config("cli_source_dir", &dir.to_string_lossy());

    let rows: Vec<_> = sample_records().iter().map(|r| r.to_flat_row()).collect();
    ConvertLogic::write(&rows, ExportFormat::Xlsx, &dir.join("week.xlsx")).unwrap();

    tp().args(["--config", &cfg, "summary"])
        .assert()
        .success()
        .stdout(contains("week.xlsx"))
        .stdout(contains("2.25"));
}

#[test]
fn test_convert_rejects_non_pdf() {
    let cfg = write_config("cli_convert_csv", ".");
    let csv = write_sample_csv("cli_convert_csv");
    let out = temp_out("cli_convert_csv_out", "xlsx");

    tp().args([
        "--config",
        &cfg,
        "convert",
        &csv,
        "--file",
        out.to_str().unwrap(),
    ])
    .assert()
    .failure()
    .stderr(contains("convert expects a PDF report"));

    assert!(!out.exists());
}

#[test]
fn test_convert_missing_input() {
    let cfg = write_config("cli_convert_missing", ".");

    tp().args([
        "--config",
        &cfg,
        "convert",
        "/nonexistent/report.pdf",
        "--file",
        "out.xlsx",
    ])
    .assert()
    .failure()
    .stderr(contains("No input file found"));
}

#[test]
fn test_flat_table_written_in_every_format_reloads() {
    let records = sample_records();
    let rows: Vec<_> = records.iter().map(|r| r.to_flat_row()).collect();

    for (format, ext) in [(ExportFormat::Xlsx, "xlsx"), (ExportFormat::Csv, "csv")] {
        let path = temp_out("cli_flat_reload", ext);
        ConvertLogic::write(&rows, format, &path).unwrap();

        let back = load_records(&path, &Config::default()).unwrap();
        assert_eq!(back.len(), records.len(), "{ext}");
        assert_eq!(back[3].project, "Unspecified");
        assert!(approx(back[3].duration_minutes, -15.0));
    }

    let path = temp_out("cli_flat_reload", "json");
    ConvertLogic::write(&rows, ExportFormat::Json, &path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value[0]["Start date"], "2025-09-05");
    assert_eq!(value[0]["Duration"], "1:30:00");
}

#[test]
fn test_init_and_print_config() {
    let path = temp_out("cli_init", "conf");
    let cfg = path.to_string_lossy().to_string();

    tp().args(["--config", &cfg, "init"])
        .assert()
        .success()
        .stdout(contains("Config file:"));
    assert!(path.exists());

    tp().args(["--config", &cfg, "init"])
        .assert()
        .success()
        .stdout(contains("already present"));

    tp().args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("source_dir"))
        .stdout(contains("pdf_tag: Unknown"));

    tp().args(["--config", &cfg, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration file is complete"));
}

#[test]
fn test_init_test_mode_writes_nothing() {
    let path = temp_out("cli_init_test", "conf");

    tp().args(["--config", path.to_str().unwrap(), "--test", "init"])
        .assert()
        .success();
    assert!(!path.exists());
}

#[test]
fn test_config_check_reports_missing_fields() {
    let path = temp_out("cli_partial", "conf");
    fs::write(&path, "source_dir: ./exports\nsentinels:\n  tag: none\n").unwrap();

    tp().args(["--config", path.to_str().unwrap(), "config", "--check"])
        .assert()
        .success()
        .stderr(contains("header_scan_rows"))
        .stderr(contains("sentinels.pdf_tag"));
}
