mod common;
use chrono::NaiveDate;
use common::{SAMPLE_CSV, approx, grid, sample_records, temp_dir, temp_out, write_sample_csv};
use rust_xlsxwriter::{Format, Workbook};
use std::fs;
use std::path::Path;
use trackpie::config::{Config, Sentinels};
use trackpie::core::normalize::{Normalizer, find_header_row};
use trackpie::errors::AppError;
use trackpie::load::{SourceKind, load_records, resolve_source};
use trackpie::models::day_type::DayType;
use trackpie::models::table::flat_rows_to_grid;
use trackpie::utils::date::parse_loose_date;

fn ymd(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

#[test]
fn test_header_row_is_found_below_title_rows() {
    let g = grid(SAMPLE_CSV);
    assert_eq!(find_header_row(&g, 30), 1);
    // header outside the scanned window: fall back to row 0
    assert_eq!(find_header_row(&g, 1), 0);
    assert_eq!(find_header_row(&grid("a,b\nc,d"), 30), 0);
}

#[test]
fn test_sample_is_normalized() {
    let records = sample_records();
    assert_eq!(records.len(), 5);

    let write = &records[0];
    assert_eq!(write.description, "Write report");
    assert!(approx(write.duration_minutes, 90.0));
    assert_eq!(write.start_date, ymd(2025, 9, 5));
    assert_eq!(write.day_type(), Some(DayType::Weekday));
    assert_eq!(write.start_time, "09:00");
    assert_eq!(write.stop_time, "10:30");

    // blank tags and blank project get the sentinels
    assert_eq!(records[1].tags, "Untagged");
    assert_eq!(records[1].day_type(), Some(DayType::Weekend));
    assert_eq!(records[3].project, "Unspecified");
    assert!(approx(records[3].duration_minutes, -15.0));

    // placeholder duration, literal "-" tag, unreadable date
    assert_eq!(records[4].duration_minutes, 0.0);
    assert_eq!(records[4].tags, "-");
    assert_eq!(records[4].start_date, None);
    assert_eq!(records[4].day_type(), None);
}

#[test]
fn test_custom_sentinels() {
    let normalizer = Normalizer {
        sentinels: Sentinels {
            project: "(none)".into(),
            tag: "(none)".into(),
            ..Sentinels::default()
        },
        header_scan_rows: 30,
    };
    let records = normalizer.normalize(&grid(SAMPLE_CSV)).unwrap();
    assert_eq!(records[1].tags, "(none)");
    assert_eq!(records[3].project, "(none)");
}

#[test]
fn test_whitespace_only_category_is_missing() {
    let g = grid("Description,Duration,Project,Tags,Start date\nx,1:00,   , ,2025-09-01");
    let records = Normalizer::default().normalize(&g).unwrap();
    assert_eq!(records[0].project, "Unspecified");
    assert_eq!(records[0].tags, "Untagged");
}

#[test]
fn test_optional_columns_and_blank_rows() {
    let g = grid("Duration,Project,Tags,Start date\n1:00,A,t,2025-09-01\n,,,\n0:30,B,u,2025-09-02");
    let records = Normalizer::default().normalize(&g).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].description, "");
    assert_eq!(records[0].member, "");
    assert_eq!(records[1].project, "B");
}

#[test]
fn test_missing_required_column() {
    let g = grid("Description,Duration,Project,Start date\nx,1:00,A,2025-09-01");
    let err = Normalizer::default().normalize(&g).unwrap_err();
    assert!(matches!(err, AppError::MissingColumn(ref c) if c == "Tags"));
}

#[test]
fn test_empty_grid_yields_nothing() {
    assert!(Normalizer::default().normalize(&Vec::new()).unwrap().is_empty());
}

#[test]
fn test_normalizing_twice_is_stable() {
    let once = sample_records();
    let flat: Vec<_> = once.iter().map(|r| r.to_flat_row()).collect();
    let twice = Normalizer::default()
        .normalize(&flat_rows_to_grid(&flat))
        .unwrap();

    assert_eq!(once.len(), twice.len());
    for (a, b) in once.iter().zip(&twice) {
        assert_eq!(a.project, b.project);
        assert_eq!(a.tags, b.tags);
        assert_eq!(a.start_date, b.start_date);
        assert!(approx(a.duration_minutes, b.duration_minutes));
    }
}

#[test]
fn test_loose_dates() {
    assert_eq!(parse_loose_date("2025-09-05"), ymd(2025, 9, 5));
    assert_eq!(parse_loose_date("09/05/2025"), ymd(2025, 9, 5));
    assert_eq!(parse_loose_date(" 2025-09-05 10:30:00 "), ymd(2025, 9, 5));
    assert_eq!(parse_loose_date("09/05/2025 10:30"), ymd(2025, 9, 5));
    assert_eq!(parse_loose_date("45905"), ymd(2025, 9, 5));
    assert_eq!(parse_loose_date(""), None);
    assert_eq!(parse_loose_date("not a date"), None);
    assert_eq!(parse_loose_date("0.5"), None);
}

#[test]
fn test_source_kind_by_extension() {
    assert_eq!(SourceKind::from_path(Path::new("a.XLSX")).unwrap(), SourceKind::Spreadsheet);
    assert_eq!(SourceKind::from_path(Path::new("a.csv")).unwrap(), SourceKind::Csv);
    assert_eq!(SourceKind::from_path(Path::new("a.pdf")).unwrap(), SourceKind::Pdf);
    assert!(matches!(
        SourceKind::from_path(Path::new("a.txt")),
        Err(AppError::UnsupportedInput(_))
    ));
}

#[test]
fn test_load_records_from_csv() {
    let path = write_sample_csv("normalize_csv");
    let records = load_records(Path::new(&path), &Config::default()).unwrap();
    assert_eq!(records.len(), 5);
    assert_eq!(records[2].project, "Beta");
    assert_eq!(records[2].start_date, ymd(2025, 9, 7));
}

#[test]
fn test_load_records_from_xlsx() {
    let path = temp_out("normalize_xlsx", "xlsx");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    let date_fmt = Format::new().set_num_format("yyyy-mm-dd");
    let dur_fmt = Format::new().set_num_format("[h]:mm:ss");

    sheet.write_string(0, 0, "Toggl export").unwrap();
    for (c, h) in ["Description", "Duration", "Project", "Tags", "Start date"]
        .iter()
        .enumerate()
    {
        sheet.write_string(1, c as u16, *h).unwrap();
    }
    sheet.write_string(2, 0, "Write report").unwrap();
    sheet.write_string(2, 1, "01:30:00").unwrap();
    sheet.write_string(2, 2, "Alpha").unwrap();
    sheet.write_string(2, 3, "writing").unwrap();
    sheet.write_number_with_format(2, 4, 45905.0, &date_fmt).unwrap();

    sheet.write_string(3, 0, "Review").unwrap();
    sheet.write_number_with_format(3, 1, 0.0625, &dur_fmt).unwrap();
    sheet.write_string(3, 2, "Beta").unwrap();
    sheet.write_string(3, 4, "09/06/2025").unwrap();

    workbook.save(&path).unwrap();

    let records = load_records(&path, &Config::default()).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].start_date, ymd(2025, 9, 5));
    assert!(approx(records[0].duration_minutes, 90.0));
    assert!(approx(records[1].duration_minutes, 90.0));
    assert_eq!(records[1].tags, "Untagged");
    assert_eq!(records[1].start_date, ymd(2025, 9, 6));
}

#[test]
fn test_resolve_source() {
    let dir = temp_dir("resolve_source");
    let cfg = Config {
        source_dir: dir.to_string_lossy().to_string(),
        ..Config::default()
    };

    let err = resolve_source(None, &cfg).unwrap_err();
    assert!(matches!(err, AppError::InputNotFound(_)));

    fs::write(dir.join("notes.csv"), "x").unwrap();
    fs::write(dir.join("b_week.xlsx"), "x").unwrap();
    fs::write(dir.join("a_week.xlsx"), "x").unwrap();

    let found = resolve_source(None, &cfg).unwrap();
    assert_eq!(found.file_name().unwrap(), "a_week.xlsx");

    let explicit = dir.join("notes.csv");
    let found = resolve_source(Some(explicit.to_str().unwrap()), &cfg).unwrap();
    assert_eq!(found, explicit);

    let missing = resolve_source(Some("/nonexistent/report.xlsx"), &cfg);
    assert!(matches!(missing, Err(AppError::InputNotFound(_))));
}
