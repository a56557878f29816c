#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;
use trackpie::config::Config;
use trackpie::core::normalize::Normalizer;
use trackpie::models::record::Record;

pub fn tp() -> Command {
    cargo_bin_cmd!("trackpie")
}

/// Create a unique temp file path inside the system temp dir and remove any existing file
pub fn temp_out(name: &str, ext: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_trackpie.{}", name, ext));
    fs::remove_file(&path).ok();
    path
}

/// Fresh, empty directory inside the system temp dir
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_trackpie_dir", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Write a config file with `source_dir` pointing at `source_dir`
pub fn write_config(name: &str, source_dir: &str) -> String {
    let path = temp_out(name, "conf");
    let cfg = Config {
        source_dir: source_dir.to_string(),
        ..Config::default()
    };
    cfg.save_to(&path).expect("write config");
    path.to_string_lossy().to_string()
}

/// Toggl-like detailed report: a title row, then the header, then five entries.
///
/// - Alpha: 1.5h + 0.75h (Fri, Sat)
/// - Beta: 2h + placeholder duration (Sun, undated)
/// - no project: -0.25h (Mon)
pub const SAMPLE_CSV: &str = "\
Detailed report,,,,,,,
Description,Duration,Member,Project,Tags,Start date,Start time,Stop time
Write report,01:30:00,ana,Alpha,writing,09/05/2025,09:00,10:30
Review,00:45,ana,Alpha,,09/06/2025,11:00,11:45
Bugfix,02:00:00,ana,Beta,coding,2025-09-07,14:00,16:00
Standup,-00:15,ana,,meeting,2025-09-08,09:00,09:15
Lunch notes,-,ana,Beta,-,not a date,,
";

pub fn write_sample_csv(name: &str) -> String {
    let path = temp_out(name, "csv");
    fs::write(&path, SAMPLE_CSV).expect("write sample csv");
    path.to_string_lossy().to_string()
}

pub fn grid(text: &str) -> Vec<Vec<String>> {
    text.lines()
        .map(|l| l.split(',').map(|c| c.to_string()).collect())
        .collect()
}

/// The sample report, normalized with default sentinels
pub fn sample_records() -> Vec<Record> {
    Normalizer::default()
        .normalize(&grid(SAMPLE_CSV))
        .expect("normalize sample")
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
