//! Shared helpers for unit tests.

use chrono::NaiveDate;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn create_test_journal_dir() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write test file");
    path
}

pub fn sample_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 14).expect("valid date")
}
