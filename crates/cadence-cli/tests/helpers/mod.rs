#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Runs the binary against a throwaway event store
pub struct CliTestHarness {
    temp_dir: TempDir,
    store_path: PathBuf,
}

impl CliTestHarness {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let store_path = temp_dir.path().join("events.json");

        Self {
            temp_dir,
            store_path,
        }
    }

    /// A command rooted in the temp dir so no stray `cadence.toml` is picked up.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("cadence").expect("Failed to find cadence binary");
        cmd.current_dir(self.temp_dir.path());
        cmd.env("CADENCE_STORE_PATH", &self.store_path);
        cmd.env_remove("CADENCE_LOG");
        cmd.env_remove("CADENCE_DEFAULT_END_DATE");
        cmd.env_remove("CADENCE_MAX_OCCURRENCES");
        cmd
    }

    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn run_success(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().success()
    }

    pub fn run_failure(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().failure()
    }

    /// Stored events in chronological order, read straight from the JSON file.
    pub fn stored_events(&self) -> Vec<Value> {
        let raw = std::fs::read_to_string(&self.store_path).expect("store file should exist");
        let list: Value = serde_json::from_str(&raw).expect("store file should be JSON");
        list["events"].as_array().cloned().unwrap_or_default()
    }

    pub fn stored_dates(&self) -> Vec<String> {
        self.stored_events()
            .iter()
            .map(|e| e["date"].as_str().unwrap_or_default().to_string())
            .collect()
    }

    /// Full id of the stored event on `date`.
    pub fn id_on(&self, date: &str) -> String {
        self.stored_events()
            .iter()
            .find(|e| e["date"] == date)
            .and_then(|e| e["id"].as_str())
            .unwrap_or_else(|| panic!("no stored event on {date}"))
            .to_string()
    }
}

pub struct TestFixtures;

impl TestFixtures {
    pub fn single_event_args() -> Vec<&'static str> {
        vec!["add", "Dentist", "--date", "2025-03-14", "--start", "14:00", "--end", "15:00"]
    }

    /// Five weekly Mondays from 2025-01-06 to 2025-02-03.
    pub fn weekly_event_args() -> Vec<&'static str> {
        vec![
            "add",
            "Standup",
            "--date",
            "2025-01-06",
            "--repeat",
            "weekly",
            "--until",
            "2025-02-03",
        ]
    }
}

pub mod assertions {
    use predicates::prelude::*;

    pub fn event_added() -> impl Predicate<str> {
        predicate::str::contains("Added event")
    }

    pub fn series_added(count: usize) -> impl Predicate<str> {
        predicate::str::contains("Added recurring event")
            .and(predicate::str::contains(format!("{count} occurrences")))
    }

    pub fn reports_error() -> impl Predicate<str> {
        predicate::str::contains("Error")
    }
}
