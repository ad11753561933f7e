//! Common test utilities shared across integration tests.
//!
//! Note: Clippy cannot track usage across integration test files,
//! hence the `allow(dead_code)` annotation. This is a standard pattern
//! for Rust integration test fixtures.
#![allow(dead_code)]

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestFixture {
    _temp_dir: TempDir,
    data_dir: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("placekeep");

        Self {
            _temp_dir: temp_dir,
            data_dir,
        }
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("places.db")
    }

    /// A placekeep command pointed at this fixture's data directory
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("placekeep").expect("Failed to find placekeep binary");
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd.env_remove("PLACEKEEP_PATH");
        cmd
    }

    /// Run `place add` with the given fields and return the parsed JSON record
    pub fn add_place(
        &self,
        title: &str,
        image: &str,
        address: &str,
        lat: f64,
        lng: f64,
    ) -> serde_json::Value {
        let output = self
            .command()
            .arg("--format")
            .arg("json")
            .arg("place")
            .arg("add")
            .arg("--title")
            .arg(title)
            .arg("--image")
            .arg(image)
            .arg("--address")
            .arg(address)
            .arg("--lat")
            .arg(lat.to_string())
            .arg("--lng")
            .arg(lng.to_string())
            .output()
            .expect("Failed to run place add");

        assert!(
            output.status.success(),
            "place add should succeed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        serde_json::from_slice(&output.stdout).expect("place add should print the saved record")
    }

    /// Run `place list --format json` and return the parsed array
    pub fn list_places(&self) -> Vec<serde_json::Value> {
        let output = self
            .command()
            .arg("--format")
            .arg("json")
            .arg("place")
            .arg("list")
            .output()
            .expect("Failed to run place list");

        assert!(
            output.status.success(),
            "place list should succeed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        let value: serde_json::Value =
            serde_json::from_slice(&output.stdout).expect("place list should print JSON");
        value.as_array().expect("Expected a JSON array").clone()
    }
}
