//! Shared testing utilities for quakediff CLI tests.
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const API_PATH: &str = "/v1/chat/completions";

pub const SAMPLE_INSPECTIONS: &str = r#"
[[pre]]
room = "Room 1"
wall_height_ft = 10.0
wall_width_ft = 8.0
wall_thickness_in = 6.0
visible_cracks = "No"
crack_length_ft = 0.0
crack_width_in = 0.0

[[post]]
room = "Room 1"
wall_height_ft = 9.8
wall_width_ft = 8.0
wall_thickness_in = 6.0
new_crack_count = 2
total_crack_length_ft = 3.5
max_crack_width_in = 0.25
"#;

pub const PRE_ONLY_INSPECTIONS: &str = r#"
[[pre]]
room = "Room 2"
wall_height_ft = 10.0
wall_width_ft = 8.0
wall_thickness_in = 6.0
visible_cracks = "Yes"
crack_length_ft = 1.0
crack_width_in = 0.1
"#;

/// Testing harness providing an isolated environment for CLI exercises.
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `quakediff` binary with a test credential.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("quakediff").expect("Failed to locate quakediff binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", self.root.path())
            .env("OPENAI_API_KEY", "test-key")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Write `quakediff.toml` pointing the model client at `server_url`.
    pub fn write_config(&self, server_url: &str) -> PathBuf {
        let path = self.work_dir.join("quakediff.toml");
        let content = format!(
            "[model]\napi_url = \"{}{}\"\nmodel = \"gpt-4o-mini\"\ntimeout_secs = 5\n",
            server_url, API_PATH
        );
        fs::write(&path, content).expect("Failed to write config");
        path
    }

    /// Write an inspection file into the work directory.
    pub fn write_inspections(&self, content: &str) -> PathBuf {
        let path = self.work_dir.join("inspections.toml");
        fs::write(&path, content).expect("Failed to write inspections");
        path
    }

    /// Chat completions body carrying `text` as the assistant reply.
    pub fn completion_body(text: &str) -> String {
        serde_json::json!({
            "id": "chatcmpl-test",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": text},
                "finish_reason": "stop"
            }]
        })
        .to_string()
    }
}
