//! Test environment for isolated staffdeck runs.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Result of running a staffdeck CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse every stdout line as a JSON event.
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("stdout line is not JSON ({}): {}", e, l))
            })
            .collect()
    }
}

/// Isolated environment: the working directory, HOME and XDG config all live
/// in one temp dir, and the store path is pinned inside it.
pub struct TestEnv {
    pub root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("create temp dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_staffdeck")),
        }
    }

    /// Environment with a store file already written.
    pub fn with_store(content: &str) -> Self {
        let env = Self::new();
        env.write_store(content);
        env
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn home(&self) -> PathBuf {
        self.path("home")
    }

    pub fn store_path(&self) -> PathBuf {
        self.path("data/hr-dashboard-storage.json")
    }

    pub fn write_store(&self, content: &str) {
        write_file(&self.store_path(), content);
    }

    pub fn read_store(&self) -> serde_json::Value {
        let raw = std::fs::read_to_string(self.store_path()).expect("read store file");
        serde_json::from_str(&raw).expect("store file is JSON")
    }

    pub fn write_project_config(&self, content: &str) {
        write_file(&self.path("project/staffdeck.toml"), content);
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let project = self.path("project");
        std::fs::create_dir_all(&project).expect("create project dir");

        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(&project)
            .args(args)
            .env("HOME", self.home())
            .env("XDG_CONFIG_HOME", self.home().join(".config"))
            .env("STAFFDECK_STORE_PATH", self.store_path())
            .env("NO_COLOR", "1")
            .env("LC_ALL", "C")
            .env_remove("RUST_LOG")
            .env_remove("STAFFDECK_SOURCE_URL")
            .env_remove("STAFFDECK_SEED")
            .env_remove("CI")
            .env("NO_PROXY", "127.0.0.1,localhost");

        for proxy in ["HTTP_PROXY", "http_proxy", "HTTPS_PROXY", "https_proxy", "ALL_PROXY", "all_proxy"] {
            cmd.env_remove(proxy);
        }

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute staffdeck");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}
