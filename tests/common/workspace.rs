//! Test workspace management and setup utilities
//!
//! Provides an isolated environment per test: a throwaway config directory
//! (wired through GDIR_CONFIG_DIR) plus a scratch area for target
//! directories to bookmark and navigate.

#![allow(dead_code)]

use assert_cmd::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Isolated test workspace. Both TempDirs must be kept alive for the
/// duration of the test to prevent cleanup.
pub struct TestEnv {
    pub config_dir: TempDir,
    pub scratch_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> anyhow::Result<TestEnv> {
        Ok(TestEnv {
            config_dir: TempDir::new()?,
            scratch_dir: TempDir::new()?,
        })
    }

    /// A gdir invocation pointed at this workspace's config directory.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("gdir").expect("gdir binary builds");
        cmd.env("GDIR_CONFIG_DIR", self.config_dir.path());
        cmd
    }

    /// Create a target directory under the scratch area, returning its
    /// canonical path (the form gdir stores and prints).
    pub fn make_dir(&self, name: &str) -> anyhow::Result<PathBuf> {
        let dir = self.scratch_dir.path().join(name);
        fs::create_dir_all(&dir)?;
        Ok(dir.canonicalize()?)
    }

    /// Path of the persisted state file inside the config directory.
    pub fn state_path(&self) -> PathBuf {
        self.config_dir.path().join("state.json")
    }

    /// Run `gdir add` and assert it succeeded.
    pub fn add(&self, key: &str, dir: &PathBuf) {
        self.cmd().args(["add", key]).arg(dir).assert().success();
    }

    /// Run `gdir go` and assert it succeeded.
    pub fn go(&self, selector: &str) {
        self.cmd().args(["go", selector]).assert().success();
    }

    /// Capture stdout of a successful invocation.
    pub fn stdout_of(&self, args: &[&str]) -> anyhow::Result<String> {
        let assert = self.cmd().args(args).assert().success();
        Ok(String::from_utf8(assert.get_output().stdout.clone())?)
    }
}
