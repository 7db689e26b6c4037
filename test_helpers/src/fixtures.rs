//! On-disk JSON fixtures for exercising the `address-field` binary.

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use serde_json::Value;
use tempfile::TempDir;

/// A temporary directory holding field definition and value files.
#[derive(Debug)]
pub struct FixtureDir {
    dir: TempDir,
}

impl FixtureDir {
    /// Creates an empty fixture directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or its path is not
    /// valid UTF-8.
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create fixture directory")?;
        Utf8Path::from_path(dir.path()).context("fixture directory is not UTF-8")?;
        Ok(Self { dir })
    }

    /// Root of the fixture directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not valid UTF-8.
    pub fn path(&self) -> Result<&Utf8Path> {
        Utf8Path::from_path(self.dir.path()).context("fixture directory is not UTF-8")
    }

    /// Writes `contents` to `name` and returns the file's path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write(&self, name: &str, contents: &str) -> Result<Utf8PathBuf> {
        let path = self.path()?.join(name);
        std::fs::write(&path, contents).with_context(|| format!("write fixture {path}"))?;
        Ok(path)
    }

    /// Serialises `value` as JSON into `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write_json(&self, name: &str, value: &Value) -> Result<Utf8PathBuf> {
        self.write(name, &value.to_string())
    }
}
