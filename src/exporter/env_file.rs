use super::Exporter;
use crate::error::{ExportError, ExportResult};
use crate::traits::FileSystem;
use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const DELIMITER_PREFIX: &str = "ghadelimiter_";

/// Appends variables to the runner env file (`GITHUB_ENV`)
pub struct EnvFileExporter {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
}

impl EnvFileExporter {
    pub fn new(fs: Arc<dyn FileSystem>, path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Render one heredoc entry. Neither name nor value may contain the delimiter.
    pub fn format_entry(name: &str, value: &str, delimiter: &str) -> ExportResult<String> {
        if name.contains(delimiter) {
            return Err(ExportError::DelimiterCollision {
                field: "name",
                delimiter: delimiter.to_string(),
            });
        }
        if value.contains(delimiter) {
            return Err(ExportError::DelimiterCollision {
                field: "value",
                delimiter: delimiter.to_string(),
            });
        }

        Ok(format!("{name}<<{delimiter}\n{value}\n{delimiter}\n"))
    }
}

fn new_delimiter() -> String {
    format!("{}{}", DELIMITER_PREFIX, uuid::Uuid::new_v4())
}

impl Exporter for EnvFileExporter {
    fn export_variable(&self, name: &str, value: &str) -> Result<()> {
        if !self.fs.exists(&self.path) {
            return Err(ExportError::MissingEnvFile(self.path.clone()).into());
        }

        let entry = Self::format_entry(name, value, &new_delimiter())?;
        self.fs.append(&self.path, &entry)
    }
}
