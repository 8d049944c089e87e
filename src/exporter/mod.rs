//! Registration of exported variables with the runner.

pub mod command;
pub mod env_file;

pub use command::CommandExporter;
pub use env_file::EnvFileExporter;

use anyhow::Result;
#[cfg(test)]
use std::sync::Mutex;

/// Makes a variable visible to the following steps of the job
pub trait Exporter: Send + Sync {
    fn export_variable(&self, name: &str, value: &str) -> Result<()>;
}

/// Mock exporter for testing (records exports in order)
#[cfg(test)]
pub struct MockExporter {
    exports: Mutex<Vec<(String, String)>>,
    fail_on: Option<String>,
}

#[cfg(test)]
impl MockExporter {
    pub fn new() -> Self {
        Self {
            exports: Mutex::new(Vec::new()),
            fail_on: None,
        }
    }

    /// Fail when asked to export the given variable name
    pub fn failing_on(name: &str) -> Self {
        Self {
            exports: Mutex::new(Vec::new()),
            fail_on: Some(name.to_string()),
        }
    }

    pub fn get_exports(&self) -> Vec<(String, String)> {
        self.exports.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl Exporter for MockExporter {
    fn export_variable(&self, name: &str, value: &str) -> Result<()> {
        if self.fail_on.as_deref() == Some(name) {
            anyhow::bail!("mock export failure for {}", name);
        }
        self.exports
            .lock()
            .unwrap()
            .push((name.to_string(), value.to_string()));
        Ok(())
    }
}
