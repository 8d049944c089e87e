use super::Exporter;
use crate::traits::Output;
use anyhow::Result;
use std::sync::Arc;

/// Registers variables with the `set-env` workflow command.
///
/// Used when the runner provides no env file.
pub struct CommandExporter {
    output: Arc<dyn Output>,
}

impl CommandExporter {
    pub fn new(output: Arc<dyn Output>) -> Self {
        Self { output }
    }
}

impl Exporter for CommandExporter {
    fn export_variable(&self, name: &str, value: &str) -> Result<()> {
        self.output.command("set-env", &[("name", name)], value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::MockOutput;

    #[test]
    fn test_issues_set_env_command() {
        let output = Arc::new(MockOutput::new());
        let exporter = CommandExporter::new(output.clone());

        exporter.export_variable("API_KEY", "abc").unwrap();

        assert_eq!(output.get_commands(), vec!["::set-env name=API_KEY::abc"]);
    }

    #[test]
    fn test_escapes_name_and_value() {
        let output = Arc::new(MockOutput::new());
        let exporter = CommandExporter::new(output.clone());

        exporter.export_variable("odd:name", "50%\nmore").unwrap();

        assert_eq!(
            output.get_commands(),
            vec!["::set-env name=odd%3Aname::50%25%0Amore"]
        );
    }
}
