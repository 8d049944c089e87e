use crate::context::Context;
use crate::exporter::{CommandExporter, EnvFileExporter, Exporter};
use crate::inputs::Inputs;
use crate::secrets::ExportedVariable;
use anyhow::Result;
use std::path::Path;

pub struct ExportCommand;

impl ExportCommand {
    /// Export the configured secrets as job environment variables.
    ///
    /// Variables go to `env_file` when the runner provides one, otherwise they
    /// are registered with the `set-env` workflow command.
    pub fn execute(
        ctx: &Context,
        inputs: &Inputs,
        env_file: Option<&Path>,
    ) -> Result<Vec<ExportedVariable>> {
        let secrets = inputs.secret_set()?;
        let pipeline = inputs.pipeline()?;

        let exporter: Box<dyn Exporter> = match env_file {
            Some(path) => {
                let exporter = EnvFileExporter::new(ctx.fs.clone(), path);
                ctx.output.debug(&format!(
                    "Writing variables to {}",
                    exporter.path().display()
                ));
                Box::new(exporter)
            }
            None => Box::new(CommandExporter::new(ctx.output.clone())),
        };

        pipeline.run(&secrets, exporter.as_ref(), ctx.output.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExportError;
    use crate::traits::{MockFileSystem, MockOutput};
    use std::sync::Arc;

    const ENV_FILE: &str = "/runner/set_env";
    const SECRETS: &str = r#"{"API_KEY":"abc","github_token":"xyz","DB_PASS":"pw"}"#;

    fn setup() -> (Context, Arc<MockFileSystem>, Arc<MockOutput>) {
        let fs = Arc::new(MockFileSystem::with_file(ENV_FILE, ""));
        let output = Arc::new(MockOutput::new());
        let ctx = Context::test_with(fs.clone(), output.clone());
        (ctx, fs, output)
    }

    fn inputs(prefix: &str, include: &str, convert: &str) -> Inputs {
        Inputs {
            secrets: SECRETS.to_string(),
            prefix: prefix.to_string(),
            include: include.to_string(),
            exclude: String::new(),
            convert: convert.to_string(),
        }
    }

    fn names(variables: &[ExportedVariable]) -> Vec<&str> {
        variables.iter().map(|v| v.name.as_str()).collect()
    }

    #[test]
    fn test_export_to_env_file() {
        let (ctx, fs, output) = setup();

        let exported =
            ExportCommand::execute(&ctx, &inputs("MY_", "", "lower"), Some(Path::new(ENV_FILE)))
                .unwrap();

        assert_eq!(names(&exported), vec!["my_api_key", "my_db_pass"]);

        let contents = fs.get_file_contents(Path::new(ENV_FILE)).unwrap();
        assert!(contents.starts_with("my_api_key<<ghadelimiter_"));
        assert!(contents.contains("\nabc\n"));
        assert!(contents.contains("my_db_pass<<ghadelimiter_"));
        assert!(!contents.contains("xyz"));

        assert_eq!(
            output.get_infos(),
            vec!["Exported secret my_api_key", "Exported secret my_db_pass"]
        );
        assert!(output.get_commands().is_empty());
    }

    #[test]
    fn test_export_with_workflow_commands() {
        let (ctx, _fs, output) = setup();

        let exported = ExportCommand::execute(&ctx, &inputs("", "API_KEY", ""), None).unwrap();

        assert_eq!(names(&exported), vec!["API_KEY"]);
        assert_eq!(output.get_commands(), vec!["::set-env name=API_KEY::abc"]);
    }

    #[test]
    fn test_unknown_convert_mode_exports_nothing() {
        let (ctx, fs, output) = setup();

        let err = ExportCommand::execute(
            &ctx,
            &inputs("", "", "screaming"),
            Some(Path::new(ENV_FILE)),
        )
        .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ExportError>(),
            Some(ExportError::UnknownConvertMode(_))
        ));
        let message = err.to_string();
        assert!(message.contains("\"screaming\""));
        assert!(message.contains("lower, upper, camel, constant, pascal, snake, tf_case"));
        assert_eq!(fs.get_file_contents(Path::new(ENV_FILE)).as_deref(), Some(""));
        assert!(output.get_infos().is_empty());
    }

    #[test]
    fn test_invalid_json_exports_nothing() {
        let (ctx, fs, output) = setup();
        let inputs = Inputs {
            secrets: "{not json".to_string(),
            ..Default::default()
        };

        let err = ExportCommand::execute(&ctx, &inputs, Some(Path::new(ENV_FILE))).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ExportError>(),
            Some(ExportError::SecretsParse(_))
        ));
        assert_eq!(fs.get_file_contents(Path::new(ENV_FILE)).as_deref(), Some(""));
        assert!(output.get_messages().is_empty());
    }

    #[test]
    fn test_missing_env_file_fails_run() {
        let output = Arc::new(MockOutput::new());
        let ctx = Context::test_with(Arc::new(MockFileSystem::new()), output.clone());

        let err = ExportCommand::execute(&ctx, &inputs("", "", ""), Some(Path::new(ENV_FILE)))
            .unwrap_err();

        assert!(format!("{:#}", err).contains("Missing file at path: /runner/set_env"));
        assert!(output.get_infos().is_empty());
    }
}
