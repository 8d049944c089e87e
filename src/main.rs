mod commands;
mod context;
mod error;
mod exporter;
mod inputs;
mod output;
mod secrets;
mod traits;

use clap::Parser;
use clap::builder::FalseyValueParser;
use commands::ExportCommand;
use context::Context;
use inputs::Inputs;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "secrets-to-env")]
#[command(about = "Export CI secrets as environment variables for the following job steps", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON object of secrets, e.g. `${{ toJSON(secrets) }}`
    #[arg(long, env = "INPUT_SECRETS", default_value = "", hide_env_values = true)]
    secrets: String,

    /// Prefix prepended to every exported variable name
    #[arg(long, env = "INPUT_PREFIX", default_value = "")]
    prefix: String,

    /// Comma-separated list of secret names to export (all when empty)
    #[arg(long, env = "INPUT_INCLUDE", default_value = "")]
    include: String,

    /// Comma-separated list of secret names to skip
    #[arg(long, env = "INPUT_EXCLUDE", default_value = "")]
    exclude: String,

    /// Case conversion: lower, upper, camel, constant, pascal, snake or tf_case
    #[arg(long, env = "INPUT_CONVERT", default_value = "")]
    convert: String,

    /// Runner env file the variables are appended to (empty means none)
    #[arg(long, env = "GITHUB_ENV")]
    env_file: Option<String>,

    /// Print debug lines
    #[arg(long, env = "RUNNER_DEBUG", value_parser = FalseyValueParser::new())]
    debug: bool,

    /// Write output as GitHub Actions workflow commands
    #[arg(long, env = "GITHUB_ACTIONS", value_parser = FalseyValueParser::new())]
    workflow_commands: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let ctx = Context::new(cli.workflow_commands, cli.debug);

    let inputs = Inputs {
        secrets: cli.secrets,
        prefix: cli.prefix,
        include: cli.include,
        exclude: cli.exclude,
        convert: cli.convert,
    };

    let env_file = cli
        .env_file
        .filter(|path| !path.is_empty())
        .map(PathBuf::from);

    match ExportCommand::execute(&ctx, &inputs, env_file.as_deref()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            ctx.output.error(&format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}
