use std::fmt;
use std::path::PathBuf;

use crate::secrets::ConvertMode;

/// Error types for a secrets export run
#[derive(Debug)]
pub enum ExportError {
    /// A required action input was empty or absent
    MissingInput(String),

    /// The secrets payload is not a JSON object of string values
    SecretsParse(String),

    /// The convert input names a mode that does not exist
    UnknownConvertMode(String),

    /// The runner env file does not exist
    MissingEnvFile(PathBuf),

    /// A variable name or value contains the generated heredoc delimiter
    DelimiterCollision {
        field: &'static str,
        delimiter: String,
    },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::MissingInput(name) => {
                write!(f, "Input required and not supplied: {}", name)
            }
            ExportError::SecretsParse(reason) => {
                write!(
                    f,
                    "Cannot parse JSON secrets ({}).\n\
                     Make sure you add the following to this action:\n\
                     \n\
                     with:\n      secrets: ${{{{ toJSON(secrets) }}}}\n",
                    reason
                )
            }
            ExportError::UnknownConvertMode(value) => {
                write!(
                    f,
                    "Unknown convert value \"{}\". Available: {}",
                    value,
                    ConvertMode::available()
                )
            }
            ExportError::MissingEnvFile(path) => {
                write!(f, "Missing file at path: {}", path.display())
            }
            ExportError::DelimiterCollision { field, delimiter } => {
                write!(
                    f,
                    "Unexpected input: {} should not contain the delimiter \"{}\"",
                    field, delimiter
                )
            }
        }
    }
}

impl std::error::Error for ExportError {}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::SecretsParse(err.to_string())
    }
}

/// Result type for pipeline operations
pub type ExportResult<T> = Result<T, ExportError>;
