//! Action inputs as handed over by the runner.
//!
//! Values are trimmed the way the Actions toolkit reads inputs, so
//! ` MY_ ` and `MY_` are the same prefix.

use crate::error::{ExportError, ExportResult};
use crate::secrets::{ConvertMode, KeyFilter, KeyTransformer, Pipeline, SecretSet};

#[derive(Debug, Clone, Default)]
pub struct Inputs {
    pub secrets: String,
    pub prefix: String,
    pub include: String,
    pub exclude: String,
    pub convert: String,
}

impl Inputs {
    /// Parse the required `secrets` input
    pub fn secret_set(&self) -> ExportResult<SecretSet> {
        let raw = self.secrets.trim();
        if raw.is_empty() {
            return Err(ExportError::MissingInput("secrets".to_string()));
        }
        SecretSet::parse(raw)
    }

    /// Build the pipeline, rejecting an unknown convert mode up front
    pub fn pipeline(&self) -> ExportResult<Pipeline> {
        let convert = ConvertMode::parse_optional(self.convert.trim())?;
        let filter = KeyFilter::from_lists(self.include.trim(), self.exclude.trim());
        let transformer = KeyTransformer::new(self.prefix.trim(), convert);

        Ok(Pipeline::new(filter, transformer))
    }
}
