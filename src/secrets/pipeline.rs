use super::convert::ConvertMode;
use super::filter::KeyFilter;
use super::set::SecretSet;
use crate::exporter::Exporter;
use crate::traits::Output;
use anyhow::{Context, Result};

/// A secret ready to be exposed to later job steps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedVariable {
    pub name: String,
    pub value: String,
}

/// Turns an accepted secret name into the exported variable name.
///
/// The prefix is applied first, so it takes part in the conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyTransformer {
    prefix: String,
    convert: Option<ConvertMode>,
}

impl KeyTransformer {
    pub fn new(prefix: impl Into<String>, convert: Option<ConvertMode>) -> Self {
        Self {
            prefix: prefix.into(),
            convert,
        }
    }

    pub fn transform(&self, name: &str) -> String {
        let prefixed = format!("{}{}", self.prefix, name);

        match self.convert {
            Some(mode) => mode.apply(&prefixed),
            None => prefixed,
        }
    }
}

/// Filter, rename and export secrets in payload order
#[derive(Debug, Clone)]
pub struct Pipeline {
    filter: KeyFilter,
    transformer: KeyTransformer,
}

impl Pipeline {
    pub fn new(filter: KeyFilter, transformer: KeyTransformer) -> Self {
        Self {
            filter,
            transformer,
        }
    }

    /// Compute the variables a run would export, without side effects
    pub fn plan(&self, secrets: &SecretSet) -> Vec<ExportedVariable> {
        secrets
            .iter()
            .filter(|(name, _)| self.filter.accepts(name))
            .map(|(name, value)| ExportedVariable {
                name: self.transformer.transform(name),
                value: value.to_string(),
            })
            .collect()
    }

    /// Export every accepted secret.
    ///
    /// Stops at the first export failure. Variables registered before the
    /// failure stay registered.
    pub fn run(
        &self,
        secrets: &SecretSet,
        exporter: &dyn Exporter,
        output: &dyn Output,
    ) -> Result<Vec<ExportedVariable>> {
        let include = match self.filter.include_list() {
            Some(list) => list.join(", "),
            None => "<none>".to_string(),
        };
        output.debug(&format!("Using include list: {}", include));
        output.debug(&format!(
            "Using exclude list: {}",
            self.filter.exclude_list().join(", ")
        ));

        let mut exported = Vec::new();
        for variable in self.plan(secrets) {
            exporter
                .export_variable(&variable.name, &variable.value)
                .with_context(|| format!("Failed to export secret {}", variable.name))?;
            output.info(&format!("Exported secret {}", variable.name));
            exported.push(variable);
        }

        Ok(exported)
    }
}
