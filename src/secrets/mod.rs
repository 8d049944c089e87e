//! Secret filtering and renaming.
//!
//! A run parses the secrets payload into a [`SecretSet`], drops names rejected
//! by the [`KeyFilter`], renames the rest with a [`KeyTransformer`] and hands
//! each result to an exporter.

pub mod convert;
pub mod filter;
mod pipeline;
mod set;

pub use convert::ConvertMode;
pub use filter::KeyFilter;
pub use pipeline::{ExportedVariable, KeyTransformer, Pipeline};
pub use set::SecretSet;
