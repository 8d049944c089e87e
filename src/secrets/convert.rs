//! Case conversion of exported variable names.

use crate::error::ExportError;
use lazy_static::lazy_static;
use regex::Regex;
use std::str::FromStr;

/// Marker kept verbatim by [`ConvertMode::TfCase`]
pub const TF_VAR_PREFIX: &str = "TF_VAR_";

/// Case style applied to an exported variable name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertMode {
    Lower,
    Upper,
    Camel,
    Constant,
    Pascal,
    Snake,
    TfCase,
}

impl ConvertMode {
    pub const ALL: [ConvertMode; 7] = [
        ConvertMode::Lower,
        ConvertMode::Upper,
        ConvertMode::Camel,
        ConvertMode::Constant,
        ConvertMode::Pascal,
        ConvertMode::Snake,
        ConvertMode::TfCase,
    ];

    /// Input name of the mode
    pub fn name(self) -> &'static str {
        match self {
            ConvertMode::Lower => "lower",
            ConvertMode::Upper => "upper",
            ConvertMode::Camel => "camel",
            ConvertMode::Constant => "constant",
            ConvertMode::Pascal => "pascal",
            ConvertMode::Snake => "snake",
            ConvertMode::TfCase => "tf_case",
        }
    }

    /// Comma-separated list of every mode name
    pub fn available() -> String {
        Self::ALL
            .iter()
            .map(|mode| mode.name())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Parse the `convert` input. An empty value means no conversion.
    pub fn parse_optional(value: &str) -> Result<Option<Self>, ExportError> {
        if value.is_empty() {
            return Ok(None);
        }
        value.parse().map(Some)
    }

    pub fn apply(self, name: &str) -> String {
        match self {
            ConvertMode::Lower => name.to_lowercase(),
            ConvertMode::Upper => name.to_uppercase(),
            ConvertMode::Camel => camel_case(name),
            ConvertMode::Constant => join_words(name, "_", str::to_uppercase),
            ConvertMode::Pascal => pascal_case(name),
            ConvertMode::Snake => join_words(name, "_", str::to_lowercase),
            ConvertMode::TfCase => tf_case(name),
        }
    }
}

impl FromStr for ConvertMode {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.name() == s)
            .ok_or_else(|| ExportError::UnknownConvertMode(s.to_string()))
    }
}

lazy_static! {
    // `fooBar`, `foo2Bar`
    static ref LOWER_THEN_UPPER: Regex = Regex::new(r"([a-z0-9])([A-Z])").unwrap();
    // `XMLHttp`
    static ref ACRONYM_THEN_WORD: Regex = Regex::new(r"([A-Z])([A-Z][a-z])").unwrap();
    static ref SEPARATORS: Regex = Regex::new(r"[^A-Za-z0-9]+").unwrap();
}

const WORD_BREAK: &str = "\0";

/// Split a name into words on case changes and non-alphanumeric runs.
///
/// Only ASCII letters and digits form words; anything else separates them.
pub fn split_words(input: &str) -> Vec<String> {
    let marked = LOWER_THEN_UPPER.replace_all(input, "${1}\0${2}");
    let marked = ACRONYM_THEN_WORD.replace_all(&marked, "${1}\0${2}");
    let marked = SEPARATORS.replace_all(&marked, WORD_BREAK);

    marked
        .split(WORD_BREAK)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

fn join_words(input: &str, delimiter: &str, transform: fn(&str) -> String) -> String {
    split_words(input)
        .iter()
        .map(|word| transform(word))
        .collect::<Vec<_>>()
        .join(delimiter)
}

/// Capitalize a word, prefixing `_` when a non-leading word starts with a digit
fn capitalize(word: &str, index: usize) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let rest = chars.as_str().to_lowercase();

    if index > 0 && first.is_ascii_digit() {
        format!("_{}{}", first, rest)
    } else {
        format!("{}{}", first.to_uppercase(), rest)
    }
}

fn pascal_case(input: &str) -> String {
    split_words(input)
        .iter()
        .enumerate()
        .map(|(index, word)| capitalize(word, index))
        .collect()
}

fn camel_case(input: &str) -> String {
    split_words(input)
        .iter()
        .enumerate()
        .map(|(index, word)| {
            if index == 0 {
                word.to_lowercase()
            } else {
                capitalize(word, index)
            }
        })
        .collect()
}

fn tf_case(input: &str) -> String {
    match input.strip_prefix(TF_VAR_PREFIX) {
        Some(rest) => format!("{}{}", TF_VAR_PREFIX, rest.to_lowercase()),
        None => input.to_string(),
    }
}
