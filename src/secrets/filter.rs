//! Include/exclude filtering of secret names.

/// Secret names that are never exported.
///
/// The runner already exposes its own token to every step.
pub const RESERVED_EXCLUSIONS: &[&str] = &["github_token"];

/// Split a comma-separated list, trimming whitespace around each entry.
///
/// An empty string yields an empty list.
pub fn parse_list(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }

    raw.split(',').map(|entry| entry.trim().to_string()).collect()
}

/// Decides which secrets are exported
#[derive(Debug, Clone, PartialEq)]
pub struct KeyFilter {
    include: Option<Vec<String>>,
    exclude: Vec<String>,
}

impl KeyFilter {
    /// Build a filter from the raw `include` and `exclude` inputs.
    ///
    /// An empty include string disables the allow-list. The exclude list always
    /// starts with [`RESERVED_EXCLUSIONS`].
    pub fn from_lists(include: &str, exclude: &str) -> Self {
        let include = (!include.is_empty()).then(|| parse_list(include));

        let exclude = RESERVED_EXCLUSIONS
            .iter()
            .map(|name| name.to_string())
            .chain(parse_list(exclude))
            .collect();

        Self { include, exclude }
    }

    pub fn include_list(&self) -> Option<&[String]> {
        self.include.as_deref()
    }

    pub fn exclude_list(&self) -> &[String] {
        &self.exclude
    }

    /// Exclusion wins over inclusion.
    pub fn accepts(&self, name: &str) -> bool {
        if let Some(include) = &self.include
            && !include.iter().any(|entry| entry == name)
        {
            return false;
        }

        !self.exclude.iter().any(|entry| entry == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_trims_entries() {
        assert_eq!(parse_list(" A , B,C "), vec!["A", "B", "C"]);
        assert!(parse_list("").is_empty());
    }

    #[test]
    fn test_parse_list_keeps_empty_entries() {
        assert_eq!(parse_list("A,,B"), vec!["A", "", "B"]);
    }

    #[test]
    fn test_empty_include_accepts_everything_not_excluded() {
        let filter = KeyFilter::from_lists("", "");

        assert!(filter.include_list().is_none());
        assert!(filter.accepts("API_KEY"));
        assert!(filter.accepts("DB_PASS"));
        assert!(!filter.accepts("github_token"));
    }

    #[test]
    fn test_reserved_name_always_excluded() {
        let filter = KeyFilter::from_lists("github_token, API_KEY", "");

        assert!(filter.accepts("API_KEY"));
        assert!(!filter.accepts("github_token"));
        assert_eq!(filter.exclude_list(), &["github_token".to_string()]);
    }

    #[test]
    fn test_include_list_rejects_unlisted_names() {
        let filter = KeyFilter::from_lists("API_KEY", "");

        assert_eq!(filter.include_list(), Some(&["API_KEY".to_string()][..]));
        assert!(filter.accepts("API_KEY"));
        assert!(!filter.accepts("DB_PASS"));
    }

    #[test]
    fn test_exclude_wins_over_include() {
        let filter = KeyFilter::from_lists("API_KEY,DB_PASS", "DB_PASS");

        assert!(filter.accepts("API_KEY"));
        assert!(!filter.accepts("DB_PASS"));
    }

    #[test]
    fn test_exclude_list_appends_to_reserved_names() {
        let filter = KeyFilter::from_lists("", " DB_PASS , LEGACY ");

        assert_eq!(
            filter.exclude_list(),
            &[
                "github_token".to_string(),
                "DB_PASS".to_string(),
                "LEGACY".to_string()
            ]
        );
        assert!(!filter.accepts("LEGACY"));
        assert!(filter.accepts("API_KEY"));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let filter = KeyFilter::from_lists("", "db_pass");

        assert!(filter.accepts("DB_PASS"));
        assert!(filter.accepts("GITHUB_TOKEN"));
    }
}
