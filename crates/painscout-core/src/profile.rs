//! Default search vectors for a scan, loaded from `config/scan.yaml`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Shortest lookback window the scan accepts, in days.
pub const MIN_DAYS: u32 = 7;
/// Longest lookback window the scan accepts, in days.
pub const MAX_DAYS: u32 = 90;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanProfile {
    /// Reddit communities searched in Reddit mode (without the `r/` prefix).
    pub subreddits: Vec<String>,
    /// Pain trigger phrases OR-ed into each community search.
    pub triggers: Vec<String>,
    /// Topic keywords used in X mode.
    pub x_topics: Vec<String>,
    pub days: u32,
}

impl Default for ScanProfile {
    fn default() -> Self {
        Self {
            subreddits: to_owned(&[
                "SaaS",
                "Entrepreneur",
                "startups",
                "sales",
                "marketing",
                "smallbusiness",
            ]),
            triggers: to_owned(&[
                "need a tool that",
                "wish there was",
                "hate when",
                "integration sucks",
                "biggest problem",
                "manual work",
                "too expensive",
                "alternative to",
                "pain point",
            ]),
            x_topics: to_owned(&["saas", "startup", "sales", "marketing", "agency"]),
            days: 30,
        }
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Load the scan profile, falling back to [`ScanProfile::default`] when the
/// file does not exist.
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read, parsed, or
/// fails validation.
pub fn load_scan_profile(path: &Path) -> Result<ScanProfile, ConfigError> {
    if !path.exists() {
        return Ok(ScanProfile::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ProfileFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_scan_profile(&content)
}

/// Parse and validate a scan profile from YAML text.
///
/// Entries are trimmed and blank entries dropped before validation.
///
/// # Errors
///
/// Returns `ConfigError::ProfileFileParse` for malformed YAML and
/// `ConfigError::Validation` for empty lists or an out-of-range `days`.
pub fn parse_scan_profile(content: &str) -> Result<ScanProfile, ConfigError> {
    let mut profile: ScanProfile = serde_yaml::from_str(content)?;
    profile.subreddits = clean_list(profile.subreddits);
    profile.triggers = clean_list(profile.triggers);
    profile.x_topics = clean_list(profile.x_topics);
    validate_profile(&profile)?;
    Ok(profile)
}

fn clean_list(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn validate_profile(profile: &ScanProfile) -> Result<(), ConfigError> {
    for (name, list) in [
        ("subreddits", &profile.subreddits),
        ("triggers", &profile.triggers),
        ("x_topics", &profile.x_topics),
    ] {
        if list.is_empty() {
            return Err(ConfigError::Validation(format!(
                "'{name}' must contain at least one entry"
            )));
        }
    }

    if !(MIN_DAYS..=MAX_DAYS).contains(&profile.days) {
        return Err(ConfigError::Validation(format!(
            "days must be between {MIN_DAYS} and {MAX_DAYS}, got {}",
            profile.days
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_is_valid() {
        let profile = ScanProfile::default();
        assert!(validate_profile(&profile).is_ok());
        assert_eq!(profile.subreddits.len(), 6);
        assert_eq!(profile.triggers.len(), 9);
        assert_eq!(profile.days, 30);
    }

    #[test]
    fn parses_partial_profile_with_defaults() {
        let yaml = "subreddits: [SaaS, sales]\ndays: 14\n";
        let profile = parse_scan_profile(yaml).unwrap();
        assert_eq!(profile.subreddits, vec!["SaaS", "sales"]);
        assert_eq!(profile.days, 14);
        assert_eq!(profile.triggers, ScanProfile::default().triggers);
    }

    #[test]
    fn trims_and_drops_blank_entries() {
        let yaml = "x_topics: ['  saas ', '', marketing]\n";
        let profile = parse_scan_profile(yaml).unwrap();
        assert_eq!(profile.x_topics, vec!["saas", "marketing"]);
    }

    #[test]
    fn rejects_empty_list() {
        let yaml = "triggers: ['   ']\n";
        let err = parse_scan_profile(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref msg) if msg.contains("triggers")));
    }

    #[test]
    fn rejects_days_out_of_range() {
        let err = parse_scan_profile("days: 120\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref msg) if msg.contains("days")));
        let err = parse_scan_profile("days: 3\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn rejects_malformed_yaml() {
        let err = parse_scan_profile("subreddits: [unclosed").unwrap_err();
        assert!(matches!(err, ConfigError::ProfileFileParse(_)));
    }

    #[test]
    fn missing_file_yields_default_profile() {
        let path = std::env::temp_dir().join("painscout-profile-does-not-exist.yaml");
        let profile = load_scan_profile(&path).unwrap();
        assert_eq!(profile, ScanProfile::default());
    }
}
