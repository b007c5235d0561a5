#![forbid(unsafe_code)]

//! Version metadata shown by `fizztool version`
//!
//! Raw [`BuildInfo`] values are normalized into a [`VersionInfo`]:
//! the version loses its `v` prefix, the build timestamp becomes a plain
//! date, the commit becomes a short SHA, and a release notes URL is derived
//! from the version.

use crate::types::{BuildInfo, Platform};
use chrono::DateTime;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Repository that hosts fizztool releases
pub const RELEASES_BASE_URL: &str = "https://github.com/michaeltlombardi/fizztool";

/// Number of characters kept from a commit SHA
pub const SHORT_SHA_LEN: usize = 7;

// `MAJOR.MINOR.PATCH` with an optional pre-release suffix. ASCII classes only.
static RELEASE_VERSION: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.[0-9]+\.[0-9]+(-[0-9A-Za-z_.]+)?$"));

/// Extended version information for the application
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionInfo {
    /// Executable name, including the platform suffix
    pub name: String,
    /// Version without the `v` prefix
    pub version: String,
    /// Short SHA of the commit the build came from
    #[serde(rename = "commit_sha")]
    pub commit: String,
    /// Build date as `YYYY-MM-DD`, or empty when unknown
    #[serde(rename = "build_date")]
    pub date: String,
    /// Link to the release notes for this version
    pub release_notes_url: String,
}

impl VersionInfo {
    /// Derive display-ready version information from raw build metadata
    pub fn new(build: &BuildInfo, platform: Platform) -> Self {
        let version = clean_version(&build.version);
        let release_notes_url = release_notes_url(&version);

        Self {
            name: platform.command_name(),
            version,
            commit: short_commit(&build.commit),
            date: format_build_date(&build.date),
            release_notes_url,
        }
    }

    /// Short form used by `version --one-line`, e.g. `fizztool - v1.2.3`
    pub fn one_line(&self) -> String {
        format!("{} - v{}", self.name, self.version)
    }
}

/// Strip a leading `v` and any surrounding whitespace
pub fn clean_version(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed.strip_prefix('v').unwrap_or(trimmed).trim().to_string()
}

/// Reformat an RFC 3339 timestamp as `YYYY-MM-DD`
///
/// Returns an empty string when the input is empty or not a valid timestamp.
/// The date is taken in the timestamp's own offset.
pub fn format_build_date(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    match DateTime::parse_from_rfc3339(raw.trim()) {
        Ok(timestamp) => timestamp.format("%Y-%m-%d").to_string(),
        Err(e) => {
            tracing::debug!(date = raw, error = %e, "build date is not RFC 3339");
            String::new()
        }
    }
}

/// Truncate a commit SHA to its first seven characters
///
/// Whitespace around the result is always trimmed, for short SHAs too.
pub fn short_commit(raw: &str) -> String {
    raw.chars()
        .take(SHORT_SHA_LEN)
        .collect::<String>()
        .trim()
        .to_string()
}

/// Release notes for a tagged version, or the latest release otherwise
pub fn release_notes_url(version: &str) -> String {
    let is_release = match RELEASE_VERSION.as_ref() {
        Ok(pattern) => pattern.is_match(version),
        Err(e) => {
            tracing::error!(error = %e, "release version pattern failed to compile");
            false
        }
    };

    if is_release {
        format!("{}/releases/tag/v{}", RELEASES_BASE_URL, version)
    } else {
        format!("{}/releases/latest", RELEASES_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unix() -> Platform {
        Platform::new("")
    }

    #[test]
    fn test_clean_version() {
        assert_eq!(clean_version("v1.2.3"), "1.2.3");
        assert_eq!(clean_version("1.2.3"), "1.2.3");
        assert_eq!(clean_version("  v1.2.3 \n"), "1.2.3");
        assert_eq!(clean_version("dev"), "dev");
        assert_eq!(clean_version(""), "");
    }

    #[test]
    fn test_format_build_date() {
        assert_eq!(format_build_date("2023-09-01T00:00:00Z"), "2023-09-01");
        assert_eq!(format_build_date("2023-09-01T23:30:00-05:00"), "2023-09-01");
        assert_eq!(format_build_date("unknown"), "");
        assert_eq!(format_build_date("2023-09-01"), "");
        assert_eq!(format_build_date(""), "");
    }

    #[test]
    fn test_short_commit() {
        assert_eq!(short_commit("abcdef1234"), "abcdef1");
        assert_eq!(short_commit("abcdef1"), "abcdef1");
        assert_eq!(short_commit("none"), "none");
        assert_eq!(short_commit(""), "");
    }

    #[test]
    fn test_short_commit_trims_whitespace() {
        assert_eq!(short_commit(" abc \n"), "abc");
        assert_eq!(short_commit("abcdef 1234"), "abcdef");
    }

    #[test]
    fn test_release_version_pattern_compiles() {
        assert!(RELEASE_VERSION.as_ref().is_ok());
    }

    #[test]
    fn test_release_notes_url_for_tagged_versions() {
        assert_eq!(
            release_notes_url("1.2.3"),
            "https://github.com/michaeltlombardi/fizztool/releases/tag/v1.2.3"
        );
        assert!(release_notes_url("1.2.3-rc.1").ends_with("/releases/tag/v1.2.3-rc.1"));
        assert!(release_notes_url("10.0.0-beta_2").ends_with("/releases/tag/v10.0.0-beta_2"));
    }

    #[test]
    fn test_release_notes_url_falls_back_to_latest() {
        for version in ["dev", "", "1.2", "1.2.3-", "1.2.3+build", "v1.2.3", "1.2.3-rc/1"] {
            assert_eq!(
                release_notes_url(version),
                "https://github.com/michaeltlombardi/fizztool/releases/latest",
                "version {:?} should link to latest",
                version
            );
        }
    }

    #[test]
    fn test_version_info_from_release_build() {
        let build = BuildInfo::new("v1.2.3", "abcdef1234", "2023-09-01T00:00:00Z");
        let info = VersionInfo::new(&build, unix());

        assert_eq!(info.name, "fizztool");
        assert_eq!(info.version, "1.2.3");
        assert_eq!(info.commit, "abcdef1");
        assert_eq!(info.date, "2023-09-01");
        assert!(info.release_notes_url.ends_with("/releases/tag/v1.2.3"));
    }

    #[test]
    fn test_version_info_from_default_build() {
        let info = VersionInfo::new(&BuildInfo::default(), unix());

        assert_eq!(info.version, "dev");
        assert_eq!(info.commit, "none");
        assert_eq!(info.date, "");
        assert!(info.release_notes_url.ends_with("/releases/latest"));
    }

    #[test]
    fn test_version_info_windows_name() {
        let info = VersionInfo::new(&BuildInfo::default(), Platform::new(".exe"));
        assert_eq!(info.name, "fizztool.exe");
        assert_eq!(info.one_line(), "fizztool.exe - vdev");
    }

    #[test]
    fn test_one_line() {
        let build = BuildInfo::new("1.2.3", "", "");
        let info = VersionInfo::new(&build, unix());
        assert_eq!(info.one_line(), "fizztool - v1.2.3");
    }

    #[test]
    fn test_json_field_names_and_order() {
        let build = BuildInfo::new("1.0.0", "0123456789", "2024-01-02T03:04:05Z");
        let info = VersionInfo::new(&build, unix());
        let json = serde_json::to_string(&info).unwrap();

        assert_eq!(
            json,
            concat!(
                r#"{"name":"fizztool","version":"1.0.0","commit_sha":"0123456","#,
                r#""build_date":"2024-01-02","#,
                r#""release_notes_url":"https://github.com/michaeltlombardi/fizztool/releases/tag/v1.0.0"}"#
            )
        );
    }
}
