//! ---
//! seal_section: "01-version-metadata"
//! seal_subsection: "module"
//! seal_type: "source"
//! seal_scope: "code"
//! seal_description: "Version metadata and license text for the Seal project."
//! seal_version: "v0.1-pre"
//! seal_owner: "tbd"
//! ---
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Fixed major.minor pre-release tag for this line of snapshots.
pub const RELEASE: &str = "0.1-pre";

/// Manually incremented counter distinguishing pre-release builds.
pub const SNAPSHOT: u32 = 5;

/// Placeholder callers print when the embedded metadata fails validation.
pub const UNKNOWN_VERSION: &str = "seal (unknown version)";

/// Keyword-expanded revision tag embedded by the build script.
pub const REVISION_TAG: &str = env!("SEAL_REVISION_TAG");

/// Keyword-expanded date tag embedded by the build script.
pub const DATE_TAG: &str = env!("SEAL_DATE_TAG");

static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r".*\((.*)\).*").expect("date pattern to compile"));
static REVISION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+").expect("revision pattern to compile"));
static CURRENT: Lazy<Result<VersionInfo, MalformedMetadata>> =
    Lazy::new(|| VersionInfo::from_tags(REVISION_TAG, DATE_TAG));

/// Error raised when an embedded version-control tag lacks its expected
/// shape: no parenthesized segment in the date tag, or no digit sequence in
/// the revision tag. Fatal for the metadata component; the input is a
/// build-time constant, so retrying is meaningless.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed version-control metadata: {missing} in tag {tag:?}")]
pub struct MalformedMetadata {
    /// The offending tag, verbatim.
    pub tag: String,
    /// Which expected element was absent.
    pub missing: &'static str,
}

impl MalformedMetadata {
    fn new(tag: &str, missing: &'static str) -> Self {
        Self {
            tag: tag.to_owned(),
            missing,
        }
    }
}

/// Identification metadata computed once from build-time embedded tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionInfo {
    /// Composed human-readable version string.
    pub version: String,
    /// Snapshot counter for this pre-release line.
    pub snapshot: u32,
    /// Revision number extracted from the revision tag.
    pub revision: u64,
    /// Human-readable date extracted from the date tag.
    pub date: String,
    /// Build timestamp from the compilation environment.
    pub build_timestamp: String,
    /// Target triple used for the build.
    pub target: String,
    /// Cargo profile used during compilation.
    pub profile: String,
}

impl VersionInfo {
    /// Parse a pair of keyword-expanded tags into version metadata.
    ///
    /// The date is the parenthesized segment of `date_tag`; the revision is
    /// the first contiguous digit run in `revision_tag`. Either element
    /// missing is a [`MalformedMetadata`] failure, never a silent empty
    /// value.
    pub fn from_tags(revision_tag: &str, date_tag: &str) -> Result<Self, MalformedMetadata> {
        let date = DATE_PATTERN
            .captures(date_tag)
            .and_then(|captures| captures.get(1))
            .ok_or_else(|| MalformedMetadata::new(date_tag, "no parenthesized date segment"))?
            .as_str()
            .to_owned();

        let revision = REVISION_PATTERN
            .find(revision_tag)
            .ok_or_else(|| MalformedMetadata::new(revision_tag, "no revision digit sequence"))?
            .as_str()
            .parse::<u64>()
            .map_err(|_| MalformedMetadata::new(revision_tag, "revision digits out of range"))?;

        debug!(revision, date = %date, "parsed version-control tags");

        Ok(Self {
            version: format!("{RELEASE} (snapshot {SNAPSHOT}/revision {revision})"),
            snapshot: SNAPSHOT,
            revision,
            date,
            build_timestamp: option_env!("VERGEN_BUILD_TIMESTAMP")
                .unwrap_or("UNKNOWN")
                .to_owned(),
            target: option_env!("VERGEN_CARGO_TARGET_TRIPLE")
                .unwrap_or("UNKNOWN")
                .to_owned(),
            profile: option_env!("VERGEN_CARGO_PROFILE")
                .unwrap_or("UNKNOWN")
                .to_owned(),
        })
    }

    /// Human readable banner used by CLI and logging surfaces.
    #[must_use]
    pub fn banner(&self) -> String {
        format!("Seal v{}", self.version)
    }

    /// Extended string containing build metadata suitable for `--version` flags.
    #[must_use]
    pub fn extended(&self) -> String {
        format!(
            "{banner}\nDate: {date}\nBuilt: {built}\nTarget: {target}\nProfile: {profile}",
            banner = self.banner(),
            date = self.date,
            built = self.build_timestamp,
            target = self.target,
            profile = self.profile
        )
    }
}

/// Process-wide metadata instance, computed on first access and shared
/// read-only afterwards. Every call observes the same instance; a malformed
/// embedded tag surfaces as the same [`MalformedMetadata`] on every call.
pub fn current() -> Result<&'static VersionInfo, MalformedMetadata> {
    CURRENT.as_ref().map_err(MalformedMetadata::clone)
}

#[cfg(test)]
mod tests {
    use super::*;

    const REVISION_FIXTURE: &str = "$Revision: 42 $";
    const DATE_FIXTURE: &str = "$Date: 2009-01-01 (Thu, 01 Jan 2009) $";

    #[test]
    fn date_is_the_parenthesized_segment() {
        let info = VersionInfo::from_tags(REVISION_FIXTURE, DATE_FIXTURE).unwrap();
        assert_eq!(info.date, "Thu, 01 Jan 2009");
    }

    #[test]
    fn revision_is_the_first_digit_run() {
        let info = VersionInfo::from_tags(REVISION_FIXTURE, DATE_FIXTURE).unwrap();
        assert_eq!(info.revision, 42);
    }

    #[test]
    fn version_string_follows_the_release_template() {
        let info = VersionInfo::from_tags(REVISION_FIXTURE, DATE_FIXTURE).unwrap();
        assert_eq!(info.snapshot, 5);
        assert_eq!(info.version, "0.1-pre (snapshot 5/revision 42)");
    }

    #[test]
    fn date_tag_without_parentheses_is_malformed() {
        let err = VersionInfo::from_tags(REVISION_FIXTURE, "$Date: 2009-01-01 $").unwrap_err();
        assert_eq!(err.tag, "$Date: 2009-01-01 $");
        assert_eq!(err.missing, "no parenthesized date segment");
    }

    #[test]
    fn revision_tag_without_digits_is_malformed() {
        let err = VersionInfo::from_tags("$Revision$", DATE_FIXTURE).unwrap_err();
        assert_eq!(err.tag, "$Revision$");
        assert_eq!(err.missing, "no revision digit sequence");
    }

    #[test]
    fn unexpanded_date_placeholder_is_malformed() {
        assert!(VersionInfo::from_tags(REVISION_FIXTURE, "$Date$").is_err());
    }

    #[test]
    fn extended_contains_version_and_date() {
        let info = VersionInfo::from_tags(REVISION_FIXTURE, DATE_FIXTURE).unwrap();
        let extended = info.extended();
        assert!(extended.contains(&info.version));
        assert!(extended.contains("Thu, 01 Jan 2009"));
    }

    #[test]
    fn current_is_stable_across_calls() {
        match (current(), current()) {
            (Ok(first), Ok(second)) => assert!(std::ptr::eq(first, second)),
            (Err(first), Err(second)) => assert_eq!(first, second),
            _ => panic!("current() changed outcome between calls"),
        }
    }

    #[test]
    fn info_serializes_to_json() {
        let info = VersionInfo::from_tags(REVISION_FIXTURE, DATE_FIXTURE).unwrap();
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["revision"], 42);
        assert_eq!(json["version"], "0.1-pre (snapshot 5/revision 42)");
    }
}
