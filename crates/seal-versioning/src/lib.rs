//! ---
//! seal_section: "01-version-metadata"
//! seal_subsection: "module"
//! seal_type: "source"
//! seal_scope: "code"
//! seal_description: "Version metadata and license text for the Seal project."
//! seal_version: "v0.1-pre"
//! seal_owner: "tbd"
//! ---
#![warn(missing_docs)]

//! Process-wide identification metadata for Seal: the parsed revision and
//! date, the snapshot counter, the composed version string, and the verbatim
//! license body. Everything is computed once from build-time embedded tags
//! and immutable afterwards.

pub mod license;
pub mod version;

pub use license::license_text;
pub use version::{current, MalformedMetadata, VersionInfo};
