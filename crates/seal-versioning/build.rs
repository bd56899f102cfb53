//! ---
//! seal_section: "01-version-metadata"
//! seal_subsection: "build-script"
//! seal_type: "source"
//! seal_scope: "build"
//! seal_description: "Embeds keyword-expanded revision/date tags at compile time."
//! seal_version: "v0.1-pre"
//! seal_owner: "tbd"
//! ---
use std::process::Command;

use vergen::EmitBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    EmitBuilder::builder().all_build().all_cargo().all_git().emit()?;

    set_release_tags();

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=SEAL_REVISION_TAG");
    println!("cargo:rerun-if-env-changed=SEAL_DATE_TAG");
    Ok(())
}

/// Resolve the revision and date tags and hand them to rustc.
///
/// Release pipelines override with `SEAL_REVISION_TAG` / `SEAL_DATE_TAG`;
/// otherwise the tags are expanded from the local `git` history. With neither
/// source the unexpanded placeholders are embedded and the runtime reports
/// them as malformed, which callers surface as an unknown version.
fn set_release_tags() {
    let revision_tag = std::env::var("SEAL_REVISION_TAG")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .or_else(|| git_output(&["rev-list", "--count", "HEAD"]).map(|n| format!("$Revision: {n} $")))
        .unwrap_or_else(|| "$Revision$".to_string());

    let date_tag = std::env::var("SEAL_DATE_TAG")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .or_else(|| {
            git_output(&[
                "log",
                "-1",
                "--format=%cd",
                "--date=format:%Y-%m-%d (%a, %d %b %Y)",
            ])
            .map(|d| format!("$Date: {d} $"))
        })
        .unwrap_or_else(|| "$Date$".to_string());

    println!("cargo:rustc-env=SEAL_REVISION_TAG={revision_tag}");
    println!("cargo:rustc-env=SEAL_DATE_TAG={date_tag}");
}

fn git_output(args: &[&str]) -> Option<String> {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .filter(|s| !s.is_empty())
}
