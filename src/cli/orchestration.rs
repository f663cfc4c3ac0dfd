//! Main release workflow orchestration
//!
//! Wires the collaborators (files, git, hosting API) to the pure decision
//! logic in [crate::domain]. Steps run strictly in sequence and the first
//! fatal error aborts the run; nothing is retried or rolled back, so a
//! failed release call leaves the pushed tag in place.

use std::path::Path;

use crate::boundary::ReleaseWarning;
use crate::config::Config;
use crate::domain::{
    build_tag_name, decide_release, extract_section, parse_manifest_version,
    release_body_or_fallback, ReleaseDecision,
};
use crate::error::{ReleaseError, Result};
use crate::files::FileAccess;
use crate::git::Repository;
use crate::hosting::{CreatedRelease, NewRelease, ReleaseHost, RepoSlug};
use crate::ui;

/// Arguments for the release workflow that are not part of [Config]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReleaseWorkflowArgs {
    /// Repository to publish the release to
    pub repository: Option<RepoSlug>,

    /// Preview mode - decide and extract notes, but create nothing
    pub dry_run: bool,
}

/// External systems the workflow talks to.
pub struct Collaborators<'a, F, R, H> {
    pub files: &'a F,
    pub repo: &'a R,
    pub host: &'a H,
}

/// Result of a successful release workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    pub decision: ReleaseDecision,

    /// The release that was created, if any
    pub release: Option<CreatedRelease>,
}

/// Read the manifest and return its version.
///
/// # Errors
/// * `ReleaseError::Config` - Manifest missing or without a version
/// * `ReleaseError::Parse` - Manifest is not valid JSON
pub fn read_current_version<F: FileAccess>(files: &F, manifest_path: &str) -> Result<String> {
    let path = Path::new(manifest_path);
    if !files.exists(path) {
        return Err(ReleaseError::config(format!(
            "manifest not found at: {}",
            manifest_path
        )));
    }

    let version = parse_manifest_version(&files.read(path)?)?;
    if version.is_empty() {
        return Err(ReleaseError::config("no version found in manifest"));
    }

    Ok(version)
}

/// Latest release tag, degrading to "none" when tags cannot be listed.
fn latest_release_tag<R: Repository>(repo: &R, prefix: &str) -> Option<String> {
    match repo.list_tags(prefix) {
        Ok(tags) => tags.into_iter().next(),
        Err(e) => {
            ui::display_boundary_warning(&ReleaseWarning::TagListingFailed {
                reason: e.to_string(),
            });
            None
        }
    }
}

/// Changelog section for `version`, or `""` with a warning when the
/// changelog or the section is missing.
fn changelog_section(changelog: Option<&str>, changelog_path: &str, version: &str) -> String {
    let Some(changelog) = changelog else {
        ui::display_boundary_warning(&ReleaseWarning::ChangelogMissing {
            path: changelog_path.to_string(),
        });
        return String::new();
    };

    let section = extract_section(changelog, version);
    if section.trim().is_empty() {
        ui::display_boundary_warning(&ReleaseWarning::SectionNotFound {
            version: version.to_string(),
            path: changelog_path.to_string(),
        });
    }
    section
}

/// Release notes for `version` from the working-tree changelog.
///
/// A missing changelog is not fatal; an unreadable one is.
pub fn release_notes<F: FileAccess>(files: &F, changelog_path: &str, version: &str) -> Result<String> {
    let path = Path::new(changelog_path);
    let changelog = if files.exists(path) {
        Some(files.read(path)?)
    } else {
        None
    };

    let section = changelog_section(changelog.as_deref(), changelog_path, version);
    Ok(release_body_or_fallback(&section, version))
}

/// Release notes for `version` from the changelog as committed at `tag`.
///
/// # Errors
/// * `ReleaseError::Git` - If the changelog cannot be read at that tag
pub fn release_notes_at_tag<R: Repository>(
    repo: &R,
    tag: &str,
    changelog_path: &str,
    version: &str,
) -> Result<String> {
    let changelog = repo.read_file_at_tag(tag, changelog_path)?;
    let section = changelog_section(Some(changelog.as_str()), changelog_path, version);
    Ok(release_body_or_fallback(&section, version))
}

/// Main release workflow
///
/// 1. Read the manifest version
/// 2. Find the latest release tag and whether the new tag already exists
/// 3. Decide whether to release
/// 4. Build release notes from the changelog
/// 5. Create and push the tag, then create the hosted release
pub fn run_release_workflow<F, R, H>(
    args: &ReleaseWorkflowArgs,
    config: &Config,
    collaborators: Collaborators<'_, F, R, H>,
) -> Result<WorkflowResult>
where
    F: FileAccess,
    R: Repository,
    H: ReleaseHost,
{
    let Collaborators { files, repo, host } = collaborators;

    let version = read_current_version(files, &config.manifest_path)?;
    ui::display_status(&format!(
        "Found version {} in {}",
        version, config.manifest_path
    ));

    let latest_tag = latest_release_tag(repo, &config.tag_prefix);
    let tag_name = build_tag_name(&config.tag_prefix, &version);
    let tag_exists = repo.tag_exists(&tag_name)?;

    let decision = decide_release(&version, latest_tag.as_deref(), &config.tag_prefix, tag_exists);
    ui::display_decision(&decision);

    if !decision.should_create_release {
        if decision.version_changed {
            ui::display_boundary_warning(&ReleaseWarning::TagAlreadyExists {
                tag: decision.new_tag_name.clone(),
            });
        } else {
            ui::display_status("Version unchanged, nothing to release");
        }
        return Ok(WorkflowResult {
            decision,
            release: None,
        });
    }

    let body = release_notes(files, &config.changelog_path, &version)?;

    if args.dry_run {
        ui::display_status(&format!(
            "Dry run: would create tag {} and release",
            decision.new_tag_name
        ));
        ui::display_release_notes(&body);
        return Ok(WorkflowResult {
            decision,
            release: None,
        });
    }

    let slug = args
        .repository
        .clone()
        .ok_or_else(|| ReleaseError::config("repository (owner/repo) is required"))?;

    ui::display_status(&format!("Creating tag: {}", decision.new_tag_name));
    repo.create_tag(&decision.new_tag_name, &format!("Release {}", version))?;
    ui::display_success(&format!(
        "Created and pushed tag: {}",
        decision.new_tag_name
    ));

    let release = host.create_release(&NewRelease {
        slug,
        tag_name: decision.new_tag_name.clone(),
        title: decision.new_tag_name.clone(),
        body,
        draft: config.draft,
        prerelease: config.prerelease,
    })?;
    ui::display_success(&format!("Created release {}: {}", release.id, release.url));

    Ok(WorkflowResult {
        decision,
        release: Some(release),
    })
}
