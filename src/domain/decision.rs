use super::tag::{build_tag_name, version_from_tag};

/// Outcome of comparing the manifest version with the latest release tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseDecision {
    pub version_changed: bool,
    pub should_create_release: bool,
    pub new_tag_name: String,
    pub current_version: String,
    /// Version recovered from the latest tag, present only when one existed
    pub latest_version: Option<String>,
}

/// Decide whether a new release should be cut.
///
/// | latest tag | same version | tag exists | changed | create |
/// |------------|--------------|------------|---------|--------|
/// | none       | -            | -          | yes     | yes    |
/// | some       | yes          | -          | no      | no     |
/// | some       | no           | yes        | yes     | no     |
/// | some       | no           | no         | yes     | yes    |
///
/// Versions are compared as exact strings, so `1.0.0` and `1.0.0+build.1`
/// are different versions.
pub fn decide_release(
    current_version: &str,
    latest_tag: Option<&str>,
    tag_prefix: &str,
    tag_already_exists: bool,
) -> ReleaseDecision {
    let new_tag_name = build_tag_name(tag_prefix, current_version);
    let latest_version = latest_tag.map(|tag| version_from_tag(tag, tag_prefix).to_string());

    let (version_changed, should_create_release) = match latest_version.as_deref() {
        None => (true, true),
        Some(latest) if latest == current_version => (false, false),
        Some(_) => (true, !tag_already_exists),
    };

    ReleaseDecision {
        version_changed,
        should_create_release,
        new_tag_name,
        current_version: current_version.to_string(),
        latest_version,
    }
}
