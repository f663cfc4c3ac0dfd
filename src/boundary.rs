use std::fmt;

/// Non-fatal conditions met while preparing a release.
/// These are reported to the user and the run continues.
#[derive(Debug, Clone, PartialEq)]
pub enum ReleaseWarning {
    /// The changelog file does not exist
    ChangelogMissing { path: String },
    /// The changelog exists but has no usable section for the version
    SectionNotFound { version: String, path: String },
    /// Listing existing tags failed; treated as "no prior tags"
    TagListingFailed { reason: String },
    /// The version changed but its tag name is already taken
    TagAlreadyExists { tag: String },
}

impl fmt::Display for ReleaseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseWarning::ChangelogMissing { path } => {
                write!(f, "Changelog not found at '{}', using default release notes", path)
            }
            ReleaseWarning::SectionNotFound { version, path } => {
                write!(
                    f,
                    "No changelog entry for version {} in '{}', using default release notes",
                    version, path
                )
            }
            ReleaseWarning::TagListingFailed { reason } => {
                write!(f, "Could not list existing tags ({}), assuming none", reason)
            }
            ReleaseWarning::TagAlreadyExists { tag } => {
                write!(f, "Tag '{}' already exists, skipping release", tag)
            }
        }
    }
}
