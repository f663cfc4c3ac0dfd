//! Domain logic - pure release rules independent of git, files and network

pub mod changelog;
pub mod decision;
pub mod manifest;
pub mod tag;

pub use changelog::{extract_section, release_body_or_fallback};
pub use decision::{decide_release, ReleaseDecision};
pub use manifest::parse_manifest_version;
pub use tag::{build_tag_name, sort_tags_descending, version_from_tag};
