use std::cmp::Ordering;

/// Build a tag name by prepending `prefix` to `version`.
///
/// No separator is inserted and neither part is validated.
/// Example: prefix="v", version="1.2.3" -> "v1.2.3"
pub fn build_tag_name(prefix: &str, version: &str) -> String {
    format!("{}{}", prefix, version)
}

/// Recover the version part of a tag (e.g., prefix="v", "v1.2.3" -> "1.2.3").
///
/// A tag that does not start with `prefix` is returned unchanged.
pub fn version_from_tag<'a>(tag: &'a str, prefix: &str) -> &'a str {
    tag.strip_prefix(prefix).unwrap_or(tag)
}

/// Dotted numeric release plus optional pre-release, compared the way
/// `git tag --sort=-version:refname` orders versions: `1.1` is newer than
/// `1.0.5`, and missing components count as zero.
#[derive(Debug, PartialEq, Eq)]
struct TagVersion {
    release: Vec<u64>,
    pre: semver::Prerelease,
}

impl TagVersion {
    fn parse(version: &str) -> Option<Self> {
        let version = version.split('+').next().unwrap_or(version);
        let (release, pre) = match version.split_once('-') {
            Some((release, pre)) => (release, semver::Prerelease::new(pre).ok()?),
            None => (version, semver::Prerelease::EMPTY),
        };

        let release = release
            .split('.')
            .map(|part| part.parse::<u64>().ok())
            .collect::<Option<Vec<_>>>()?;

        Some(TagVersion { release, pre })
    }
}

impl Ord for TagVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.release.len().max(other.release.len());
        let component = |v: &[u64], i: usize| v.get(i).copied().unwrap_or(0);

        (0..len)
            .map(|i| component(&self.release, i).cmp(&component(&other.release, i)))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.pre.cmp(&other.pre))
    }
}

impl PartialOrd for TagVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Sort tag names newest first by the version after `prefix`.
///
/// Versions may have any number of dotted numeric components (`1.1`,
/// `1.0.5`, `1.0.0.1`) and a semver pre-release, which sorts below its
/// release. Names without a numeric version sort after every versioned
/// one, in descending lexical order among themselves.
pub fn sort_tags_descending(tags: &mut [String], prefix: &str) {
    tags.sort_by(|a, b| {
        let va = TagVersion::parse(version_from_tag(a, prefix));
        let vb = TagVersion::parse(version_from_tag(b, prefix));

        match (va, vb) {
            (Some(va), Some(vb)) => vb.cmp(&va).then_with(|| b.cmp(a)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => b.cmp(a),
        }
    });
}
