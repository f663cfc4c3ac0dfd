//! Machine-readable run outputs.
//!
//! Written as `key=value` lines, appended to the file named by
//! `GITHUB_OUTPUT` on Actions runners, or printed to stdout elsewhere.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use super::orchestration::WorkflowResult;
use crate::error::Result;

/// Ordered key/value outputs of a finished run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutputs {
    entries: Vec<(&'static str, String)>,
}

impl RunOutputs {
    /// Outputs for a successful run.
    ///
    /// `release-id`, `release-url` and `tag-name` are only present when a
    /// release was actually created.
    pub fn from_result(result: &WorkflowResult) -> Self {
        let mut entries = vec![
            (
                "version-changed",
                result.decision.version_changed.to_string(),
            ),
            ("version", result.decision.current_version.clone()),
            ("release-created", result.release.is_some().to_string()),
        ];

        if let Some(release) = &result.release {
            entries.push(("release-id", release.id.to_string()));
            entries.push(("release-url", release.url.clone()));
            entries.push(("tag-name", result.decision.new_tag_name.clone()));
        }

        RunOutputs { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Render as `key=value` lines, each terminated by a newline.
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|(key, value)| format!("{}={}\n", key, value))
            .collect()
    }

    /// Append to `output_file` when given, otherwise print to stdout.
    pub fn write(&self, output_file: Option<&Path>) -> Result<()> {
        match output_file {
            Some(path) => {
                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                file.write_all(self.render().as_bytes())?;
            }
            None => print!("{}", self.render()),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::decide_release;
    use crate::hosting::CreatedRelease;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_outputs_without_release() {
        let result = WorkflowResult {
            decision: decide_release("1.2.3", Some("v1.2.3"), "v", true),
            release: None,
        };

        let outputs = RunOutputs::from_result(&result);
        assert_eq!(
            outputs.render(),
            "version-changed=false\nversion=1.2.3\nrelease-created=false\n"
        );
        assert_eq!(outputs.get("release-id"), None);
        assert_eq!(outputs.get("tag-name"), None);
    }

    #[test]
    fn test_outputs_with_release() {
        let result = WorkflowResult {
            decision: decide_release("1.3.0", Some("v1.2.3"), "v", false),
            release: Some(CreatedRelease {
                id: 42,
                url: "https://github.com/o/r/releases/tag/v1.3.0".to_string(),
            }),
        };

        let outputs = RunOutputs::from_result(&result);
        assert_eq!(outputs.get("version-changed"), Some("true"));
        assert_eq!(outputs.get("release-created"), Some("true"));
        assert_eq!(outputs.get("release-id"), Some("42"));
        assert_eq!(outputs.get("tag-name"), Some("v1.3.0"));
    }

    #[test]
    fn test_write_appends_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("github_output");
        fs::write(&path, "existing=1\n").unwrap();

        let result = WorkflowResult {
            decision: decide_release("1.0.0", None, "v", false),
            release: None,
        };
        RunOutputs::from_result(&result).write(Some(&path)).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("existing=1\nversion-changed=true\n"));
        assert!(content.ends_with("release-created=false\n"));
    }
}
