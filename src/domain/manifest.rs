use crate::error::Result;
use serde_json::Value;

/// Extract the `version` field from manifest content (e.g. a `package.json`).
///
/// Returns the empty string when the field is absent, `null`, or otherwise
/// falsy (`false`, `0`, `""`). Non-zero numbers are rendered as JSON text.
/// Booleans, arrays and objects carry no usable version and also yield `""`.
///
/// # Errors
/// * `ReleaseError::Parse` - If the content is not valid JSON
pub fn parse_manifest_version(content: &str) -> Result<String> {
    let manifest: Value = serde_json::from_str(content)?;

    let version = match manifest.get("version") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) if n.as_f64() != Some(0.0) => n.to_string(),
        _ => String::new(),
    };

    Ok(version)
}
