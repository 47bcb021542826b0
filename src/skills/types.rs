use serde::{Deserialize, Serialize};

/// A registered skill. Serializes with capitalized field names
/// (`Key`, `Name`, ...) to match the public wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Skill {
    pub key: String,
    pub name: String,
    pub description: String,
    pub logo: String,
    pub tags: Vec<String>,
}

/// The mutable fields of a skill, used by full replace. The key is never
/// part of this set; it comes from the request path and cannot change.
#[derive(Debug, Clone, Default)]
pub struct SkillFields {
    pub name: String,
    pub description: String,
    pub logo: String,
    pub tags: Vec<String>,
}

/// Validates a skill key: client-supplied, case-sensitive, required
/// non-empty. No character restrictions beyond that.
pub fn validate_key(key: &str) -> Result<(), String> {
    if key.is_empty() {
        return Err("Required field not filled".to_string());
    }
    Ok(())
}
