use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::error::{AppError, Result};
use super::types::{validate_key, Skill, SkillFields};

/// In-memory store of skills, keyed by their client-supplied key.
///
/// The map is sharded (dashmap), so conflicting writers on one key
/// serialize while operations on different keys proceed in parallel.
/// Cloning the registry clones the handle, not the data.
#[derive(Clone, Default)]
pub struct SkillRegistry {
    skills: Arc<DashMap<String, Skill>>,
}

impl SkillRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new skill. The key must be non-empty and not already
    /// registered; the check and insert are a single atomic step.
    pub fn create(&self, skill: Skill) -> Result<Skill> {
        validate_key(&skill.key).map_err(AppError::BadRequest)?;

        match self.skills.entry(skill.key.clone()) {
            Entry::Occupied(_) => Err(AppError::AlreadyExists),
            Entry::Vacant(slot) => {
                slot.insert(skill.clone());
                Ok(skill)
            }
        }
    }

    /// Get a skill by key.
    pub fn get(&self, key: &str) -> Result<Skill> {
        self.skills
            .get(key)
            .map(|entry| entry.clone())
            .ok_or(AppError::NotFound)
    }

    /// List all skills, sorted by key. Iteration is read-committed with
    /// respect to concurrent single-key writes.
    pub fn list(&self) -> Vec<Skill> {
        let mut skills: Vec<Skill> = self.skills.iter().map(|entry| entry.clone()).collect();
        skills.sort_by(|a, b| a.key.cmp(&b.key));
        skills
    }

    /// Overwrite every mutable field of an existing skill. The key is
    /// fixed; a missing key fails and mutates nothing.
    pub fn replace(&self, key: &str, fields: SkillFields) -> Result<Skill> {
        let mut entry = self.skills.get_mut(key).ok_or(AppError::UpdateFailed)?;
        entry.name = fields.name;
        entry.description = fields.description;
        entry.logo = fields.logo;
        entry.tags = fields.tags;
        Ok(entry.clone())
    }

    /// Update only the name of an existing skill.
    pub fn set_name(&self, key: &str, name: String) -> Result<Skill> {
        let mut entry = self
            .skills
            .get_mut(key)
            .ok_or(AppError::FieldUpdateFailed("name"))?;
        entry.name = name;
        Ok(entry.clone())
    }

    /// Update only the description of an existing skill.
    pub fn set_description(&self, key: &str, description: String) -> Result<Skill> {
        let mut entry = self
            .skills
            .get_mut(key)
            .ok_or(AppError::FieldUpdateFailed("description"))?;
        entry.description = description;
        Ok(entry.clone())
    }

    /// Update only the logo of an existing skill.
    pub fn set_logo(&self, key: &str, logo: String) -> Result<Skill> {
        let mut entry = self
            .skills
            .get_mut(key)
            .ok_or(AppError::FieldUpdateFailed("logo"))?;
        entry.logo = logo;
        Ok(entry.clone())
    }

    /// Replace the tag list of an existing skill wholesale.
    pub fn set_tags(&self, key: &str, tags: Vec<String>) -> Result<Skill> {
        let mut entry = self
            .skills
            .get_mut(key)
            .ok_or(AppError::FieldUpdateFailed("tags"))?;
        entry.tags = tags;
        Ok(entry.clone())
    }

    /// Remove a skill. Deleting a key that was never registered (or is
    /// already gone) is reported as a failure.
    pub fn delete(&self, key: &str) -> Result<()> {
        self.skills
            .remove(key)
            .map(|_| ())
            .ok_or(AppError::DeleteFailed)
    }
}
