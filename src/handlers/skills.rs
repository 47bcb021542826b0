use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::response::{success, ApiResponse, StatusMessage};
use crate::skills::{Skill, SkillFields};
use crate::state::AppState;

// Request bodies use lowercase field names; missing fields fall back to
// their empty values, matching the original wire behavior.

// POST /api/v1/skills
#[derive(Deserialize)]
pub struct CreateSkillRequest {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

pub async fn create_skill(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateSkillRequest>,
) -> Result<Json<ApiResponse<Skill>>> {
    let skill = Skill {
        key: req.key,
        name: req.name,
        description: req.description,
        logo: req.logo,
        tags: req.tags,
    };

    let created = state.skills.create(skill).inspect_err(|e| {
        tracing::warn!("create skill failed: {e}");
    })?;
    Ok(success(created))
}

// GET /api/v1/skills
pub async fn list_skills(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<Skill>>>> {
    Ok(success(state.skills.list()))
}

// GET /api/v1/skills/{key}
pub async fn get_skill(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> Result<Json<ApiResponse<Skill>>> {
    let skill = state.skills.get(&key).inspect_err(|e| {
        tracing::warn!("get skill '{key}' failed: {e}");
    })?;
    Ok(success(skill))
}

// PUT /api/v1/skills/{key}
#[derive(Deserialize)]
pub struct ReplaceSkillRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

pub async fn replace_skill(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
    Json(req): Json<ReplaceSkillRequest>,
) -> Result<Json<ApiResponse<Skill>>> {
    let fields = SkillFields {
        name: req.name,
        description: req.description,
        logo: req.logo,
        tags: req.tags,
    };

    let updated = state.skills.replace(&key, fields).inspect_err(|e| {
        tracing::warn!("replace skill '{key}' failed: {e}");
    })?;
    Ok(success(updated))
}

// PATCH /api/v1/skills/{key}/actions/name
#[derive(Deserialize)]
pub struct PatchNameRequest {
    #[serde(default)]
    pub name: String,
}

pub async fn patch_name(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
    Json(req): Json<PatchNameRequest>,
) -> Result<Json<ApiResponse<Skill>>> {
    require_non_empty(&req.name)?;

    let updated = state.skills.set_name(&key, req.name).inspect_err(|e| {
        tracing::warn!("patch name of skill '{key}' failed: {e}");
    })?;
    Ok(success(updated))
}

// PATCH /api/v1/skills/{key}/actions/description
#[derive(Deserialize)]
pub struct PatchDescriptionRequest {
    #[serde(default)]
    pub description: String,
}

pub async fn patch_description(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
    Json(req): Json<PatchDescriptionRequest>,
) -> Result<Json<ApiResponse<Skill>>> {
    require_non_empty(&req.description)?;

    let updated = state
        .skills
        .set_description(&key, req.description)
        .inspect_err(|e| {
            tracing::warn!("patch description of skill '{key}' failed: {e}");
        })?;
    Ok(success(updated))
}

// PATCH /api/v1/skills/{key}/actions/logo
#[derive(Deserialize)]
pub struct PatchLogoRequest {
    #[serde(default)]
    pub logo: String,
}

pub async fn patch_logo(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
    Json(req): Json<PatchLogoRequest>,
) -> Result<Json<ApiResponse<Skill>>> {
    require_non_empty(&req.logo)?;

    let updated = state.skills.set_logo(&key, req.logo).inspect_err(|e| {
        tracing::warn!("patch logo of skill '{key}' failed: {e}");
    })?;
    Ok(success(updated))
}

// PATCH /api/v1/skills/{key}/actions/tags
#[derive(Deserialize)]
pub struct PatchTagsRequest {
    #[serde(default)]
    pub tags: Vec<String>,
}

pub async fn patch_tags(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
    Json(req): Json<PatchTagsRequest>,
) -> Result<Json<ApiResponse<Skill>>> {
    if req.tags.is_empty() {
        return Err(AppError::BadRequest("Input incorrectly".into()));
    }

    let updated = state.skills.set_tags(&key, req.tags).inspect_err(|e| {
        tracing::warn!("patch tags of skill '{key}' failed: {e}");
    })?;
    Ok(success(updated))
}

// DELETE /api/v1/skills/{key}
pub async fn delete_skill(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> Result<Json<StatusMessage>> {
    state.skills.delete(&key).inspect_err(|e| {
        tracing::warn!("delete skill '{key}' failed: {e}");
    })?;

    Ok(Json(StatusMessage {
        status: "success",
        message: "Skill deleted".into(),
    }))
}

fn require_non_empty(value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(AppError::BadRequest("Input incorrectly".into()));
    }
    Ok(())
}
