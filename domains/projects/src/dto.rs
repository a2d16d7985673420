//! Request and response DTOs for the Projects domain
//!
//! Responses are produced by `ProjectService` and serialized by the API
//! layer as camelCase JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Project, ProjectHistory};

/// Request for creating a project
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCreateRequest {
    /// Resolved by the service; an unknown id is a lookup failure, not a format error
    pub curriculum_id: i64,
}

impl ProjectCreateRequest {
    pub fn new(curriculum_id: i64) -> Self {
        Self { curriculum_id }
    }
}

/// Request for saving a project snapshot
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSaveRequest {
    /// Serialized structure document, kept verbatim
    #[validate(length(min = 1))]
    pub structure: String,
}

impl ProjectSaveRequest {
    pub fn new(structure: impl Into<String>) -> Self {
        Self {
            structure: structure.into(),
        }
    }
}

/// Project response DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    pub id: i64,
    pub curriculum_id: Option<i64>,
}

impl From<Project> for ProjectResponse {
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            curriculum_id: p.curriculum_id,
        }
    }
}

/// Entry in a member's project list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummaryResponse {
    pub id: i64,
    pub curriculum_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl From<Project> for ProjectSummaryResponse {
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            curriculum_id: p.curriculum_id,
            created_at: p.created_at,
        }
    }
}

/// Result of saving a snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectHistoryResponse {
    pub id: i64,
    pub structure: String,
}

impl From<ProjectHistory> for ProjectHistoryResponse {
    fn from(h: ProjectHistory) -> Self {
        Self {
            id: h.id,
            structure: h.structure,
        }
    }
}

/// Entry in a project's history list; omits the structure payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectHistorySummaryResponse {
    pub id: i64,
    pub project_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<ProjectHistory> for ProjectHistorySummaryResponse {
    fn from(h: ProjectHistory) -> Self {
        Self {
            id: h.id,
            project_id: h.project_id,
            created_at: h.created_at,
        }
    }
}

/// Full snapshot including the structure payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectHistoryDetailResponse {
    pub id: i64,
    pub project_id: i64,
    pub structure: String,
    pub created_at: DateTime<Utc>,
}

impl From<ProjectHistory> for ProjectHistoryDetailResponse {
    fn from(h: ProjectHistory) -> Self {
        Self {
            id: h.id,
            project_id: h.project_id,
            structure: h.structure,
            created_at: h.created_at,
        }
    }
}
