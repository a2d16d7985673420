//! Domain entities for the Projects domain
//!
//! Persisted entities (`Member`, `Curriculum`, `Project`, `ProjectHistory`)
//! always carry a store-assigned identifier. Values that have not been
//! persisted yet are modelled as separate `New*` types without an id, so the
//! service can never invent one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Member entity, created by the sign-in flow and only referenced here
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Member {
    pub id: i64,
    /// Identifier issued by the external OAuth2 provider
    pub oauth_id: String,
    pub nickname: String,
    pub profile_url: String,
    pub created_at: DateTime<Utc>,
}

/// Curriculum entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Curriculum {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Project entity
///
/// Owned by exactly one member; the curriculum association is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Project {
    pub id: i64,
    pub member_id: i64,
    pub curriculum_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Whether `member` owns this project
    pub fn is_owned_by(&self, member: &Member) -> bool {
        self.member_id == member.id
    }
}

/// A project that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub member_id: i64,
    pub curriculum_id: Option<i64>,
}

impl NewProject {
    pub fn new(member: &Member, curriculum: Option<&Curriculum>) -> Self {
        Self {
            member_id: member.id,
            curriculum_id: curriculum.map(|c| c.id),
        }
    }
}

/// Append-only snapshot of a project's structure document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ProjectHistory {
    pub id: i64,
    pub project_id: i64,
    /// Opaque serialized document, stored and returned verbatim
    pub structure: String,
    pub created_at: DateTime<Utc>,
}

/// A history snapshot that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProjectHistory {
    pub project_id: i64,
    pub structure: String,
}

impl NewProjectHistory {
    pub fn new(project: &Project, structure: String) -> Self {
        Self {
            project_id: project.id,
            structure,
        }
    }
}
