//! Store contracts and repository implementations for the Projects domain
//!
//! The service depends only on the `*Store` traits. `ProjectsRepositories`
//! bundles the PostgreSQL implementations; `mock` holds in-memory ones.

pub mod curricula;
pub mod members;
pub mod mock;
pub mod project_histories;
pub mod projects;

use cubeai_common::Result;
use sqlx::PgPool;

use crate::domain::entities::{
    Curriculum, Member, NewProject, NewProjectHistory, Project, ProjectHistory,
};

pub use curricula::CurriculumRepository;
pub use members::MemberRepository;
pub use project_histories::ProjectHistoryRepository;
pub use projects::ProjectRepository;

/// Lookup of members by identifier
#[async_trait::async_trait]
pub trait MemberStore: Send + Sync {
    async fn find_by_id(&self, member_id: i64) -> Result<Option<Member>>;
}

/// Lookup of curricula by identifier
#[async_trait::async_trait]
pub trait CurriculumStore: Send + Sync {
    async fn find_by_id(&self, curriculum_id: i64) -> Result<Option<Curriculum>>;
}

/// Persistence of projects
#[async_trait::async_trait]
pub trait ProjectStore: Send + Sync {
    async fn find_by_id(&self, project_id: i64) -> Result<Option<Project>>;

    /// Insert a project; the returned entity carries the assigned identifier
    async fn save(&self, project: NewProject) -> Result<Project>;

    /// All projects owned by `member`, in store order
    async fn find_all_by_member(&self, member: &Member) -> Result<Vec<Project>>;
}

/// Persistence of project history snapshots
#[async_trait::async_trait]
pub trait ProjectHistoryStore: Send + Sync {
    async fn find_by_id(&self, project_history_id: i64) -> Result<Option<ProjectHistory>>;

    /// Insert a snapshot; the returned entity carries the assigned identifier
    async fn save(&self, history: NewProjectHistory) -> Result<ProjectHistory>;

    /// All snapshots of `project`, newest first
    async fn find_all_by_project(&self, project: &Project) -> Result<Vec<ProjectHistory>>;
}

/// Combined repository access for the Projects domain
#[derive(Clone)]
pub struct ProjectsRepositories {
    pub members: MemberRepository,
    pub curricula: CurriculumRepository,
    pub projects: ProjectRepository,
    pub project_histories: ProjectHistoryRepository,
}

impl ProjectsRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            members: MemberRepository::new(pool.clone()),
            curricula: CurriculumRepository::new(pool.clone()),
            projects: ProjectRepository::new(pool.clone()),
            project_histories: ProjectHistoryRepository::new(pool),
        }
    }
}
