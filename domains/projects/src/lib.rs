//! Projects domain: members, curricula, projects, project history snapshots

pub mod api;
pub mod domain;
pub mod dto;
pub mod repository;
pub mod service;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{
    Curriculum, Member, NewProject, NewProjectHistory, Project, ProjectHistory,
};

// Re-export repository types
pub use repository::{
    CurriculumRepository, CurriculumStore, MemberRepository, MemberStore,
    ProjectHistoryRepository, ProjectHistoryStore, ProjectRepository, ProjectStore,
    ProjectsRepositories,
};

pub use service::ProjectService;

// Re-export API types
pub use api::routes;
pub use api::ProjectsState;
