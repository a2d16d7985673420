//! Project lifecycle service
//!
//! Resolves every referenced entity through its store before acting and
//! fails with `Error::EntityNotFound` as soon as a lookup comes back empty.
//! Identifiers in responses are always the ones assigned by the store.

use std::sync::Arc;

use cubeai_common::{Error, ErrorCode, Result};

use crate::domain::entities::{Curriculum, Member, NewProject, NewProjectHistory, Project};
use crate::dto::{
    ProjectCreateRequest, ProjectHistoryDetailResponse, ProjectHistoryResponse,
    ProjectHistorySummaryResponse, ProjectResponse, ProjectSaveRequest, ProjectSummaryResponse,
};
use crate::repository::{
    CurriculumStore, MemberStore, ProjectHistoryStore, ProjectStore, ProjectsRepositories,
};

fn not_found(code: ErrorCode, id: i64) -> Error {
    tracing::warn!(code = %code, id, "Entity lookup failed");
    Error::EntityNotFound(code)
}

#[derive(Clone)]
pub struct ProjectService {
    members: Arc<dyn MemberStore>,
    curricula: Arc<dyn CurriculumStore>,
    projects: Arc<dyn ProjectStore>,
    project_histories: Arc<dyn ProjectHistoryStore>,
}

impl ProjectService {
    pub fn new(
        members: Arc<dyn MemberStore>,
        curricula: Arc<dyn CurriculumStore>,
        projects: Arc<dyn ProjectStore>,
        project_histories: Arc<dyn ProjectHistoryStore>,
    ) -> Self {
        Self {
            members,
            curricula,
            projects,
            project_histories,
        }
    }

    /// Build a service backed by the PostgreSQL repositories
    pub fn from_repositories(repos: ProjectsRepositories) -> Self {
        Self::new(
            Arc::new(repos.members),
            Arc::new(repos.curricula),
            Arc::new(repos.projects),
            Arc::new(repos.project_histories),
        )
    }

    async fn find_member(&self, member_id: i64) -> Result<Member> {
        self.members
            .find_by_id(member_id)
            .await?
            .ok_or_else(|| not_found(ErrorCode::MemberNotFound, member_id))
    }

    async fn find_curriculum(&self, curriculum_id: i64) -> Result<Curriculum> {
        self.curricula
            .find_by_id(curriculum_id)
            .await?
            .ok_or_else(|| not_found(ErrorCode::CurriculumNotFound, curriculum_id))
    }

    async fn find_project(&self, project_id: i64) -> Result<Project> {
        self.projects
            .find_by_id(project_id)
            .await?
            .ok_or_else(|| not_found(ErrorCode::ProjectNotFound, project_id))
    }

    /// Create a project for `member_id` against the requested curriculum
    pub async fn create_project(
        &self,
        member_id: i64,
        request: ProjectCreateRequest,
    ) -> Result<ProjectResponse> {
        let member = self.find_member(member_id).await?;
        let curriculum = self.find_curriculum(request.curriculum_id).await?;

        let project = self
            .projects
            .save(NewProject::new(&member, Some(&curriculum)))
            .await?;

        tracing::info!(
            project_id = project.id,
            member_id,
            curriculum_id = curriculum.id,
            "Project created"
        );
        Ok(project.into())
    }

    /// Record a new snapshot of the project's structure
    pub async fn save_project(
        &self,
        project_id: i64,
        request: ProjectSaveRequest,
    ) -> Result<ProjectHistoryResponse> {
        let project = self.find_project(project_id).await?;

        let history = self
            .project_histories
            .save(NewProjectHistory::new(&project, request.structure))
            .await?;

        tracing::info!(
            project_id,
            project_history_id = history.id,
            bytes = history.structure.len(),
            "Project history saved"
        );
        Ok(history.into())
    }

    /// Get a single project
    pub async fn get_project(&self, project_id: i64) -> Result<ProjectResponse> {
        let project = self.find_project(project_id).await?;
        Ok(project.into())
    }

    /// List every snapshot of a project, newest first
    pub async fn get_project_history(
        &self,
        project_id: i64,
    ) -> Result<Vec<ProjectHistorySummaryResponse>> {
        let project = self.find_project(project_id).await?;

        let histories = self.project_histories.find_all_by_project(&project).await?;
        tracing::debug!(project_id, count = histories.len(), "Listed project histories");

        Ok(histories.into_iter().map(Into::into).collect())
    }

    /// Get one snapshot including its structure payload
    pub async fn get_project_history_detail(
        &self,
        project_history_id: i64,
    ) -> Result<ProjectHistoryDetailResponse> {
        let history = self
            .project_histories
            .find_by_id(project_history_id)
            .await?
            .ok_or_else(|| not_found(ErrorCode::ProjectHistoryNotFound, project_history_id))?;

        Ok(history.into())
    }

    /// List the projects owned by a member, in store order
    pub async fn get_projects(&self, member_id: i64) -> Result<Vec<ProjectSummaryResponse>> {
        let member = self.find_member(member_id).await?;

        let projects = self.projects.find_all_by_member(&member).await?;
        tracing::debug!(member_id, count = projects.len(), "Listed projects");

        Ok(projects.into_iter().map(Into::into).collect())
    }
}
