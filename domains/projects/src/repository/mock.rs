//! In-memory store implementations
//!
//! Used by unit and integration tests, and for running the API without a
//! database. Stores are seeded through builder methods, identifiers for
//! saved entities come from an explicit counter (`with_next_id`), and every
//! value passed to `save` is captured for later inspection.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use cubeai_common::Result;

use crate::domain::entities::{
    Curriculum, Member, NewProject, NewProjectHistory, Project, ProjectHistory,
};
use crate::repository::{CurriculumStore, MemberStore, ProjectHistoryStore, ProjectStore};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Mock member store
#[derive(Debug, Clone, Default)]
pub struct MockMemberStore {
    members: Arc<Mutex<HashMap<i64, Member>>>,
}

impl MockMemberStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a member
    pub fn with_member(self, member: Member) -> Self {
        self.insert(member);
        self
    }

    pub fn insert(&self, member: Member) {
        lock(&self.members).insert(member.id, member);
    }
}

#[async_trait::async_trait]
impl MemberStore for MockMemberStore {
    async fn find_by_id(&self, member_id: i64) -> Result<Option<Member>> {
        Ok(lock(&self.members).get(&member_id).cloned())
    }
}

/// Mock curriculum store
#[derive(Debug, Clone, Default)]
pub struct MockCurriculumStore {
    curricula: Arc<Mutex<HashMap<i64, Curriculum>>>,
}

impl MockCurriculumStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a curriculum
    pub fn with_curriculum(self, curriculum: Curriculum) -> Self {
        self.insert(curriculum);
        self
    }

    pub fn insert(&self, curriculum: Curriculum) {
        lock(&self.curricula).insert(curriculum.id, curriculum);
    }
}

#[async_trait::async_trait]
impl CurriculumStore for MockCurriculumStore {
    async fn find_by_id(&self, curriculum_id: i64) -> Result<Option<Curriculum>> {
        Ok(lock(&self.curricula).get(&curriculum_id).cloned())
    }
}

#[derive(Debug)]
struct ProjectTable {
    rows: Vec<Project>,
    next_id: i64,
    saved: Vec<NewProject>,
}

/// Mock project store
#[derive(Debug, Clone)]
pub struct MockProjectStore {
    table: Arc<Mutex<ProjectTable>>,
}

impl Default for MockProjectStore {
    fn default() -> Self {
        Self {
            table: Arc::new(Mutex::new(ProjectTable {
                rows: Vec::new(),
                next_id: 1,
                saved: Vec::new(),
            })),
        }
    }
}

impl MockProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a persisted project; later saves are numbered after it
    pub fn with_project(self, project: Project) -> Self {
        {
            let mut table = lock(&self.table);
            table.next_id = table.next_id.max(project.id + 1);
            table.rows.push(project);
        }
        self
    }

    /// Identifier the next `save` will assign
    pub fn with_next_id(self, next_id: i64) -> Self {
        lock(&self.table).next_id = next_id;
        self
    }

    /// Every value passed to `save`, in call order
    pub fn saved(&self) -> Vec<NewProject> {
        lock(&self.table).saved.clone()
    }
}

#[async_trait::async_trait]
impl ProjectStore for MockProjectStore {
    async fn find_by_id(&self, project_id: i64) -> Result<Option<Project>> {
        let table = lock(&self.table);
        Ok(table.rows.iter().find(|p| p.id == project_id).cloned())
    }

    async fn save(&self, project: NewProject) -> Result<Project> {
        let mut table = lock(&self.table);
        let created = Project {
            id: table.next_id,
            member_id: project.member_id,
            curriculum_id: project.curriculum_id,
            created_at: Utc::now(),
        };
        table.next_id += 1;
        table.saved.push(project);
        table.rows.push(created.clone());
        Ok(created)
    }

    async fn find_all_by_member(&self, member: &Member) -> Result<Vec<Project>> {
        let table = lock(&self.table);
        Ok(table
            .rows
            .iter()
            .filter(|p| p.is_owned_by(member))
            .cloned()
            .collect())
    }
}

#[derive(Debug)]
struct HistoryTable {
    rows: Vec<ProjectHistory>,
    next_id: i64,
    saved: Vec<NewProjectHistory>,
}

/// Mock project history store
#[derive(Debug, Clone)]
pub struct MockProjectHistoryStore {
    table: Arc<Mutex<HistoryTable>>,
}

impl Default for MockProjectHistoryStore {
    fn default() -> Self {
        Self {
            table: Arc::new(Mutex::new(HistoryTable {
                rows: Vec::new(),
                next_id: 1,
                saved: Vec::new(),
            })),
        }
    }
}

impl MockProjectHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a persisted snapshot; later saves are numbered after it
    pub fn with_history(self, history: ProjectHistory) -> Self {
        {
            let mut table = lock(&self.table);
            table.next_id = table.next_id.max(history.id + 1);
            table.rows.push(history);
        }
        self
    }

    /// Identifier the next `save` will assign
    pub fn with_next_id(self, next_id: i64) -> Self {
        lock(&self.table).next_id = next_id;
        self
    }

    /// Every value passed to `save`, in call order
    pub fn saved(&self) -> Vec<NewProjectHistory> {
        lock(&self.table).saved.clone()
    }
}

#[async_trait::async_trait]
impl ProjectHistoryStore for MockProjectHistoryStore {
    async fn find_by_id(&self, project_history_id: i64) -> Result<Option<ProjectHistory>> {
        let table = lock(&self.table);
        Ok(table
            .rows
            .iter()
            .find(|h| h.id == project_history_id)
            .cloned())
    }

    async fn save(&self, history: NewProjectHistory) -> Result<ProjectHistory> {
        let mut table = lock(&self.table);
        let created = ProjectHistory {
            id: table.next_id,
            project_id: history.project_id,
            structure: history.structure.clone(),
            created_at: Utc::now(),
        };
        table.next_id += 1;
        table.saved.push(history);
        table.rows.push(created.clone());
        Ok(created)
    }

    async fn find_all_by_project(&self, project: &Project) -> Result<Vec<ProjectHistory>> {
        let table = lock(&self.table);
        let mut histories: Vec<ProjectHistory> = table
            .rows
            .iter()
            .filter(|h| h.project_id == project.id)
            .cloned()
            .collect();
        histories.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(histories)
    }
}
