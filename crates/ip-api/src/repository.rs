//! Project storage
//!
//! Mutations go through [`ProjectRepository::modify`], which runs the change
//! against the stored record while holding the record's lock, so a
//! check-then-write (e.g. "still a draft?" then "apply update") cannot
//! interleave with another request for the same project.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use ip_core::{IpError, IpResult, ProjectId};
use ip_models::{Project, ProjectStatus};
use parking_lot::RwLock;

/// A project together with its service-side bookkeeping
#[derive(Debug, Clone, PartialEq)]
pub struct StoredProject {
    pub project: Project,
    pub status: ProjectStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub submitted_at: Option<DateTime<Utc>>,
}

impl StoredProject {
    pub fn draft(id: ProjectId) -> Self {
        let now = Utc::now();
        Self {
            project: Project::draft(id),
            status: ProjectStatus::Draft,
            created_at: now,
            updated_at: now,
            submitted_at: None,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// A change applied to one stored project
pub type ProjectChange = Box<dyn FnOnce(&mut StoredProject) -> IpResult<()> + Send>;

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Allocate and store a new empty draft
    async fn create(&self) -> IpResult<StoredProject>;

    async fn find(&self, id: &ProjectId) -> IpResult<Option<StoredProject>>;

    /// Apply `change` atomically; nothing is written if it returns an error
    async fn modify(&self, id: &ProjectId, change: ProjectChange) -> IpResult<StoredProject>;

    async fn count(&self) -> IpResult<usize>;
}

/// Process-local repository
#[derive(Debug, Default)]
pub struct InMemoryProjectRepository {
    projects: RwLock<HashMap<ProjectId, StoredProject>>,
}

impl InMemoryProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn create(&self) -> IpResult<StoredProject> {
        let mut projects = self.projects.write();
        let mut id = ProjectId::generate();
        while projects.contains_key(&id) {
            id = ProjectId::generate();
        }
        let stored = StoredProject::draft(id.clone());
        projects.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find(&self, id: &ProjectId) -> IpResult<Option<StoredProject>> {
        Ok(self.projects.read().get(id).cloned())
    }

    async fn modify(&self, id: &ProjectId, change: ProjectChange) -> IpResult<StoredProject> {
        let mut projects = self.projects.write();
        let current = projects
            .get_mut(id)
            .ok_or_else(|| IpError::not_found("Project", id))?;

        let mut next = current.clone();
        change(&mut next)?;
        next.touch();
        *current = next.clone();
        Ok(next)
    }

    async fn count(&self) -> IpResult<usize> {
        Ok(self.projects.read().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ip_models::ProjectBasicInfo;

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryProjectRepository::new();
        let stored = repo.create().await.unwrap();
        let id = stored.project.id.clone().unwrap();

        let found = repo.find(&id).await.unwrap().unwrap();
        assert_eq!(found.status, ProjectStatus::Draft);
        assert_eq!(found.project, Project::draft(id));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_find_unknown_is_none() {
        let repo = InMemoryProjectRepository::new();
        assert!(repo.find(&ProjectId::from("nope")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_modify_applies_change() {
        let repo = InMemoryProjectRepository::new();
        let id = repo.create().await.unwrap().project.id.unwrap();

        let updated = repo
            .modify(
                &id,
                Box::new(|stored: &mut StoredProject| {
                    stored.project.basic_info = ProjectBasicInfo::named("Bridge A");
                    Ok(())
                }),
            )
            .await
            .unwrap();

        assert_eq!(updated.project.basic_info.project_name, "Bridge A");
        assert!(updated.updated_at >= updated.created_at);
        let found = repo.find(&id).await.unwrap().unwrap();
        assert_eq!(found.project.basic_info.project_name, "Bridge A");
    }

    #[tokio::test]
    async fn test_failed_change_writes_nothing() {
        let repo = InMemoryProjectRepository::new();
        let id = repo.create().await.unwrap().project.id.unwrap();

        let result = repo
            .modify(
                &id,
                Box::new(|stored: &mut StoredProject| {
                    stored.project.basic_info = ProjectBasicInfo::named("half-written");
                    Err(IpError::invalid("rejected"))
                }),
            )
            .await;

        assert!(matches!(result, Err(IpError::Validation(_))));
        let found = repo.find(&id).await.unwrap().unwrap();
        assert_eq!(found.project.basic_info.project_name, "");
    }

    #[tokio::test]
    async fn test_modify_unknown_is_not_found() {
        let repo = InMemoryProjectRepository::new();
        let result = repo.modify(&ProjectId::from("ghost"), Box::new(|_: &mut StoredProject| Ok(()))).await;
        assert!(matches!(result, Err(IpError::NotFound { .. })));
    }
}
