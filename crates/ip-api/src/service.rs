//! Project lifecycle service
//!
//! Create a draft, replace its sections while it is a draft, submit it for
//! review, append progress reports. Contracts decide what is acceptable;
//! the repository makes each change atomic.

use std::sync::Arc;

use ip_contracts::{Contract, ProgressReportContract, SubmitProjectContract, UpdateProjectContract};
use ip_core::{IpError, IpResult, ProjectId};
use ip_models::{ProgressReport, Project, ProjectStatus, ProjectUpdate};
use tracing::{debug, info};

use crate::repository::{ProjectRepository, StoredProject};

#[derive(Clone)]
pub struct ProjectService {
    repo: Arc<dyn ProjectRepository>,
}

impl ProjectService {
    pub fn new(repo: Arc<dyn ProjectRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(&self) -> IpResult<ProjectId> {
        let stored = self.repo.create().await?;
        let id = stored
            .project
            .id
            .ok_or_else(|| IpError::Internal("repository returned a project without id".into()))?;
        info!(project_id = %id, "Project draft created");
        Ok(id)
    }

    pub async fn get(&self, id: &ProjectId) -> IpResult<Project> {
        self.find(id).await.map(|stored| stored.project)
    }

    pub async fn status(&self, id: &ProjectId) -> IpResult<ProjectStatus> {
        self.find(id).await.map(|stored| stored.status)
    }

    pub async fn update(&self, id: &ProjectId, update: ProjectUpdate) -> IpResult<()> {
        self.repo
            .modify(
                id,
                Box::new(move |stored: &mut StoredProject| {
                    UpdateProjectContract::new(stored.status).validate(&update)?;
                    update.apply_to(&mut stored.project);
                    Ok(())
                }),
            )
            .await?;
        info!(project_id = %id, "Project updated");
        Ok(())
    }

    /// Move a draft under review
    ///
    /// Submitting a project that is already under review succeeds without
    /// changing it.
    pub async fn submit(&self, id: &ProjectId) -> IpResult<()> {
        let stored = self
            .repo
            .modify(
                id,
                Box::new(|stored: &mut StoredProject| {
                    if stored.status == ProjectStatus::UnderReview {
                        return Ok(());
                    }
                    SubmitProjectContract::new().validate(&stored.project)?;
                    stored.status = ProjectStatus::UnderReview;
                    stored.submitted_at = Some(chrono::Utc::now());
                    Ok(())
                }),
            )
            .await?;
        info!(project_id = %id, status = stored.status.as_str(), "Project submitted");
        Ok(())
    }

    pub async fn append_progress_report(&self, id: &ProjectId, report: ProgressReport) -> IpResult<usize> {
        if self.repo.find(id).await?.is_none() {
            return Err(IpError::not_found("Project", id));
        }
        ProgressReportContract::new().validate(&report)?;

        let stored = self
            .repo
            .modify(
                id,
                Box::new(move |stored: &mut StoredProject| {
                    stored.project.append_report(report);
                    Ok(())
                }),
            )
            .await?;
        let count = stored.project.report_count();
        info!(project_id = %id, reports = count, "Progress report appended");
        Ok(count)
    }

    async fn find(&self, id: &ProjectId) -> IpResult<StoredProject> {
        debug!(project_id = %id, "Loading project");
        self.repo
            .find(id)
            .await?
            .ok_or_else(|| IpError::not_found("Project", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryProjectRepository;
    use ip_models::{FundingSource, ProjectBasicInfo};

    fn service() -> ProjectService {
        ProjectService::new(Arc::new(InMemoryProjectRepository::new()))
    }

    async fn complete_draft(service: &ProjectService) -> ProjectId {
        let id = service.create().await.unwrap();
        let update = ProjectUpdate::new()
            .with_basic_info(ProjectBasicInfo::named("Bridge A"))
            .with_funding_source(FundingSource {
                total_investment: Some(1000.0),
                ..Default::default()
            });
        service.update(&id, update).await.unwrap();
        id
    }

    #[tokio::test]
    async fn test_created_project_is_empty_draft() {
        let service = service();
        let id = service.create().await.unwrap();

        let project = service.get(&id).await.unwrap();
        assert_eq!(project.id.as_ref(), Some(&id));
        assert!(project.progress_reports.is_none());
        assert_eq!(service.status(&id).await.unwrap(), ProjectStatus::Draft);
    }

    #[tokio::test]
    async fn test_submit_incomplete_draft_is_rejected() {
        let service = service();
        let id = service.create().await.unwrap();

        let err = service.submit(&id).await.unwrap_err();
        assert!(matches!(err, IpError::Validation(ref e) if e.has_error("basicInfo.projectName")));
        assert_eq!(service.status(&id).await.unwrap(), ProjectStatus::Draft);
    }

    #[tokio::test]
    async fn test_submit_then_resubmit() {
        let service = service();
        let id = complete_draft(&service).await;

        service.submit(&id).await.unwrap();
        assert_eq!(service.status(&id).await.unwrap(), ProjectStatus::UnderReview);

        service.submit(&id).await.unwrap();
        assert_eq!(service.status(&id).await.unwrap(), ProjectStatus::UnderReview);
    }

    #[tokio::test]
    async fn test_update_after_submit_is_rejected() {
        let service = service();
        let id = complete_draft(&service).await;
        service.submit(&id).await.unwrap();

        let err = service
            .update(&id, ProjectUpdate::new().with_basic_info(ProjectBasicInfo::named("Bridge B")))
            .await
            .unwrap_err();
        assert!(matches!(err, IpError::Validation(_)));
        assert_eq!(service.get(&id).await.unwrap().basic_info.project_name, "Bridge A");
    }

    #[tokio::test]
    async fn test_reports_append_in_order() {
        let service = service();
        let id = complete_draft(&service).await;
        service.submit(&id).await.unwrap();

        for month in ["2024-01", "2024-02"] {
            let report = ProgressReport {
                monthly_progress: Some(month.into()),
                ..Default::default()
            };
            service.append_progress_report(&id, report).await.unwrap();
        }

        let project = service.get(&id).await.unwrap();
        let months: Vec<_> = project
            .reports()
            .iter()
            .filter_map(|r| r.monthly_progress.as_deref())
            .collect();
        assert_eq!(months, vec!["2024-01", "2024-02"]);
    }

    #[tokio::test]
    async fn test_unknown_id_everywhere() {
        let service = service();
        let ghost = ProjectId::from("ghost");

        assert!(matches!(service.get(&ghost).await, Err(IpError::NotFound { .. })));
        assert!(matches!(service.submit(&ghost).await, Err(IpError::NotFound { .. })));
        assert!(matches!(
            service.update(&ghost, ProjectUpdate::new()).await,
            Err(IpError::NotFound { .. })
        ));
        assert!(matches!(
            service.append_progress_report(&ghost, ProgressReport::default()).await,
            Err(IpError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_invalid_report_is_not_appended() {
        let service = service();
        let id = service.create().await.unwrap();
        let report = ProgressReport {
            total_completed_investment: Some(-1.0),
            ..Default::default()
        };

        assert!(matches!(
            service.append_progress_report(&id, report).await,
            Err(IpError::Validation(_))
        ));
        assert_eq!(service.get(&id).await.unwrap().report_count(), 0);
    }
}
