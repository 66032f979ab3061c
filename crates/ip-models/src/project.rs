//! Project aggregate
//!
//! A project is created as an empty draft, edited section by section, then
//! submitted for review. Progress reports are appended afterwards and never
//! rewritten.

use ip_core::ProjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Service-side lifecycle state
///
/// Not part of the `Project` wire shape; the client treats the transition as
/// opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    Draft,
    UnderReview,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::UnderReview => "under_review",
        }
    }

    pub fn is_editable(&self) -> bool {
        matches!(self, Self::Draft)
    }
}

/// Descriptive, responsibility and classification fields
///
/// Everything may be left unset while the draft is being filled in; a
/// missing `projectName` decodes as empty and is only required on submit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProjectBasicInfo {
    #[serde(default)]
    #[validate(length(max = 200))]
    pub project_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 64))]
    pub project_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_custom_warning: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_provincial_lead: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 500))]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry_park: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry_chain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approval_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planned_completion_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planned_resume_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_completion_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 2000))]
    pub construction_content: Option<String>,

    // Responsibility
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district_leader: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_unit_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_maintenance_unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 32))]
    pub maintenance_contact_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry_department: Option<String>,

    // Classification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_engineering: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_gov_invest: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invest_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signing_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub land_supply_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_invest_type: Option<Vec<String>>,
}

impl ProjectBasicInfo {
    pub fn named(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            ..Default::default()
        }
    }
}

/// Cost breakdown
///
/// No arithmetic relationship between the fields is enforced here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FundingSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0))]
    pub total_investment: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0))]
    pub engineering_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0))]
    pub demolition_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0))]
    pub other_cost: Option<f64>,
}

/// Per-year planning snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AnnualInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub four_batches: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0))]
    pub invest_to_end_of_last_year: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance_at_end_of_last_year: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0))]
    pub planned_investment_this_year: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planned_start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planned_completion_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub construction_plan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funding_arrangement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planned_progress_this_year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district_affiliation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_affiliation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub province_affiliation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quarterly_goal: Option<String>,
}

/// Point-in-time status update appended to a project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProgressReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub construction_phase: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_land_permit: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_planning_permit: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_construction_permit: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0))]
    pub completed_investment_this_month: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0))]
    pub total_completed_investment: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining_investment: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_progress: Option<String>,
    /// Image references in display order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_images: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issues: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_step_plan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0))]
    pub land_acquired_this_year: Option<f64>,
}

/// Full project record as served by `GET /projects/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Absent until the service has allocated the record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProjectId>,
    pub basic_info: ProjectBasicInfo,
    pub funding_source: FundingSource,
    pub annual_info: AnnualInfo,
    /// Oldest first; absent when nothing has been reported yet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_reports: Option<Vec<ProgressReport>>,
}

impl Project {
    /// An empty draft addressable by `id`
    pub fn draft(id: ProjectId) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }

    /// Whether the record has been allocated by the service
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    pub fn reports(&self) -> &[ProgressReport] {
        self.progress_reports.as_deref().unwrap_or(&[])
    }

    pub fn report_count(&self) -> usize {
        self.reports().len()
    }

    /// Append a report to the end of the history
    pub fn append_report(&mut self, report: ProgressReport) {
        self.progress_reports.get_or_insert_with(Vec::new).push(report);
    }
}

/// Response body of `POST /projects`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedProject {
    pub id: ProjectId,
}

/// Body of `PUT /projects/{id}`
///
/// Each supplied section replaces the stored one; sections left as `None`
/// are not sent and stay untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basic_info: Option<ProjectBasicInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funding_source: Option<FundingSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_info: Option<AnnualInfo>,
}

impl ProjectUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_basic_info(mut self, basic_info: ProjectBasicInfo) -> Self {
        self.basic_info = Some(basic_info);
        self
    }

    pub fn with_funding_source(mut self, funding_source: FundingSource) -> Self {
        self.funding_source = Some(funding_source);
        self
    }

    pub fn with_annual_info(mut self, annual_info: AnnualInfo) -> Self {
        self.annual_info = Some(annual_info);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.basic_info.is_none() && self.funding_source.is_none() && self.annual_info.is_none()
    }

    /// Apply the supplied sections to a project
    pub fn apply_to(&self, project: &mut Project) {
        if let Some(ref basic_info) = self.basic_info {
            project.basic_info = basic_info.clone();
        }
        if let Some(ref funding_source) = self.funding_source {
            project.funding_source = funding_source.clone();
        }
        if let Some(ref annual_info) = self.annual_info {
            project.annual_info = annual_info.clone();
        }
    }
}
