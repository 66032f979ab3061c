//! Submit contract for projects

use ip_core::error::ValidationErrors;
use ip_models::Project;

use super::base::{validate_annual_info, validate_basic_info, validate_funding_source};
use crate::base::{Contract, ValidationResult};

/// Contract a draft must satisfy before it goes under review
///
/// Besides the ordinary field rules, a submission needs a project name and a
/// declared total investment.
#[derive(Debug, Default)]
pub struct SubmitProjectContract;

impl SubmitProjectContract {
    pub fn new() -> Self {
        Self
    }
}

impl Contract<Project> for SubmitProjectContract {
    fn validate(&self, project: &Project) -> ValidationResult {
        let mut errors = ValidationErrors::new();

        if project.basic_info.project_name.trim().is_empty() {
            errors.add("basicInfo.projectName", "can't be blank");
        }
        if project.funding_source.total_investment.is_none() {
            errors.add("fundingSource.totalInvestment", "must be declared before submission");
        }

        errors.merge(validate_basic_info(&project.basic_info));
        errors.merge(validate_funding_source(&project.funding_source));
        errors.merge(validate_annual_info(&project.annual_info));

        errors.into_result()
    }
}
