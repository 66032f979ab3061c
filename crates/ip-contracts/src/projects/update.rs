//! Update contract for projects

use ip_core::error::ValidationErrors;
use ip_models::{ProjectStatus, ProjectUpdate};

use super::base::{validate_annual_info, validate_basic_info, validate_funding_source};
use crate::base::{Contract, ValidationResult};

/// Contract for a partial update of an existing project
pub struct UpdateProjectContract {
    status: ProjectStatus,
}

impl UpdateProjectContract {
    pub fn new(status: ProjectStatus) -> Self {
        Self { status }
    }
}

impl Contract<ProjectUpdate> for UpdateProjectContract {
    fn validate(&self, update: &ProjectUpdate) -> ValidationResult {
        let mut errors = ValidationErrors::new();

        if !self.status.is_editable() {
            errors.add_base(format!(
                "project is {} and can no longer be edited",
                self.status.as_str()
            ));
        }
        if let Some(ref basic_info) = update.basic_info {
            errors.merge(validate_basic_info(basic_info));
        }
        if let Some(ref funding_source) = update.funding_source {
            errors.merge(validate_funding_source(funding_source));
        }
        if let Some(ref annual_info) = update.annual_info {
            errors.merge(validate_annual_info(annual_info));
        }

        errors.into_result()
    }
}
