//! Contract for appended progress reports

use ip_models::ProgressReport;
use validator::Validate;

use crate::base::{collect_field_errors, Contract, ValidationResult};

/// Progress reports have no required fields; only amounts are range-checked
#[derive(Debug, Default)]
pub struct ProgressReportContract;

impl ProgressReportContract {
    pub fn new() -> Self {
        Self
    }
}

impl Contract<ProgressReport> for ProgressReportContract {
    fn validate(&self, report: &ProgressReport) -> ValidationResult {
        collect_field_errors(report.validate()).into_result()
    }
}
