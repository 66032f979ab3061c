//! Section-level field rules

use std::sync::LazyLock;

use ip_core::error::ValidationErrors;
use ip_models::{AnnualInfo, FundingSource, ProjectBasicInfo};
use regex::Regex;
use validator::Validate;

use crate::base::collect_field_errors;

/// Project codes: letters, digits and dashes
static PROJECT_CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9-]*$").unwrap());

/// Landline or mobile, optionally with area code, extension separators and spaces
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9][0-9 ()-]{4,31}$").unwrap());

static YEAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{4}$").unwrap());

pub fn validate_basic_info(info: &ProjectBasicInfo) -> ValidationErrors {
    let mut errors = collect_field_errors(info.validate());

    if let Some(ref code) = info.project_code {
        if !code.is_empty() && !PROJECT_CODE_PATTERN.is_match(code) {
            errors.add("projectCode", "may only contain letters, digits and dashes");
        }
    }
    if let Some(ref phone) = info.maintenance_contact_phone {
        if !phone.is_empty() && !PHONE_PATTERN.is_match(phone) {
            errors.add("maintenanceContactPhone", "is not a valid phone number");
        }
    }

    errors.nested("basicInfo")
}

pub fn validate_funding_source(funding: &FundingSource) -> ValidationErrors {
    collect_field_errors(funding.validate()).nested("fundingSource")
}

pub fn validate_annual_info(annual: &AnnualInfo) -> ValidationErrors {
    let mut errors = collect_field_errors(annual.validate());

    if let Some(ref year) = annual.year {
        if !YEAR_PATTERN.is_match(year) {
            errors.add("year", "must be a four-digit year");
        }
    }

    errors.nested("annualInfo")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_basic_info() {
        let info = ProjectBasicInfo {
            project_name: "Bridge A".into(),
            project_code: Some("XH-2024-001".into()),
            maintenance_contact_phone: Some("0571-8888 1234".into()),
            ..Default::default()
        };
        assert!(validate_basic_info(&info).is_empty());
    }

    #[test]
    fn test_invalid_code_and_phone() {
        let info = ProjectBasicInfo {
            project_name: "Bridge A".into(),
            project_code: Some("XH 2024/001".into()),
            maintenance_contact_phone: Some("call me".into()),
            ..Default::default()
        };
        let errors = validate_basic_info(&info);
        assert!(errors.has_error("basicInfo.projectCode"));
        assert!(errors.has_error("basicInfo.maintenanceContactPhone"));
    }

    #[test]
    fn test_empty_optional_strings_are_drafting_state() {
        let info = ProjectBasicInfo {
            project_code: Some(String::new()),
            maintenance_contact_phone: Some(String::new()),
            ..Default::default()
        };
        assert!(validate_basic_info(&info).is_empty());
    }

    #[test]
    fn test_negative_funding() {
        let funding = FundingSource {
            total_investment: Some(-1.0),
            other_cost: Some(2.0),
            ..Default::default()
        };
        let errors = validate_funding_source(&funding);
        assert!(errors.has_error("fundingSource.totalInvestment"));
        assert!(!errors.has_error("fundingSource.otherCost"));
    }

    #[test]
    fn test_annual_year_format() {
        let annual = AnnualInfo {
            year: Some("24".into()),
            ..Default::default()
        };
        assert!(validate_annual_info(&annual).has_error("annualInfo.year"));

        let annual = AnnualInfo {
            year: Some("2024".into()),
            balance_at_end_of_last_year: Some(-3.0),
            ..Default::default()
        };
        assert!(validate_annual_info(&annual).is_empty());
    }
}
