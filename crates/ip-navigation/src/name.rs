//! Route names
//!
//! Names are the stable identifiers views and links refer to; paths may be
//! mounted under a different base but names never change.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RouteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteName {
    ProjectDeclaration,
    ProjectApproval,
    ProjectTransfer,
    ProjectReturned,
    ProjectAbnormal,
    ProgressReport,
    ProgressAudit,
    ProgressQuery,
    ProgressWarning,
    ProgressStatistics,
    ProjectBrowse,
    ProjectBrowseLevel,
    ProjectBrowseDistrict,
    ProjectBrowseHistory,
    ProjectStatistics,
    ProjectCoordination,
    PlanningPreparation,
    GeographicMap,
    SmsSettings,
}

impl RouteName {
    /// Every route, in menu order
    pub const ALL: [RouteName; 19] = [
        Self::ProjectDeclaration,
        Self::ProjectApproval,
        Self::ProjectTransfer,
        Self::ProjectReturned,
        Self::ProjectAbnormal,
        Self::ProgressReport,
        Self::ProgressAudit,
        Self::ProgressQuery,
        Self::ProgressWarning,
        Self::ProgressStatistics,
        Self::ProjectBrowse,
        Self::ProjectBrowseLevel,
        Self::ProjectBrowseDistrict,
        Self::ProjectBrowseHistory,
        Self::ProjectStatistics,
        Self::ProjectCoordination,
        Self::PlanningPreparation,
        Self::GeographicMap,
        Self::SmsSettings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProjectDeclaration => "project-declaration",
            Self::ProjectApproval => "project-approval",
            Self::ProjectTransfer => "project-transfer",
            Self::ProjectReturned => "project-returned",
            Self::ProjectAbnormal => "project-abnormal",
            Self::ProgressReport => "progress-report",
            Self::ProgressAudit => "progress-audit",
            Self::ProgressQuery => "progress-query",
            Self::ProgressWarning => "progress-warning",
            Self::ProgressStatistics => "progress-statistics",
            Self::ProjectBrowse => "project-browse",
            Self::ProjectBrowseLevel => "project-browse-level",
            Self::ProjectBrowseDistrict => "project-browse-district",
            Self::ProjectBrowseHistory => "project-browse-history",
            Self::ProjectStatistics => "project-statistics",
            Self::ProjectCoordination => "project-coordination",
            Self::PlanningPreparation => "planning-preparation",
            Self::GeographicMap => "geographic-map",
            Self::SmsSettings => "sms-settings",
        }
    }

    /// Path relative to the history base
    pub fn path(&self) -> &'static str {
        match self {
            Self::ProjectDeclaration => "/all-projects/project-declaration",
            Self::ProjectApproval => "/all-projects/project-declaration/approval",
            Self::ProjectTransfer => "/all-projects/project-declaration/transfer",
            Self::ProjectReturned => "/all-projects/project-declaration/returned",
            Self::ProjectAbnormal => "/all-projects/project-declaration/abnormal",
            Self::ProgressReport => "/all-projects/progress-report",
            Self::ProgressAudit => "/all-projects/progress-report/audit",
            Self::ProgressQuery => "/all-projects/progress-report/query",
            Self::ProgressWarning => "/all-projects/progress-report/warning",
            Self::ProgressStatistics => "/all-projects/progress-report/statistics",
            Self::ProjectBrowse => "/all-projects/project-browse",
            Self::ProjectBrowseLevel => "/all-projects/project-browse/level",
            Self::ProjectBrowseDistrict => "/all-projects/project-browse/district",
            Self::ProjectBrowseHistory => "/all-projects/project-browse/history",
            Self::ProjectStatistics => "/all-projects/statistics",
            Self::ProjectCoordination => "/all-projects/coordination",
            Self::PlanningPreparation => "/planning-reserve/preparation",
            Self::GeographicMap => "/geographic-info/map",
            Self::SmsSettings => "/sms-management/settings",
        }
    }

    /// Page title shown on the tab
    pub fn title(&self) -> &'static str {
        match self {
            Self::ProjectDeclaration => "Project Declaration",
            Self::ProjectApproval => "Pending Approval",
            Self::ProjectTransfer => "Transferred",
            Self::ProjectReturned => "Returned",
            Self::ProjectAbnormal => "Abnormal",
            Self::ProgressReport => "Progress Report",
            Self::ProgressAudit => "Progress Audit",
            Self::ProgressQuery => "Progress Query",
            Self::ProgressWarning => "Progress Warning",
            Self::ProgressStatistics => "Progress Statistics",
            Self::ProjectBrowse => "Project Browse",
            Self::ProjectBrowseLevel => "By Level",
            Self::ProjectBrowseDistrict => "By District",
            Self::ProjectBrowseHistory => "History",
            Self::ProjectStatistics => "Project Statistics",
            Self::ProjectCoordination => "Issue Coordination",
            Self::PlanningPreparation => "Project Preparation",
            Self::GeographicMap => "Project Map",
            Self::SmsSettings => "SMS Settings",
        }
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RouteName {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| RouteError::UnknownName(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for name in RouteName::ALL {
            assert_eq!(name.as_str().parse::<RouteName>(), Ok(name));
        }
    }

    #[test]
    fn test_serde_matches_as_str() {
        for name in RouteName::ALL {
            let json = serde_json::to_value(name).unwrap();
            assert_eq!(json, name.as_str());
        }
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(
            "project-archive".parse::<RouteName>(),
            Err(RouteError::UnknownName("project-archive".into()))
        );
    }
}
