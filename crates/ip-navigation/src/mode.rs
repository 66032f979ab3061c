//! View modes
//!
//! Several routes render the same view module in a different sub-state
//! (the declaration list filtered to "returned", the progress page on its
//! "warning" tab, ...). The route name alone determines the mode, so a view
//! branches on [`ViewMode`] rather than on the raw path.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::name::RouteName;

/// Loadable view module; one per page implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewModule {
    DeclarationIndex,
    ProgressIndex,
    BrowseIndex,
    Preparation,
    ProjectMap,
    SmsSettings,
}

impl ViewModule {
    pub const ALL: [ViewModule; 6] = [
        Self::DeclarationIndex,
        Self::ProgressIndex,
        Self::BrowseIndex,
        Self::Preparation,
        Self::ProjectMap,
        Self::SmsSettings,
    ];

    /// Location of the module relative to the views root
    pub fn source(&self) -> &'static str {
        match self {
            Self::DeclarationIndex => "all-projects/project-declaration/Index",
            Self::ProgressIndex => "all-projects/progress-report/Index",
            Self::BrowseIndex => "all-projects/project-browse/Index",
            Self::Preparation => "planning-reserve/Preparation",
            Self::ProjectMap => "geographic-info/ProjectMap",
            Self::SmsSettings => "sms-management/Settings",
        }
    }
}

impl fmt::Display for ViewModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.source())
    }
}

/// Declaration list filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationStatus {
    All,
    Approval,
    Transfer,
    Returned,
    Abnormal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressView {
    Report,
    Audit,
    Query,
    Warning,
    Statistics,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrowseView {
    All,
    Level,
    District,
    History,
    Statistics,
    Coordination,
}

/// The module a route renders and the sub-state it renders it in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "module", content = "view", rename_all = "snake_case")]
pub enum ViewMode {
    Declaration(DeclarationStatus),
    Progress(ProgressView),
    Browse(BrowseView),
    PlanningPreparation,
    GeographicMap,
    SmsSettings,
}

impl ViewMode {
    pub fn module(&self) -> ViewModule {
        match self {
            Self::Declaration(_) => ViewModule::DeclarationIndex,
            Self::Progress(_) => ViewModule::ProgressIndex,
            Self::Browse(_) => ViewModule::BrowseIndex,
            Self::PlanningPreparation => ViewModule::Preparation,
            Self::GeographicMap => ViewModule::ProjectMap,
            Self::SmsSettings => ViewModule::SmsSettings,
        }
    }
}

impl From<RouteName> for ViewMode {
    fn from(name: RouteName) -> Self {
        use RouteName::*;

        match name {
            ProjectDeclaration => Self::Declaration(DeclarationStatus::All),
            ProjectApproval => Self::Declaration(DeclarationStatus::Approval),
            ProjectTransfer => Self::Declaration(DeclarationStatus::Transfer),
            ProjectReturned => Self::Declaration(DeclarationStatus::Returned),
            ProjectAbnormal => Self::Declaration(DeclarationStatus::Abnormal),
            ProgressReport => Self::Progress(ProgressView::Report),
            ProgressAudit => Self::Progress(ProgressView::Audit),
            ProgressQuery => Self::Progress(ProgressView::Query),
            ProgressWarning => Self::Progress(ProgressView::Warning),
            ProgressStatistics => Self::Progress(ProgressView::Statistics),
            ProjectBrowse => Self::Browse(BrowseView::All),
            ProjectBrowseLevel => Self::Browse(BrowseView::Level),
            ProjectBrowseDistrict => Self::Browse(BrowseView::District),
            ProjectBrowseHistory => Self::Browse(BrowseView::History),
            ProjectStatistics => Self::Browse(BrowseView::Statistics),
            ProjectCoordination => Self::Browse(BrowseView::Coordination),
            PlanningPreparation => Self::PlanningPreparation,
            GeographicMap => Self::GeographicMap,
            SmsSettings => Self::SmsSettings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_modes_are_distinct_per_route() {
        let modes: HashSet<ViewMode> = RouteName::ALL.into_iter().map(ViewMode::from).collect();
        assert_eq!(modes.len(), RouteName::ALL.len());
    }

    #[test]
    fn test_every_module_is_reachable() {
        let modules: HashSet<ViewModule> = RouteName::ALL
            .into_iter()
            .map(|name| ViewMode::from(name).module())
            .collect();
        assert_eq!(modules.len(), ViewModule::ALL.len());
    }

    #[test]
    fn test_statistics_and_coordination_reuse_browse() {
        assert_eq!(ViewMode::from(RouteName::ProjectStatistics).module(), ViewModule::BrowseIndex);
        assert_eq!(ViewMode::from(RouteName::ProjectCoordination).module(), ViewModule::BrowseIndex);
        assert_ne!(
            ViewMode::from(RouteName::ProjectStatistics),
            ViewMode::from(RouteName::ProgressStatistics)
        );
    }

    #[test]
    fn test_mode_wire_shape() {
        let json = serde_json::to_value(ViewMode::Declaration(DeclarationStatus::Returned)).unwrap();
        assert_eq!(json, serde_json::json!({ "module": "declaration", "view": "returned" }));

        let json = serde_json::to_value(ViewMode::GeographicMap).unwrap();
        assert_eq!(json, serde_json::json!({ "module": "geographic_map" }));
    }
}
