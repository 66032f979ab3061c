//! # ip-models
//!
//! Shape declarations shared by the resource client, the reference service
//! and the navigation layer.
//!
//! Optional fields stay `Option` end to end and are omitted from JSON when
//! unset, so "never filled in" remains distinguishable from "filled in as
//! empty".

pub mod layout;
pub mod project;

pub use ip_core::ProjectId;
pub use layout::{MenuItem, TabItem, UserInfo};
pub use project::{
    AnnualInfo, CreatedProject, FundingSource, ProgressReport, Project, ProjectBasicInfo,
    ProjectStatus, ProjectUpdate,
};
