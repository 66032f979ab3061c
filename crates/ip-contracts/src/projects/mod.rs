//! Project contracts
//!
//! - `base`: field rules shared by every section-carrying operation
//! - `update`: partial update of a draft
//! - `submit`: draft to under-review transition
//! - `progress`: appended progress reports

mod base;
mod progress;
mod submit;
mod update;

pub use base::{validate_annual_info, validate_basic_info, validate_funding_source};
pub use progress::ProgressReportContract;
pub use submit::SubmitProjectContract;
pub use update::UpdateProjectContract;
