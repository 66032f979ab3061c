//! # ip-navigation
//!
//! Static navigation table of the project front-end.
//!
//! - [`RouteName`]: the closed set of named routes
//! - [`ViewMode`]: which view module a route renders and in which sub-state
//! - [`RouteTable`]: path <-> route resolution, menu derivation
//! - [`Navigator`]: resolution plus on-demand, cached view loading

pub mod error;
pub mod loader;
pub mod menu;
pub mod mode;
pub mod name;
pub mod table;

pub use error::{NavigationError, RouteError, ViewLoadError};
pub use loader::{Navigation, Navigator, ViewLoader, ViewRegistry};
pub use mode::{BrowseView, DeclarationStatus, ProgressView, ViewMode, ViewModule};
pub use name::RouteName;
pub use table::{Route, RouteTable, ROOT_REDIRECT};
