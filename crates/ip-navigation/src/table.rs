//! Route table
//!
//! Immutable after construction. Paths are stored relative to the history
//! base; [`RouteTable::resolve`] takes the full location as the browser sees
//! it and [`RouteTable::href`] produces one.

use std::collections::HashMap;

use ip_core::config::NavigationConfig;
use ip_models::TabItem;
use tracing::debug;

use crate::error::RouteError;
use crate::mode::{ViewMode, ViewModule};
use crate::name::RouteName;

/// Where `/` sends the visitor
pub const ROOT_REDIRECT: RouteName = RouteName::ProjectDeclaration;

/// One (path, name, view) binding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub name: RouteName,
    pub path: &'static str,
    pub mode: ViewMode,
}

impl Route {
    pub fn new(name: RouteName) -> Self {
        Self {
            name,
            path: name.path(),
            mode: ViewMode::from(name),
        }
    }

    pub fn module(&self) -> ViewModule {
        self.mode.module()
    }

    /// Tab opened when the route is visited; the landing page stays pinned
    pub fn tab(&self) -> TabItem {
        TabItem {
            key: self.name.as_str().to_string(),
            title: self.name.title().to_string(),
            closable: Some(self.name != ROOT_REDIRECT),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RouteTable {
    base_path: String,
    routes: Vec<Route>,
    by_path: HashMap<&'static str, usize>,
    by_name: HashMap<RouteName, usize>,
}

impl RouteTable {
    /// The application's full route table mounted under the configured base
    pub fn new(config: &NavigationConfig) -> Result<Self, RouteError> {
        Self::with_routes(
            &config.base_path,
            RouteName::ALL.into_iter().map(Route::new).collect(),
        )
    }

    /// Build a table from explicit routes
    ///
    /// Fails if a name or path occurs twice or a path is not of the form
    /// `/segment[/segment...]`.
    pub fn with_routes(base_path: &str, routes: Vec<Route>) -> Result<Self, RouteError> {
        let base_path = normalize_base(base_path)?;
        let mut by_path = HashMap::with_capacity(routes.len());
        let mut by_name = HashMap::with_capacity(routes.len());

        for (index, route) in routes.iter().enumerate() {
            validate_path(route.path)?;
            if by_name.insert(route.name, index).is_some() {
                return Err(RouteError::DuplicateName(route.name.as_str().to_string()));
            }
            if by_path.insert(route.path, index).is_some() {
                return Err(RouteError::DuplicatePath(route.path.to_string()));
            }
        }

        Ok(Self {
            base_path,
            routes,
            by_path,
            by_name,
        })
    }

    /// Normalized base path; empty when mounted at `/`
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn contains(&self, name: RouteName) -> bool {
        self.by_name.contains_key(&name)
    }

    /// Resolve a location (`/base/path?query#fragment`) to its route
    ///
    /// The root redirects to [`ROOT_REDIRECT`].
    pub fn resolve(&self, location: &str) -> Result<&Route, RouteError> {
        let not_found = || RouteError::NotFound {
            path: location.to_string(),
        };

        let path = location
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let path = self.strip_base(path).ok_or_else(not_found)?;
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        if path == "/" {
            debug!(location, redirect = ROOT_REDIRECT.as_str(), "Redirecting root");
            return self.by_name(ROOT_REDIRECT).map_err(|_| not_found());
        }

        let route = self
            .by_path
            .get(path)
            .map(|&index| &self.routes[index])
            .ok_or_else(not_found)?;
        debug!(location, route = route.name.as_str(), "Resolved route");
        Ok(route)
    }

    pub fn by_name(&self, name: RouteName) -> Result<&Route, RouteError> {
        self.by_name
            .get(&name)
            .map(|&index| &self.routes[index])
            .ok_or_else(|| RouteError::UnknownName(name.as_str().to_string()))
    }

    /// Full location for a named route, including the base path
    pub fn href(&self, name: RouteName) -> Result<String, RouteError> {
        let route = self.by_name(name)?;
        Ok(format!("{}{}", self.base_path, route.path))
    }

    fn strip_base<'a>(&self, path: &'a str) -> Option<&'a str> {
        if self.base_path.is_empty() {
            return Some(path);
        }
        let rest = path.strip_prefix(self.base_path.as_str())?;
        if rest.is_empty() || rest.starts_with('/') {
            Some(rest)
        } else {
            None
        }
    }
}

fn normalize_base(base_path: &str) -> Result<String, RouteError> {
    if !base_path.starts_with('/') {
        return Err(RouteError::InvalidPath {
            path: base_path.to_string(),
            reason: "base path must start with '/'",
        });
    }
    Ok(base_path.trim_end_matches('/').to_string())
}

fn validate_path(path: &str) -> Result<(), RouteError> {
    let invalid = |reason| RouteError::InvalidPath {
        path: path.to_string(),
        reason,
    };

    if !path.starts_with('/') {
        return Err(invalid("must start with '/'"));
    }
    if path == "/" {
        return Err(invalid("the root is reserved for the redirect"));
    }
    if path.ends_with('/') || path.contains("//") {
        return Err(invalid("empty path segment"));
    }
    if path.contains(['?', '#']) {
        return Err(invalid("query and fragment are not part of a route"));
    }
    Ok(())
}
