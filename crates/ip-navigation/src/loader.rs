//! On-demand view loading
//!
//! A view module is fetched the first time one of its routes is visited and
//! kept for the lifetime of the registry. Concurrent first visits share one
//! load. A failed load is reported to the visitor and attempted again on the
//! next visit.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use crate::error::{NavigationError, ViewLoadError};
use crate::mode::{ViewMode, ViewModule};
use crate::name::RouteName;
use crate::table::{Route, RouteTable};

/// Fetches the implementation of a view module
#[async_trait]
pub trait ViewLoader: Send + Sync {
    type View: Send + Sync;

    async fn load(&self, module: ViewModule) -> Result<Self::View, ViewLoadError>;
}

type Slot<V> = Arc<OnceCell<Arc<V>>>;

/// Cache of loaded view modules
pub struct ViewRegistry<L: ViewLoader> {
    loader: L,
    slots: Mutex<HashMap<ViewModule, Slot<L::View>>>,
}

impl<L: ViewLoader> ViewRegistry<L> {
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// The loaded view, loading it first if needed
    pub async fn get(&self, module: ViewModule) -> Result<Arc<L::View>, ViewLoadError> {
        let slot = self.slots.lock().entry(module).or_default().clone();

        let view = slot
            .get_or_try_init(|| async {
                debug!(%module, "Loading view module");
                match self.loader.load(module).await {
                    Ok(view) => {
                        info!(%module, "View module loaded");
                        Ok(Arc::new(view))
                    }
                    Err(e) => {
                        warn!(%module, error = %e, "View module failed to load");
                        Err(e)
                    }
                }
            })
            .await?;

        Ok(Arc::clone(view))
    }

    pub fn is_loaded(&self, module: ViewModule) -> bool {
        self.slots
            .lock()
            .get(&module)
            .is_some_and(|slot| slot.initialized())
    }

    /// Modules loaded so far, in declaration order
    pub fn loaded(&self) -> Vec<ViewModule> {
        ViewModule::ALL
            .into_iter()
            .filter(|module| self.is_loaded(*module))
            .collect()
    }
}

/// Result of a successful navigation
#[derive(Debug)]
pub struct Navigation<V> {
    pub route: Route,
    pub view: Arc<V>,
}

impl<V> Navigation<V> {
    pub fn name(&self) -> RouteName {
        self.route.name
    }

    pub fn mode(&self) -> ViewMode {
        self.route.mode
    }
}

/// Route resolution plus view loading
pub struct Navigator<L: ViewLoader> {
    table: RouteTable,
    views: ViewRegistry<L>,
}

impl<L: ViewLoader> Navigator<L> {
    pub fn new(table: RouteTable, loader: L) -> Self {
        Self {
            table,
            views: ViewRegistry::new(loader),
        }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn views(&self) -> &ViewRegistry<L> {
        &self.views
    }

    /// Navigate to a location as typed in the address bar
    pub async fn navigate(&self, location: &str) -> Result<Navigation<L::View>, NavigationError> {
        let route = *self.table.resolve(location)?;
        self.enter(route).await
    }

    /// Navigate to a named route
    pub async fn navigate_to(&self, name: RouteName) -> Result<Navigation<L::View>, NavigationError> {
        let route = *self.table.by_name(name)?;
        self.enter(route).await
    }

    async fn enter(&self, route: Route) -> Result<Navigation<L::View>, NavigationError> {
        let view = self.views.get(route.module()).await?;
        debug!(route = route.name.as_str(), mode = ?route.mode, "Entered route");
        Ok(Navigation { route, view })
    }
}
