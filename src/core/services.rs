//! Unified service container for the rules server
//!
//! Provides shared access to all core services.

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::search::SearchService;
use crate::core::store::RuleStore;
use std::sync::Arc;

/// Unified services container
///
/// The MCP adapter uses this struct for service access.
#[derive(Clone)]
pub struct Services {
    /// Immutable rule store loaded at startup
    pub store: Arc<RuleStore>,

    /// Search service over rule metadata
    pub search: Arc<SearchService>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Load the rules directory named by `config` and build all services
    pub fn new(config: Config) -> Result<Self> {
        let store = RuleStore::load(&config.rules)?;
        Ok(Self::from_store(store, config))
    }

    /// Build services around an already loaded store
    pub fn from_store(store: RuleStore, config: Config) -> Self {
        let store = Arc::new(store);
        let search = Arc::new(SearchService::new(
            Arc::clone(&store),
            config.search.max_limit,
        ));

        Self {
            store,
            search,
            config: Arc::new(config),
        }
    }
}
