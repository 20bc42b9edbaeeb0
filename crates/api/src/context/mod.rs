//! Application context - dependency injection container

use std::sync::Arc;

use mylearn_core::user::ports::ProfileStore;
use mylearn_core::ProfileService;
use mylearn_domain::{Config, Result};
use mylearn_infra::{DbManager, SqliteProfileStore};
use tracing::info;

/// Type alias for profile store port trait object
type DynProfileStore = dyn ProfileStore + Send + Sync + 'static;

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub db: Arc<DbManager>,
    pub profiles: Arc<ProfileService>,
}

impl AppContext {
    /// Build the context from an explicit configuration.
    ///
    /// Opens the database pool and applies the schema before any request can
    /// be served.
    pub fn new_with_config(config: Config) -> Result<Self> {
        let db = Arc::new(DbManager::from_config(&config.database)?);
        db.run_migrations()?;

        let store: Arc<DynProfileStore> = Arc::new(SqliteProfileStore::new(Arc::clone(&db)));
        let profiles = Arc::new(ProfileService::new(store));

        info!(db_path = %db.path().display(), "application context initialised");

        Ok(Self { config, db, profiles })
    }
}
