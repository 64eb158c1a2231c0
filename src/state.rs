use std::sync::Arc;

use crate::auth::AuthStore;
use crate::cart::CartStore;
use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::error::AppResult;
use crate::language::LanguageStore;
use crate::storage::{JsonFileStore, SnapshotStore};

/// All stores, constructed once at startup and passed by reference to
/// consumers. Lives for the process; no globals.
pub struct AppState {
    pub config: AppConfig,
    pub catalog: Catalog,
    pub cart: CartStore,
    pub language: LanguageStore,
    pub auth: AuthStore,
}

impl AppState {
    /// Builds the on-disk snapshot store from `config.storage_dir` and
    /// hydrates every store from it.
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let storage: Arc<dyn SnapshotStore> = Arc::new(JsonFileStore::new(&config.storage_dir)?);
        Ok(Self::with_storage(config, storage))
    }

    /// Same wiring with an injected storage backend.
    pub fn with_storage(config: AppConfig, storage: Arc<dyn SnapshotStore>) -> Self {
        let catalog = Catalog::builtin();
        let cart = CartStore::new(Arc::clone(&storage));
        let language = LanguageStore::new(Arc::clone(&storage), config.default_language);
        let auth = AuthStore::new(storage);
        Self {
            config,
            catalog,
            cart,
            language,
            auth,
        }
    }
}
