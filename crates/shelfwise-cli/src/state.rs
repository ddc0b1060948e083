//! Application state shared across CLI commands.

use shelfwise_core::catalog::ProductCatalog;
use shelfwise_core::stores::StoreDirectory;
use shelfwise_types::config::GlobalConfig;

use crate::config;

/// Configuration plus the in-memory services a command may need.
///
/// The catalog and store registry are seeded with sample data on every
/// run; persistence is deliberately out of scope.
pub struct AppState {
    pub config: GlobalConfig,
    pub catalog: ProductCatalog,
    pub stores: StoreDirectory,
}

impl AppState {
    pub async fn init() -> Self {
        let config = config::load_global_config(&config::data_dir()).await;
        Self {
            config,
            catalog: ProductCatalog::with_sample_inventory(),
            stores: StoreDirectory::with_sample_stores(),
        }
    }
}
