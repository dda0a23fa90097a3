//! Catalog collection counts.

use std::sync::Arc;

use serde::Serialize;
use tabled::Tabled;

use soundhub_core::error::AppError;
use soundhub_database::repositories::CatalogRepository;
use soundhub_entity::catalog::Collection;
use soundhub_service::metrics::MetricsService;

use crate::output::{self, OutputFormat};

/// One row of the stats table.
#[derive(Debug, Serialize, Tabled)]
struct CountRow {
    /// Collection name.
    collection: String,
    /// Document count.
    count: u64,
}

/// Execute the stats command
pub async fn execute(config_path: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let db = super::connect_database(&config).await?;
    let metrics = MetricsService::new(Arc::new(CatalogRepository::new(db.clone())));

    let mut rows = Vec::with_capacity(Collection::ALL.len());
    for collection in Collection::ALL {
        rows.push(CountRow {
            collection: collection.to_string(),
            count: metrics.count(collection).await?,
        });
    }

    output::print_rows(&rows, format)?;
    db.close().await;
    Ok(())
}
