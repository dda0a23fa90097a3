//! # soundhub-database
//!
//! Store traits consumed by the service layer, their PostgreSQL
//! repository implementations, and process-local in-memory stores.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use store::{AdminStore, CatalogStore};
