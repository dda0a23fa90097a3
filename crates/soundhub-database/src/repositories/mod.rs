//! PostgreSQL implementations of the store traits.

pub mod admin;
pub mod catalog;

pub use admin::AdminRepository;
pub use catalog::CatalogRepository;
