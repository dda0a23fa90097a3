//! # soundhub-entity
//!
//! Domain entity models for SoundHub. Database entities derive
//! `sqlx::FromRow`; value enums carry their own parsing and display.

pub mod admin;
pub mod catalog;
pub mod role;

pub use admin::Admin;
pub use catalog::Collection;
pub use role::Role;
