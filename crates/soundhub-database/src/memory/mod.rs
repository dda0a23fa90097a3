//! Process-local store implementations backed by `dashmap`.
//!
//! Both stores can be switched offline, after which every call fails
//! with a database error. This is how retrieval faults are exercised.

pub mod admin;
pub mod catalog;

pub use admin::MemoryAdminStore;
pub use catalog::MemoryCatalogStore;

use std::sync::atomic::{AtomicBool, Ordering};

use soundhub_core::error::AppError;

/// Shared online/offline switch.
#[derive(Debug, Default)]
struct Availability {
    offline: AtomicBool,
}

impl Availability {
    fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), AppError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(AppError::database("store unavailable"));
        }
        Ok(())
    }
}
