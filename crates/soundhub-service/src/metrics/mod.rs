//! Dashboard catalog counters.

pub mod service;

pub use service::MetricsService;
