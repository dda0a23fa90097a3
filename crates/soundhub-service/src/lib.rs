//! # soundhub-service
//!
//! Business logic for the SoundHub admin backend: credential login,
//! admin provisioning, and catalog counters.
//!
//! Services receive their collaborators as `Arc` trait objects at
//! construction time.

pub mod admin;
pub mod context;
pub mod metrics;

pub use admin::{
    AdminAuthService, AdminProvisioner, AdminSession, LoginCredentials, LoginError, LoginFailure,
    LoginOutcome,
};
pub use context::RequestContext;
pub use metrics::MetricsService;
