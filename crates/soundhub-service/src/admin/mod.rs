//! Admin authentication and provisioning.

pub mod login;
pub mod provision;

pub use login::{
    AdminAuthService, AdminSession, LoginCredentials, LoginError, LoginFailure, LoginOutcome,
};
pub use provision::{AdminProvisioner, NewAdmin};
