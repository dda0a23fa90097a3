//! # soundhub-auth
//!
//! Authentication building blocks for the SoundHub admin backend.
//!
//! ## Modules
//!
//! - `jwt`: session token claims, issuance, and verification
//! - `password`: Argon2id password hashing and provisioning policy
//! - `guard`: dashboard route guard decisions

pub mod guard;
pub mod jwt;
pub mod password;

pub use guard::{ClientSession, GuardDecision, SessionGuard};
pub use jwt::{Claims, IssuedToken, JwtDecoder, JwtEncoder, TokenIssuer};
pub use password::{PasswordHasher, PasswordValidator};
