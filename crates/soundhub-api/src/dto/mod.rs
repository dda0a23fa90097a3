//! Data transfer objects for the REST endpoints.

pub mod response;
