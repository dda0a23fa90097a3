//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

use soundhub_auth::jwt::{Claims, JwtDecoder, JwtEncoder, TokenIssuer};
use soundhub_auth::password::PasswordHasher;
use soundhub_core::config::{AppConfig, StoreProvider};
use soundhub_database::AdminStore;
use soundhub_database::memory::{MemoryAdminStore, MemoryCatalogStore};
use soundhub_entity::admin::CreateAdmin;
use soundhub_entity::role::Role;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
    /// Admin store behind the router
    pub admins: Arc<MemoryAdminStore>,
    /// Catalog store behind the router
    pub catalog: Arc<MemoryCatalogStore>,
}

impl TestApp {
    /// Create a new test application with the default test config
    pub async fn new() -> Self {
        Self::with_config(Self::test_config()).await
    }

    /// Config with in-memory stores and cheap password hashing
    pub fn test_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.store.provider = StoreProvider::Memory;
        config.auth.jwt_secret = "integration-test-secret".to_string();
        config.auth.hash_memory_kib = 1024;
        config.auth.hash_iterations = 1;
        config.auth.hash_parallelism = 1;
        config
    }

    /// Create a test application from a custom config
    pub async fn with_config(config: AppConfig) -> Self {
        let admins = Arc::new(MemoryAdminStore::new());
        let catalog = Arc::new(MemoryCatalogStore::new());

        let state = soundhub_api::build_state(config.clone(), admins.clone(), catalog.clone())
            .await
            .expect("Failed to build app state");

        Self {
            router: soundhub_api::build_app(state),
            config,
            admins,
            catalog,
        }
    }

    /// Store an admin directly, bypassing the password policy
    pub async fn create_admin(&self, email: &str, password: &str, first_name: &str) -> Uuid {
        let hasher = PasswordHasher::from_config(&self.config.auth).expect("Bad hash params");
        let admin = self
            .admins
            .create(CreateAdmin {
                email: email.to_string(),
                password_hash: hasher.hash_password(password).expect("Failed to hash"),
                first_name: first_name.to_string(),
            })
            .await
            .expect("Failed to create admin");
        admin.id
    }

    /// Sign a token for an arbitrary subject with the given role
    pub fn token_for(&self, role: Role) -> String {
        JwtEncoder::new(&self.config.auth)
            .expect("Invalid token TTL")
            .issue(Uuid::new_v4(), role, "Tester")
            .expect("Failed to issue token")
            .token
    }

    /// Verify a token with the app's secret
    pub fn decode(&self, token: &str) -> Claims {
        JwtDecoder::new(&self.config.auth)
            .decode(token)
            .expect("Token did not verify")
    }

    /// Run `loginAdmin` and return the whole payload
    pub async fn login_payload(&self, email: &str, password: &str) -> TestResponse {
        self.graphql(
            "mutation Login($email: String!, $password: String!) {
                loginAdmin(email: $email, password: $password) {
                    admin { id email firstName }
                    token
                    error { message details }
                }
            }",
            json!({ "email": email, "password": password }),
            None,
        )
        .await
    }

    /// Log in and return the session token
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self.login_payload(email, password).await;
        response.body["data"]["loginAdmin"]["token"]
            .as_str()
            .expect("Login did not return a token")
            .to_string()
    }

    /// POST a GraphQL operation
    pub async fn graphql(&self, query: &str, variables: Value, token: Option<&str>) -> TestResponse {
        self.request(
            "POST",
            "/graphql",
            Some(json!({ "query": query, "variables": variables })),
            token,
        )
        .await
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        self.raw_request(method, path, body_str, token).await
    }

    /// Make an HTTP request with a raw string body
    pub async fn raw_request(
        &self,
        method: &str,
        path: &str,
        body: String,
        token: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req.body(Body::from(body)).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// `extensions.code` of the first GraphQL error, if any
    pub fn error_code(&self) -> Option<&str> {
        self.body["errors"][0]["extensions"]["code"].as_str()
    }

    /// Message of the first GraphQL error, if any
    pub fn error_message(&self) -> Option<&str> {
        self.body["errors"][0]["message"].as_str()
    }
}
