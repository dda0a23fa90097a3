//! Out-of-band admin provisioning: creation, password reset, and the
//! startup bootstrap account.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use validator::Validate;

use soundhub_auth::password::{PasswordHasher, PasswordValidator};
use soundhub_core::config::BootstrapAdminConfig;
use soundhub_core::error::AppError;
use soundhub_database::store::AdminStore;
use soundhub_entity::admin::{Admin, CreateAdmin};

/// Request to create a new admin.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewAdmin {
    /// Login email.
    #[validate(email(message = "Email address is not valid"))]
    pub email: String,
    /// First name.
    #[validate(length(min = 1, max = 100, message = "First name is required"))]
    pub first_name: String,
    /// Plaintext password, checked against the password policy.
    #[serde(skip_serializing)]
    pub password: String,
}

/// Creates admins and resets their passwords.
#[derive(Debug, Clone)]
pub struct AdminProvisioner {
    /// Credential store.
    store: Arc<dyn AdminStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password policy.
    validator: Arc<PasswordValidator>,
}

impl AdminProvisioner {
    /// Creates a new provisioner.
    pub fn new(
        store: Arc<dyn AdminStore>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
    ) -> Self {
        Self {
            store,
            hasher,
            validator,
        }
    }

    /// Creates a new admin.
    pub async fn create_admin(&self, req: NewAdmin) -> Result<Admin, AppError> {
        req.validate()
            .map_err(|e| AppError::validation(format!("Invalid admin: {e}")))?;

        if self.store.find_by_email(&req.email).await?.is_some() {
            return Err(AppError::conflict(format!(
                "Admin '{}' already exists",
                req.email
            )));
        }

        self.validator.validate(&req.password)?;
        let password_hash = self.hasher.hash_password(&req.password)?;

        let admin = self
            .store
            .create(CreateAdmin {
                email: req.email,
                password_hash,
                first_name: req.first_name,
            })
            .await?;

        info!(admin_id = %admin.id, email = %admin.email, "Admin created");

        Ok(admin)
    }

    /// Replaces the password of the admin with the given email.
    pub async fn reset_password(&self, email: &str, new_password: &str) -> Result<Admin, AppError> {
        let admin = self
            .store
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Admin '{email}' not found")))?;

        self.validator.validate(new_password)?;

        if self
            .hasher
            .verify_password(new_password, &admin.password_hash)
            .unwrap_or(false)
        {
            return Err(AppError::validation(
                "New password must be different from the current password",
            ));
        }

        let password_hash = self.hasher.hash_password(new_password)?;
        if !self.store.update_password(admin.id, &password_hash).await? {
            return Err(AppError::not_found(format!("Admin '{email}' not found")));
        }

        info!(admin_id = %admin.id, "Admin password reset");

        Ok(admin)
    }

    /// Creates the configured bootstrap admin unless one with that email
    /// already exists. Returns the admin only when it was created.
    pub async fn ensure_bootstrap(
        &self,
        config: &BootstrapAdminConfig,
    ) -> Result<Option<Admin>, AppError> {
        if self.store.find_by_email(&config.email).await?.is_some() {
            info!(email = %config.email, "Bootstrap admin already present");
            return Ok(None);
        }

        let admin = self
            .create_admin(NewAdmin {
                email: config.email.clone(),
                first_name: config.first_name.clone(),
                password: config.password.clone(),
            })
            .await?;

        Ok(Some(admin))
    }
}
