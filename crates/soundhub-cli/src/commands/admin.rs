//! Admin account management commands.

use std::sync::Arc;

use clap::{Args, Subcommand};

use soundhub_auth::password::{PasswordHasher, PasswordValidator};
use soundhub_core::error::AppError;
use soundhub_database::repositories::AdminRepository;
use soundhub_service::admin::{AdminProvisioner, NewAdmin};

use crate::output::{self, OutputFormat};

/// Arguments for admin commands
#[derive(Debug, Args)]
pub struct AdminArgs {
    /// Admin subcommand
    #[command(subcommand)]
    pub command: AdminCommand,
}

/// Admin subcommands
#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Create a new admin
    Create {
        /// Login email
        #[arg(short, long)]
        email: Option<String>,
        /// First name shown in the dashboard
        #[arg(short = 'n', long)]
        first_name: Option<String>,
        /// Password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Reset an admin's password
    ResetPassword {
        /// Email of the admin
        #[arg(short, long)]
        email: String,
        /// New password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
}

/// Execute admin commands
pub async fn execute(
    args: &AdminArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let db = super::connect_database(&config).await?;

    let provisioner = AdminProvisioner::new(
        Arc::new(AdminRepository::new(db.clone())),
        Arc::new(PasswordHasher::from_config(&config.auth)?),
        Arc::new(PasswordValidator::new(&config.auth)),
    );

    match &args.command {
        AdminCommand::Create {
            email,
            first_name,
            password,
        } => {
            let email = match email {
                Some(e) => e.clone(),
                None => prompt_text("Admin email")?,
            };
            let first_name = match first_name {
                Some(n) => n.clone(),
                None => prompt_text("First name")?,
            };
            let password = match password {
                Some(p) => p.clone(),
                None => prompt_password("Admin password")?,
            };

            let admin = provisioner
                .create_admin(NewAdmin {
                    email,
                    first_name,
                    password,
                })
                .await?;

            output::print_success(&format!(
                "Admin '{}' created (id: {})",
                admin.email, admin.id
            ));
            output::print_record(&admin, format)?;
        }
        AdminCommand::ResetPassword { email, password } => {
            let password = match password {
                Some(p) => p.clone(),
                None => prompt_password("New password")?,
            };

            provisioner.reset_password(email, &password).await?;
            output::print_success(&format!("Password reset for admin '{email}'"));
        }
    }

    db.close().await;
    Ok(())
}

fn prompt_text(prompt: &str) -> Result<String, AppError> {
    dialoguer::Input::new()
        .with_prompt(prompt)
        .interact_text()
        .map_err(|e| AppError::internal(format!("Input error: {e}")))
}

fn prompt_password(prompt: &str) -> Result<String, AppError> {
    dialoguer::Password::new()
        .with_prompt(prompt)
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()
        .map_err(|e| AppError::internal(format!("Input error: {e}")))
}
