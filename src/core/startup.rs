// Startup population of the in-memory stores

use crate::auth::password::hash_password;
use crate::core::state::AppState;
use crate::models::client::Client;
use crate::models::service_item::ServiceItem;
use crate::models::user::{Role, User};
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

/// Environment variables for the first-run admin account. Credentials are
/// never committed to config files or source.
pub const ADMIN_EMAIL_ENV: &str = "TALLER_ADMIN_EMAIL";
pub const ADMIN_PASSWORD_ENV: &str = "TALLER_ADMIN_PASSWORD";

#[derive(Debug, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub users: Vec<SeedUser>,
    #[serde(default)]
    pub services: Vec<SeedService>,
}

/// Provisioned account. Carries a bcrypt hash, never a plain password;
/// hashing happens in whatever tool produced the seed file.
#[derive(Debug, Deserialize)]
pub struct SeedUser {
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub name: String,
    /// For client accounts: a Client row is created and linked.
    #[serde(default)]
    pub client_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SeedService {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price_cents: i64,
}

pub fn load_seed_file(path: &Path) -> Result<SeedData> {
    let content = std::fs::read_to_string(path)
        .context(format!("Failed to read seed file: {}", path.display()))?;

    serde_json::from_str(&content).context("Failed to parse seed file")
}

/// Populate the stores from a seed file.
pub fn apply_seed(state: &AppState, seed: SeedData) -> Result<()> {
    for entry in seed.services {
        state
            .services
            .insert(ServiceItem::new(&entry.name, &entry.description, entry.price_cents));
    }

    for entry in seed.users {
        if state.users.find_by_email(&entry.email).is_some() {
            warn!(email = %entry.email, "duplicate email in seed file, skipping");
            continue;
        }

        let client_id = if entry.role == Role::Client {
            let client_name = entry.client_name.as_deref().unwrap_or(&entry.name);
            let client = Client::new(client_name, Some(entry.email.clone()), None);
            let id = client.id;
            state.clients.insert(client);
            Some(id)
        } else {
            None
        };

        state.users.add_user(User::new(
            &entry.email,
            entry.password_hash,
            entry.role,
            &entry.name,
            client_id,
        ));
    }

    info!(
        users = state.users.len(),
        clients = state.clients.len(),
        services = state.services.len(),
        "seed data applied"
    );

    Ok(())
}

/// First-run bootstrap: if the user store is still empty, create an admin
/// account from environment-provided credentials.
pub async fn bootstrap_admin_from_env(state: &AppState) -> Result<()> {
    if !state.users.is_empty() {
        return Ok(());
    }

    let (email, password) = match (
        std::env::var(ADMIN_EMAIL_ENV),
        std::env::var(ADMIN_PASSWORD_ENV),
    ) {
        (Ok(email), Ok(password)) => (email, password),
        _ => {
            warn!(
                "user store is empty and {}/{} are not set; no one will be able to log in",
                ADMIN_EMAIL_ENV, ADMIN_PASSWORD_ENV
            );
            return Ok(());
        }
    };

    if password.len() < 8 {
        bail!("{} must be at least 8 characters", ADMIN_PASSWORD_ENV);
    }

    let hash = hash_password(&password, state.config.auth.bcrypt_cost)
        .await
        .map_err(|e| anyhow::anyhow!("failed to hash bootstrap admin password: {}", e))?;

    let user = User::new(&email, hash, Role::Admin, "Administrator", None);
    info!(user_id = %user.id, "bootstrap admin account created");
    state.users.add_user(user);

    Ok(())
}
