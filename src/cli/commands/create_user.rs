use anyhow::{Context, Result};
use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};
use model::entities::user;
use sea_orm::{ColumnTrait, DatabaseConnection, Set};
use tokio::task;
use tracing::{info, trace, warn};

use crate::config::connect;
use crate::repository::Repository;

pub async fn create_user(database_url: &str, email: &str, password: &str) -> Result<()> {
    trace!("Entering create_user function");
    let db = connect(database_url).await?;
    let user = insert_user(&db, email, password).await?;
    info!("Created user {} with ID {}", user.email, user.id);
    Ok(())
}

/// Insert a user after hashing the password.
///
/// Hashing runs on the blocking pool since Argon2 is CPU bound.
pub(crate) async fn insert_user(
    db: &DatabaseConnection,
    email: &str,
    password: &str,
) -> Result<user::Model> {
    let email = email.trim();
    if email.is_empty() {
        anyhow::bail!("Email must not be empty");
    }

    let users = Repository::<user::Entity, _>::new(db);
    if users
        .find_one_where(user::Column::Email.eq(email))
        .await?
        .is_some()
    {
        warn!("User with email {} already exists", email);
        anyhow::bail!("User with email {email} already exists");
    }

    let password = password.to_string();
    let password_hash = task::spawn_blocking(move || hash_password(&password))
        .await
        .context("Password hashing task panicked")??;

    let new_user = user::ActiveModel {
        email: Set(email.to_string()),
        password: Set(password_hash),
        ..Default::default()
    };

    users
        .create(new_user)
        .await
        .context("Failed to insert user")
}

fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {e}"))?;
    Ok(hash.to_string())
}
