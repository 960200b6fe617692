use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use tracing::{info, warn};

use crate::entities::{prelude::*, users};
use crate::error::ApiError;
use crate::models::auth::{Credentials, NewUser, Role};
use crate::services::password::{hash_password, verify_password};
use crate::validation::Choice;

/// Create an account with a bcrypt hash of the password and the given role.
pub async fn register_user(
    db: &DatabaseConnection,
    user: NewUser,
    role: Role,
    bcrypt_cost: u32,
) -> Result<users::Model, ApiError> {
    // Emails are stored lower-cased, so this lookup is case-insensitive
    let existing = Users::find()
        .filter(users::Column::Email.eq(&user.email))
        .one(db)
        .await?;

    if existing.is_some() {
        return Err(ApiError::UserExists);
    }

    let password_hash = hash_password(user.password, bcrypt_cost).await?;

    let now = Utc::now();
    let new_user = users::ActiveModel {
        name: Set(user.name),
        email: Set(user.email),
        password_hash: Set(password_hash),
        role: Set(role.as_str().to_string()),
        is_verified: Set(false),
        entrepreneur_id: Set(None),
        investor_id: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let saved = new_user
        .insert(db)
        .await
        .map_err(|e| ApiError::from_insert(e, ApiError::UserExists))?;

    info!(user_id = saved.id, role = role.as_str(), "User registered");
    Ok(saved)
}

/// Check credentials and return the stored role.
///
/// Unknown email and wrong password produce the same error.
pub async fn authenticate(db: &DatabaseConnection, credentials: Credentials) -> Result<Role, ApiError> {
    let Some(user) = Users::find()
        .filter(users::Column::Email.eq(&credentials.email))
        .one(db)
        .await?
    else {
        warn!("Login rejected: unknown account");
        return Err(ApiError::InvalidCredentials);
    };

    if !verify_password(credentials.password, user.password_hash).await? {
        warn!(user_id = user.id, "Login rejected: password mismatch");
        return Err(ApiError::InvalidCredentials);
    }

    Role::parse(&user.role).ok_or_else(|| {
        ApiError::Internal(format!("user {} has unknown role {:?}", user.id, user.role))
    })
}
