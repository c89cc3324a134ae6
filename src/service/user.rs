//! User registration. Passwords are stored as argon2 hashes and never
//! leave this module in any response shape.

use sqlx::SqlitePool;

use crate::error::AppError;
use crate::model::{RegisterRequest, User};
use crate::service::require_text;

pub struct UserService;

impl UserService {
    pub async fn register(pool: &SqlitePool, req: &RegisterRequest) -> Result<User, AppError> {
        let name = require_text("name", req.name.as_deref())?;
        let username = require_text("username", req.username.as_deref())?;
        let password = require_text("password", req.password.as_deref())?;
        let hash = hash_password(password)?;

        let row = sqlx::query_as::<_, User>(
            "INSERT INTO users (name, username, password) VALUES (?1, ?2, ?3) \
             RETURNING id, name, username, password",
        )
        .bind(name)
        .bind(username)
        .bind(&hash)
        .fetch_one(pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Validation(format!("username '{username}' is already taken"))
            }
            _ => AppError::Db(e),
        })?;

        tracing::info!(id = row.id, username, "user registered");
        Ok(row)
    }
}

/// Hash a password for storage.
fn hash_password(password: &str) -> Result<String, AppError> {
    use argon2::{
        password_hash::{rand_core::OsRng, SaltString},
        Argon2, PasswordHasher,
    };

    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Unexpected(format!("failed to hash password: {e}")))?;
    Ok(hash.to_string())
}

/// Verify a password against its stored hash.
#[cfg(test)]
fn verify_password(password: &str, hash: &str) -> bool {
    use argon2::{Argon2, PasswordHash, PasswordVerifier};

    let parsed_hash = match PasswordHash::new(hash) {
        Ok(h) => h,
        Err(_) => return false,
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}
