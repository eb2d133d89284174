use sqlx::PgPool;

use crate::auth::{self, AuthError};
use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::User;

#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("Email already registered: {0}")]
    EmailTaken(String),

    #[error("Password hashing failed: {0}")]
    PasswordHash(#[from] AuthError),

    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub async fn new() -> Result<Self, DatabaseError> {
        let pool = DatabaseManager::pool().await?;
        Ok(Self { pool })
    }

    pub fn with_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Provision a new credentialed identity. The email doubles as the
    /// unique handle; the password is argon2-hashed before it touches
    /// the store and is never persisted or compared in plain form.
    pub async fn create_user(
        &self,
        email: &str,
        password: &str,
        is_admin: bool,
    ) -> Result<User, UserError> {
        let password_hash = auth::hash_password(password)?;

        let result = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password_hash, is_admin)
            VALUES ($1, $2, $3)
            RETURNING id, email, password_hash, is_admin, created_at, updated_at
            "#,
        )
        .bind(email)
        .bind(&password_hash)
        .bind(is_admin)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(user) => Ok(user),
            Err(e) if is_unique_violation(&e) => Err(UserError::EmailTaken(email.to_string())),
            Err(e) => Err(UserError::Database(e)),
        }
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some("23505"),
        _ => false,
    }
}
