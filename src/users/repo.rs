use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;

use super::repo_types::User;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Unique constraint on email rejected the write.
    #[error("email already exists")]
    Duplicate,

    #[error("user record not found")]
    Missing,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Persistent storage for user records, keyed by email.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Inserts a new record. Must reject an existing email atomically.
    async fn insert(&self, user: &User) -> Result<User, StoreError>;

    /// Overwrites the mutable fields of an existing record.
    async fn save(&self, user: &User) -> Result<User, StoreError>;
}

/// Postgres-backed store. Expects a `users` table with a unique index on `email`.
#[derive(Clone)]
pub struct PgUserStore {
    db: PgPool,
}

impl PgUserStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, username, password_hash, bio, image, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await
        .context("find user by email")?;
        Ok(user)
    }

    async fn insert(&self, user: &User) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, email, username, password_hash, bio, image, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, email, username, password_hash, bio, image, created_at, updated_at
            "#,
        )
        .bind(user.id)
        .bind(&user.email)
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(&user.bio)
        .bind(&user.image)
        .bind(user.created_at)
        .bind(user.updated_at)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                StoreError::Duplicate
            } else {
                StoreError::Other(anyhow::Error::new(e).context("insert user"))
            }
        })
    }

    async fn save(&self, user: &User) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
               SET username = $2,
                   password_hash = $3,
                   bio = $4,
                   image = $5,
                   updated_at = now()
             WHERE id = $1
            RETURNING id, email, username, password_hash, bio, image, created_at, updated_at
            "#,
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(&user.bio)
        .bind(&user.image)
        .fetch_optional(&self.db)
        .await
        .context("update user")?
        .ok_or(StoreError::Missing)
    }
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    match e {
        sqlx::Error::Database(db_err) => db_err.is_unique_violation(),
        _ => false,
    }
}
