use anyhow::Context;
use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use async_trait::async_trait;
use rand::rngs::OsRng;
use tracing::error;

/// Turns plaintext passwords into stored credentials and checks them back.
#[async_trait]
pub trait CredentialHasher: Send + Sync {
    async fn hash(&self, plain: &str) -> anyhow::Result<String>;
    /// `Ok(false)` on mismatch; an unparsable stored hash is an error.
    async fn matches(&self, hash: &str, plain: &str) -> anyhow::Result<bool>;
}

/// Argon2id hasher. Work runs on the blocking pool.
#[derive(Clone, Default)]
pub struct Argon2Hasher {
    argon2: Argon2<'static>,
}

impl Argon2Hasher {
    pub fn new(argon2: Argon2<'static>) -> Self {
        Self { argon2 }
    }
}

#[async_trait]
impl CredentialHasher for Argon2Hasher {
    async fn hash(&self, plain: &str) -> anyhow::Result<String> {
        let argon2 = self.argon2.clone();
        let plain = plain.to_owned();
        tokio::task::spawn_blocking(move || hash_password(&argon2, &plain))
            .await
            .context("join password hashing task")?
    }

    async fn matches(&self, hash: &str, plain: &str) -> anyhow::Result<bool> {
        let argon2 = self.argon2.clone();
        let hash = hash.to_owned();
        let plain = plain.to_owned();
        tokio::task::spawn_blocking(move || verify_password(&argon2, &plain, &hash))
            .await
            .context("join password verification task")?
    }
}

fn hash_password(argon2: &Argon2<'_>, plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = argon2
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| {
            error!(error = %e, "argon2 hash_password error");
            anyhow::anyhow!(e.to_string())
        })?
        .to_string();
    Ok(hash)
}

fn verify_password(argon2: &Argon2<'_>, plain: &str, hash: &str) -> anyhow::Result<bool> {
    let parsed = PasswordHash::new(hash).map_err(|e| {
        error!(error = %e, "argon2 parse hash error");
        anyhow::anyhow!(e.to_string())
    })?;
    Ok(argon2.verify_password(plain.as_bytes(), &parsed).is_ok())
}
