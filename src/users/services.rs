use std::sync::Arc;

use tracing::{error, info, instrument, warn};

use super::{
    dto::{LoginRequest, PublicUser, SignUpRequest, UpdateUserRequest},
    repo::UserStore,
    repo_types::User,
};
use crate::{
    auth::{CredentialHasher, TokenIssuer},
    error::AccountError,
};

const NO_SUCH_USER: &str = "no user with this email";

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn require(field: &str, value: &str) -> Result<(), AccountError> {
    if value.is_empty() {
        warn!(field, "blank field");
        return Err(AccountError::Validation(format!("{field} is blank")));
    }
    Ok(())
}

/// `Some` only for a supplied, non-empty value.
fn supplied(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Sign-up, login, profile fetch and profile update over an injected store.
///
/// Every operation trims and lower-cases the email before using it, so
/// `Bob@X.io` and `bob@x.io` name the same account and a whitespace-only
/// email counts as blank.
#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn UserStore>,
    hasher: Arc<dyn CredentialHasher>,
    tokens: Arc<dyn TokenIssuer>,
}

impl AccountService {
    pub fn new(
        store: Arc<dyn UserStore>,
        hasher: Arc<dyn CredentialHasher>,
        tokens: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            store,
            hasher,
            tokens,
        }
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: SignUpRequest) -> Result<PublicUser, AccountError> {
        let email = normalize_email(&input.email);
        require("username", &input.username)?;
        require("email", &email)?;
        require("password", &input.password)?;

        if self.store.find_by_email(&email).await?.is_some() {
            warn!(email = %email, "email already registered");
            return Err(AccountError::Conflict("email already exists".into()));
        }

        let password_hash = self.hasher.hash(&input.password).await.map_err(|e| {
            error!(error = %e, "hash_password failed");
            e
        })?;

        // A concurrent sign-up can pass the check above; the store's insert is the real guard.
        let user = User::new(email, input.username, password_hash);
        let user = self.store.insert(&user).await.map_err(|e| {
            warn!(email = %user.email, error = %e, "create user failed");
            AccountError::from(e)
        })?;

        let token = self.tokens.sign(&user).await.map_err(|e| {
            error!(error = %e, "jwt sign failed");
            e
        })?;

        info!(user_id = %user.id, email = %user.email, "user registered");
        Ok(user.sanitize(Some(token)))
    }

    #[instrument(skip(self, input))]
    pub async fn authenticate(&self, input: LoginRequest) -> Result<PublicUser, AccountError> {
        let email = normalize_email(&input.email);
        require("email", &email)?;
        require("password", &input.password)?;

        let Some(user) = self.store.find_by_email(&email).await? else {
            warn!(email = %email, "login unknown email");
            return Err(AccountError::NotFound(NO_SUCH_USER.into()));
        };

        if !self
            .hasher
            .matches(&user.password_hash, &input.password)
            .await?
        {
            warn!(email = %email, user_id = %user.id, "login invalid password");
            return Err(AccountError::Auth("incorrect password".into()));
        }

        let token = self.tokens.sign(&user).await?;

        info!(user_id = %user.id, email = %user.email, "user logged in");
        Ok(user.sanitize(Some(token)))
    }

    #[instrument(skip(self))]
    pub async fn fetch_by_email(&self, email: &str) -> Result<PublicUser, AccountError> {
        let email = normalize_email(email);
        let user = self
            .store
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AccountError::NotFound(NO_SUCH_USER.into()))?;
        Ok(user.sanitize(None))
    }

    #[instrument(skip(self, input))]
    pub async fn update(
        &self,
        input: UpdateUserRequest,
        email: &str,
    ) -> Result<PublicUser, AccountError> {
        let email = normalize_email(email);
        let mut user = self
            .store
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AccountError::NotFound(NO_SUCH_USER.into()))?;

        if let Some(bio) = supplied(input.bio) {
            user.bio = Some(bio);
        }
        if let Some(username) = supplied(input.username) {
            user.username = username;
        }
        if let Some(image) = supplied(input.image) {
            user.image = Some(image);
        }
        if let Some(password) = supplied(input.password) {
            user.password_hash = self.hasher.hash(&password).await?;
        }

        let user = self.store.save(&user).await?;

        info!(user_id = %user.id, "user updated");
        Ok(user.sanitize(None))
    }
}
