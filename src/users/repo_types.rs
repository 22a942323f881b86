use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

use super::dto::PublicUser;

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String, // unique, lookup key
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String, // Argon2 PHC string
    pub bio: Option<String>,
    pub image: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl User {
    /// The only way a new account record is built.
    pub fn new(email: String, username: String, password_hash: String) -> Self {
        let now = OffsetDateTime::now_utc();
        Self {
            id: Uuid::new_v4(),
            email,
            username,
            password_hash,
            bio: None,
            image: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Public view of the record; the credential never leaves through here.
    pub fn sanitize(&self, token: Option<String>) -> PublicUser {
        PublicUser {
            email: self.email.clone(),
            username: self.username.clone(),
            bio: self.bio.clone(),
            image: self.image.clone(),
            token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_has_empty_profile() {
        let user = User::new("a@b.io".into(), "alice".into(), "hash".into());
        assert_eq!(user.email, "a@b.io");
        assert_eq!(user.username, "alice");
        assert!(user.bio.is_none());
        assert!(user.image.is_none());
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn record_serialization_skips_password_hash() {
        let user = User::new("a@b.io".into(), "alice".into(), "$argon2id$secret".into());
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("$argon2id$secret"));
    }

    #[test]
    fn sanitize_copies_profile_and_token() {
        let mut user = User::new("a@b.io".into(), "alice".into(), "hash".into());
        user.bio = Some("hi".into());
        let view = user.sanitize(Some("tok".into()));
        assert_eq!(view.email, "a@b.io");
        assert_eq!(view.username, "alice");
        assert_eq!(view.bio.as_deref(), Some("hi"));
        assert_eq!(view.image, None);
        assert_eq!(view.token.as_deref(), Some("tok"));
    }
}
