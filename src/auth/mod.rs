pub mod jwt;
pub mod password;

pub use jwt::{Claims, JwtKeys, TokenIssuer};
pub use password::{Argon2Hasher, CredentialHasher};
