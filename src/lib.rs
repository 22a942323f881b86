//! User accounts: sign-up, login, profile fetch and profile update.

pub mod auth;
pub mod config;
pub mod error;
pub mod state;
pub mod telemetry;
pub mod users;

pub use error::AccountError;
pub use state::AppState;
pub use users::{AccountService, PublicUser};
