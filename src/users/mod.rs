pub mod dto;
pub mod memory;
pub mod repo;
pub mod repo_types;
pub mod services;

pub use dto::{LoginRequest, PublicUser, SignUpRequest, UpdateUserRequest};
pub use memory::MemoryUserStore;
pub use repo::{PgUserStore, StoreError, UserStore};
pub use repo_types::User;
pub use services::AccountService;
