//! Authenticated-user state and its persistence.

pub mod auth;
pub mod error;
pub mod models;
pub mod storage;
pub mod store;

pub use auth::{AuthForm, AuthMode};
pub use error::{SessionError, StorageError, ValidationError};
pub use models::{LoginRequest, Role, Session};
pub use storage::{FileStorage, MemoryStorage, SessionStorage};
pub use store::{Phase, SessionSnapshot, SessionStore};
