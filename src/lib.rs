pub mod api;
pub mod authz;
pub mod config;
pub mod error;
pub mod models;
pub mod presenter;
pub mod shell;
pub mod status;
pub mod store;

// Re-export commonly used items for the binary and external users
pub use api::{HttpPostApi, PostApi};
pub use authz::{can_moderate, moderation_controls, Session, User};
pub use config::ClientConfig;
pub use error::{ApiError, LoadError};
pub use store::{ActionOutcome, PostStore, ViewPhase, ViewState};
