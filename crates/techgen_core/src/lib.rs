//! Core of the techgen backend: domain model, storage, authorization and
//! the use-case services that orchestrate them.
//! Boundary crates call services only; they never touch repositories.

pub mod auth;
pub mod config;
pub mod context;
pub mod db;
pub mod logging;
pub mod model;
pub mod publish;
pub mod repo;
pub mod service;

pub use auth::{is_authorized, Owned, Ownership};
pub use config::AppConfig;
pub use context::{ContextError, RequestContext};
pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::error::{DomainError, DomainErrorKind, ValidationError, ValidationReason};
pub use model::ActorId;
pub use publish::{
    MemoryChannel, MessageChannel, PublishError, TaskCreatedPublisher, TaskPublisher,
    DEFAULT_TASK_QUEUE,
};
pub use repo::{RepoError, RepoResult};
pub use service::error::{InfraError, ServiceError, ServiceResult};
pub use service::project_service::ProjectService;
pub use service::task_service::TaskService;
pub use service::template_service::TemplateService;
pub use service::user_service::UserService;
pub use service::version_service::VersionService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
