//! Boundary handlers for the techgen core.
//!
//! Translates transport-level requests into service inputs and splits every
//! service failure into a client-visible error or an opaque internal failure.

pub mod api;
pub mod error;
pub mod request;
pub mod response;

pub use api::Api;
pub use error::{ApiError, HandlerError, HandlerResult};
pub use request::{
    ProjectCreateRequest, ProjectDeleteParams, ProjectListParams, TaskCreateRequest,
    TemplateDeleteParams, VersionListParams,
};
pub use response::{
    ProjectBody, ProjectListBody, Response, UserBody, VersionBody, VersionListBody,
};
