//! Boundary error classification.
//!
//! # Invariants
//! - Classification matches on the `ServiceError` variant, never on text.
//! - Internal failure text is kept for server-side logs only.

use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use techgen_core::{DomainErrorKind, ServiceError};

pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_FORBIDDEN: u16 = 403;
pub const STATUS_NOT_FOUND: u16 = 404;
pub const STATUS_INTERNAL_SERVER_ERROR: u16 = 500;

const INTERNAL_MESSAGE: &str = "internal server error";

pub type HandlerResult<T> = Result<T, HandlerError>;

/// Structured error returned to the caller with its message verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    pub status: u16,
    pub message: String,
}

impl ApiError {
    /// Converts validation and domain failures; hands anything else back.
    pub fn classify(err: ServiceError) -> Result<Self, ServiceError> {
        let status = match &err {
            ServiceError::Validation(_) => STATUS_BAD_REQUEST,
            ServiceError::Domain(domain) => match domain.kind() {
                DomainErrorKind::NotFound => STATUS_NOT_FOUND,
                DomainErrorKind::Forbidden => STATUS_FORBIDDEN,
            },
            ServiceError::Infrastructure { .. } => return Err(err),
        };
        Ok(Self {
            status,
            message: err.to_string(),
        })
    }
}

/// Opaque failure of one handler, prefixed with its operation name.
#[derive(Debug)]
pub struct HandlerError {
    op: &'static str,
    source: ServiceError,
}

impl HandlerError {
    pub fn new(op: &'static str, source: ServiceError) -> Self {
        Self { op, source }
    }

    pub fn op(&self) -> &'static str {
        self.op
    }

    pub fn status(&self) -> u16 {
        STATUS_INTERNAL_SERVER_ERROR
    }

    /// The only text a caller may see for this failure.
    pub fn public_message(&self) -> &'static str {
        INTERNAL_MESSAGE
    }
}

impl Display for HandlerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} usecase: {}", self.op, self.source)
    }
}

impl Error for HandlerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::{ApiError, HandlerError};
    use techgen_core::model::error::ValidationReason;
    use techgen_core::{
        ContextError, DomainError, InfraError, RepoError, ServiceError, ValidationError,
    };

    fn infrastructure() -> ServiceError {
        ServiceError::Infrastructure {
            step: "project repo - create",
            source: InfraError::Repo(RepoError::Context {
                op: "project - create",
                source: ContextError::Cancelled,
            }),
        }
    }

    #[test]
    fn validation_maps_to_bad_request_with_verbatim_message() {
        let err = ApiError::classify(ServiceError::Validation(ValidationError::new(
            "name",
            ValidationReason::ValueEmpty,
        )))
        .expect("failure is classified");
        assert_eq!(err.status, 400);
        assert_eq!(err.message, "value of field 'name' is invalid: value is empty");
    }

    #[test]
    fn domain_errors_map_by_kind() {
        let not_found = ApiError::classify(DomainError::TemplateNotFound.into())
            .expect("domain failure is classified");
        assert_eq!(not_found.status, 404);
        assert_eq!(not_found.message, "template not found");

        let forbidden = ApiError::classify(DomainError::ProjectInvalid.into())
            .expect("domain failure is classified");
        assert_eq!(forbidden.status, 403);
        assert_eq!(forbidden.message, "project is invalid");
    }

    #[test]
    fn infrastructure_is_not_client_visible() {
        let source =
            ApiError::classify(infrastructure()).expect_err("infrastructure stays unclassified");
        let err = HandlerError::new("project create", source);
        assert_eq!(err.status(), 500);
        assert_eq!(err.public_message(), "internal server error");
        assert_eq!(
            err.to_string(),
            "project create usecase: project repo - create: exec query \"project - create\": context canceled"
        );
    }

    #[test]
    fn api_error_serializes_message_only() {
        let err = ApiError::classify(DomainError::UserNotFound.into())
            .expect("domain failure is classified");
        assert_eq!(
            serde_json::to_string(&err).expect("error serializes"),
            r#"{"message":"user not found"}"#
        );
    }
}
