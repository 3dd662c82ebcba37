//! Orchestration error taxonomy.
//!
//! # Invariants
//! - `Validation` and `Domain` are client-visible; `Infrastructure` is not.
//! - Infrastructure errors keep their source unchanged in kind and add only
//!   a step tag.

use crate::model::error::{DomainError, ValidationError};
use crate::publish::PublishError;
use crate::repo::RepoError;
use log::{error, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failure of a storage or messaging collaborator.
#[derive(Debug)]
pub enum InfraError {
    Repo(RepoError),
    Publish(PublishError),
}

impl Display for InfraError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Publish(err) => write!(f, "{err}"),
        }
    }
}

impl Error for InfraError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Publish(err) => Some(err),
        }
    }
}

/// Error returned by every use-case service.
#[derive(Debug)]
pub enum ServiceError {
    /// Input failed a field-level rule; no I/O was performed.
    Validation(ValidationError),
    /// Referenced entity is missing or the actor does not own it.
    Domain(DomainError),
    /// Collaborator failure at the named orchestration step.
    Infrastructure {
        step: &'static str,
        source: InfraError,
    },
}

impl ServiceError {
    /// Wraps a repository failure with its orchestration step.
    pub fn repo(step: &'static str) -> impl FnOnce(RepoError) -> Self {
        move |err| Self::Infrastructure {
            step,
            source: InfraError::Repo(err),
        }
    }

    /// Wraps a publish failure with its orchestration step.
    pub fn publish(step: &'static str) -> impl FnOnce(PublishError) -> Self {
        move |err| Self::Infrastructure {
            step,
            source: InfraError::Publish(err),
        }
    }

    /// Whether the message may be shown to the caller verbatim.
    pub fn is_client_visible(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Domain(_))
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Domain(err) => write!(f, "{err}"),
            Self::Infrastructure { step, source } => write!(f, "{step}: {source}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => err.source(),
            Self::Domain(_) => None,
            Self::Infrastructure { source, .. } => Some(source),
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DomainError> for ServiceError {
    fn from(value: DomainError) -> Self {
        Self::Domain(value)
    }
}

/// Emits one metadata-only log line for a failed use-case.
pub(crate) fn log_failure(event: &'static str, err: &ServiceError) {
    match err {
        ServiceError::Validation(err) => warn!(
            "event={event} module=service status=rejected error_code=validation field={}",
            err.field
        ),
        ServiceError::Domain(err) => warn!(
            "event={event} module=service status=rejected error_code={}",
            err.code()
        ),
        ServiceError::Infrastructure { step, source } => error!(
            "event={event} module=service status=error step=\"{step}\" error={source}"
        ),
    }
}
