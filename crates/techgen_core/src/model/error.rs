//! Client-visible error taxonomy.
//!
//! # Responsibility
//! - Describe field-level input failures (`ValidationError`).
//! - Describe missing entities and ownership failures (`DomainError`).
//!
//! # Invariants
//! - Messages are stable and safe to show to the caller verbatim.
//! - Neither type carries storage or transport details.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Underlying reason a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationReason {
    /// Required value is empty.
    ValueEmpty,
    /// Value is outside the accepted range or set.
    ValueInvalid,
}

impl Display for ValidationReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ValueEmpty => write!(f, "value is empty"),
            Self::ValueInvalid => write!(f, "value is invalid"),
        }
    }
}

impl Error for ValidationReason {}

/// Input field failed a validation rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: ValidationReason,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: ValidationReason) -> Self {
        Self { field, reason }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "value of field '{}' is invalid: {}",
            self.field, self.reason
        )
    }
}

impl Error for ValidationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.reason)
    }
}

/// Coarse class of a domain error, used by the boundary for status mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainErrorKind {
    /// Referenced entity does not exist.
    NotFound,
    /// Actor lacks the ownership relation required.
    Forbidden,
}

/// Business-rule failure raised by use-case orchestration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    ProjectNotFound,
    ProjectInvalid,
    TemplateNotFound,
    TemplateInvalid,
    VersionNotFound,
    VersionInvalid,
    UserNotFound,
}

impl DomainError {
    pub fn kind(self) -> DomainErrorKind {
        match self {
            Self::ProjectNotFound
            | Self::TemplateNotFound
            | Self::VersionNotFound
            | Self::UserNotFound => DomainErrorKind::NotFound,
            Self::ProjectInvalid | Self::TemplateInvalid | Self::VersionInvalid => {
                DomainErrorKind::Forbidden
            }
        }
    }

    /// Stable snake_case code for log lines.
    pub fn code(self) -> &'static str {
        match self {
            Self::ProjectNotFound => "project_not_found",
            Self::ProjectInvalid => "project_invalid",
            Self::TemplateNotFound => "template_not_found",
            Self::TemplateInvalid => "template_invalid",
            Self::VersionNotFound => "version_not_found",
            Self::VersionInvalid => "version_invalid",
            Self::UserNotFound => "user_not_found",
        }
    }
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Self::ProjectNotFound => "project not found",
            Self::ProjectInvalid => "project is invalid",
            Self::TemplateNotFound => "template not found",
            Self::TemplateInvalid => "template is invalid",
            Self::VersionNotFound => "version not found",
            Self::VersionInvalid => "version is invalid",
            Self::UserNotFound => "user not found",
        };
        write!(f, "{message}")
    }
}

impl Error for DomainError {}
