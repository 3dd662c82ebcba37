//! Response envelope and success bodies.

use crate::error::ApiError;
use serde::Serialize;
use techgen_core::model::project::{ProjectListOut, ProjectSummary};
use techgen_core::model::user::User;
use techgen_core::model::version::{Version, VersionListOut};

pub const STATUS_OK: u16 = 200;
pub const STATUS_CREATED: u16 = 201;
pub const STATUS_NO_CONTENT: u16 = 204;

/// Outcome of a handler that did not fail internally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response<T> {
    Ok(T),
    Created,
    NoContent,
    Error(ApiError),
}

impl<T: Serialize> Response<T> {
    pub fn status(&self) -> u16 {
        match self {
            Self::Ok(_) => STATUS_OK,
            Self::Created => STATUS_CREATED,
            Self::NoContent => STATUS_NO_CONTENT,
            Self::Error(err) => err.status,
        }
    }

    /// JSON body, `None` for empty responses.
    pub fn to_json(&self) -> serde_json::Result<Option<serde_json::Value>> {
        match self {
            Self::Ok(body) => serde_json::to_value(body).map(Some),
            Self::Created | Self::NoContent => Ok(None),
            Self::Error(err) => serde_json::to_value(err).map(Some),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserBody {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: i64,
}

impl From<User> for UserBody {
    fn from(value: User) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
            created_at: value.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionBody {
    pub id: i64,
    pub number: i64,
    pub author_name: String,
    pub created_at: i64,
}

impl From<Version> for VersionBody {
    fn from(value: Version) -> Self {
        Self {
            id: value.id,
            number: value.number,
            author_name: value.author_name,
            created_at: value.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionListBody {
    /// Newest first, as returned by storage.
    pub versions: Vec<VersionBody>,
}

impl From<VersionListOut> for VersionListBody {
    fn from(value: VersionListOut) -> Self {
        Self {
            versions: value.versions.into_iter().map(VersionBody::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectBody {
    pub id: i64,
    pub name: String,
}

impl From<ProjectSummary> for ProjectBody {
    fn from(value: ProjectSummary) -> Self {
        Self {
            id: value.id,
            name: value.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectListBody {
    pub projects: Vec<ProjectBody>,
    pub total_projects: i64,
    pub total_pages: i64,
}

impl From<ProjectListOut> for ProjectListBody {
    fn from(value: ProjectListOut) -> Self {
        Self {
            projects: value.projects.into_iter().map(ProjectBody::from).collect(),
            total_projects: value.total_projects,
            total_pages: value.total_pages,
        }
    }
}
