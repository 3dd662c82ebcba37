//! Decoded request shapes, one per operation.

use serde::Deserialize;
use std::collections::BTreeMap;
use techgen_core::model::project::{
    ProjectCreateIn, ProjectDeleteIn, ProjectListFilter, ProjectListIn,
};
use techgen_core::model::task::TaskCreateIn;
use techgen_core::model::template::TemplateDeleteIn;
use techgen_core::model::version::VersionListIn;
use techgen_core::ActorId;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectCreateRequest {
    pub name: String,
    pub author_id: ActorId,
}

impl From<ProjectCreateRequest> for ProjectCreateIn {
    fn from(value: ProjectCreateRequest) -> Self {
        Self {
            name: value.name,
            author_id: value.author_id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ProjectDeleteParams {
    pub project_id: i64,
    pub user_id: ActorId,
}

impl From<ProjectDeleteParams> for ProjectDeleteIn {
    fn from(value: ProjectDeleteParams) -> Self {
        Self {
            project_id: value.project_id,
            user_id: value.user_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectListParams {
    pub user_id: ActorId,
    pub page: i64,
    pub size: i64,
    /// Substring filter on project name.
    #[serde(default)]
    pub name: Option<String>,
}

impl From<ProjectListParams> for ProjectListIn {
    fn from(value: ProjectListParams) -> Self {
        Self {
            page: value.page,
            size: value.size,
            filter: ProjectListFilter {
                user_id: value.user_id,
                project_name: value.name,
            },
        }
    }
}

/// Parameters shared by both version listing endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct VersionListParams {
    pub template_id: i64,
    pub user_id: ActorId,
}

impl From<VersionListParams> for VersionListIn {
    fn from(value: VersionListParams) -> Self {
        Self {
            template_id: value.template_id,
            user_id: value.user_id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TemplateDeleteParams {
    pub template_id: i64,
    pub user_id: ActorId,
}

impl From<TemplateDeleteParams> for TemplateDeleteIn {
    fn from(value: TemplateDeleteParams) -> Self {
        Self {
            template_id: value.template_id,
            user_id: value.user_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaskCreateRequest {
    pub version_id: i64,
    pub creator_id: ActorId,
    #[serde(default)]
    pub payload: BTreeMap<String, String>,
}

impl From<TaskCreateRequest> for TaskCreateIn {
    fn from(value: TaskCreateRequest) -> Self {
        Self {
            version_id: value.version_id,
            creator_id: value.creator_id,
            payload: value.payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ProjectListParams, TaskCreateRequest, VersionListParams};
    use techgen_core::model::project::ProjectListIn;
    use techgen_core::model::task::TaskCreateIn;

    #[test]
    fn project_list_name_filter_is_optional() {
        let params: ProjectListParams =
            serde_json::from_str(r#"{"user_id": 7, "page": 2, "size": 5}"#)
                .expect("list params without name should decode");
        let input = ProjectListIn::from(params);
        assert_eq!(input.page, 2);
        assert_eq!(input.size, 5);
        assert_eq!(input.filter.user_id, 7);
        assert_eq!(input.filter.project_name, None);
    }

    #[test]
    fn task_create_payload_decodes_into_service_input() {
        let request: TaskCreateRequest = serde_json::from_str(
            r#"{"version_id": 31, "creator_id": 7, "payload": {"name": "demo"}}"#,
        )
        .expect("task request should decode");
        let input = TaskCreateIn::from(request);
        assert_eq!(input.version_id, 31);
        assert_eq!(input.payload.get("name").map(String::as_str), Some("demo"));

        let bare: TaskCreateRequest =
            serde_json::from_str(r#"{"version_id": 31, "creator_id": 7}"#)
                .expect("payload should default to empty");
        assert!(bare.payload.is_empty());
    }

    #[test]
    fn missing_identifier_is_a_decode_error() {
        let err = serde_json::from_str::<VersionListParams>(r#"{"template_id": 20}"#)
            .expect_err("user_id is required");
        assert!(err.to_string().contains("user_id"));
    }
}
