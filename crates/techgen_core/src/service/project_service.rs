//! Project use-case service.
//!
//! # Responsibility
//! - Create projects after input validation.
//! - Delete projects on behalf of their author only.
//! - List an author's projects page by page.

use crate::context::RequestContext;
use crate::model::error::DomainError;
use crate::model::project::{
    ProjectCreateIn, ProjectDeleteIn, ProjectId, ProjectListIn, ProjectListOut,
};
use crate::repo::project_repo::ProjectRepository;
use crate::service::error::{log_failure, ServiceError, ServiceResult};
use crate::service::{resolve_authorized, AccessRule};
use log::info;

const PROJECT_ACCESS: AccessRule = AccessRule {
    step: "project repo - get by id",
    not_found: DomainError::ProjectNotFound,
    forbidden: DomainError::ProjectInvalid,
};

/// Project service facade over repository implementations.
pub struct ProjectService<R: ProjectRepository> {
    repo: R,
}

impl<R: ProjectRepository> ProjectService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a project owned by `input.author_id`.
    ///
    /// # Errors
    /// - `ServiceError::Validation` for an empty name; storage is not touched.
    /// - `ServiceError::Infrastructure` when the insert fails.
    pub fn create(
        &self,
        ctx: &RequestContext,
        input: ProjectCreateIn,
    ) -> ServiceResult<ProjectId> {
        self.create_inner(ctx, input)
            .inspect(|project_id| {
                info!("event=project_create module=service status=ok project_id={project_id}")
            })
            .inspect_err(|err| log_failure("project_create", err))
    }

    /// Deletes a project if it exists and `input.user_id` is its author.
    ///
    /// # Errors
    /// - `DomainError::ProjectNotFound` when the id does not resolve.
    /// - `DomainError::ProjectInvalid` when the actor is not the author.
    pub fn delete(&self, ctx: &RequestContext, input: ProjectDeleteIn) -> ServiceResult<()> {
        self.delete_inner(ctx, input)
            .inspect(|_| {
                info!(
                    "event=project_delete module=service status=ok project_id={}",
                    input.project_id
                )
            })
            .inspect_err(|err| log_failure("project_delete", err))
    }

    /// Lists projects authored by `input.filter.user_id`.
    ///
    /// `total_pages` is the ceiling of `total_projects / size`.
    pub fn list_by_user(
        &self,
        ctx: &RequestContext,
        input: &ProjectListIn,
    ) -> ServiceResult<ProjectListOut> {
        self.list_inner(ctx, input)
            .inspect(|out| {
                info!(
                    "event=project_list module=service status=ok count={} total={}",
                    out.projects.len(),
                    out.total_projects
                )
            })
            .inspect_err(|err| log_failure("project_list", err))
    }

    fn create_inner(
        &self,
        ctx: &RequestContext,
        input: ProjectCreateIn,
    ) -> ServiceResult<ProjectId> {
        input.validate()?;
        self.repo
            .create(ctx, &input.into_project())
            .map_err(ServiceError::repo("project repo - create"))
    }

    fn delete_inner(&self, ctx: &RequestContext, input: ProjectDeleteIn) -> ServiceResult<()> {
        resolve_authorized(input.user_id, PROJECT_ACCESS, || {
            self.repo.get_by_id(ctx, input.project_id)
        })?;

        self.repo
            .delete_by_id(ctx, input.project_id)
            .map_err(ServiceError::repo("project repo - delete by id"))
    }

    fn list_inner(
        &self,
        ctx: &RequestContext,
        input: &ProjectListIn,
    ) -> ServiceResult<ProjectListOut> {
        input.validate()?;

        let projects = self
            .repo
            .list_by_author_id(ctx, input)
            .map_err(ServiceError::repo("project repo - list by author id"))?;
        let total_projects = self
            .repo
            .total_by_author_id(ctx, &input.filter)
            .map_err(ServiceError::repo("project repo - total by author id"))?;

        Ok(ProjectListOut {
            projects,
            total_projects,
            total_pages: input.page_count(total_projects),
        })
    }
}
