//! Use-case handlers over one store connection and one task channel.
//!
//! # Responsibility
//! - Build repositories and services per request; hold no request state.
//! - Map service outcomes to `Response` or an opaque `HandlerError`.
//!
//! # Invariants
//! - Validation and domain failures never become `HandlerError`.
//! - Infrastructure failures never reach the caller as text.

use crate::error::{ApiError, HandlerError, HandlerResult};
use crate::request::{
    ProjectCreateRequest, ProjectDeleteParams, ProjectListParams, TaskCreateRequest,
    TemplateDeleteParams, VersionListParams,
};
use crate::response::{ProjectListBody, Response, UserBody, VersionListBody};
use log::{error, warn};
use rusqlite::Connection;
use techgen_core::publish::{MessageChannel, TaskPublisher};
use techgen_core::repo::project_repo::SqliteProjectRepository;
use techgen_core::repo::task_repo::SqliteTaskRepository;
use techgen_core::repo::template_repo::SqliteTemplateRepository;
use techgen_core::repo::user_repo::SqliteUserRepository;
use techgen_core::repo::version_repo::SqliteVersionRepository;
use techgen_core::{
    ActorId, ProjectService, RequestContext, ServiceError, TaskService, TemplateService,
    UserService, VersionService,
};

/// Handler set bound to a store connection and a task publisher.
pub struct Api<'conn, C: MessageChannel> {
    conn: &'conn Connection,
    publisher: TaskPublisher<C>,
}

impl<'conn, C: MessageChannel> Api<'conn, C> {
    /// Handlers publishing task events to the default queue.
    pub fn new(conn: &'conn Connection, channel: C) -> Self {
        Self::with_publisher(conn, TaskPublisher::new(channel))
    }

    pub fn with_publisher(conn: &'conn Connection, publisher: TaskPublisher<C>) -> Self {
        Self { conn, publisher }
    }

    /// `201` on success.
    pub fn project_create(
        &self,
        ctx: &RequestContext,
        req: ProjectCreateRequest,
    ) -> HandlerResult<Response<()>> {
        let service = ProjectService::new(SqliteProjectRepository::new(self.conn));
        match service.create(ctx, req.into()) {
            Ok(_) => Ok(Response::Created),
            Err(err) => reject("project create", err),
        }
    }

    /// `204` on success.
    pub fn project_delete(
        &self,
        ctx: &RequestContext,
        params: ProjectDeleteParams,
    ) -> HandlerResult<Response<()>> {
        let service = ProjectService::new(SqliteProjectRepository::new(self.conn));
        match service.delete(ctx, params.into()) {
            Ok(()) => Ok(Response::NoContent),
            Err(err) => reject("project delete", err),
        }
    }

    pub fn project_list(
        &self,
        ctx: &RequestContext,
        params: ProjectListParams,
    ) -> HandlerResult<Response<ProjectListBody>> {
        let service = ProjectService::new(SqliteProjectRepository::new(self.conn));
        match service.list_by_user(ctx, &params.into()) {
            Ok(out) => Ok(Response::Ok(out.into())),
            Err(err) => reject("project list", err),
        }
    }

    pub fn user_get_by_id(
        &self,
        ctx: &RequestContext,
        user_id: ActorId,
    ) -> HandlerResult<Response<UserBody>> {
        let service = UserService::new(SqliteUserRepository::new(self.conn));
        match service.get_by_id(ctx, user_id) {
            Ok(user) => Ok(Response::Ok(user.into())),
            Err(err) => reject("user get by id", err),
        }
    }

    pub fn version_list(
        &self,
        ctx: &RequestContext,
        params: VersionListParams,
    ) -> HandlerResult<Response<VersionListBody>> {
        let service = self.version_service();
        match service.list(ctx, params.into()) {
            Ok(out) => Ok(Response::Ok(out.into())),
            Err(err) => reject("version list", err),
        }
    }

    /// Same contract as `version_list`, exposed under the template route.
    pub fn template_version_list(
        &self,
        ctx: &RequestContext,
        params: VersionListParams,
    ) -> HandlerResult<Response<VersionListBody>> {
        let service = self.version_service();
        match service.list_template_versions(ctx, params.into()) {
            Ok(out) => Ok(Response::Ok(out.into())),
            Err(err) => reject("template version list", err),
        }
    }

    /// `204` on success.
    pub fn template_delete(
        &self,
        ctx: &RequestContext,
        params: TemplateDeleteParams,
    ) -> HandlerResult<Response<()>> {
        let service = TemplateService::new(SqliteTemplateRepository::new(self.conn));
        match service.delete(ctx, params.into()) {
            Ok(()) => Ok(Response::NoContent),
            Err(err) => reject("template delete", err),
        }
    }

    /// `201` once the task is stored and announced.
    pub fn task_create(
        &self,
        ctx: &RequestContext,
        req: TaskCreateRequest,
    ) -> HandlerResult<Response<()>> {
        let service = TaskService::new(
            SqliteVersionRepository::new(self.conn),
            SqliteTaskRepository::new(self.conn),
            &self.publisher,
        );
        match service.create(ctx, &req.into()) {
            Ok(_) => Ok(Response::Created),
            Err(err) => reject("task create", err),
        }
    }

    fn version_service(
        &self,
    ) -> VersionService<SqliteTemplateRepository<'conn>, SqliteVersionRepository<'conn>> {
        VersionService::new(
            SqliteTemplateRepository::new(self.conn),
            SqliteVersionRepository::new(self.conn),
        )
    }
}

fn reject<T>(op: &'static str, err: ServiceError) -> HandlerResult<Response<T>> {
    match ApiError::classify(err) {
        Ok(api_err) => {
            warn!(
                "event=request_rejected module=api status={} op=\"{op}\"",
                api_err.status
            );
            Ok(Response::Error(api_err))
        }
        Err(source) => {
            let err = HandlerError::new(op, source);
            error!("event=request_failed module=api status=error error={err}");
            Err(err)
        }
    }
}
