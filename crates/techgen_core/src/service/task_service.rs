//! Task creation use-case service.
//!
//! # Responsibility
//! - Authorize the creator against the version's template and project.
//! - Insert the task, then announce it on the task channel.
//!
//! # Invariants
//! - Nothing is published unless the insert succeeded.
//! - A failed publish leaves the inserted task in place; no compensation.

use crate::context::RequestContext;
use crate::model::error::DomainError;
use crate::model::task::{TaskCreateIn, TaskId};
use crate::publish::TaskCreatedPublisher;
use crate::repo::task_repo::TaskRepository;
use crate::repo::version_repo::VersionRepository;
use crate::service::error::{log_failure, ServiceError, ServiceResult};
use crate::service::{resolve_authorized, AccessRule};
use log::info;

const VERSION_ACCESS: AccessRule = AccessRule {
    step: "version repo - get by id",
    not_found: DomainError::VersionNotFound,
    forbidden: DomainError::VersionInvalid,
};

/// Task service facade over repositories and the task publisher.
pub struct TaskService<V: VersionRepository, T: TaskRepository, P: TaskCreatedPublisher> {
    version_repo: V,
    task_repo: T,
    publisher: P,
}

impl<V, T, P> TaskService<V, T, P>
where
    V: VersionRepository,
    T: TaskRepository,
    P: TaskCreatedPublisher,
{
    pub fn new(version_repo: V, task_repo: T, publisher: P) -> Self {
        Self {
            version_repo,
            task_repo,
            publisher,
        }
    }

    /// Creates a task for a version the creator may use and publishes it.
    ///
    /// # Errors
    /// - `DomainError::VersionNotFound` when the version does not resolve.
    /// - `DomainError::VersionInvalid` when the creator owns neither the
    ///   template nor its project.
    /// - `ServiceError::Infrastructure` on insert or publish failure.
    pub fn create(&self, ctx: &RequestContext, input: &TaskCreateIn) -> ServiceResult<TaskId> {
        self.create_inner(ctx, input)
            .inspect(|task_id| {
                info!(
                    "event=task_create module=service status=ok task_id={task_id} version_id={}",
                    input.version_id
                )
            })
            .inspect_err(|err| log_failure("task_create", err))
    }

    fn create_inner(&self, ctx: &RequestContext, input: &TaskCreateIn) -> ServiceResult<TaskId> {
        resolve_authorized(input.creator_id, VERSION_ACCESS, || {
            self.version_repo.get_owners_by_id(ctx, input.version_id)
        })?;

        let task_id = self
            .task_repo
            .insert(ctx, input)
            .map_err(ServiceError::repo("task repo - insert"))?;

        self.publisher
            .publish_task_created(ctx, task_id)
            .map_err(ServiceError::publish("publisher - publish task created"))?;

        Ok(task_id)
    }
}
