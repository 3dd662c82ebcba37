//! Template use-case service.

use crate::context::RequestContext;
use crate::model::error::DomainError;
use crate::model::template::TemplateDeleteIn;
use crate::repo::template_repo::TemplateRepository;
use crate::service::error::{log_failure, ServiceError, ServiceResult};
use crate::service::{resolve_authorized, AccessRule};
use log::info;

pub(crate) const TEMPLATE_ACCESS: AccessRule = AccessRule {
    step: "template repo - get by id",
    not_found: DomainError::TemplateNotFound,
    forbidden: DomainError::TemplateInvalid,
};

/// Template service facade over repository implementations.
pub struct TemplateService<R: TemplateRepository> {
    repo: R,
}

impl<R: TemplateRepository> TemplateService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Deletes a template on behalf of its author or its project's author.
    ///
    /// # Errors
    /// - `DomainError::TemplateNotFound` when the id does not resolve.
    /// - `DomainError::TemplateInvalid` when the actor owns neither.
    pub fn delete(&self, ctx: &RequestContext, input: TemplateDeleteIn) -> ServiceResult<()> {
        self.delete_inner(ctx, input)
            .inspect(|_| {
                info!(
                    "event=template_delete module=service status=ok template_id={}",
                    input.template_id
                )
            })
            .inspect_err(|err| log_failure("template_delete", err))
    }

    fn delete_inner(&self, ctx: &RequestContext, input: TemplateDeleteIn) -> ServiceResult<()> {
        resolve_authorized(input.user_id, TEMPLATE_ACCESS, || {
            self.repo.get_by_id(ctx, input.template_id)
        })?;

        self.repo
            .delete_by_id(ctx, input.template_id)
            .map_err(ServiceError::repo("template repo - delete by id"))
    }
}
