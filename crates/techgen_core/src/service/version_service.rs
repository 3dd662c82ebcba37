//! Template version listing use-case service.
//!
//! # Invariants
//! - The template is resolved and authorized before versions are read.
//! - Repository ordering (newest first) is passed through unchanged.

use crate::context::RequestContext;
use crate::model::version::{VersionListIn, VersionListOut};
use crate::repo::template_repo::TemplateRepository;
use crate::repo::version_repo::VersionRepository;
use crate::service::error::{log_failure, ServiceError, ServiceResult};
use crate::service::resolve_authorized;
use crate::service::template_service::TEMPLATE_ACCESS;
use log::info;

/// Version service facade over template and version repositories.
pub struct VersionService<T: TemplateRepository, V: VersionRepository> {
    template_repo: T,
    version_repo: V,
}

impl<T: TemplateRepository, V: VersionRepository> VersionService<T, V> {
    pub fn new(template_repo: T, version_repo: V) -> Self {
        Self {
            template_repo,
            version_repo,
        }
    }

    /// Lists versions of a template visible to `input.user_id`.
    ///
    /// # Errors
    /// - `DomainError::TemplateNotFound` when the template does not resolve.
    /// - `DomainError::TemplateInvalid` when the actor owns neither the
    ///   template nor its project.
    pub fn list(
        &self,
        ctx: &RequestContext,
        input: VersionListIn,
    ) -> ServiceResult<VersionListOut> {
        self.list_logged(ctx, input, VERSION_LIST)
    }

    /// Same contract as [`Self::list`], reached through the template route.
    pub fn list_template_versions(
        &self,
        ctx: &RequestContext,
        input: VersionListIn,
    ) -> ServiceResult<VersionListOut> {
        self.list_logged(ctx, input, TEMPLATE_VERSION_LIST)
    }

    fn list_logged(
        &self,
        ctx: &RequestContext,
        input: VersionListIn,
        route: ListRoute,
    ) -> ServiceResult<VersionListOut> {
        self.list_inner(ctx, input, route.step)
            .inspect(|out| {
                info!(
                    "event={} module=service status=ok template_id={} count={}",
                    route.event,
                    input.template_id,
                    out.versions.len()
                )
            })
            .inspect_err(|err| log_failure(route.event, err))
    }

    fn list_inner(
        &self,
        ctx: &RequestContext,
        input: VersionListIn,
        step: &'static str,
    ) -> ServiceResult<VersionListOut> {
        resolve_authorized(input.user_id, TEMPLATE_ACCESS, || {
            self.template_repo.get_by_id(ctx, input.template_id)
        })?;

        let versions = self
            .version_repo
            .list_by_template_id(ctx, input.template_id)
            .map_err(ServiceError::repo(step))?;

        Ok(VersionListOut { versions })
    }
}

/// Log event and listing step tag of one entry route.
#[derive(Clone, Copy)]
struct ListRoute {
    event: &'static str,
    step: &'static str,
}

const VERSION_LIST: ListRoute = ListRoute {
    event: "version_list",
    step: "version repo - list by template id",
};

const TEMPLATE_VERSION_LIST: ListRoute = ListRoute {
    event: "template_version_list",
    step: "template version repo - list by template id",
};

#[cfg(test)]
mod tests {
    use super::VersionService;
    use crate::context::{ContextError, RequestContext};
    use crate::model::error::DomainError;
    use crate::model::template::{Template, TemplateId};
    use crate::model::version::{Version, VersionId, VersionListIn, VersionOwners};
    use crate::repo::error::RepoError;
    use crate::repo::template_repo::TemplateRepository;
    use crate::repo::version_repo::VersionRepository;
    use crate::repo::RepoResult;
    use crate::service::error::ServiceError;
    use std::cell::Cell;

    struct OneTemplate(Option<Template>);

    impl TemplateRepository for OneTemplate {
        fn get_by_id(
            &self,
            _ctx: &RequestContext,
            _id: TemplateId,
        ) -> RepoResult<Option<Template>> {
            Ok(self.0)
        }

        fn delete_by_id(&self, _ctx: &RequestContext, _id: TemplateId) -> RepoResult<()> {
            unreachable!("listing never deletes")
        }
    }

    #[derive(Default)]
    struct FakeVersions {
        versions: Vec<Version>,
        fail: bool,
        list_calls: Cell<usize>,
    }

    impl VersionRepository for FakeVersions {
        fn list_by_template_id(
            &self,
            _ctx: &RequestContext,
            _template_id: TemplateId,
        ) -> RepoResult<Vec<Version>> {
            self.list_calls.set(self.list_calls.get() + 1);
            if self.fail {
                return Err(RepoError::Context {
                    op: "template version - list by template id",
                    source: ContextError::DeadlineExceeded,
                });
            }
            Ok(self.versions.clone())
        }

        fn get_owners_by_id(
            &self,
            _ctx: &RequestContext,
            _id: VersionId,
        ) -> RepoResult<Option<VersionOwners>> {
            Ok(None)
        }
    }

    fn version(id: i64) -> Version {
        Version {
            id,
            number: id,
            author_name: "ann".to_string(),
            created_at: 0,
        }
    }

    fn owned_template() -> OneTemplate {
        OneTemplate(Some(Template {
            id: 1,
            author_id: 5,
            project_id: None,
            project_author_id: None,
        }))
    }

    const INPUT: VersionListIn = VersionListIn {
        template_id: 1,
        user_id: 5,
    };

    #[test]
    fn author_sees_versions_in_repository_order() {
        let service = VersionService::new(
            owned_template(),
            FakeVersions {
                versions: vec![version(3), version(2), version(1)],
                ..FakeVersions::default()
            },
        );
        let out = service.list(&RequestContext::background(), INPUT).expect("versions are listed");
        let ids: Vec<i64> = out.versions.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn template_without_versions_yields_empty_list() {
        let service = VersionService::new(owned_template(), FakeVersions::default());
        let out = service.list(&RequestContext::background(), INPUT).expect("versions are listed");
        assert!(out.versions.is_empty());
    }

    #[test]
    fn non_owner_never_reaches_version_listing() {
        let service = VersionService::new(owned_template(), FakeVersions::default());
        let err = service
            .list(
                &RequestContext::background(),
                VersionListIn {
                    template_id: 1,
                    user_id: 6,
                },
            )
            .expect_err("listing fails");
        assert!(matches!(err, ServiceError::Domain(DomainError::TemplateInvalid)));
        assert_eq!(service.version_repo.list_calls.get(), 0);
    }

    #[test]
    fn listing_failure_is_tagged_with_route_step() {
        let service = VersionService::new(
            owned_template(),
            FakeVersions {
                fail: true,
                ..FakeVersions::default()
            },
        );
        let ctx = RequestContext::background();

        let err = service
            .list(&ctx, INPUT)
            .expect_err("listing failure must surface");
        assert!(!err.is_client_visible());
        assert!(err
            .to_string()
            .starts_with("version repo - list by template id: "));

        let err = service
            .list_template_versions(&ctx, INPUT)
            .expect_err("listing failure must surface");
        assert!(err
            .to_string()
            .starts_with("template version repo - list by template id: "));
    }
}
