//! User lookup use-case service.

use crate::context::RequestContext;
use crate::model::error::DomainError;
use crate::model::user::User;
use crate::model::ActorId;
use crate::repo::user_repo::UserRepository;
use crate::service::error::{log_failure, ServiceError, ServiceResult};
use log::info;

/// User service facade over repository implementations.
pub struct UserService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Loads a user by id.
    ///
    /// # Errors
    /// - `DomainError::UserNotFound` when no row matches.
    pub fn get_by_id(&self, ctx: &RequestContext, id: ActorId) -> ServiceResult<User> {
        self.repo
            .get_by_id(ctx, id)
            .map_err(ServiceError::repo("user repo - get by id"))
            .and_then(|user| user.ok_or(ServiceError::Domain(DomainError::UserNotFound)))
            .inspect(|_| info!("event=user_get module=service status=ok user_id={id}"))
            .inspect_err(|err| log_failure("user_get", err))
    }
}

#[cfg(test)]
mod tests {
    use super::UserService;
    use crate::context::RequestContext;
    use crate::model::error::DomainError;
    use crate::model::user::User;
    use crate::model::ActorId;
    use crate::repo::user_repo::UserRepository;
    use crate::repo::RepoResult;
    use crate::service::error::ServiceError;

    struct OneUser(User);

    impl UserRepository for OneUser {
        fn get_by_id(&self, _ctx: &RequestContext, id: ActorId) -> RepoResult<Option<User>> {
            Ok((self.0.id == id).then(|| self.0.clone()))
        }
    }

    fn service() -> UserService<OneUser> {
        UserService::new(OneUser(User {
            id: 7,
            name: "ann".to_string(),
            email: "ann@example.com".to_string(),
            created_at: 1,
        }))
    }

    #[test]
    fn returns_stored_user() {
        let user = service().get_by_id(&RequestContext::background(), 7).expect("user is found");
        assert_eq!(user.name, "ann");
    }

    #[test]
    fn absent_user_is_not_found() {
        let err = service()
            .get_by_id(&RequestContext::background(), 8)
            .expect_err("lookup fails");
        assert!(matches!(err, ServiceError::Domain(DomainError::UserNotFound)));
    }
}
