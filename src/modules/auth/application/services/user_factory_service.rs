use async_trait::async_trait;
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::application::domain::entities::{User, UNUSABLE_PASSWORD_PREFIX};
use crate::auth::application::domain::value_objects::{Email, PhoneNumber, Username};
use crate::auth::application::ports::incoming::use_cases::{
    CreateUserCommand, CreateUserError, UserFactoryUseCase,
};
use crate::auth::application::ports::outgoing::{
    CreateUserData, PasswordHasher, UserQuery, UserRepository, UserRepositoryError,
};
use crate::shared::domain::ValidationError;

const UNUSABLE_PASSWORD_SUFFIX_LEN: usize = 40;

fn unusable_password() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(UNUSABLE_PASSWORD_SUFFIX_LEN)
        .map(char::from)
        .collect();
    format!("{}{}", UNUSABLE_PASSWORD_PREFIX, suffix)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Regular,
    Superuser,
}

pub struct UserFactoryService<R, Q>
where
    R: UserRepository,
    Q: UserQuery,
{
    user_repository: R,
    user_query: Q,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<R, Q> UserFactoryService<R, Q>
where
    R: UserRepository,
    Q: UserQuery,
{
    pub fn new(
        user_repository: R,
        user_query: Q,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    ) -> Self {
        Self {
            user_repository,
            user_query,
            password_hasher,
        }
    }

    async fn build_user(
        &self,
        command: CreateUserCommand,
        role: Role,
    ) -> Result<CreateUserData, CreateUserError> {
        let email = Email::parse(&command.email)?;
        let username = Username::parse(&command.username)?;
        let phone_number = PhoneNumber::parse_optional(command.phone_number.as_deref())?;

        let password = command.password.filter(|p| !p.is_empty());
        if role == Role::Superuser && password.is_none() {
            return Err(ValidationError::Required("password").into());
        }

        let username_taken = self
            .user_query
            .find_by_username(username.as_str())
            .await
            .map_err(|e| CreateUserError::RepositoryError(e.to_string()))?
            .is_some();
        if username_taken {
            warn!(username = %username.as_str(), "Username already taken");
            return Err(CreateUserError::UsernameAlreadyExists);
        }

        let email_taken = self
            .user_query
            .find_by_email(email.as_str())
            .await
            .map_err(|e| CreateUserError::RepositoryError(e.to_string()))?
            .is_some();
        if email_taken {
            warn!(email = %email.as_str(), "Email already registered");
            return Err(CreateUserError::EmailAlreadyExists);
        }

        let password_hash = match password {
            Some(password) => self
                .password_hasher
                .hash_password(&password)
                .await
                .map_err(|e| CreateUserError::HashingFailed(e.to_string()))?,
            None => unusable_password(),
        };

        let elevated = role == Role::Superuser;
        Ok(CreateUserData {
            email: email.into_inner(),
            username: username.into_inner(),
            phone_number: phone_number.map(PhoneNumber::into_inner),
            password_hash,
            is_staff: elevated,
            is_superuser: elevated,
        })
    }

    async fn persist(&self, data: CreateUserData) -> Result<User, CreateUserError> {
        let user = self
            .user_repository
            .create_user(data)
            .await
            .map_err(|e| match e {
                UserRepositoryError::EmailAlreadyExists => CreateUserError::EmailAlreadyExists,
                UserRepositoryError::UsernameAlreadyExists => {
                    CreateUserError::UsernameAlreadyExists
                }
                UserRepositoryError::DatabaseError(msg) => CreateUserError::RepositoryError(msg),
                UserRepositoryError::UserNotFound => CreateUserError::RepositoryError(
                    "unexpected not found while creating user".to_string(),
                ),
            })?;

        info!(
            user_id = %user.id,
            is_superuser = user.is_superuser,
            "User created"
        );
        Ok(user)
    }
}

#[async_trait]
impl<R, Q> UserFactoryUseCase for UserFactoryService<R, Q>
where
    R: UserRepository + Send + Sync,
    Q: UserQuery + Send + Sync,
{
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, CreateUserError> {
        let data = self.build_user(command, Role::Regular).await?;
        self.persist(data).await
    }

    async fn create_superuser(
        &self,
        command: CreateUserCommand,
    ) -> Result<User, CreateUserError> {
        let data = self.build_user(command, Role::Superuser).await?;
        self.persist(data).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserId;
    use crate::auth::application::ports::outgoing::{
        DeletedUserSummary, HashError, UserQueryError,
    };
    use chrono::Utc;
    use mockall::mock;

    mock! {
        pub Repo {}
        #[async_trait]
        impl UserRepository for Repo {
            async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError>;
            async fn record_login(&self, user_id: UserId) -> Result<User, UserRepositoryError>;
            async fn delete_user(&self, user_id: UserId)
                -> Result<DeletedUserSummary, UserRepositoryError>;
        }
    }

    mock! {
        pub Query {}
        #[async_trait]
        impl UserQuery for Query {
            async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError>;
            async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError>;
        }
    }

    struct PrefixHasher;

    #[async_trait]
    impl PasswordHasher for PrefixHasher {
        async fn hash_password(&self, password: &str) -> Result<String, HashError> {
            Ok(format!("hashed:{}", password))
        }

        async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
            Ok(hash == format!("hashed:{}", password))
        }
    }

    struct FailingHasher;

    #[async_trait]
    impl PasswordHasher for FailingHasher {
        async fn hash_password(&self, _password: &str) -> Result<String, HashError> {
            Err(HashError::HashFailed)
        }

        async fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, HashError> {
            Err(HashError::VerifyFailed)
        }
    }

    fn user_from(data: CreateUserData) -> User {
        User {
            id: UserId::new(),
            email: data.email,
            username: data.username,
            phone_number: data.phone_number,
            password_hash: data.password_hash,
            is_active: true,
            is_staff: data.is_staff,
            is_superuser: data.is_superuser,
            last_login: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn free_names() -> MockQuery {
        let mut query = MockQuery::new();
        query.expect_find_by_username().returning(|_| Ok(None));
        query.expect_find_by_email().returning(|_| Ok(None));
        query
    }

    fn echoing_repo() -> MockRepo {
        let mut repo = MockRepo::new();
        repo.expect_create_user()
            .times(1)
            .returning(|data| Ok(user_from(data)));
        repo
    }

    fn service(repo: MockRepo, query: MockQuery) -> UserFactoryService<MockRepo, MockQuery> {
        UserFactoryService::new(repo, query, Arc::new(PrefixHasher))
    }

    // =====================================================
    // Success
    // =====================================================

    #[tokio::test]
    async fn test_create_user_normalizes_email_and_hashes_password() {
        // Arrange
        let mut query = MockQuery::new();
        query.expect_find_by_username().returning(|_| Ok(None));
        query
            .expect_find_by_email()
            .withf(|email: &str| email == "Ana@example.com")
            .times(1)
            .returning(|_| Ok(None));
        let mut repo = MockRepo::new();
        repo.expect_create_user()
            .withf(|data| data.email == "Ana@example.com")
            .times(1)
            .returning(|data| Ok(user_from(data)));
        let svc = service(repo, query);
        let command = CreateUserCommand::new("Ana@EXAMPLE.com", "ana")
            .with_password("s3cret")
            .with_phone_number("+628123456");

        // Act
        let user = svc.create_user(command).await.unwrap();

        // Assert
        assert_eq!(user.email, "Ana@example.com");
        assert_eq!(user.username, "ana");
        assert_eq!(user.phone_number.as_deref(), Some("+628123456"));
        assert_eq!(user.password_hash, "hashed:s3cret");
        assert!(user.is_active);
        assert!(!user.is_staff);
        assert!(!user.is_superuser);
    }

    #[tokio::test]
    async fn test_create_user_without_password_stores_unusable_marker() {
        let svc = service(echoing_repo(), free_names());

        let user = svc
            .create_user(CreateUserCommand::new("ana@example.com", "ana"))
            .await
            .unwrap();

        assert!(user.password_hash.starts_with('!'));
        assert_eq!(user.password_hash.len(), 1 + UNUSABLE_PASSWORD_SUFFIX_LEN);
        assert!(!user.has_usable_password());
    }

    #[tokio::test]
    async fn test_empty_phone_number_is_stored_as_absent() {
        let svc = service(echoing_repo(), free_names());

        let user = svc
            .create_user(CreateUserCommand::new("ana@example.com", "ana").with_phone_number(""))
            .await
            .unwrap();

        assert_eq!(user.phone_number, None);
    }

    #[tokio::test]
    async fn test_create_superuser_elevates_before_the_single_insert() {
        let mut repo = MockRepo::new();
        repo.expect_create_user()
            .withf(|data| data.is_staff && data.is_superuser)
            .times(1)
            .returning(|data| Ok(user_from(data)));
        let svc = service(repo, free_names());

        let user = svc
            .create_superuser(CreateUserCommand::new("root@example.com", "root").with_password("pw"))
            .await
            .unwrap();

        assert!(user.is_staff);
        assert!(user.is_superuser);
    }

    // =====================================================
    // Validation
    // =====================================================

    #[tokio::test]
    async fn test_missing_email_is_reported_first() {
        let svc = service(MockRepo::new(), MockQuery::new());

        let err = svc
            .create_user(CreateUserCommand::new("", ""))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CreateUserError::Validation(ValidationError::Required("email"))
        ));
    }

    #[tokio::test]
    async fn test_missing_username_is_rejected() {
        let svc = service(MockRepo::new(), MockQuery::new());

        let err = svc
            .create_user(CreateUserCommand::new("ana@example.com", "  "))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CreateUserError::Validation(ValidationError::Required("username"))
        ));
    }

    #[tokio::test]
    async fn test_invalid_phone_number_is_rejected() {
        let svc = service(MockRepo::new(), MockQuery::new());

        let err = svc
            .create_user(CreateUserCommand::new("ana@example.com", "ana").with_phone_number("0812"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CreateUserError::Validation(ValidationError::InvalidPhoneNumber)
        ));
    }

    #[tokio::test]
    async fn test_superuser_requires_password() {
        let svc = service(MockRepo::new(), MockQuery::new());

        let err = svc
            .create_superuser(CreateUserCommand::new("root@example.com", "root"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CreateUserError::Validation(ValidationError::Required("password"))
        ));
    }

    // =====================================================
    // Duplicates
    // =====================================================

    #[tokio::test]
    async fn test_duplicate_username_is_checked_before_email() {
        let mut query = MockQuery::new();
        query.expect_find_by_username().times(1).returning(|_| {
            Ok(Some(user_from(CreateUserData {
                email: "other@example.com".to_string(),
                username: "ana".to_string(),
                phone_number: None,
                password_hash: "x".to_string(),
                is_staff: false,
                is_superuser: false,
            })))
        });
        query.expect_find_by_email().times(0);
        let svc = service(MockRepo::new(), query);

        let err = svc
            .create_user(CreateUserCommand::new("ana@example.com", "ana"))
            .await
            .unwrap_err();

        assert!(matches!(err, CreateUserError::UsernameAlreadyExists));
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() {
        let mut query = MockQuery::new();
        query.expect_find_by_username().returning(|_| Ok(None));
        query
            .expect_find_by_email()
            .withf(|email: &str| email == "ana@example.com")
            .times(1)
            .returning(|_| {
                Ok(Some(user_from(CreateUserData {
                    email: "ana@example.com".to_string(),
                    username: "someone".to_string(),
                    phone_number: None,
                    password_hash: "x".to_string(),
                    is_staff: false,
                    is_superuser: false,
                })))
            });
        let svc = service(MockRepo::new(), query);

        let err = svc
            .create_user(CreateUserCommand::new("ana@EXAMPLE.COM", "ana"))
            .await
            .unwrap_err();

        assert!(matches!(err, CreateUserError::EmailAlreadyExists));
    }

    #[tokio::test]
    async fn test_insert_race_maps_to_already_exists() {
        let mut repo = MockRepo::new();
        repo.expect_create_user()
            .times(1)
            .returning(|_| Err(UserRepositoryError::UsernameAlreadyExists));
        let svc = service(repo, free_names());

        let err = svc
            .create_user(CreateUserCommand::new("ana@example.com", "ana"))
            .await
            .unwrap_err();

        assert!(matches!(err, CreateUserError::UsernameAlreadyExists));
    }

    // =====================================================
    // Infrastructure failures
    // =====================================================

    #[tokio::test]
    async fn test_hashing_failure_is_reported() {
        let svc = UserFactoryService::new(MockRepo::new(), free_names(), Arc::new(FailingHasher));

        let err = svc
            .create_user(CreateUserCommand::new("ana@example.com", "ana").with_password("pw"))
            .await
            .unwrap_err();

        assert!(matches!(err, CreateUserError::HashingFailed(_)));
    }

    #[tokio::test]
    async fn test_query_failure_maps_to_repository_error() {
        let mut query = MockQuery::new();
        query
            .expect_find_by_username()
            .returning(|_| Err(UserQueryError::DatabaseError("db down".to_string())));
        let svc = service(MockRepo::new(), query);

        let err = svc
            .create_user(CreateUserCommand::new("ana@example.com", "ana"))
            .await
            .unwrap_err();

        assert!(matches!(err, CreateUserError::RepositoryError(msg) if msg.contains("db down")));
    }
}
