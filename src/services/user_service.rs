//! User service - employee management.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::{
    BYPASS_DEPARTMENT, BYPASS_EMPLOYEE_ID, BYPASS_FIRST_NAME, BYPASS_LAST_NAME,
    DEFAULT_USER_PASSWORD,
};
use crate::domain::{NewUser, Password, User, UserChanges, UserRole};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Fields accepted when creating an employee
#[derive(Debug, Clone)]
pub struct CreateUserInput {
    pub employee_id: String,
    pub title: String,
    pub first_name: String,
    pub last_name: String,
    pub department: String,
    pub role: Option<UserRole>,
    /// Plain text; defaults to the standard PIN password when absent
    pub password: Option<String>,
}

/// Partial employee update
#[derive(Debug, Clone, Default)]
pub struct UpdateUserInput {
    pub title: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub department: Option<String>,
    pub role: Option<UserRole>,
    pub password: Option<String>,
}

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Create an employee; conflict if the employee id is taken
    async fn create_user(&self, input: CreateUserInput) -> AppResult<User>;

    async fn update_user(&self, employee_id: &str, input: UpdateUserInput) -> AppResult<User>;

    async fn delete_user(&self, employee_id: &str) -> AppResult<()>;

    /// Create the built-in `9999` administrator if missing.
    /// Returns `true` when a user was inserted.
    async fn seed_admin(&self) -> AppResult<bool>;
}

/// Concrete implementation of UserService using Unit of Work.
pub struct UserManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> UserManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> UserService for UserManager<U> {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.uow.users().list().await
    }

    async fn create_user(&self, input: CreateUserInput) -> AppResult<User> {
        let users = self.uow.users();

        if users
            .find_by_employee_id(&input.employee_id)
            .await?
            .is_some()
        {
            return Err(AppError::conflict(format!(
                "Employee ID \"{}\"",
                input.employee_id
            )));
        }

        let plain = input.password.as_deref().unwrap_or(DEFAULT_USER_PASSWORD);
        let password_hash = Password::new(plain)?.into_string();

        let user = users
            .create(NewUser {
                employee_id: input.employee_id,
                title: input.title,
                first_name: input.first_name,
                last_name: input.last_name,
                department: input.department,
                role: input.role.unwrap_or(UserRole::Staff),
                password_hash,
            })
            .await?;

        tracing::info!(employee_id = %user.employee_id, "User created");
        Ok(user)
    }

    async fn update_user(&self, employee_id: &str, input: UpdateUserInput) -> AppResult<User> {
        let password_hash = match input.password.as_deref() {
            Some(plain) => Some(Password::new(plain)?.into_string()),
            None => None,
        };

        let changes = UserChanges {
            title: input.title,
            first_name: input.first_name,
            last_name: input.last_name,
            department: input.department,
            role: input.role,
            password_hash,
        };

        if changes.title.is_none()
            && changes.first_name.is_none()
            && changes.last_name.is_none()
            && changes.department.is_none()
            && changes.role.is_none()
            && changes.password_hash.is_none()
        {
            return Err(AppError::validation("No fields to update"));
        }

        self.uow.users().update(employee_id, changes).await
    }

    async fn delete_user(&self, employee_id: &str) -> AppResult<()> {
        let removed = self.uow.users().delete(employee_id).await?;
        if removed == 0 {
            return Err(AppError::NotFound);
        }

        tracing::info!(employee_id, "User deleted");
        Ok(())
    }

    async fn seed_admin(&self) -> AppResult<bool> {
        let users = self.uow.users();
        if users.find_by_employee_id(BYPASS_EMPLOYEE_ID).await?.is_some() {
            return Ok(false);
        }

        users
            .create(NewUser {
                employee_id: BYPASS_EMPLOYEE_ID.to_string(),
                title: String::new(),
                first_name: BYPASS_FIRST_NAME.to_string(),
                last_name: BYPASS_LAST_NAME.to_string(),
                department: BYPASS_DEPARTMENT.to_string(),
                role: UserRole::Admin,
                password_hash: Password::new(DEFAULT_USER_PASSWORD)?.into_string(),
            })
            .await?;

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::TestUnitOfWork;
    use crate::infra::MockUserRepository;
    use chrono::Utc;
    use mockall::predicate::eq;

    fn sample_user(employee_id: &str) -> User {
        User {
            employee_id: employee_id.to_string(),
            title: "Ms.".to_string(),
            first_name: "Malee".to_string(),
            last_name: "Suksan".to_string(),
            department: "Warehouse".to_string(),
            role: UserRole::Staff,
            password_hash: "hashed".to_string(),
            created_at: Utc::now(),
        }
    }

    fn create_input(employee_id: &str) -> CreateUserInput {
        CreateUserInput {
            employee_id: employee_id.to_string(),
            title: "Ms.".to_string(),
            first_name: "Malee".to_string(),
            last_name: "Suksan".to_string(),
            department: "Warehouse".to_string(),
            role: None,
            password: None,
        }
    }

    #[tokio::test]
    async fn test_create_user_duplicate_id_is_conflict() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_employee_id()
            .with(eq("1024"))
            .returning(|id| Ok(Some(sample_user(id))));
        repo.expect_create().never();

        let service = UserManager::new(Arc::new(TestUnitOfWork::with_users(repo)));
        let result = service.create_user(create_input("1024")).await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_create_user_defaults_role_and_password() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_employee_id().returning(|_| Ok(None));
        repo.expect_create()
            .withf(|new_user| {
                new_user.role == UserRole::Staff
                    && Password::from_hash(new_user.password_hash.clone()).verify("1234")
            })
            .returning(|new_user| {
                let mut user = sample_user(&new_user.employee_id);
                user.role = new_user.role;
                Ok(user)
            });

        let service = UserManager::new(Arc::new(TestUnitOfWork::with_users(repo)));
        let user = service.create_user(create_input("2048")).await.unwrap();

        assert_eq!(user.employee_id, "2048");
        assert_eq!(user.role, UserRole::Staff);
    }

    #[tokio::test]
    async fn test_update_user_requires_a_field() {
        let mut repo = MockUserRepository::new();
        repo.expect_update().never();

        let service = UserManager::new(Arc::new(TestUnitOfWork::with_users(repo)));
        let result = service.update_user("1024", UpdateUserInput::default()).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_delete_missing_user_is_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete().returning(|_| Ok(0));

        let service = UserManager::new(Arc::new(TestUnitOfWork::with_users(repo)));
        let result = service.delete_user("4321").await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_seed_admin_is_idempotent() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_employee_id()
            .with(eq("9999"))
            .returning(|id| Ok(Some(sample_user(id))));
        repo.expect_create().never();

        let service = UserManager::new(Arc::new(TestUnitOfWork::with_users(repo)));
        assert!(!service.seed_admin().await.unwrap());
    }
}
