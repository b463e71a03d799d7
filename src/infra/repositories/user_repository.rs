//! User repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::{NewUser, User, UserChanges};
use crate::errors::{AppError, AppResult, OptionExt};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Users are addressed by their four-digit employee id; the integer row id
/// never leaves this layer.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by employee id
    async fn find_by_employee_id(&self, employee_id: &str) -> AppResult<Option<User>>;

    /// List all users in insertion order
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Insert a new user
    async fn create(&self, user: NewUser) -> AppResult<User>;

    /// Apply a partial update
    async fn update(&self, employee_id: &str, changes: UserChanges) -> AppResult<User>;

    /// Delete by employee id, returning the number of removed rows
    async fn delete(&self, employee_id: &str) -> AppResult<u64>;
}

/// SeaORM-backed UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_model(&self, employee_id: &str) -> AppResult<Option<user::Model>> {
        UserEntity::find()
            .filter(user::Column::EmployeeId.eq(employee_id))
            .one(&self.db)
            .await
            .map_err(AppError::from)
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_employee_id(&self, employee_id: &str) -> AppResult<Option<User>> {
        Ok(self.find_model(employee_id).await?.map(User::from))
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn create(&self, user: NewUser) -> AppResult<User> {
        let label = format!("Employee ID \"{}\"", user.employee_id);
        let active_model = ActiveModel {
            employee_id: Set(user.employee_id),
            title: Set(user.title),
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            department: Set(user.department),
            role: Set(user.role.to_string()),
            password_hash: Set(user.password_hash),
            created_at: Set(chrono::Utc::now()),
            ..Default::default()
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| AppError::from_write(e, label))?;
        Ok(User::from(model))
    }

    async fn update(&self, employee_id: &str, changes: UserChanges) -> AppResult<User> {
        let model = self
            .find_model(employee_id)
            .await?
            .ok_or_not_found()?;

        let mut active: ActiveModel = model.into();

        if let Some(title) = changes.title {
            active.title = Set(title);
        }
        if let Some(first_name) = changes.first_name {
            active.first_name = Set(first_name);
        }
        if let Some(last_name) = changes.last_name {
            active.last_name = Set(last_name);
        }
        if let Some(department) = changes.department {
            active.department = Set(department);
        }
        if let Some(role) = changes.role {
            active.role = Set(role.to_string());
        }
        if let Some(password_hash) = changes.password_hash {
            active.password_hash = Set(password_hash);
        }

        let model = active.update(&self.db).await?;
        Ok(User::from(model))
    }

    async fn delete(&self, employee_id: &str) -> AppResult<u64> {
        let result = UserEntity::delete_many()
            .filter(user::Column::EmployeeId.eq(employee_id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
