//! User repository - the data store gateway for user rows.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::{NewUser, User};
use crate::errors::{StoreError, StoreResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Each method is a single statement against the `users` table. Futures are
/// driven by the calling request; dropping one abandons the statement.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user and return the stored row
    async fn create(&self, user: NewUser) -> StoreResult<User>;

    /// Replace name and date of birth of an existing user
    async fn update(&self, id: i32, user: NewUser) -> StoreResult<User>;

    /// Delete a user by ID
    async fn delete(&self, id: i32) -> StoreResult<()>;

    /// Find a user by ID
    async fn find_by_id(&self, id: i32) -> StoreResult<User>;

    /// List all users, ordered by ID
    async fn list(&self) -> StoreResult<Vec<User>>;
}

/// SeaORM implementation of UserRepository
pub struct UserStore {
    db: Arc<DatabaseConnection>,
}

impl UserStore {
    /// Create new repository instance over a shared connection pool
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn create(&self, user: NewUser) -> StoreResult<User> {
        let active_model = ActiveModel {
            name: Set(user.name),
            dob: Set(user.date_of_birth),
            ..Default::default()
        };

        let model = active_model.insert(self.db.as_ref()).await?;
        Ok(User::from(model))
    }

    async fn update(&self, id: i32, user: NewUser) -> StoreResult<User> {
        let active_model = ActiveModel {
            id: Set(id),
            name: Set(user.name),
            dob: Set(user.date_of_birth),
        };

        let model = active_model.update(self.db.as_ref()).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => StoreError::NotFound(id),
            other => StoreError::from(other),
        })?;
        Ok(User::from(model))
    }

    async fn delete(&self, id: i32) -> StoreResult<()> {
        let result = UserEntity::delete_by_id(id).exec(self.db.as_ref()).await?;

        if result.rows_affected == 0 {
            return Err(StoreError::NotFound(id));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: i32) -> StoreResult<User> {
        UserEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .map(User::from)
            .ok_or(StoreError::NotFound(id))
    }

    async fn list(&self) -> StoreResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(User::from).collect())
    }
}
