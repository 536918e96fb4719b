//! User service - Handles user-related business logic.
//!
//! Each operation is a straight pipeline: validate, one store call, shape
//! the response. Successful operations log once here; failures are logged
//! when they are turned into a response.

use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use std::sync::Arc;

use crate::domain::{User, UserInput, UserView};
use crate::errors::AppResult;
use crate::infra::UserRepository;

/// Source of the current calendar date.
pub type Clock = Arc<dyn Fn() -> NaiveDate + Send + Sync>;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Validate input and create a user
    async fn create_user(&self, input: UserInput) -> AppResult<User>;

    /// Validate input and replace an existing user's fields
    async fn update_user(&self, id: i32, input: UserInput) -> AppResult<User>;

    /// Delete a user, returning the deleted ID
    async fn delete_user(&self, id: i32) -> AppResult<i32>;

    /// Get a user by ID with derived age
    async fn get_user(&self, id: i32) -> AppResult<UserView>;

    /// List all users with derived age
    async fn list_users(&self) -> AppResult<Vec<UserView>>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
    today: Clock,
}

impl UserManager {
    /// Create new user service instance using the local calendar date
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self::with_clock(repo, Arc::new(|| Local::now().date_naive()))
    }

    /// Create new user service instance with a custom clock
    pub fn with_clock(repo: Arc<dyn UserRepository>, today: Clock) -> Self {
        Self { repo, today }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, input: UserInput) -> AppResult<User> {
        let new_user = input.into_new_user()?;
        let user = self.repo.create(new_user).await?;

        tracing::info!(user_id = user.id, name = %user.name, "User created");
        Ok(user)
    }

    async fn update_user(&self, id: i32, input: UserInput) -> AppResult<User> {
        let new_user = input.into_new_user()?;
        let user = self.repo.update(id, new_user).await?;

        tracing::info!(user_id = user.id, name = %user.name, "User updated");
        Ok(user)
    }

    async fn delete_user(&self, id: i32) -> AppResult<i32> {
        self.repo.delete(id).await?;

        tracing::info!(user_id = id, "User deleted");
        Ok(id)
    }

    async fn get_user(&self, id: i32) -> AppResult<UserView> {
        let user = self.repo.find_by_id(id).await?;
        let view = UserView::from_user(user, (self.today)());

        tracing::info!(user_id = view.id, name = %view.name, "User fetched");
        Ok(view)
    }

    async fn list_users(&self) -> AppResult<Vec<UserView>> {
        let users = self.repo.list().await?;
        let today = (self.today)();
        let views: Vec<UserView> = users
            .into_iter()
            .map(|user| UserView::from_user(user, today))
            .collect();

        tracing::info!(count = views.len(), "Users listed");
        Ok(views)
    }
}
