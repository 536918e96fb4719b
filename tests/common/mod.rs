//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

use user_records_api::api::AppState;
use user_records_api::domain::{NewUser, User};
use user_records_api::errors::{StoreError, StoreResult};
use user_records_api::infra::{Database, UserRepository};
use user_records_api::services::UserManager;

/// The date every fixture service treats as today.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

/// In-memory store with sequential IDs that counts write attempts.
#[derive(Default)]
pub struct InMemoryUsers {
    rows: Mutex<Vec<User>>,
    last_id: Mutex<i32>,
    writes: AtomicUsize,
}

impl InMemoryUsers {
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn create(&self, user: NewUser) -> StoreResult<User> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut last_id = self.last_id.lock().unwrap();
        *last_id += 1;

        let created = User {
            id: *last_id,
            name: user.name,
            date_of_birth: user.date_of_birth,
        };
        self.rows.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: i32, user: NewUser) -> StoreResult<User> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or(StoreError::NotFound(id))?;

        row.name = user.name;
        row.date_of_birth = user.date_of_birth;
        Ok(row.clone())
    }

    async fn delete(&self, id: i32) -> StoreResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|row| row.id != id);

        if rows.len() == before {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: i32) -> StoreResult<User> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn list(&self) -> StoreResult<Vec<User>> {
        Ok(self.rows.lock().unwrap().clone())
    }
}

/// Store whose every call fails like a lost connection.
pub struct UnreachableUsers;

fn unreachable() -> StoreError {
    StoreError::Database(DbErr::Custom("connection refused".to_string()))
}

#[async_trait]
impl UserRepository for UnreachableUsers {
    async fn create(&self, _user: NewUser) -> StoreResult<User> {
        Err(unreachable())
    }

    async fn update(&self, _id: i32, _user: NewUser) -> StoreResult<User> {
        Err(unreachable())
    }

    async fn delete(&self, _id: i32) -> StoreResult<()> {
        Err(unreachable())
    }

    async fn find_by_id(&self, _id: i32) -> StoreResult<User> {
        Err(unreachable())
    }

    async fn list(&self) -> StoreResult<Vec<User>> {
        Err(unreachable())
    }
}

/// Service over `repo` with the fixture clock.
pub fn manager(repo: Arc<dyn UserRepository>) -> UserManager {
    UserManager::with_clock(repo, Arc::new(today))
}

/// Application state over `repo` and a mock database connection.
pub fn app_state(repo: Arc<dyn UserRepository>) -> AppState {
    let database = Database::from_connection(MockDatabase::new(DatabaseBackend::Postgres).into_connection());
    AppState::new(Arc::new(manager(repo)), Arc::new(database))
}
