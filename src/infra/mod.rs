//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection pool
//! - The user repository (store gateway)

pub mod db;
pub mod repositories;

pub use db::Database;
pub use repositories::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserRepository;
