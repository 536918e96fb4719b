//! User Records API - CRUD service for user records
//!
//! Stores users (name and date of birth) in a relational table and serves
//! them over HTTP with input validation and an age derived at read time.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: User entity, validation rules and age derivation
//! - **services**: The user operations (validate, store, shape)
//! - **infra**: Database connection and the user repository
//! - **api**: HTTP handlers, extractors and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Check database connectivity
//! cargo run -- check
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{User, UserInput, UserView};
pub use errors::{AppError, AppResult, StoreError};
