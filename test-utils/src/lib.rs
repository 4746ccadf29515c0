//! Command Relay Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the
//! relay. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, factories for credential and usage rows, Serenity object factories
//! and a fake Steam Web API server.
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_credentials() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_credential_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
pub mod steam;
