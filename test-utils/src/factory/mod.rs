//! Factory methods for creating test data.
//!
//! Each table has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let credential = factory::credential::CredentialFactory::new(&db)
//!     .user_id(42)
//!     .steam_id("76561197960287930")
//!     .token_hash(hash)
//!     .build()
//!     .await?;
//!
//! factory::usage::create_usage(&db, 42, "Generate key").await?;
//! ```

pub mod credential;
pub mod helpers;
pub mod usage;

pub use credential::create_credential;
pub use usage::create_usage;
