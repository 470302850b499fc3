//! Test support for the anisoc backend.
//!
//! [`builder::TestBuilder`] connects an in-memory SQLite database with just the
//! tables a test needs, and [`factory`] inserts rows with generated defaults.
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_public_posts() -> Result<(), AppError> {
//!     let test = TestBuilder::new().with_table(User).with_table(BlogPost).build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let author = factory::create_user(db).await?;
//!     factory::create_blog_post(db, author.id).await?;
//!     // ...
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
