//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let author = factory::create_user(db).await?;
//! let post = factory::blog_post::BlogPostFactory::new(db, author.id)
//!     .public(false)
//!     .build()
//!     .await?;
//! ```

pub mod announcement;
pub mod blog_post;
pub mod chapter;
pub mod comment;
pub mod fan_fiction;
pub mod helpers;
pub mod tag;
pub mod user;

pub use announcement::create_announcement;
pub use blog_post::create_blog_post;
pub use chapter::create_chapter;
pub use comment::create_comment;
pub use fan_fiction::create_fan_fiction;
pub use tag::create_tag;
pub use user::create_user;
