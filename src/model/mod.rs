//! Wire representations shared by every HTTP endpoint.
//!
//! Read views and write requests are separate types: write requests carry
//! write-only relation inputs such as `tag_ids`, read views carry computed
//! fields such as `author_username` and nested `tags`.

pub mod announcement;
pub mod api;
pub mod auth;
pub mod blog_post;
pub mod chapter;
pub mod comment;
pub mod event;
pub mod fan_art;
pub mod fan_fiction;
pub mod seasonal_report;
pub mod tag;
pub mod team_member;
pub mod user;
