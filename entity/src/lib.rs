//! SeaORM entity definitions for every persisted record of the club backend.

pub mod prelude;

pub mod announcement;
pub mod blacklisted_token;
pub mod blog_post;
pub mod chapter;
pub mod comment;
pub mod event;
pub mod event_tag;
pub mod fan_art;
pub mod fan_fiction;
pub mod fan_fiction_tag;
pub mod seasonal_report;
pub mod tag;
pub mod team_member;
pub mod user;
