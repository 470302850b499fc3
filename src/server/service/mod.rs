//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They are responsible for:
//!
//! - **Business Logic**: Uniqueness, visibility and parent checks that need the database
//! - **Orchestration**: Coordinating several repositories for one request
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Keeping multi-row writes atomic

pub mod announcement;
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
pub mod token;

#[cfg(test)]
mod test;
