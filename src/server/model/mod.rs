//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. `Create*Param` and `Update*Param`
//! types validate incoming DTOs, so services only ever see well-formed input.

pub mod announcement;
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
