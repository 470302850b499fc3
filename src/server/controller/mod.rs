//! HTTP handlers.
//!
//! Each handler checks access through `AuthGuard`, converts the request DTO into a
//! server param, calls a service and converts the result back into a DTO.

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

#[cfg(test)]
mod test;
