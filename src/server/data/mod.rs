//! Database repository layer for all domain entities.
//!
//! Each repository wraps a borrowed SeaORM connection and converts entity models
//! into domain models at this boundary. Repositories are generic over
//! `ConnectionTrait`, so services can run several of them inside one transaction.

pub mod announcement;
pub mod blacklisted_token;
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
