use crate::server::data::blacklisted_token::BlacklistedTokenRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod insert;
mod purge_expired;
