use crate::server::data::announcement::AnnouncementRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::announcement::AnnouncementFactory};

mod get_all;
