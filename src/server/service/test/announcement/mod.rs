use crate::server::{error::AppError, service::announcement::AnnouncementService};
use entity::prelude::*;
use test_utils::{builder::TestBuilder, factory};

mod get_by_id;
