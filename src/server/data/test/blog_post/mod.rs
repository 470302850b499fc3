use crate::server::data::blog_post::BlogPostRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::blog_post::BlogPostFactory};

mod get_visible;
