use crate::server::{
    data::comment::CommentRepository,
    model::comment::{CommentFilter, CommentParent},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete_by_parent;
mod get_all;
