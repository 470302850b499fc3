use crate::server::{
    error::AppError,
    model::comment::{CommentParent, CreateCommentParam},
    service::{chapter::ChapterService, comment::CommentService},
};
use entity::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;

fn create_param(author_id: i32, parent: CommentParent) -> CreateCommentParam {
    CreateCommentParam {
        author_id,
        content: "Loved this one".to_string(),
        parent,
    }
}
