use crate::server::{data::comment::CommentRepository, model::comment::UpdateCommentParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_all;
