use crate::server::{
    error::AppError,
    model::group::{MembershipAction, MembershipOutcome},
    service::group::GroupService,
};
use test_utils::{builder::TestBuilder, factory};

mod align_all;
mod apply_membership;
mod get_by_user;
