use crate::server::{
    data::credential::CredentialRepository,
    error::AppError,
    model::credential::CreateCredentialParam,
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_user_id;
mod get_all;
