use crate::server::{data::usage::UsageRepository, error::AppError};
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_by_user;
mod delete_by_user;
mod get_by_user;
mod record;
