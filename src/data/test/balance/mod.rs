use crate::data::balance::BalanceRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get;
mod top;
