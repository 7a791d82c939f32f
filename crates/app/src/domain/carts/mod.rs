//! Carts

pub mod data;
pub mod models;
pub mod records;
mod repositories;

pub(crate) use repositories::{PgCartLinesRepository, PgCartsRepository};
