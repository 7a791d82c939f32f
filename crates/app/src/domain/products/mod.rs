//! Products

pub mod models;
pub mod records;
mod repository;

pub(crate) use repository::{PgProductsRepository, product_from_prefixed_row};
