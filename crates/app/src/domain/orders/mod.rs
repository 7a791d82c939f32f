//! Orders

pub mod data;
pub mod models;
pub mod records;
mod repository;

pub(crate) use repository::PgOrdersRepository;
