//! Restaurants

pub mod models;
pub mod records;
mod repository;

pub(crate) use repository::PgRestaurantsRepository;
