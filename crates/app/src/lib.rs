//! Cart management and order assembly for the tiffin food-delivery backend.

pub mod context;
pub mod database;
pub mod domain;
pub mod uuids;

#[cfg(test)]
mod test;
