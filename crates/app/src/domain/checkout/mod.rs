//! Checkout
//!
//! Turns a customer's cart into an order. A cart can only be checked out when every
//! line comes from the same restaurant and that restaurant is currently open.

pub mod errors;
pub mod postgres;
mod rules;
pub mod service;
pub mod store;

pub use errors::{CheckoutConflict, ErrorKind, OrdersServiceError, StoreError};
pub use postgres::PgCheckoutStore;
pub use service::*;
pub use store::{
    CartStore, CheckoutStore, CheckoutUnit, CustomerLookup, OrderStore, ProductLookup,
    RestaurantLookup,
};
