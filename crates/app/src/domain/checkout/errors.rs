//! Checkout errors.

use thiserror::Error;

use crate::domain::{
    carts::records::CartUuid, customers::records::CustomerUuid, products::records::ProductUuid,
    restaurants::records::RestaurantUuid,
};

/// Failure reported by a [`CheckoutStore`](super::CheckoutStore) implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage error")]
    Sql(#[from] sqlx::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Coarse classification callers use to map failures onto their own responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    NotFound,
    Conflict,
    Internal,
}

/// Business rules that block turning a cart into an order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutConflict {
    #[error("cart contains products from different restaurants, place an order from one restaurant")]
    MultipleRestaurants,

    #[error("cart is empty")]
    EmptyCart,

    #[error("restaurant «{name}» is closed, try during opening hours: {opening_hours}")]
    RestaurantClosed { name: String, opening_hours: String },
}

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("{0} not provided")]
    InvalidInput(&'static str),

    #[error("customer {0} not found")]
    CustomerNotFound(CustomerUuid),

    #[error("customer not found for cart {0}")]
    CartCustomerNotFound(CartUuid),

    #[error("cart {0} not found")]
    CartNotFound(CartUuid),

    #[error("product {0} not found")]
    ProductNotFound(ProductUuid),

    #[error("restaurant {0} not found")]
    RestaurantNotFound(RestaurantUuid),

    #[error(transparent)]
    Conflict(#[from] CheckoutConflict),

    #[error("unable to add item to cart")]
    LineNotSaved,

    #[error("order not saved")]
    OrderNotSaved,

    #[error("order not saved")]
    OrderPersistence(#[source] StoreError),

    #[error("storage error")]
    Store(#[source] StoreError),
}

impl OrdersServiceError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::CustomerNotFound(_)
            | Self::CartCustomerNotFound(_)
            | Self::CartNotFound(_)
            | Self::ProductNotFound(_)
            | Self::RestaurantNotFound(_) => ErrorKind::NotFound,
            Self::Conflict(_) => ErrorKind::Conflict,
            Self::LineNotSaved
            | Self::OrderNotSaved
            | Self::OrderPersistence(_)
            | Self::Store(_) => ErrorKind::Internal,
        }
    }
}

impl From<StoreError> for OrdersServiceError {
    fn from(error: StoreError) -> Self {
        Self::Store(error)
    }
}

impl From<sqlx::Error> for OrdersServiceError {
    fn from(error: sqlx::Error) -> Self {
        Self::Store(StoreError::Sql(error))
    }
}
