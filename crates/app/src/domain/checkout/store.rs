//! Checkout collaborators.
//!
//! Every checkout operation runs against one [`CheckoutUnit`]. Reads and writes made
//! through a unit become visible only once [`CheckoutUnit::commit`] succeeds; dropping
//! the unit discards them.

use async_trait::async_trait;

use crate::domain::{
    carts::{
        data::NewCartLine,
        records::{CartLineRecord, CartRecord, CartUuid},
    },
    checkout::errors::StoreError,
    customers::records::{CustomerRecord, CustomerUuid},
    orders::{data::NewOrder, records::OrderRecord},
    products::records::{ProductRecord, ProductUuid},
    restaurants::records::{RestaurantRecord, RestaurantUuid},
};

#[async_trait]
pub trait CustomerLookup: Send {
    async fn customer(
        &mut self,
        customer: CustomerUuid,
    ) -> Result<Option<CustomerRecord>, StoreError>;

    /// Find the owner of a cart. `None` when either the cart or its owner is absent.
    async fn customer_by_cart(
        &mut self,
        cart: CartUuid,
    ) -> Result<Option<CustomerRecord>, StoreError>;
}

#[async_trait]
pub trait ProductLookup: Send {
    async fn product(&mut self, product: ProductUuid) -> Result<Option<ProductRecord>, StoreError>;
}

#[async_trait]
pub trait RestaurantLookup: Send {
    async fn restaurant(
        &mut self,
        restaurant: RestaurantUuid,
    ) -> Result<Option<RestaurantRecord>, StoreError>;
}

#[async_trait]
pub trait CartStore: Send {
    /// Load a cart and hold it until the unit ends. Units that lock the same cart run
    /// one after the other, so the lines a unit reads are the lines it later clears.
    async fn lock_cart(&mut self, cart: CartUuid) -> Result<Option<CartRecord>, StoreError>;

    /// Lines of a cart, oldest first.
    async fn cart_lines(&mut self, cart: CartUuid) -> Result<Vec<CartLineRecord>, StoreError>;

    /// Add one unit of a product to a cart.
    ///
    /// Creates the line with quantity 1 when the product is not in the cart yet,
    /// otherwise increments the existing line. Must be atomic with respect to other
    /// units adding the same product.
    async fn increment_line(
        &mut self,
        line: NewCartLine,
    ) -> Result<Option<CartLineRecord>, StoreError>;

    /// Remove every line of a cart, returning how many were removed.
    async fn clear_lines(&mut self, cart: CartUuid) -> Result<u64, StoreError>;
}

#[async_trait]
pub trait OrderStore: Send {
    async fn insert_order(&mut self, order: NewOrder) -> Result<Option<OrderRecord>, StoreError>;
}

/// A single atomic unit of checkout work.
#[async_trait]
pub trait CheckoutUnit:
    CustomerLookup + ProductLookup + RestaurantLookup + CartStore + OrderStore
{
    async fn commit(self: Box<Self>) -> Result<(), StoreError>;
}

/// Source of [`CheckoutUnit`]s.
#[async_trait]
pub trait CheckoutStore: Send + Sync {
    async fn begin(&self) -> Result<Box<dyn CheckoutUnit>, StoreError>;
}
