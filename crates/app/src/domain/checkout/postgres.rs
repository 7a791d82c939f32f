//! PostgreSQL checkout store.

use async_trait::async_trait;
use sqlx::{Postgres, Transaction};

use crate::{
    database::Db,
    domain::{
        carts::{
            PgCartLinesRepository, PgCartsRepository,
            data::NewCartLine,
            records::{CartLineRecord, CartRecord, CartUuid},
        },
        checkout::{
            errors::StoreError,
            store::{
                CartStore, CheckoutStore, CheckoutUnit, CustomerLookup, OrderStore, ProductLookup,
                RestaurantLookup,
            },
        },
        customers::{
            PgCustomersRepository,
            records::{CustomerRecord, CustomerUuid},
        },
        orders::{PgOrdersRepository, data::NewOrder, records::OrderRecord},
        products::{
            PgProductsRepository,
            records::{ProductRecord, ProductUuid},
        },
        restaurants::{
            PgRestaurantsRepository,
            records::{RestaurantRecord, RestaurantUuid},
        },
    },
};

#[derive(Debug, Clone, Default)]
struct Repositories {
    customers: PgCustomersRepository,
    products: PgProductsRepository,
    restaurants: PgRestaurantsRepository,
    carts: PgCartsRepository,
    lines: PgCartLinesRepository,
    orders: PgOrdersRepository,
}

/// Checkout store that runs each unit of work in its own database transaction.
#[derive(Debug, Clone)]
pub struct PgCheckoutStore {
    db: Db,
    repositories: Repositories,
}

impl PgCheckoutStore {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repositories: Repositories::default(),
        }
    }
}

#[async_trait]
impl CheckoutStore for PgCheckoutStore {
    async fn begin(&self) -> Result<Box<dyn CheckoutUnit>, StoreError> {
        let tx = self.db.begin_transaction().await?;

        Ok(Box::new(PgCheckoutUnit {
            tx,
            repositories: self.repositories.clone(),
        }))
    }
}

/// An open transaction; rolled back on drop unless committed.
struct PgCheckoutUnit {
    tx: Transaction<'static, Postgres>,
    repositories: Repositories,
}

#[async_trait]
impl CustomerLookup for PgCheckoutUnit {
    async fn customer(
        &mut self,
        customer: CustomerUuid,
    ) -> Result<Option<CustomerRecord>, StoreError> {
        Ok(self
            .repositories
            .customers
            .get_customer(&mut self.tx, customer)
            .await?)
    }

    async fn customer_by_cart(
        &mut self,
        cart: CartUuid,
    ) -> Result<Option<CustomerRecord>, StoreError> {
        Ok(self
            .repositories
            .customers
            .get_customer_by_cart(&mut self.tx, cart)
            .await?)
    }
}

#[async_trait]
impl ProductLookup for PgCheckoutUnit {
    async fn product(&mut self, product: ProductUuid) -> Result<Option<ProductRecord>, StoreError> {
        Ok(self
            .repositories
            .products
            .get_product(&mut self.tx, product)
            .await?)
    }
}

#[async_trait]
impl RestaurantLookup for PgCheckoutUnit {
    async fn restaurant(
        &mut self,
        restaurant: RestaurantUuid,
    ) -> Result<Option<RestaurantRecord>, StoreError> {
        Ok(self
            .repositories
            .restaurants
            .get_restaurant(&mut self.tx, restaurant)
            .await?)
    }
}

#[async_trait]
impl CartStore for PgCheckoutUnit {
    async fn lock_cart(&mut self, cart: CartUuid) -> Result<Option<CartRecord>, StoreError> {
        Ok(self.repositories.carts.lock_cart(&mut self.tx, cart).await?)
    }

    async fn cart_lines(&mut self, cart: CartUuid) -> Result<Vec<CartLineRecord>, StoreError> {
        Ok(self
            .repositories
            .lines
            .get_cart_lines(&mut self.tx, cart)
            .await?)
    }

    async fn increment_line(
        &mut self,
        line: NewCartLine,
    ) -> Result<Option<CartLineRecord>, StoreError> {
        Ok(self
            .repositories
            .lines
            .increment_cart_line(&mut self.tx, line)
            .await?)
    }

    async fn clear_lines(&mut self, cart: CartUuid) -> Result<u64, StoreError> {
        Ok(self
            .repositories
            .lines
            .delete_cart_lines(&mut self.tx, cart)
            .await?)
    }
}

#[async_trait]
impl OrderStore for PgCheckoutUnit {
    async fn insert_order(&mut self, order: NewOrder) -> Result<Option<OrderRecord>, StoreError> {
        Ok(self
            .repositories
            .orders
            .create_order(&mut self.tx, order)
            .await?)
    }
}

#[async_trait]
impl CheckoutUnit for PgCheckoutUnit {
    async fn commit(self: Box<Self>) -> Result<(), StoreError> {
        self.tx.commit().await?;

        Ok(())
    }
}
