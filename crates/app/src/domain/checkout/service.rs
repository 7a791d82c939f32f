//! Checkout service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::{
    database::Db,
    domain::{
        carts::{
            data::NewCartLine,
            models::{Cart, CartLine},
            records::{CartLineUuid, CartUuid},
        },
        checkout::{
            errors::OrdersServiceError,
            postgres::PgCheckoutStore,
            rules::{ensure_open, require, single_restaurant},
            store::{
                CartStore, CheckoutStore, CheckoutUnit, CustomerLookup, OrderStore, ProductLookup,
                RestaurantLookup,
            },
        },
        customers::{
            models::Customer,
            records::{CustomerRecord, CustomerUuid},
        },
        orders::{
            data::NewOrder,
            models::Order,
            records::{OrderStatus, OrderUuid},
        },
        products::records::ProductUuid,
        restaurants::models::Restaurant,
    },
};

/// Checkout service backed by `PostgreSQL`.
pub type PgCheckoutService = CheckoutService<PgCheckoutStore>;

#[derive(Debug, Clone)]
pub struct CheckoutService<S> {
    store: S,
}

impl<S: CheckoutStore> CheckoutService<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl PgCheckoutService {
    #[must_use]
    pub fn from_db(db: Db) -> Self {
        Self::new(PgCheckoutStore::new(db))
    }
}

async fn find_cart_owner(
    unit: &mut dyn CheckoutUnit,
    cart: CartUuid,
) -> Result<CustomerRecord, OrdersServiceError> {
    unit.customer_by_cart(cart)
        .await?
        .ok_or(OrdersServiceError::CartCustomerNotFound(cart))
}

async fn load_customer(
    unit: &mut dyn CheckoutUnit,
    record: CustomerRecord,
) -> Result<Customer, OrdersServiceError> {
    let lines = unit.cart_lines(record.cart_uuid).await?;
    let cart = Cart::with_lines(record.cart_uuid, lines);

    Ok(Customer::from_record(record, cart))
}

#[async_trait]
impl<S: CheckoutStore> OrderAssembler for CheckoutService<S> {
    #[tracing::instrument(
        name = "orders.service.add_line_item",
        skip(self),
        fields(customer_uuid = %customer, product_uuid = %product),
        err
    )]
    async fn add_line_item(
        &self,
        customer: CustomerUuid,
        product: ProductUuid,
    ) -> Result<CartLine, OrdersServiceError> {
        let customer = require(customer, "customer")?;
        let product = require(product, "product")?;

        let mut unit = self.store.begin().await?;

        let customer = unit
            .customer(customer)
            .await?
            .ok_or(OrdersServiceError::CustomerNotFound(customer))?;

        let product = unit
            .product(product)
            .await?
            .ok_or(OrdersServiceError::ProductNotFound(product))?;

        unit.restaurant(product.restaurant_uuid)
            .await?
            .ok_or(OrdersServiceError::RestaurantNotFound(
                product.restaurant_uuid,
            ))?;

        unit.lock_cart(customer.cart_uuid)
            .await?
            .ok_or(OrdersServiceError::CartNotFound(customer.cart_uuid))?;

        let line = unit
            .increment_line(NewCartLine {
                uuid: CartLineUuid::new(),
                cart_uuid: customer.cart_uuid,
                product_uuid: product.uuid,
                created_at: Timestamp::now(),
            })
            .await?
            .ok_or(OrdersServiceError::LineNotSaved)?;

        unit.commit().await?;

        debug!(
            cart_uuid = %line.cart_uuid,
            quantity = line.quantity,
            "added product to cart"
        );

        Ok(line.into())
    }

    #[tracing::instrument(
        name = "orders.service.clear_cart",
        skip(self),
        fields(cart_uuid = %cart),
        err
    )]
    async fn clear_cart(&self, cart: CartUuid) -> Result<(), OrdersServiceError> {
        let cart = require(cart, "cart")?;

        let mut unit = self.store.begin().await?;

        if unit.lock_cart(cart).await?.is_none() {
            debug!("cart does not exist, nothing to clear");

            return Ok(());
        }

        let removed = unit.clear_lines(cart).await?;

        unit.commit().await?;

        debug!(removed, "cleared cart");

        Ok(())
    }

    #[tracing::instrument(
        name = "orders.service.cart_lines",
        skip(self),
        fields(cart_uuid = %cart),
        err
    )]
    async fn cart_lines(&self, cart: CartUuid) -> Result<Vec<CartLine>, OrdersServiceError> {
        Ok(self.customer_by_cart(cart).await?.cart.lines)
    }

    #[tracing::instrument(
        name = "orders.service.cart_total",
        skip(self),
        fields(cart_uuid = %cart),
        err
    )]
    async fn cart_total(&self, cart: CartUuid) -> Result<Decimal, OrdersServiceError> {
        Ok(self.customer_by_cart(cart).await?.cart.total())
    }

    #[tracing::instrument(
        name = "orders.service.cart_item_count",
        skip(self),
        fields(cart_uuid = %cart),
        err
    )]
    async fn cart_item_count(&self, cart: CartUuid) -> Result<u64, OrdersServiceError> {
        Ok(self.customer_by_cart(cart).await?.cart.item_count())
    }

    #[tracing::instrument(
        name = "orders.service.customer",
        skip(self),
        fields(customer_uuid = %customer),
        err
    )]
    async fn customer(&self, customer: CustomerUuid) -> Result<Customer, OrdersServiceError> {
        let customer = require(customer, "customer")?;

        let mut unit = self.store.begin().await?;

        let record = unit
            .customer(customer)
            .await?
            .ok_or(OrdersServiceError::CustomerNotFound(customer))?;

        let customer = load_customer(&mut *unit, record).await?;

        unit.commit().await?;

        Ok(customer)
    }

    #[tracing::instrument(
        name = "orders.service.customer_by_cart",
        skip(self),
        fields(cart_uuid = %cart),
        err
    )]
    async fn customer_by_cart(&self, cart: CartUuid) -> Result<Customer, OrdersServiceError> {
        let cart = require(cart, "cart")?;

        let mut unit = self.store.begin().await?;

        let record = find_cart_owner(&mut *unit, cart).await?;
        let customer = load_customer(&mut *unit, record).await?;

        unit.commit().await?;

        Ok(customer)
    }

    #[tracing::instrument(
        name = "orders.service.create_order",
        skip(self),
        fields(
            customer_uuid = %customer,
            restaurant_uuid = tracing::field::Empty,
            line_count = tracing::field::Empty
        ),
        err
    )]
    async fn create_order(&self, customer: CustomerUuid) -> Result<Order, OrdersServiceError> {
        let customer = require(customer, "customer")?;

        let mut unit = self.store.begin().await?;

        let customer = unit
            .customer(customer)
            .await?
            .ok_or(OrdersServiceError::CustomerNotFound(customer))?;

        let cart = unit
            .lock_cart(customer.cart_uuid)
            .await?
            .ok_or(OrdersServiceError::CartNotFound(customer.cart_uuid))?;

        let lines = unit.cart_lines(cart.uuid).await?;
        let cart = Cart::from_records(cart, lines);

        let span = tracing::Span::current();

        span.record("line_count", cart.lines.len());

        let restaurant_uuid = single_restaurant(&cart)?;

        span.record("restaurant_uuid", tracing::field::display(restaurant_uuid));

        let restaurant: Restaurant = unit
            .restaurant(restaurant_uuid)
            .await?
            .ok_or(OrdersServiceError::RestaurantNotFound(restaurant_uuid))?
            .into();

        ensure_open(&restaurant)?;

        let order = NewOrder {
            uuid: OrderUuid::new(),
            customer_uuid: customer.uuid,
            restaurant_uuid,
            delivery_address: customer.address,
            postal_code: customer.postal_code,
            total_amount: cart.total(),
            status: OrderStatus::Created,
            created_at: Timestamp::now(),
        };

        let order = unit
            .insert_order(order)
            .await
            .map_err(OrdersServiceError::OrderPersistence)?
            .ok_or(OrdersServiceError::OrderNotSaved)?;

        unit.clear_lines(cart.uuid).await?;

        unit.commit().await?;

        info!(
            order_uuid = %order.uuid,
            total_amount = %order.total_amount,
            "created order"
        );

        Ok(order.into())
    }
}

#[automock]
#[async_trait]
/// Cart management and order creation.
pub trait OrderAssembler: Send + Sync {
    /// Add one unit of a product to the customer's cart.
    async fn add_line_item(
        &self,
        customer: CustomerUuid,
        product: ProductUuid,
    ) -> Result<CartLine, OrdersServiceError>;

    /// Remove every line from a cart. Clearing an empty cart is not an error.
    async fn clear_cart(&self, cart: CartUuid) -> Result<(), OrdersServiceError>;

    /// Lines currently in a cart, oldest first.
    async fn cart_lines(&self, cart: CartUuid) -> Result<Vec<CartLine>, OrdersServiceError>;

    /// Sum of `price × quantity` over the cart.
    async fn cart_total(&self, cart: CartUuid) -> Result<Decimal, OrdersServiceError>;

    /// Sum of quantities over the cart.
    async fn cart_item_count(&self, cart: CartUuid) -> Result<u64, OrdersServiceError>;

    /// Retrieve a customer together with their cart.
    async fn customer(&self, customer: CustomerUuid) -> Result<Customer, OrdersServiceError>;

    /// Retrieve the customer who owns a cart.
    async fn customer_by_cart(&self, cart: CartUuid) -> Result<Customer, OrdersServiceError>;

    /// Turn the customer's cart into an order and empty the cart.
    ///
    /// The order is persisted and the cart cleared together, or neither happens.
    async fn create_order(&self, customer: CustomerUuid) -> Result<Order, OrdersServiceError>;
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use rust_decimal::Decimal;
    use testresult::TestResult;
    use tracing::{
        Subscriber,
        span::{Attributes, Id},
    };
    use tracing_subscriber::{
        layer::{Context, Layer, SubscriberExt},
        registry::LookupSpan,
    };
    use uuid::Uuid;

    use crate::{
        domain::checkout::{CheckoutConflict, ErrorKind},
        test::TestContext,
    };

    use super::*;

    #[tokio::test]
    async fn create_order_totals_cart_and_empties_it() -> TestResult {
        let ctx = TestContext::new();

        let restaurant = ctx.create_restaurant("Curry House", true).await;
        let tikka = ctx.create_product(restaurant.uuid, Decimal::new(950, 2)).await;
        let naan = ctx.create_product(restaurant.uuid, Decimal::new(400, 2)).await;
        let customer = ctx.create_customer().await;

        ctx.orders.add_line_item(customer.uuid, tikka.uuid).await?;
        ctx.orders.add_line_item(customer.uuid, tikka.uuid).await?;
        ctx.orders.add_line_item(customer.uuid, naan.uuid).await?;

        let order = ctx.orders.create_order(customer.uuid).await?;

        assert_eq!(order.total_amount, Decimal::new(2300, 2));
        assert_eq!(order.customer_uuid, customer.uuid);
        assert_eq!(order.restaurant_uuid, restaurant.uuid);
        assert_eq!(order.delivery_address, customer.address);
        assert_eq!(order.postal_code, customer.postal_code);
        assert_eq!(order.status, OrderStatus::Created);

        assert_eq!(ctx.orders.cart_item_count(customer.cart_uuid).await?, 0);
        assert_eq!(ctx.orders.cart_total(customer.cart_uuid).await?, Decimal::ZERO);

        let persisted = ctx.persisted_orders().await;

        assert_eq!(persisted.len(), 1);
        assert_eq!(persisted.first().map(|order| order.uuid), Some(order.uuid));

        Ok(())
    }

    #[tokio::test]
    async fn mixed_restaurant_cart_is_rejected_untouched() -> TestResult {
        let ctx = TestContext::new();

        let first = ctx.create_restaurant("Curry House", true).await;
        let second = ctx.create_restaurant("Noodle Bar", true).await;
        let curry = ctx.create_product(first.uuid, Decimal::new(950, 2)).await;
        let ramen = ctx.create_product(second.uuid, Decimal::new(1200, 2)).await;
        let customer = ctx.create_customer().await;

        ctx.orders.add_line_item(customer.uuid, curry.uuid).await?;
        ctx.orders.add_line_item(customer.uuid, ramen.uuid).await?;

        let before = ctx.line_quantities(customer.cart_uuid).await;

        let error = ctx
            .orders
            .create_order(customer.uuid)
            .await
            .expect_err("mixed cart should not be ordered");

        assert_eq!(error.kind(), ErrorKind::Conflict);
        assert!(matches!(
            error,
            OrdersServiceError::Conflict(CheckoutConflict::MultipleRestaurants)
        ));
        assert_eq!(ctx.line_quantities(customer.cart_uuid).await, before);
        assert!(ctx.persisted_orders().await.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn empty_cart_is_rejected() {
        let ctx = TestContext::new();

        let customer = ctx.create_customer().await;

        let error = ctx
            .orders
            .create_order(customer.uuid)
            .await
            .expect_err("empty cart should not be ordered");

        assert!(matches!(
            error,
            OrdersServiceError::Conflict(CheckoutConflict::EmptyCart)
        ));
        assert!(ctx.persisted_orders().await.is_empty());
    }

    #[tokio::test]
    async fn closed_restaurant_is_rejected_with_its_hours() -> TestResult {
        let ctx = TestContext::new();

        let restaurant = ctx.create_restaurant("Curry House", true).await;
        let tikka = ctx.create_product(restaurant.uuid, Decimal::new(950, 2)).await;
        let customer = ctx.create_customer().await;

        ctx.orders.add_line_item(customer.uuid, tikka.uuid).await?;
        ctx.set_restaurant_open(restaurant.uuid, false).await;

        let error = ctx
            .orders
            .create_order(customer.uuid)
            .await
            .expect_err("closed restaurant should not accept orders");

        assert_eq!(error.kind(), ErrorKind::Conflict);

        let OrdersServiceError::Conflict(CheckoutConflict::RestaurantClosed {
            name,
            opening_hours,
        }) = error
        else {
            panic!("expected a closed restaurant conflict");
        };

        assert_eq!(name, restaurant.name);
        assert_eq!(opening_hours, restaurant.opening_hours);
        assert_eq!(
            ctx.line_quantities(customer.cart_uuid).await,
            vec![(tikka.uuid, 1)]
        );

        Ok(())
    }

    #[tokio::test]
    async fn failed_order_insert_leaves_cart_intact() -> TestResult {
        let ctx = TestContext::new();

        let restaurant = ctx.create_restaurant("Curry House", true).await;
        let tikka = ctx.create_product(restaurant.uuid, Decimal::new(950, 2)).await;
        let customer = ctx.create_customer().await;

        ctx.orders.add_line_item(customer.uuid, tikka.uuid).await?;
        ctx.fail_order_inserts().await;

        let error = ctx
            .orders
            .create_order(customer.uuid)
            .await
            .expect_err("order insert failure should surface");

        assert_eq!(error.kind(), ErrorKind::Internal);
        assert_eq!(error.to_string(), "order not saved");
        assert_eq!(ctx.orders.cart_item_count(customer.cart_uuid).await?, 1);
        assert!(ctx.persisted_orders().await.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn missing_cart_record_is_not_found() {
        let ctx = TestContext::new();

        let customer = ctx.create_customer().await;

        ctx.remove_cart(customer.cart_uuid).await;

        let error = ctx
            .orders
            .create_order(customer.uuid)
            .await
            .expect_err("missing cart should be reported");

        assert!(matches!(
            error,
            OrdersServiceError::CartNotFound(cart) if cart == customer.cart_uuid
        ));
        assert_eq!(error.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn missing_restaurant_is_not_found() -> TestResult {
        let ctx = TestContext::new();

        let restaurant = ctx.create_restaurant("Curry House", true).await;
        let tikka = ctx.create_product(restaurant.uuid, Decimal::new(950, 2)).await;
        let customer = ctx.create_customer().await;

        ctx.orders.add_line_item(customer.uuid, tikka.uuid).await?;
        ctx.remove_restaurant(restaurant.uuid).await;

        let error = ctx
            .orders
            .create_order(customer.uuid)
            .await
            .expect_err("missing restaurant should be reported");

        assert!(matches!(
            error,
            OrdersServiceError::RestaurantNotFound(uuid) if uuid == restaurant.uuid
        ));
        assert_eq!(ctx.line_quantities(customer.cart_uuid).await.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn repeated_add_increments_single_line() -> TestResult {
        let ctx = TestContext::new();

        let restaurant = ctx.create_restaurant("Curry House", true).await;
        let tikka = ctx.create_product(restaurant.uuid, Decimal::new(950, 2)).await;
        let customer = ctx.create_customer().await;

        let first = ctx.orders.add_line_item(customer.uuid, tikka.uuid).await?;
        let second = ctx.orders.add_line_item(customer.uuid, tikka.uuid).await?;

        assert_eq!(first.quantity, 1);
        assert_eq!(second.quantity, 2);
        assert_eq!(first.uuid, second.uuid);
        assert_eq!(
            ctx.line_quantities(customer.cart_uuid).await,
            vec![(tikka.uuid, 2)]
        );
        assert_eq!(
            ctx.orders.cart_total(customer.cart_uuid).await?,
            Decimal::new(1900, 2)
        );

        Ok(())
    }

    #[tokio::test]
    async fn add_line_item_reports_unknown_references() -> TestResult {
        let ctx = TestContext::new();

        let restaurant = ctx.create_restaurant("Curry House", true).await;
        let tikka = ctx.create_product(restaurant.uuid, Decimal::new(950, 2)).await;
        let customer = ctx.create_customer().await;

        let unknown_product = ProductUuid::new();
        let error = ctx
            .orders
            .add_line_item(customer.uuid, unknown_product)
            .await
            .expect_err("unknown product should be rejected");

        assert!(matches!(
            error,
            OrdersServiceError::ProductNotFound(uuid) if uuid == unknown_product
        ));

        let error = ctx
            .orders
            .add_line_item(CustomerUuid::new(), tikka.uuid)
            .await
            .expect_err("unknown customer should be rejected");

        assert_eq!(error.kind(), ErrorKind::NotFound);
        assert!(ctx.line_quantities(customer.cart_uuid).await.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn empty_cart_totals_are_zero() -> TestResult {
        let ctx = TestContext::new();

        let customer = ctx.create_customer().await;

        assert_eq!(ctx.orders.cart_total(customer.cart_uuid).await?, Decimal::ZERO);
        assert_eq!(ctx.orders.cart_item_count(customer.cart_uuid).await?, 0);
        assert!(ctx.orders.cart_lines(customer.cart_uuid).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn unknown_cart_is_not_found() {
        let ctx = TestContext::new();

        let cart = CartUuid::new();

        let error = ctx
            .orders
            .cart_total(cart)
            .await
            .expect_err("unknown cart should be reported");

        assert!(matches!(error, OrdersServiceError::CartCustomerNotFound(uuid) if uuid == cart));
        assert_eq!(error.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn absent_identifiers_are_invalid_input() -> TestResult {
        let ctx = TestContext::new();

        let restaurant = ctx.create_restaurant("Curry House", true).await;
        let tikka = ctx.create_product(restaurant.uuid, Decimal::new(950, 2)).await;
        let customer = ctx.create_customer().await;

        ctx.orders.add_line_item(customer.uuid, tikka.uuid).await?;

        let no_customer = CustomerUuid::from_uuid(Uuid::nil());
        let no_product = ProductUuid::from_uuid(Uuid::nil());
        let no_cart = CartUuid::from_uuid(Uuid::nil());

        let results = [
            (
                "add_line_item customer",
                ctx.orders.add_line_item(no_customer, tikka.uuid).await.map(drop),
            ),
            (
                "add_line_item product",
                ctx.orders.add_line_item(customer.uuid, no_product).await.map(drop),
            ),
            (
                "clear_cart",
                ctx.orders.clear_cart(no_cart).await,
            ),
            (
                "cart_lines",
                ctx.orders.cart_lines(no_cart).await.map(drop),
            ),
            (
                "cart_total",
                ctx.orders.cart_total(no_cart).await.map(drop),
            ),
            (
                "cart_item_count",
                ctx.orders.cart_item_count(no_cart).await.map(drop),
            ),
            (
                "customer",
                ctx.orders.customer(no_customer).await.map(drop),
            ),
            (
                "customer_by_cart",
                ctx.orders.customer_by_cart(no_cart).await.map(drop),
            ),
            (
                "create_order",
                ctx.orders.create_order(no_customer).await.map(drop),
            ),
        ];

        for (operation, result) in results {
            let Err(error) = result else {
                panic!("{operation} accepted a nil identifier");
            };

            assert_eq!(error.kind(), ErrorKind::InvalidInput, "{operation} gave {error:?}");
        }

        assert_eq!(
            ctx.line_quantities(customer.cart_uuid).await,
            vec![(tikka.uuid, 1)]
        );
        assert!(ctx.persisted_orders().await.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn add_line_item_requires_the_customer_cart() {
        let ctx = TestContext::new();

        let restaurant = ctx.create_restaurant("Curry House", true).await;
        let tikka = ctx.create_product(restaurant.uuid, Decimal::new(950, 2)).await;
        let customer = ctx.create_customer().await;

        ctx.remove_cart(customer.cart_uuid).await;

        let error = ctx
            .orders
            .add_line_item(customer.uuid, tikka.uuid)
            .await
            .expect_err("a customer without a cart cannot add products");

        assert!(matches!(
            error,
            OrdersServiceError::CartNotFound(cart) if cart == customer.cart_uuid
        ));
        assert!(ctx.line_quantities(customer.cart_uuid).await.is_empty());
    }

    #[tokio::test]
    async fn clear_cart_removes_every_line() -> TestResult {
        let ctx = TestContext::new();

        let restaurant = ctx.create_restaurant("Curry House", true).await;
        let tikka = ctx.create_product(restaurant.uuid, Decimal::new(950, 2)).await;
        let naan = ctx.create_product(restaurant.uuid, Decimal::new(400, 2)).await;
        let customer = ctx.create_customer().await;

        ctx.orders.add_line_item(customer.uuid, tikka.uuid).await?;
        ctx.orders.add_line_item(customer.uuid, naan.uuid).await?;

        ctx.orders.clear_cart(customer.cart_uuid).await?;

        assert!(ctx.line_quantities(customer.cart_uuid).await.is_empty());

        ctx.orders.clear_cart(customer.cart_uuid).await?;

        Ok(())
    }

    #[tokio::test]
    async fn customer_lookups_include_cart_lines() -> TestResult {
        let ctx = TestContext::new();

        let restaurant = ctx.create_restaurant("Curry House", true).await;
        let tikka = ctx.create_product(restaurant.uuid, Decimal::new(950, 2)).await;
        let naan = ctx.create_product(restaurant.uuid, Decimal::new(400, 2)).await;
        let customer = ctx.create_customer().await;

        ctx.orders.add_line_item(customer.uuid, tikka.uuid).await?;
        ctx.orders.add_line_item(customer.uuid, naan.uuid).await?;

        let by_uuid = ctx.orders.customer(customer.uuid).await?;
        let by_cart = ctx.orders.customer_by_cart(customer.cart_uuid).await?;

        assert_eq!(by_uuid, by_cart);
        assert_eq!(by_uuid.address, customer.address);
        assert_eq!(by_uuid.cart.uuid, customer.cart_uuid);

        let products: Vec<ProductUuid> = by_uuid
            .cart
            .lines
            .iter()
            .map(|line| line.product.uuid)
            .collect();

        assert_eq!(products, vec![tikka.uuid, naan.uuid]);

        Ok(())
    }

    #[derive(Clone, Default)]
    struct SpanNames(Arc<Mutex<Vec<&'static str>>>);

    impl<S> Layer<S> for SpanNames
    where
        S: Subscriber + for<'a> LookupSpan<'a>,
    {
        fn on_new_span(&self, attrs: &Attributes<'_>, _id: &Id, _ctx: Context<'_, S>) {
            if let Ok(mut names) = self.0.lock() {
                names.push(attrs.metadata().name());
            }
        }
    }

    #[tokio::test]
    async fn cart_projections_are_traced() -> TestResult {
        let names = SpanNames::default();
        let _guard =
            tracing::subscriber::set_default(tracing_subscriber::registry().with(names.clone()));

        let ctx = TestContext::new();
        let customer = ctx.create_customer().await;

        ctx.orders.cart_total(customer.cart_uuid).await?;
        ctx.orders.cart_item_count(customer.cart_uuid).await?;

        let recorded = names.0.lock().map(|names| names.clone()).unwrap_or_default();

        assert!(recorded.contains(&"orders.service.cart_total"), "got {recorded:?}");
        assert!(recorded.contains(&"orders.service.cart_item_count"), "got {recorded:?}");

        Ok(())
    }
}
