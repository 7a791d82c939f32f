use std::io::Write;

use clap::Args;
use tiffin_app::domain::checkout::OrderAssembler;
use uuid::Uuid;

use crate::cli::{DatabaseArgs, output_error};

#[derive(Debug, Args)]
pub(crate) struct ShowCartArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Cart to print
    #[arg(long)]
    cart: Uuid,
}

pub(crate) async fn run(args: ShowCartArgs) -> Result<(), String> {
    let context = args.database.context().await?;

    execute(context.orders.as_ref(), args.cart, &mut std::io::stdout()).await
}

async fn execute(
    orders: &dyn OrderAssembler,
    cart: Uuid,
    out: &mut dyn Write,
) -> Result<(), String> {
    let cart = orders
        .customer_by_cart(cart.into())
        .await
        .map_err(|error| format!("failed to load cart: {error}"))?
        .cart;

    for line in &cart.lines {
        writeln!(out, "product_uuid: {}", line.product.uuid).map_err(output_error)?;
        writeln!(out, "product_name: {}", line.product.name).map_err(output_error)?;
        writeln!(out, "price: {}", line.product.price).map_err(output_error)?;
        writeln!(out, "quantity: {}", line.quantity).map_err(output_error)?;
        writeln!(out, "subtotal: {}", line.subtotal()).map_err(output_error)?;
        writeln!(out).map_err(output_error)?;
    }

    writeln!(out, "cart_uuid: {}", cart.uuid).map_err(output_error)?;
    writeln!(out, "item_count: {}", cart.item_count()).map_err(output_error)?;
    writeln!(out, "total: {}", cart.total()).map_err(output_error)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use mockall::predicate::eq;
    use rust_decimal::Decimal;
    use testresult::TestResult;
    use tiffin_app::domain::{
        carts::{
            models::{Cart, CartLine},
            records::{CartLineUuid, CartUuid},
        },
        checkout::{MockOrderAssembler, OrdersServiceError},
        customers::{models::Customer, records::CustomerUuid},
        products::{models::Product, records::ProductUuid},
        restaurants::records::RestaurantUuid,
    };

    use super::*;

    fn line(name: &str, price: Decimal, quantity: u32) -> CartLine {
        CartLine {
            uuid: CartLineUuid::new(),
            product: Product {
                uuid: ProductUuid::new(),
                restaurant_uuid: RestaurantUuid::new(),
                name: name.to_string(),
                price,
            },
            quantity,
            created_at: Timestamp::now(),
        }
    }

    #[tokio::test]
    async fn prints_lines_count_and_total_from_one_read() -> TestResult {
        let cart = CartUuid::new();

        let customer = Customer {
            uuid: CustomerUuid::new(),
            address: "12 Spice Lane".to_string(),
            postal_code: "E1 6AN".to_string(),
            cart: Cart {
                uuid: cart,
                lines: vec![
                    line("Paneer Tikka", Decimal::new(950, 2), 2),
                    line("Garlic Naan", Decimal::new(400, 2), 1),
                ],
            },
        };

        let mut orders = MockOrderAssembler::new();

        orders
            .expect_customer_by_cart()
            .with(eq(cart))
            .times(1)
            .returning(move |_| Ok(customer.clone()));
        orders.expect_cart_lines().never();
        orders.expect_cart_item_count().never();
        orders.expect_cart_total().never();

        let mut out = Vec::new();

        execute(&orders, cart.into_uuid(), &mut out).await?;

        let out = String::from_utf8(out)?;

        assert!(out.contains("product_name: Paneer Tikka"), "got {out}");
        assert!(out.contains("subtotal: 19.00"), "got {out}");
        assert!(out.contains(&format!("cart_uuid: {cart}")), "got {out}");
        assert!(out.contains("item_count: 3"), "got {out}");
        assert!(out.ends_with("total: 23.00\n"), "got {out}");

        Ok(())
    }

    #[tokio::test]
    async fn empty_cart_prints_zero_totals() -> TestResult {
        let cart = CartUuid::new();

        let mut orders = MockOrderAssembler::new();

        orders.expect_customer_by_cart().returning(move |_| {
            Ok(Customer {
                uuid: CustomerUuid::new(),
                address: "12 Spice Lane".to_string(),
                postal_code: "E1 6AN".to_string(),
                cart: Cart {
                    uuid: cart,
                    lines: Vec::new(),
                },
            })
        });

        let mut out = Vec::new();

        execute(&orders, cart.into_uuid(), &mut out).await?;

        assert_eq!(
            String::from_utf8(out)?,
            format!("cart_uuid: {cart}\nitem_count: 0\ntotal: 0\n")
        );

        Ok(())
    }

    #[tokio::test]
    async fn unknown_carts_are_reported() {
        let cart = CartUuid::new();

        let mut orders = MockOrderAssembler::new();

        orders
            .expect_customer_by_cart()
            .returning(|cart| Err(OrdersServiceError::CartCustomerNotFound(cart)));

        let result = execute(&orders, cart.into_uuid(), &mut Vec::<u8>::new()).await;

        assert_eq!(
            result,
            Err(format!("failed to load cart: customer not found for cart {cart}"))
        );
    }
}
