use std::io::Write;

use clap::Args;
use tiffin_app::domain::checkout::OrderAssembler;
use uuid::Uuid;

use crate::cli::{DatabaseArgs, output_error};

#[derive(Debug, Args)]
pub(crate) struct CreateOrderArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Customer whose cart is checked out
    #[arg(long)]
    customer: Uuid,
}

pub(crate) async fn run(args: CreateOrderArgs) -> Result<(), String> {
    let context = args.database.context().await?;

    execute(context.orders.as_ref(), args.customer, &mut std::io::stdout()).await
}

async fn execute(
    orders: &dyn OrderAssembler,
    customer: Uuid,
    out: &mut dyn Write,
) -> Result<(), String> {
    let order = orders
        .create_order(customer.into())
        .await
        .map_err(|error| format!("failed to create order: {error}"))?;

    writeln!(out, "order_uuid: {}", order.uuid).map_err(output_error)?;
    writeln!(out, "customer_uuid: {}", order.customer_uuid).map_err(output_error)?;
    writeln!(out, "restaurant_uuid: {}", order.restaurant_uuid).map_err(output_error)?;
    writeln!(out, "delivery_address: {}", order.delivery_address).map_err(output_error)?;
    writeln!(out, "postal_code: {}", order.postal_code).map_err(output_error)?;
    writeln!(out, "total_amount: {}", order.total_amount).map_err(output_error)?;
    writeln!(out, "status: {}", order.status).map_err(output_error)?;

    Ok(())
}
