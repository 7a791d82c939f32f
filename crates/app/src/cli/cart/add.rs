use std::io::Write;

use clap::Args;
use tiffin_app::domain::checkout::OrderAssembler;
use uuid::Uuid;

use crate::cli::{DatabaseArgs, output_error};

#[derive(Debug, Args)]
pub(crate) struct AddLineItemArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Customer whose cart receives the product
    #[arg(long)]
    customer: Uuid,

    /// Product to add
    #[arg(long)]
    product: Uuid,
}

pub(crate) async fn run(args: AddLineItemArgs) -> Result<(), String> {
    let context = args.database.context().await?;

    execute(
        context.orders.as_ref(),
        args.customer,
        args.product,
        &mut std::io::stdout(),
    )
    .await
}

async fn execute(
    orders: &dyn OrderAssembler,
    customer: Uuid,
    product: Uuid,
    out: &mut dyn Write,
) -> Result<(), String> {
    let line = orders
        .add_line_item(customer.into(), product.into())
        .await
        .map_err(|error| format!("failed to add product to cart: {error}"))?;

    writeln!(out, "cart_line_uuid: {}", line.uuid).map_err(output_error)?;
    writeln!(out, "product_uuid: {}", line.product.uuid).map_err(output_error)?;
    writeln!(out, "product_name: {}", line.product.name).map_err(output_error)?;
    writeln!(out, "quantity: {}", line.quantity).map_err(output_error)?;

    Ok(())
}
