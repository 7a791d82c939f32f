use std::io::Write;

use clap::Args;
use tiffin_app::domain::checkout::OrderAssembler;
use uuid::Uuid;

use crate::cli::{DatabaseArgs, output_error};

#[derive(Debug, Args)]
pub(crate) struct ClearCartArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Cart to empty
    #[arg(long)]
    cart: Uuid,
}

pub(crate) async fn run(args: ClearCartArgs) -> Result<(), String> {
    let context = args.database.context().await?;

    execute(context.orders.as_ref(), args.cart, &mut std::io::stdout()).await
}

async fn execute(
    orders: &dyn OrderAssembler,
    cart: Uuid,
    out: &mut dyn Write,
) -> Result<(), String> {
    orders
        .clear_cart(cart.into())
        .await
        .map_err(|error| format!("failed to clear cart: {error}"))?;

    writeln!(out, "cart_uuid: {cart}").map_err(output_error)?;
    writeln!(out, "status: cleared").map_err(output_error)?;

    Ok(())
}
