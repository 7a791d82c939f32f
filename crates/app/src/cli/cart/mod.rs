use clap::{Args, Subcommand};

mod add;
mod clear;
mod show;

#[derive(Debug, Args)]
pub(crate) struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    /// Add one unit of a product to a customer's cart
    Add(add::AddLineItemArgs),
    /// Print a cart's lines, item count and total
    Show(show::ShowCartArgs),
    /// Remove every line from a cart
    Clear(clear::ClearCartArgs),
}

pub(crate) async fn run(command: CartCommand) -> Result<(), String> {
    match command.command {
        CartSubcommand::Add(args) => add::run(args).await,
        CartSubcommand::Show(args) => show::run(args).await,
        CartSubcommand::Clear(args) => clear::run(args).await,
    }
}
