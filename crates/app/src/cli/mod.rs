use clap::{Args, Parser, Subcommand};
use tiffin_app::context::AppContext;

mod cart;
mod db;
mod logging;
mod order;

#[derive(Debug, Parser)]
#[command(name = "tiffin-app", about = "Tiffin cart and order CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    logging: logging::LoggingConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Cart(cart::CartCommand),
    Order(order::OrderCommand),
    Db(db::DbCommand),
}

/// Connection settings shared by every command that talks to the store.
#[derive(Debug, Args)]
pub(crate) struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub(crate) database_url: String,
}

impl DatabaseArgs {
    pub(crate) async fn context(&self) -> Result<AppContext, String> {
        AppContext::from_database_url(&self.database_url)
            .await
            .map_err(|error| format!("failed to connect to database: {error}"))
    }
}

pub(crate) fn output_error(error: std::io::Error) -> String {
    format!("failed to write output: {error}")
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        logging::init(&self.logging)?;

        match self.command {
            Commands::Cart(command) => cart::run(command).await,
            Commands::Order(command) => order::run(command).await,
            Commands::Db(command) => db::run(command).await,
        }
    }
}
