mod cli;

use clap::Parser;
use eyre::Result;

use crate::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    Cli::parse().run().await
}
