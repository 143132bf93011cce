use anyhow::Result;
use clap::Parser;

use mealcart_cli::cli::{Cli, run};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let result = run(cli);
    if let Err(err) = &result {
        tracing::error!(error = %err, "run aborted");
    }
    result
}
