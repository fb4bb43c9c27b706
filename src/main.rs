use anyhow::Result;
use clap::Parser;
use weatherflow::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    weatherflow::run(cli).await
}
