use anyhow::Result;
use handcricket::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run_cli().await
}
