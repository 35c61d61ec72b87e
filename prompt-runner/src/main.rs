use clap::Parser;
use prompt_runner::{cli::Args, config::Config, dispatch};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let args = Args::parse();
    let config = Config::resolve(&args)?;
    dispatch::run(&config).await?;
    Ok(())
}
