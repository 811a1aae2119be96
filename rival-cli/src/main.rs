use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "rival",
    about = "Compute competitive retail prices from a flat data file"
)]
struct Cli {
    /// Path to the product and competitor-price data file
    #[arg(default_value = "products.txt")]
    data_file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rival=info,rival_loader=info,rival_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    tracing::info!(file = %cli.data_file.display(), "starting price run");

    let catalog = rival_loader::load_catalog(&cli.data_file)?;

    println!("Number of products generated: {}", catalog.product_count());
    println!(
        "Number of competitors generated: {}\n",
        catalog.competitor_count()
    );

    for quote in rival_engine::price_report(&catalog)? {
        println!(
            "Chosen price for product '{}' is: {}",
            quote.product, quote.chosen_price
        );
    }

    Ok(())
}
