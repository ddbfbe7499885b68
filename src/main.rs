use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use menu_nutrition_rs::catalog::CatalogClient;
use menu_nutrition_rs::config::AppConfig;
use menu_nutrition_rs::error::Result;
use menu_nutrition_rs::estimator::OpenAiEstimator;
use menu_nutrition_rs::pipeline::run_to_file;

/// Scrape file the menu is read from.
const INPUT_FILE: &str = "output.txt";

/// Report file the nutrition data is written to.
const OUTPUT_FILE: &str = "nutrition_info.json";

/// Fill a scraped cafeteria menu with nutrition facts.
///
/// Reads the scrape from output.txt and writes nutrition_info.json.
/// Items the catalog already knows get placeholder values; everything
/// else is estimated by the completion service. Configure with the
/// OPENAI_API_KEY and BASE_URL environment variables (a .env file is
/// honored).
#[derive(Parser, Debug)]
#[command(name = "menu_nutrition")]
#[command(author, version, about, long_about = None)]
struct Cli {}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let _cli = Cli::parse();

    // Load .env before the configuration is read from the environment.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env()?;

    let input = Path::new(INPUT_FILE);
    if !input.exists() {
        eprintln!("Menu scrape file not found: {}", INPUT_FILE);
        eprintln!("Place the scraped menu text in the current directory and rerun.");
        std::process::exit(1);
    }

    let catalog = CatalogClient::new(&config)?;
    let estimator = OpenAiEstimator::new(&config)?;

    let count = run_to_file(input, Path::new(OUTPUT_FILE), &catalog, &estimator)?;
    println!("Nutrition data for {} items saved to {}", count, OUTPUT_FILE);

    Ok(())
}
