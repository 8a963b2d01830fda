use std::path::Path;

use chrono::Utc;
use tracing_subscriber::EnvFilter;

use airdrop_seeder::{render_seed_script, write_script, Catalog};

const OUTPUT_PATH: &str = "migrations/seed_airdrops.sql";

#[tokio::main]
async fn main() -> airdrop_seeder::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let catalog = Catalog::builtin()?;
    println!("web3 campaigns: {}", catalog.web3.len());
    println!("cex campaigns:  {}", catalog.cex.len());
    println!("total:          {}", catalog.len());

    // Enrichment from the public listing page, once its selectors are
    // maintained again:
    // let listed = airdrop_seeder::listing::fetch_listed_campaigns(&reqwest::Client::new()).await;

    let script = render_seed_script(&catalog, Utc::now())?;
    write_script(Path::new(OUTPUT_PATH), &script)?;

    println!("seed script written to {OUTPUT_PATH}");
    println!("execute it in the database SQL console to load the catalogue");
    Ok(())
}
