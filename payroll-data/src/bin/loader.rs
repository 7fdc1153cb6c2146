use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use payroll_data::RateTableLoader;
use payroll_store::FileStore;

/// Load overtime rate tables from a CSV file into the session store.
///
/// The CSV file should have the following columns:
/// - name: The table name referenced by the configuration
/// - regular: Regular overtime surcharge as a decimal (e.g., 0.15)
/// - night: Night overtime surcharge as a decimal
/// - holiday: Holiday overtime surcharge as a decimal
///
/// Built-in names (standard, enhanced, premium) are reserved and rejected.
#[derive(Parser, Debug)]
#[command(name = "rate-loader")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the CSV file containing rate table data
    #[arg(short, long)]
    file: PathBuf,

    /// Path to the session store file
    #[arg(short, long, default_value = "payroll-session.json")]
    store: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let store = FileStore::new(&args.store);

    println!("Loading rate tables from: {}", args.file.display());

    let file = File::open(&args.file)
        .with_context(|| format!("Failed to open: {}", args.file.display()))?;

    let records = RateTableLoader::parse(file)
        .with_context(|| format!("Failed to parse CSV: {}", args.file.display()))?;

    println!("Parsed {} records from CSV", records.len());

    let written = RateTableLoader::load(&store, &records)
        .await
        .context("Failed to write rate tables into the store")?;

    println!(
        "Successfully loaded {} rate tables into {}.",
        written,
        args.store.display()
    );

    Ok(())
}
