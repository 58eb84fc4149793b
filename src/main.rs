use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};

use crate::cli::Args;
use crate::tracker::LoyaltyTracker;

mod cli;
mod csv_handler;
mod customer;
mod customer_index;
mod error;
mod report;
mod tracker;

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut tracker = LoyaltyTracker::new(args.customer_id);
    let ingested = csv_handler::load_csv_file(&args.input).and_then(|rows| tracker.load_transactions(rows));
    match ingested {
        Ok(_) if tracker.customers().is_empty() => {
            info!("No rows for customer {} in {}", args.customer_id, args.input);
        }
        Ok(_) => {}
        Err(e) if e.is_io() => {
            error!("Failed to read {}: {}. Continuing with the data read so far.", args.input, e);
        }
        Err(e) => return Err(e).with_context(|| format!("Failed to ingest {}", args.input)),
    }

    tracker.calculate_rfm(args.reference_date());

    let stdout = std::io::stdout();
    report::write_customer_report(&mut stdout.lock(), tracker.target_customer_id(), tracker.target_customer())
        .context("Failed to write report")?;
    Ok(())
}
