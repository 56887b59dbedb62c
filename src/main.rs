// src/main.rs
// Court-docket scraper for charlestonwvpayments.com.
// Running it does both steps, unconditionally and in order: scrape the
// current docket into the latest-snapshot CSV, then fold never-seen
// citations into the combined archive CSV. No flags.

use std::error::Error;

use docket_scrape::core::net::ChromeFetcher;
use docket_scrape::params::Params;
use docket_scrape::runner::{self, MergeOutcome};

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let params = Params::new();

    let fetcher = ChromeFetcher::new(&params);
    let snapshot = runner::extract_snapshot(&fetcher, &params)?;
    println!("Wrote file: {}", snapshot.display());

    match runner::merge_into_archive(&params)? {
        MergeOutcome::Updated { appended } => {
            println!(
                "Wrote file: {} ({} new records)",
                params.archive_path.display(),
                appended
            );
        }
        MergeOutcome::NoNewRecords => {
            println!("No new records to write to archive file");
        }
    }
    Ok(())
}
