// src/params.rs
use std::path::PathBuf;

pub const DOCKET_URL: &str = "https://charlestonwvpayments.com/court-docket";

/// Clickable text that flips the docket page into search-results mode.
pub const RESULTS_TRIGGER_TEXT: &str = "Search By Last Names";

pub const SNAPSHOT_FILENAME: &str = "charleston-wv-court-docket-latest.csv";
pub const ARCHIVE_FILENAME: &str = "charleston-wv-court-docket-combined.csv";

#[derive(Clone, Debug)]
pub struct Params {
    pub source_url: String,      // docket page, fetched rendered
    pub snapshot_path: PathBuf,  // overwritten every run
    pub archive_path: PathBuf,   // append-only; operator seeds it once
}

impl Params {
    pub fn new() -> Self {
        Self {
            source_url: s!(DOCKET_URL),
            snapshot_path: PathBuf::from(SNAPSHOT_FILENAME),
            archive_path: PathBuf::from(ARCHIVE_FILENAME),
        }
    }
}

impl Default for Params {
    fn default() -> Self { Self::new() }
}
