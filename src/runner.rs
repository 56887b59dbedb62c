// src/runner.rs
//
// The two pipeline steps, in the order the operator runs them: extract
// a fresh snapshot of the docket, then fold anything new into the
// archive. No shared state between the steps beyond the two files.

use std::collections::HashSet;
use std::error::Error;
use std::path::PathBuf;

use log::info;

use crate::core::net::PageFetcher;
use crate::data::{header_set, CITATION_NO};
use crate::params::Params;
use crate::scrape;
use crate::store::{self, Table};

/// What the merge step did, for reporting.
#[derive(Debug)]
pub enum MergeOutcome {
    Updated { appended: usize },
    NoNewRecords,
}

/// Fetch the rendered docket page, parse it, and overwrite the snapshot
/// file with the result. Returns the path written.
pub fn extract_snapshot(
    fetcher: &dyn PageFetcher,
    params: &Params,
) -> Result<PathBuf, Box<dyn Error>> {
    let html = fetcher.fetch_rendered_body()?;
    let records = scrape::extract_citations(&html)?;
    info!("scraped {} citation records", records.len());

    let headers = header_set(&records);
    store::write_table(&params.snapshot_path, &headers, &records)?;
    Ok(params.snapshot_path.clone())
}

/// Append snapshot records whose `Citation No` the archive has never
/// seen. The archive must already exist with its own header; its column
/// order is never recomputed and prior rows are never edited. An
/// unchanged snapshot performs no write at all.
pub fn merge_into_archive(params: &Params) -> Result<MergeOutcome, Box<dyn Error>> {
    let Table { headers, mut records } = store::read_table(&params.archive_path)?;

    // Keys come from the archive only; the snapshot is not self-deduped.
    let mut known = HashSet::new();
    for rec in &records {
        let key = rec
            .get(CITATION_NO)
            .ok_or("archive row has no Citation No column")?;
        known.insert(key.clone());
    }

    let snapshot = store::read_table(&params.snapshot_path)?;

    let mut new_records = Vec::new();
    for rec in snapshot.records {
        let key = rec
            .get(CITATION_NO)
            .ok_or("snapshot row has no Citation No column")?;
        if !known.contains(key) {
            new_records.push(rec);
        }
    }

    if new_records.is_empty() {
        info!("archive already has every snapshot record");
        return Ok(MergeOutcome::NoNewRecords);
    }

    let appended = new_records.len();
    info!("appending {appended} new records to the archive");

    records.extend(new_records);
    // New-record fields beyond the archive's header are dropped here,
    // silently. Accepted loss.
    store::write_table(&params.archive_path, &headers, &records)?;

    Ok(MergeOutcome::Updated { appended })
}
