// src/store.rs
//
// Tabular persistence for the snapshot and archive files. Thin shim
// over the csv crate: records out, header-projected rows in. Column
// order is always the caller's decision.

use std::error::Error;
use std::path::Path;

use crate::data::CitationRecord;

/// One CSV file in memory: header row plus records in file order.
pub struct Table {
    pub headers: Vec<String>,
    pub records: Vec<CitationRecord>,
}

/// Read a whole table. A missing or malformed file is the caller's
/// problem; nothing is auto-created or repaired here.
pub fn read_table(path: &Path) -> Result<Table, Box<dyn Error>> {
    let mut rdr = csv::Reader::from_path(path)?;
    let headers: Vec<String> = rdr.headers()?.iter().map(String::from).collect();

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row?;
        let mut rec = CitationRecord::new();
        for (name, value) in headers.iter().zip(row.iter()) {
            rec.insert(name.clone(), s!(value));
        }
        records.push(rec);
    }

    Ok(Table { headers, records })
}

/// Overwrite `path` with a header row and one row per record, cells in
/// `headers` order. Missing fields render as empty cells; fields a
/// record carries beyond `headers` are dropped without comment.
pub fn write_table(
    path: &Path,
    headers: &[String],
    records: &[CitationRecord],
) -> Result<(), Box<dyn Error>> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(headers)?;
    for rec in records {
        wtr.write_record(
            headers
                .iter()
                .map(|h| rec.get(h).map(String::as_str).unwrap_or("")),
        )?;
    }
    wtr.flush()?;
    Ok(())
}
