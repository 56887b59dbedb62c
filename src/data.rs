// src/data.rs
//
// The docket page decides the field names; we just carry them. Known
// fields get consts so the special cases read as domain knowledge
// instead of string soup.

use std::collections::{BTreeMap, BTreeSet};

/// One citation as scraped: field name → field value.
/// Unknown fields survive untouched; known ones are special-cased by name.
pub type CitationRecord = BTreeMap<String, String>;

/// Natural key. Two records are the same citation iff these are equal,
/// raw string comparison, no normalization.
pub const CITATION_NO: &str = "Citation No";
pub const COURT_DATE: &str = "Court Date";
pub const DOCKET_NO: &str = "Docket No";

/// Union of field names across `records`, lexicographically sorted.
/// This is the snapshot column order; recomputed every run, never persisted.
pub fn header_set(records: &[CitationRecord]) -> Vec<String> {
    let mut names = BTreeSet::new();
    for rec in records {
        for key in rec.keys() {
            names.insert(key.clone());
        }
    }
    names.into_iter().collect()
}
