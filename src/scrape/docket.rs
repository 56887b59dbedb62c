// src/scrape/docket.rs
//
// HTML → citation records. The docket page renders each citation as a
// `div.well` panel of paragraphs shaped like "<strong>Label:</strong>
// value". The rules below are ad hoc by necessity; they mirror the page
// exactly, and anything off-shape is a hard error.

use std::error::Error;

use scraper::{ElementRef, Html, Selector};

use crate::core::sanitize::normalize_ws;
use crate::data::{CitationRecord, COURT_DATE, DOCKET_NO};

/// The first `well` panel on the page is the search form itself, not a result.
const LEADING_CHROME_WELLS: usize = 1;

/// The first bolded run in each panel is the citation's on-page sequence
/// number, not a field label.
const LEADING_SEQUENCE_STRONGS: usize = 1;

/// Parse the rendered body into one record per result panel.
///
/// Per panel: every `strong` past the sequence number marks a field
/// paragraph. The paragraph's full text splits once on the first colon
/// into label and value; later colons are content. One special shape:
/// a value containing `Docket No` is really two fields jammed into one
/// paragraph, split again on the literal `Docket No:`.
pub fn extract_citations(html: &str) -> Result<Vec<CitationRecord>, Box<dyn Error>> {
    let well_sel = Selector::parse("div.well").unwrap();
    let strong_sel = Selector::parse("strong").unwrap();

    let doc = Html::parse_document(html);
    let mut records = Vec::new();

    for well in doc.select(&well_sel).skip(LEADING_CHROME_WELLS) {
        let mut citation = CitationRecord::new();

        for strong in well.select(&strong_sel).skip(LEADING_SEQUENCE_STRONGS) {
            let parent = strong
                .parent()
                .and_then(ElementRef::wrap)
                .ok_or("bolded label outside any element")?;
            let text: String = parent.text().collect();

            let (label, value) = text
                .split_once(':')
                .ok_or_else(|| format!("no ':' in field paragraph: {:?}", normalize_ws(&text)))?;

            if value.contains("Docket No") {
                // Court date and docket number share a paragraph. A panel
                // bolds both labels, so this branch runs once per bolded
                // label and overwrites itself with identical values.
                let (court_date, docket_no) = value
                    .split_once("Docket No:")
                    .ok_or_else(|| format!("malformed docket pair: {:?}", normalize_ws(value)))?;
                citation.insert(s!(COURT_DATE), s!(court_date.trim()));
                citation.insert(s!(DOCKET_NO), s!(docket_no.trim()));
            } else {
                citation.insert(s!(label.trim()), normalize_ws(value));
            }
        }

        records.push(citation);
    }

    log::debug!("parsed {} citation records", records.len());
    Ok(records)
}
