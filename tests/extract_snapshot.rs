// tests/extract_snapshot.rs
//
// Extractor end-to-end with a canned page in place of the browser.
use std::error::Error;
use std::fs;
use std::path::PathBuf;

use docket_scrape::core::net::PageFetcher;
use docket_scrape::params::Params;
use docket_scrape::runner::extract_snapshot;
use docket_scrape::store::read_table;

struct CannedPage(&'static str);

impl PageFetcher for CannedPage {
    fn fetch_rendered_body(&self) -> Result<String, Box<dyn Error>> {
        Ok(self.0.to_string())
    }
}

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("docket_extract_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

const PAGE: &str = r#"
<html><body>
  <div class="well"><form>Search By Last Names</form></div>
  <div class="well">
    <p><strong>1.</strong></p>
    <p><strong>Citation No:</strong> C-100</p>
    <p><strong>Name:</strong> Doe,   Jane</p>
    <p><strong>Hearing:</strong> 01/02/2024 <strong>Docket No:</strong> 24-CR-100</p>
  </div>
  <div class="well">
    <p><strong>2.</strong></p>
    <p><strong>Citation No:</strong> C-101</p>
    <p><strong>Offense:</strong> Speeding</p>
  </div>
</body></html>
"#;

#[test]
fn writes_snapshot_with_sorted_header_union() {
    let dir = tmp_dir("sorted");
    let mut params = Params::new();
    params.snapshot_path = dir.join("latest.csv");

    let written = extract_snapshot(&CannedPage(PAGE), &params).unwrap();
    assert_eq!(written, params.snapshot_path);

    let table = read_table(&written).unwrap();
    assert_eq!(
        table.headers,
        ["Citation No", "Court Date", "Docket No", "Name", "Offense"]
    );
    assert_eq!(table.records.len(), 2);
    assert_eq!(table.records[0]["Citation No"], "C-100");
    assert_eq!(table.records[0]["Name"], "Doe, Jane");
    assert_eq!(table.records[0]["Court Date"], "01/02/2024");
    assert_eq!(table.records[0]["Docket No"], "24-CR-100");
    // Fields a record lacks come back as empty cells.
    assert_eq!(table.records[0]["Offense"], "");
    assert_eq!(table.records[1]["Offense"], "Speeding");
    assert_eq!(table.records[1]["Court Date"], "");
}

#[test]
fn snapshot_is_fully_overwritten_each_run() {
    let dir = tmp_dir("overwrite");
    let mut params = Params::new();
    params.snapshot_path = dir.join("latest.csv");

    extract_snapshot(&CannedPage(PAGE), &params).unwrap();
    let first_len = fs::metadata(&params.snapshot_path).unwrap().len();

    const SMALLER: &str = r#"
    <html><body>
      <div class="well">chrome</div>
      <div class="well">
        <p><strong>1.</strong></p>
        <p><strong>Citation No:</strong> C-200</p>
      </div>
    </body></html>
    "#;
    extract_snapshot(&CannedPage(SMALLER), &params).unwrap();

    let table = read_table(&params.snapshot_path).unwrap();
    assert_eq!(table.headers, ["Citation No"]);
    assert_eq!(table.records.len(), 1);
    assert!(fs::metadata(&params.snapshot_path).unwrap().len() < first_len);
}

#[test]
fn parse_failures_propagate_and_leave_no_snapshot() {
    let dir = tmp_dir("fatal");
    let mut params = Params::new();
    params.snapshot_path = dir.join("latest.csv");

    const BROKEN: &str = r#"
    <html><body>
      <div class="well">chrome</div>
      <div class="well">
        <p><strong>1.</strong></p>
        <p><strong>No delimiter here</strong></p>
      </div>
    </body></html>
    "#;
    assert!(extract_snapshot(&CannedPage(BROKEN), &params).is_err());
    assert!(!params.snapshot_path.exists());
}
