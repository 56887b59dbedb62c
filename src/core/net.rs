// src/core/net.rs
//
// Browser side of the pipeline. The docket page assembles its results
// client-side, so a plain GET returns an empty shell; we drive a
// headless Chrome, click the search control, and hand back the rendered
// body as one string. Everything past that string is browser-free.

use std::error::Error;
use std::thread;
use std::time::Duration;

use headless_chrome::Browser;

use crate::params::{Params, RESULTS_TRIGGER_TEXT};

/// Narrow seam over browser automation: one blocking call, one string out.
pub trait PageFetcher {
    fn fetch_rendered_body(&self) -> Result<String, Box<dyn Error>>;
}

/// Give late XHRs a moment to land once the first result panel shows.
/// Stability heuristic, not a guarantee.
const SETTLE_MS: u64 = 500;

pub struct ChromeFetcher {
    url: String,
    trigger_text: String,
}

impl ChromeFetcher {
    pub fn new(params: &Params) -> Self {
        Self {
            url: params.source_url.clone(),
            trigger_text: s!(RESULTS_TRIGGER_TEXT),
        }
    }
}

impl PageFetcher for ChromeFetcher {
    fn fetch_rendered_body(&self) -> Result<String, Box<dyn Error>> {
        let browser = Browser::default()?;
        let tab = browser.new_tab()?;

        tab.navigate_to(&self.url)?;
        tab.wait_until_navigated()?;

        // Flip the page into search-results mode.
        let trigger = format!("//*[contains(text(), '{}')]", self.trigger_text);
        tab.wait_for_xpath(&trigger)?.click()?;

        // Results render asynchronously; wait for at least one panel.
        tab.wait_for_element("div.well")?;
        thread::sleep(Duration::from_millis(SETTLE_MS));

        log::debug!("docket page rendered, capturing body");
        Ok(tab.wait_for_element("body")?.get_content()?)
    }
}
