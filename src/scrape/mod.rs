// src/scrape/mod.rs
mod docket;

pub use docket::extract_citations;
