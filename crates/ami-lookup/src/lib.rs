//! ami-lookup
//!
//! Where clinic records come from: the synthetic demo candidate source,
//! a CORS-proxied single-page scraper, and bulk JSON/CSV import.

pub mod error;
pub mod import;
pub mod scrape;
pub mod synth;
