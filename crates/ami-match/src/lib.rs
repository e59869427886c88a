//! ami-match
//!
//! The symptom-to-clinic matching pipeline: keyword classification,
//! specialty-filtered directory search, and a bounded remote fallback.
//! Stateless — every run is a pure function of its inputs plus whatever
//! the injected candidate source returns.

pub mod aggregate;
pub mod classify;
pub mod error;
pub mod filter;
pub mod source;
