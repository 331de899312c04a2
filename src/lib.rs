//! chatwise-import: migrate ChatWise chat exports into Nowledge Mem.
//!
//! The library exposes the import pipeline (format detection, parsing,
//! deduplication, the interactive and batch drivers) and the HTTP client
//! for the Nowledge Mem `/threads` API.

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
