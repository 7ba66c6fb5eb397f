//! Heuristic resume parser: free-form resume text in, structured record out.
//!
//! `parser` is the pure core. `source` turns files into text and links,
//! `report` scores and serializes the result, `config` holds runtime settings.

pub mod config;
pub mod parser;
pub mod report;
pub mod source;

pub use parser::{parse, process, ParsedResume};
pub use report::Report;
pub use source::Document;
