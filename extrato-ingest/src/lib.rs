//! extrato-ingest: statement ingestion — PDF text retrieval and the
//! Asaas statement text parser.

pub mod asaas;
pub mod pdf;

pub use asaas::{ParsedStatement, SkippedLine, parse_brl_amount, parse_statement};
pub use pdf::extract_text;
