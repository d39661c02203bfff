pub mod assembler;
pub mod csv_export;
pub mod document;

pub use assembler::{assemble, MatchReport, ReportRow, LINE_PLACEHOLDER};
pub use csv_export::{csv_bytes, export_to_csv, write_csv, CSV_HEADERS};
pub use document::render_document;
