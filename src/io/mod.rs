//! I/O module
//!
//! Handles roster CSV parsing and listing output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (record conversion, output serialization)
//! - `roster_reader` - Streaming roster reader with iterator interface and import

pub mod csv_format;
pub mod roster_reader;

pub use csv_format::{
    convert_roster_record, write_csv, write_dashboard_csv, write_defaulters_csv,
    write_recent_receipts_csv, RosterRecord,
};
pub use roster_reader::{import_roster, ImportSummary, RosterReader};
