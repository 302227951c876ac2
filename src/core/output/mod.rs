//! Output format writers.
//!
//! - [`write_csv`] / [`to_csv`] - the record table as semicolon CSV - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - any report or table as pretty JSON - requires `json-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatlens::Result<()> {
//! use chatlens::config::AnalysisConfig;
//! use chatlens::core::Selection;
//! use chatlens::core::output::{write_csv, write_json};
//! use chatlens::report::Report;
//!
//! let records = chatlens::parse(&std::fs::read_to_string("chat.txt")?);
//! let report = Report::build(Selection::Overall, &records, &AnalysisConfig::default());
//!
//! write_csv(&records, "records.csv")?;
//! write_json(&report, "report.json")?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
