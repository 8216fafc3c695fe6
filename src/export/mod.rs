//! Cost report export.
//!
//! Breakdowns are rendered as CSV for download or archiving.

mod csv_report;

pub use csv_report::{ReportAssumptions, format_money, report_file_name, write_breakdown_csv};
