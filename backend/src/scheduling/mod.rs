//! Scheduling logic
//!
//! The two read paths over appointments that do more than pass rows through:
//! slot availability and the filtered report.

pub mod availability;
pub mod report;

pub use availability::{available_slots, normalize_time, DAILY_ROSTER};
pub use report::{DateRange, ReportFilter};
