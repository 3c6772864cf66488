use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Time window a report is computed over.
///
/// `Range` is inclusive on both ends and takes precedence over `Year` when a
/// request carries both. A request with neither filter aggregates the whole
/// table (`Unbounded`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportWindow {
    Unbounded,
    Year(i32),
    Range { from: NaiveDate, to: NaiveDate },
}

impl ReportWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        match self {
            ReportWindow::Unbounded => true,
            ReportWindow::Year(year) => date.year() == *year,
            ReportWindow::Range { from, to } => *from <= date && date <= *to,
        }
    }
}
