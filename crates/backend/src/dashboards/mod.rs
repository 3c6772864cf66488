pub mod d500_commission;
pub mod d501_outstanding;

use chrono::NaiveDate;
use contracts::shared::period::ReportWindow;

use crate::shared::error::ReportError;

/// Resolve the window filters shared by every report request.
///
/// An explicit date range wins over `year`; a lone `start_date` or
/// `end_date` is rejected. With no filter at all the report covers the whole
/// table. A range with `from > to` is accepted and simply matches nothing.
pub(crate) fn resolve_window(
    year: Option<i32>,
    start_date: Option<&str>,
    end_date: Option<&str>,
) -> Result<ReportWindow, ReportError> {
    match (start_date, end_date) {
        (Some(start), Some(end)) => Ok(ReportWindow::Range {
            from: parse_date(start)?,
            to: parse_date(end)?,
        }),
        (None, None) => Ok(match year {
            Some(year) => ReportWindow::Year(year),
            None => ReportWindow::Unbounded,
        }),
        _ => Err(ReportError::InvalidParameter(
            "start_date and end_date must be provided together".to_string(),
        )),
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, ReportError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| ReportError::InvalidParameter(format!("invalid date '{value}', expected YYYY-MM-DD")))
}
