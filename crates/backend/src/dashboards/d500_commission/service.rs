use contracts::dashboards::d500_commission::{
    CommissionDetailRow, CommissionDetailsRequest, CommissionReportRequest, CommissionRow,
    ReportYear,
};

use super::repository;
use crate::dashboards::resolve_window;
use crate::shared::config;
use crate::shared::data::fetch_with_deadline;
use crate::shared::error::ReportError;
use crate::shared::format::buddhist_era_year;
use crate::shared::settlement::commission::{average_rate, commission};
use crate::shared::settlement::{aggregate, build_report, sort_details, CashHandling, DateAxis};

/// Commission summary: invoiced vs. settled quantity per roster employee,
/// with the tiered commission derived from the invoiced total.
pub async fn commission_summary(
    request: CommissionReportRequest,
) -> Result<Vec<CommissionRow>, ReportError> {
    let window = resolve_window(
        request.year,
        request.start_date.as_deref(),
        request.end_date.as_deref(),
    )?;
    let roster = &config::get().roster;

    let records = fetch_with_deadline(repository::fetch_settlements(
        &window,
        request.dimension.as_deref(),
        roster,
    ))
    .await?;

    let invoiced = aggregate(&records, DateAxis::Invoice, &window, CashHandling::Include);
    let settled = aggregate(&records, DateAxis::Settle, &window, CashHandling::Include);

    let rows = build_report(&invoiced, &settled, roster)
        .into_iter()
        .map(|agg| CommissionRow {
            dimension_key: format!("{},{}", agg.code, agg.name),
            commission: commission(agg.invoiced_qty),
            average_rate: average_rate(agg.invoiced_qty),
            invoiced_qty: agg.invoiced_qty,
            settled_qty: agg.settled_qty,
            employee_code: agg.code,
            employee_name: agg.name,
        })
        .collect();

    Ok(rows)
}

/// Raw transactions behind one employee's total, newest invoice first.
pub async fn commission_details(
    request: CommissionDetailsRequest,
) -> Result<Vec<CommissionDetailRow>, ReportError> {
    let employee_code = request
        .employee_code
        .as_deref()
        .filter(|code| !code.is_empty())
        .ok_or(ReportError::MissingParameter("employee_code"))?;
    let window = resolve_window(
        request.year,
        request.start_date.as_deref(),
        request.end_date.as_deref(),
    )?;

    let mut records = fetch_with_deadline(repository::fetch_details(
        employee_code,
        &window,
        request.dimension.as_deref(),
    ))
    .await?;
    sort_details(&mut records);

    let rows = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| CommissionDetailRow {
            item_no: index as u32 + 1,
            qty: record.signed_qty(),
            voucher_type: record.voucher_type().label().to_string(),
            invoice_date: record.invoice_date.map(|d| d.format("%Y-%m-%d").to_string()),
            settle_date: record.settle_date.map(|d| d.format("%Y-%m-%d").to_string()),
            sales_id: record.sales_id,
            invoice_id: record.invoice_id,
            voucher: record.voucher,
            rec_id: record.rec_id,
            dimension_key: record.dimension_key,
        })
        .collect();

    Ok(rows)
}

/// Years selectable in the report filter, with their Buddhist Era display
/// forms. The offset is presentation only and never filters data.
pub async fn available_years() -> Result<Vec<ReportYear>, ReportError> {
    let years = fetch_with_deadline(repository::fetch_available_years()).await?;

    Ok(years
        .into_iter()
        .map(|year| ReportYear {
            year,
            display_year: buddhist_era_year(year),
        })
        .collect())
}
