use contracts::dashboards::d501_outstanding::{OutstandingRequest, OutstandingRow};

use crate::dashboards::d500_commission::repository;
use crate::dashboards::resolve_window;
use crate::shared::config;
use crate::shared::data::fetch_with_deadline;
use crate::shared::error::ReportError;
use crate::shared::settlement::{aggregate, build_report, CashHandling, DateAxis};

/// Outstanding balances: invoiced minus settled quantity per employee, with
/// cash vouchers dropped before grouping on both axes. Cash settles the
/// moment it is received, so only cheque/credit/other flows can be owed.
pub async fn outstanding_summary(
    request: OutstandingRequest,
) -> Result<Vec<OutstandingRow>, ReportError> {
    let window = resolve_window(
        request.year,
        request.start_date.as_deref(),
        request.end_date.as_deref(),
    )?;
    let roster = &config::get().roster;

    let records = fetch_with_deadline(repository::fetch_settlements(&window, None, roster)).await?;

    let invoiced = aggregate(&records, DateAxis::Invoice, &window, CashHandling::Exclude);
    let settled = aggregate(&records, DateAxis::Settle, &window, CashHandling::Exclude);

    let rows = build_report(&invoiced, &settled, roster)
        .into_iter()
        .map(|agg| OutstandingRow {
            outstanding_qty: agg.outstanding_qty(),
            invoiced_qty: agg.invoiced_qty,
            settled_qty: agg.settled_qty,
            employee_code: agg.code,
            employee_name: agg.name,
        })
        .collect();

    Ok(rows)
}
