use anyhow::{Context, Result};
use chrono::NaiveDate;
use contracts::shared::period::ReportWindow;
use contracts::shared::roster::Employee;
use rust_decimal::Decimal;
use sea_orm::{FromQueryResult, Statement, Value};

use crate::shared::data::db::get_connection;
use crate::shared::settlement::SettlementRecord;

/// Raw settlement row as stored in sales_commission_cache.
#[derive(Debug, Clone, FromQueryResult)]
struct SettlementRow {
    sales_id: String,
    invoice_id: String,
    rec_id: String,
    dimension_key: String,
    last_settle_voucher: String,
    qty: f64,
    invoice_date: Option<String>,
    settle_date: Option<String>,
}

impl SettlementRow {
    fn into_record(self) -> Result<SettlementRecord> {
        Ok(SettlementRecord {
            qty: Decimal::try_from(self.qty)
                .with_context(|| format!("qty {} is not representable", self.qty))?,
            invoice_date: parse_optional_date(self.invoice_date.as_deref())?,
            settle_date: parse_optional_date(self.settle_date.as_deref())?,
            sales_id: self.sales_id,
            invoice_id: self.invoice_id,
            rec_id: self.rec_id,
            dimension_key: self.dimension_key,
            voucher: self.last_settle_voucher,
        })
    }
}

fn parse_optional_date(value: Option<&str>) -> Result<Option<NaiveDate>> {
    match value {
        None | Some("") => Ok(None),
        Some(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .map(Some)
            .with_context(|| format!("invalid stored date '{text}'")),
    }
}

const BASE_COLUMNS: &str = "sales_id, invoice_id, rec_id, dimension_key, last_settle_voucher, qty, invoice_date, settle_date";

/// SQL prefilter matching either date axis against the window; the engine
/// re-filters per axis exactly, this only narrows the fetched set.
fn window_prefilter(window: &ReportWindow, values: &mut Vec<Value>) -> Option<String> {
    match window {
        ReportWindow::Unbounded => None,
        ReportWindow::Year(year) => {
            let year = format!("{year:04}");
            values.push(year.clone().into());
            values.push(year.into());
            Some(
                "(substr(invoice_date, 1, 4) = ? OR substr(settle_date, 1, 4) = ?)".to_string(),
            )
        }
        ReportWindow::Range { from, to } => {
            let from = from.format("%Y-%m-%d").to_string();
            let to = to.format("%Y-%m-%d").to_string();
            values.push(from.clone().into());
            values.push(to.clone().into());
            values.push(from.into());
            values.push(to.into());
            Some(
                "((invoice_date >= ? AND invoice_date <= ?) OR (settle_date >= ? AND settle_date <= ?))"
                    .to_string(),
            )
        }
    }
}

/// Single-axis window filter used by the detail lookup (invoice dates only).
fn invoice_window_filter(window: &ReportWindow, values: &mut Vec<Value>) -> Option<String> {
    match window {
        ReportWindow::Unbounded => None,
        ReportWindow::Year(year) => {
            values.push(format!("{year:04}").into());
            Some("substr(invoice_date, 1, 4) = ?".to_string())
        }
        ReportWindow::Range { from, to } => {
            values.push(from.format("%Y-%m-%d").to_string().into());
            values.push(to.format("%Y-%m-%d").to_string().into());
            Some("invoice_date >= ? AND invoice_date <= ?".to_string())
        }
    }
}

/// Fetch every candidate record for the summary reports: positive quantity,
/// tagged with a roster employee, optionally narrowed to one dimension key
/// and the report window. All request values are bound, never interpolated.
pub async fn fetch_settlements(
    window: &ReportWindow,
    dimension: Option<&str>,
    roster: &[Employee],
) -> Result<Vec<SettlementRecord>> {
    if roster.is_empty() {
        return Ok(Vec::new());
    }

    let mut values: Vec<Value> = Vec::new();
    let mut sql = format!(
        r#"
        SELECT {BASE_COLUMNS}
        FROM sales_commission_cache
        WHERE qty > 0
            AND dimension_key IS NOT NULL
            AND dimension_key != ''
        "#
    );

    let roster_clause = roster
        .iter()
        .map(|employee| {
            values.push(format!("{}%", employee.code).into());
            "dimension_key LIKE ?"
        })
        .collect::<Vec<_>>()
        .join(" OR ");
    sql.push_str(&format!(" AND ({roster_clause})"));

    if let Some(dimension) = dimension {
        sql.push_str(" AND dimension_key = ?");
        values.push(dimension.into());
    }

    if let Some(clause) = window_prefilter(window, &mut values) {
        sql.push_str(&format!(" AND {clause}"));
    }

    fetch_records(sql, values).await
}

/// Fetch the raw rows behind one employee's invoiced total, invoice axis.
pub async fn fetch_details(
    employee_code: &str,
    window: &ReportWindow,
    dimension: Option<&str>,
) -> Result<Vec<SettlementRecord>> {
    let mut values: Vec<Value> = Vec::new();
    let mut sql = format!(
        r#"
        SELECT {BASE_COLUMNS}
        FROM sales_commission_cache
        WHERE invoice_date IS NOT NULL
            AND invoice_date != ''
            AND qty > 0
            AND dimension_key LIKE ?
        "#
    );
    values.push(format!("{employee_code}%").into());

    if let Some(clause) = invoice_window_filter(window, &mut values) {
        sql.push_str(&format!(" AND {clause}"));
    }

    if let Some(dimension) = dimension {
        sql.push_str(" AND dimension_key = ?");
        values.push(dimension.into());
    }

    fetch_records(sql, values).await
}

async fn fetch_records(sql: String, values: Vec<Value>) -> Result<Vec<SettlementRecord>> {
    let db = get_connection();
    let stmt = Statement::from_sql_and_values(sea_orm::DatabaseBackend::Sqlite, sql, values);
    let rows = SettlementRow::find_by_statement(stmt).all(db).await?;

    rows.into_iter().map(SettlementRow::into_record).collect()
}

/// Distinct calendar years carrying invoice data, newest first.
pub async fn fetch_available_years() -> Result<Vec<i32>> {
    let db = get_connection();

    let sql = r#"
        SELECT DISTINCT substr(invoice_date, 1, 4) AS year
        FROM sales_commission_cache
        WHERE invoice_date IS NOT NULL AND invoice_date != ''
        ORDER BY year DESC
    "#;

    #[derive(Debug, FromQueryResult)]
    struct YearRow {
        year: String,
    }

    let stmt = Statement::from_sql_and_values(sea_orm::DatabaseBackend::Sqlite, sql, []);
    let rows = YearRow::find_by_statement(stmt).all(db).await?;

    rows.into_iter()
        .map(|row| {
            row.year
                .parse::<i32>()
                .with_context(|| format!("invalid stored year '{}'", row.year))
        })
        .collect()
}
