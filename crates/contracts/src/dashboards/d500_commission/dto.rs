use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Filters for the commission summary report.
///
/// `start_date`/`end_date` (inclusive, `YYYY-MM-DD`) must be supplied
/// together and win over `year`; with neither the report covers all data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommissionReportRequest {
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    /// Exact match on the raw dimension key ("code,name").
    #[serde(default)]
    pub dimension: Option<String>,
}

/// One roster row of the commission summary report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommissionRow {
    pub employee_code: String,
    pub employee_name: String,
    /// Composite "code,name" tag, usable as a drill-down dimension filter.
    pub dimension_key: String,
    /// Signed quantity summed over the invoice date axis.
    pub invoiced_qty: Decimal,
    /// Signed quantity summed over the settle date axis.
    pub settled_qty: Decimal,
    /// Tiered commission derived from `invoiced_qty`.
    pub commission: Decimal,
    /// `commission / invoiced_qty`, 0 when `invoiced_qty` is 0.
    pub average_rate: Decimal,
}

/// Filters for the per-employee detail drill-down.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommissionDetailsRequest {
    #[serde(default)]
    pub employee_code: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub dimension: Option<String>,
}

/// One raw settlement transaction in a detail drill-down.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommissionDetailRow {
    /// 1-based position after sorting (invoice date desc, |qty| desc).
    pub item_no: u32,
    pub sales_id: String,
    pub invoice_id: String,
    pub voucher: String,
    pub rec_id: String,
    pub dimension_key: String,
    /// Signed quantity: negative for credit notes.
    pub qty: Decimal,
    pub invoice_date: Option<String>,
    pub settle_date: Option<String>,
    /// Resolved classification label: CASH, CHEQUE, CREDIT_NOTE or OTHER.
    pub voucher_type: String,
}

/// A calendar year that has invoice data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportYear {
    pub year: i32,
    /// Buddhist Era rendering of `year`, for display only.
    pub display_year: i32,
}
