use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Filters for the outstanding balance report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutstandingRequest {
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

/// One roster row of the outstanding report.
///
/// Cash vouchers settle instantly and are excluded from both sides before
/// aggregation, so `outstanding_qty` only tracks quantities that can
/// actually be owed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutstandingRow {
    pub employee_code: String,
    pub employee_name: String,
    pub invoiced_qty: Decimal,
    pub settled_qty: Decimal,
    pub outstanding_qty: Decimal,
}
