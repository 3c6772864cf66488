//! Settlement reconciliation engine.
//!
//! Classifies settlement vouchers, resolves signed quantities and aggregates
//! invoiced vs. settled quantities per employee over a report window. All
//! arithmetic uses `Decimal` so sums are exact and independent of input
//! order.

pub mod aggregate;
pub mod commission;
pub mod voucher;

pub use self::aggregate::{
    aggregate, build_report, sort_details, CashHandling, DateAxis, EmployeeAggregate,
};
pub use self::voucher::VoucherType;

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// One row of the settlement table, already typed and validated.
///
/// `qty` is the raw unsigned transaction quantity; rows with `qty <= 0` are
/// filtered out by the repository and never reach the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct SettlementRecord {
    pub sales_id: String,
    pub invoice_id: String,
    pub rec_id: String,
    /// Composite "employee code,employee name" tag.
    pub dimension_key: String,
    /// Last settlement voucher reference; its prefix encodes the type.
    pub voucher: String,
    pub qty: Decimal,
    pub invoice_date: Option<NaiveDate>,
    pub settle_date: Option<NaiveDate>,
}

impl SettlementRecord {
    pub fn voucher_type(&self) -> VoucherType {
        VoucherType::classify(&self.voucher)
    }

    /// Quantity with the credit-note sign flip applied.
    pub fn signed_qty(&self) -> Decimal {
        match self.voucher_type() {
            VoucherType::CreditNote => -self.qty,
            _ => self.qty,
        }
    }

    /// True employee identifier: everything before the first comma of the
    /// dimension key.
    pub fn employee_code(&self) -> &str {
        employee_code_of(&self.dimension_key)
    }
}

pub fn employee_code_of(dimension_key: &str) -> &str {
    dimension_key
        .split_once(',')
        .map(|(code, _)| code)
        .unwrap_or(dimension_key)
}
