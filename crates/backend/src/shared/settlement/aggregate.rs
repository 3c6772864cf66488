use std::cmp::Reverse;
use std::collections::BTreeMap;

use contracts::shared::period::ReportWindow;
use contracts::shared::roster::Employee;
use rust_decimal::Decimal;

use super::{SettlementRecord, VoucherType};

/// Which date column a record is aggregated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateAxis {
    Invoice,
    Settle,
}

/// Whether cash vouchers participate in an aggregation.
///
/// The outstanding report excludes them before grouping: cash settles
/// instantly, so it can never be owed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CashHandling {
    Include,
    Exclude,
}

/// Per-employee reconciliation result over one window.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeAggregate {
    pub code: String,
    pub name: String,
    pub invoiced_qty: Decimal,
    pub settled_qty: Decimal,
}

impl EmployeeAggregate {
    pub fn outstanding_qty(&self) -> Decimal {
        self.invoiced_qty - self.settled_qty
    }
}

/// Sum signed quantities per employee code for records whose date on `axis`
/// falls inside `window`.
///
/// Employees with no matching records are absent from the result; callers
/// merge against the roster via [`build_report`].
pub fn aggregate(
    records: &[SettlementRecord],
    axis: DateAxis,
    window: &ReportWindow,
    cash: CashHandling,
) -> BTreeMap<String, Decimal> {
    let mut sums: BTreeMap<String, Decimal> = BTreeMap::new();

    for record in records {
        if record.qty <= Decimal::ZERO {
            continue;
        }
        if cash == CashHandling::Exclude && record.voucher_type() == VoucherType::Cash {
            continue;
        }
        let date = match axis {
            DateAxis::Invoice => record.invoice_date,
            DateAxis::Settle => record.settle_date,
        };
        let Some(date) = date else { continue };
        if !window.contains(date) {
            continue;
        }
        let entry = sums
            .entry(record.employee_code().to_string())
            .or_insert(Decimal::ZERO);
        *entry += record.signed_qty();
    }

    sums
}

/// Full-outer-join the two aggregation maps against the roster, defaulting
/// missing sides to zero. Output order is roster order.
pub fn build_report(
    invoice_agg: &BTreeMap<String, Decimal>,
    settle_agg: &BTreeMap<String, Decimal>,
    roster: &[Employee],
) -> Vec<EmployeeAggregate> {
    roster
        .iter()
        .map(|employee| EmployeeAggregate {
            code: employee.code.clone(),
            name: employee.name.clone(),
            invoiced_qty: invoice_agg
                .get(&employee.code)
                .copied()
                .unwrap_or(Decimal::ZERO),
            settled_qty: settle_agg
                .get(&employee.code)
                .copied()
                .unwrap_or(Decimal::ZERO),
        })
        .collect()
}

/// Detail drill-down order: invoice date descending, then absolute signed
/// quantity descending.
pub fn sort_details(records: &mut [SettlementRecord]) {
    records.sort_by_key(|r| (Reverse(r.invoice_date), Reverse(r.signed_qty().abs())));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(s: &str) -> Option<NaiveDate> {
        Some(NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap())
    }

    fn record(
        dimension_key: &str,
        voucher: &str,
        qty: i64,
        invoice_date: Option<NaiveDate>,
        settle_date: Option<NaiveDate>,
    ) -> SettlementRecord {
        SettlementRecord {
            sales_id: format!("SO-{voucher}"),
            invoice_id: format!("IV-{voucher}"),
            rec_id: voucher.to_string(),
            dimension_key: dimension_key.to_string(),
            voucher: voucher.to_string(),
            qty: Decimal::from(qty),
            invoice_date,
            settle_date,
        }
    }

    fn sample() -> Vec<SettlementRecord> {
        vec![
            record("E1,Alice", "CA001", 500, d("2024-01-10"), d("2024-01-10")),
            record("E1,Alice", "PDC001", 200, d("2024-02-01"), d("2024-03-15")),
            record("E1,Alice", "ICA001", 100, d("2024-02-20"), d("2024-02-20")),
            record("E2,Bob", "RV001", 50, d("2024-05-05"), None),
            record("E2,Bob", "OTH001", 25, d("2023-12-31"), d("2024-01-02")),
        ]
    }

    #[test]
    fn test_aggregate_by_invoice_axis() {
        let sums = aggregate(
            &sample(),
            DateAxis::Invoice,
            &ReportWindow::Year(2024),
            CashHandling::Include,
        );
        // E1: 500 + 200 - 100; E2: only RV001 (OTH001 invoiced in 2023).
        assert_eq!(sums.get("E1"), Some(&Decimal::from(600)));
        assert_eq!(sums.get("E2"), Some(&Decimal::from(50)));
    }

    #[test]
    fn test_aggregate_by_settle_axis_skips_null_dates() {
        let sums = aggregate(
            &sample(),
            DateAxis::Settle,
            &ReportWindow::Year(2024),
            CashHandling::Include,
        );
        // E2's RV001 has no settle date; OTH001 settled in 2024.
        assert_eq!(sums.get("E1"), Some(&Decimal::from(600)));
        assert_eq!(sums.get("E2"), Some(&Decimal::from(25)));
    }

    #[test]
    fn test_aggregate_is_order_independent() {
        let window = ReportWindow::Year(2024);
        let forward = sample();
        let mut reversed = sample();
        reversed.reverse();
        assert_eq!(
            aggregate(&forward, DateAxis::Invoice, &window, CashHandling::Include),
            aggregate(&reversed, DateAxis::Invoice, &window, CashHandling::Include),
        );
        assert_eq!(
            aggregate(&forward, DateAxis::Settle, &window, CashHandling::Exclude),
            aggregate(&reversed, DateAxis::Settle, &window, CashHandling::Exclude),
        );
    }

    #[test]
    fn test_cash_exclusion_changes_sums_by_exactly_the_cash_share() {
        let window = ReportWindow::Year(2024);
        let with_cash = aggregate(&sample(), DateAxis::Invoice, &window, CashHandling::Include);
        let without_cash = aggregate(&sample(), DateAxis::Invoice, &window, CashHandling::Exclude);

        // E1 had one CASH record of 500 in-window.
        assert_eq!(
            with_cash.get("E1").copied().unwrap() - without_cash.get("E1").copied().unwrap(),
            Decimal::from(500)
        );
        // E2's only in-window record was cash, so it disappears entirely.
        assert_eq!(without_cash.get("E2"), None);
    }

    fn roster() -> Vec<Employee> {
        vec![
            Employee {
                code: "E1".into(),
                name: "Alice".into(),
            },
            Employee {
                code: "E2".into(),
                name: "Bob".into(),
            },
            Employee {
                code: "E3".into(),
                name: "Carol".into(),
            },
        ]
    }

    #[test]
    fn test_build_report_follows_roster_order_and_defaults_to_zero() {
        let records = sample();
        for window in [
            ReportWindow::Year(2024),
            ReportWindow::Range {
                from: NaiveDate::parse_from_str("2024-02-01", "%Y-%m-%d").unwrap(),
                to: NaiveDate::parse_from_str("2024-02-29", "%Y-%m-%d").unwrap(),
            },
            // No records at all in 1999.
            ReportWindow::Year(1999),
        ] {
            let invoiced = aggregate(&records, DateAxis::Invoice, &window, CashHandling::Include);
            let settled = aggregate(&records, DateAxis::Settle, &window, CashHandling::Include);
            let report = build_report(&invoiced, &settled, &roster());

            let codes: Vec<&str> = report.iter().map(|r| r.code.as_str()).collect();
            assert_eq!(codes, vec!["E1", "E2", "E3"]);
            for row in &report {
                assert_eq!(row.outstanding_qty(), row.invoiced_qty - row.settled_qty);
            }
        }

        // Empty window: every row is exactly 0/0/0.
        let invoiced = aggregate(
            &records,
            DateAxis::Invoice,
            &ReportWindow::Year(1999),
            CashHandling::Include,
        );
        let settled = aggregate(
            &records,
            DateAxis::Settle,
            &ReportWindow::Year(1999),
            CashHandling::Include,
        );
        for row in build_report(&invoiced, &settled, &roster()) {
            assert_eq!(row.invoiced_qty, Decimal::ZERO);
            assert_eq!(row.settled_qty, Decimal::ZERO);
            assert_eq!(row.outstanding_qty(), Decimal::ZERO);
        }
    }

    #[test]
    fn test_credit_notes_can_drive_an_aggregate_negative() {
        // Scenario: 500 cash invoiced, 800 reversed by a credit note.
        let records = vec![
            record("E1,Alice", "CA1", 500, d("2024-01-10"), None),
            record("E1,Alice", "ICA1", 800, d("2024-01-15"), None),
        ];
        let sums = aggregate(
            &records,
            DateAxis::Invoice,
            &ReportWindow::Year(2024),
            CashHandling::Include,
        );
        assert_eq!(sums.get("E1"), Some(&Decimal::from(-300)));

        // The low-tier formula is applied unchanged to the negative total.
        let commission = super::super::commission::commission(Decimal::from(-300));
        assert_eq!(commission, Decimal::from(-1500));
    }

    #[test]
    fn test_sort_details_date_desc_then_abs_qty_desc() {
        let mut records = vec![
            record("E1,Alice", "CA001", 10, d("2024-01-01"), None),
            record("E1,Alice", "ICA001", 90, d("2024-03-01"), None),
            record("E1,Alice", "PDC001", 40, d("2024-03-01"), None),
            record("E1,Alice", "RV001", 70, d("2024-02-01"), None),
        ];
        sort_details(&mut records);
        let order: Vec<&str> = records.iter().map(|r| r.voucher.as_str()).collect();
        // 2024-03-01 first with |−90| before |40|, then Feb, then Jan.
        assert_eq!(order, vec!["ICA001", "PDC001", "RV001", "CA001"]);
    }

    #[test]
    fn test_details_sum_matches_aggregate() {
        let window = ReportWindow::Year(2024);
        let records = sample();
        let e1_details: Vec<&SettlementRecord> = records
            .iter()
            .filter(|r| r.employee_code() == "E1")
            .filter(|r| r.invoice_date.is_some_and(|date| window.contains(date)))
            .collect();
        let detail_sum: Decimal = e1_details.iter().map(|r| r.signed_qty()).sum();

        let sums = aggregate(&records, DateAxis::Invoice, &window, CashHandling::Include);
        assert_eq!(sums.get("E1"), Some(&detail_sum));
    }
}
