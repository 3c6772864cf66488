use rust_decimal::Decimal;

/// Tiered commission: 5 per unit up to 1000 units, 8 per unit above.
///
/// The formula is applied verbatim to negative totals (credit notes can push
/// a period negative), which then yields a negative commission via the low
/// tier. See DESIGN.md for why this is not clamped.
pub fn commission(qty: Decimal) -> Decimal {
    let breakpoint = Decimal::from(1_000);
    let low_rate = Decimal::from(5);
    let high_rate = Decimal::from(8);

    if qty <= breakpoint {
        qty * low_rate
    } else {
        breakpoint * low_rate + (qty - breakpoint) * high_rate
    }
}

/// Effective per-unit rate; defined as 0 for an empty period.
pub fn average_rate(qty: Decimal) -> Decimal {
    if qty.is_zero() {
        Decimal::ZERO
    } else {
        commission(qty) / qty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commission_low_tier() {
        assert_eq!(commission(Decimal::ZERO), Decimal::ZERO);
        assert_eq!(commission(Decimal::from(1)), Decimal::from(5));
        assert_eq!(commission(Decimal::from(999)), Decimal::from(4_995));
    }

    #[test]
    fn test_commission_boundary() {
        assert_eq!(commission(Decimal::from(1_000)), Decimal::from(5_000));
        assert_eq!(commission(Decimal::from(1_001)), Decimal::from(5_008));
        assert_eq!(commission(Decimal::from(2_000)), Decimal::from(13_000));
    }

    #[test]
    fn test_commission_negative_qty_uses_low_tier() {
        assert_eq!(commission(Decimal::from(-300)), Decimal::from(-1_500));
    }

    #[test]
    fn test_average_rate() {
        assert_eq!(average_rate(Decimal::ZERO), Decimal::ZERO);
        assert_eq!(average_rate(Decimal::from(500)), Decimal::from(5));
        assert_eq!(average_rate(Decimal::from(1_000)), Decimal::from(5));
        // 2000 units: 13000 / 2000 = 6.5
        assert_eq!(
            average_rate(Decimal::from(2_000)),
            Decimal::new(65, 1) // 6.5
        );
    }

    #[test]
    fn test_commission_fractional_qty_is_exact() {
        // 1000.5 units: 5000 + 0.5 * 8 = 5004, no float drift.
        assert_eq!(commission(Decimal::new(10_005, 1)), Decimal::from(5_004));
    }
}
