use serde::{Deserialize, Serialize};

/// Payment classification derived from the settlement voucher prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoucherType {
    /// CA / RV: cash receipt, settles instantly.
    Cash,
    /// PDC: post-dated cheque.
    Cheque,
    /// ICA / ISW: credit note, reverses previously counted quantity.
    CreditNote,
    Other,
}

/// Prefix rules in priority order; first match wins.
const PREFIX_RULES: &[(&str, VoucherType)] = &[
    ("CA", VoucherType::Cash),
    ("RV", VoucherType::Cash),
    ("PDC", VoucherType::Cheque),
    ("ICA", VoucherType::CreditNote),
    ("ISW", VoucherType::CreditNote),
];

impl VoucherType {
    /// Total classification: every voucher string maps to exactly one type.
    /// Prefix tests are case-insensitive.
    pub fn classify(voucher: &str) -> VoucherType {
        let upper = voucher.to_ascii_uppercase();
        for (prefix, voucher_type) in PREFIX_RULES {
            if upper.starts_with(prefix) {
                return *voucher_type;
            }
        }
        VoucherType::Other
    }

    pub fn label(&self) -> &'static str {
        match self {
            VoucherType::Cash => "CASH",
            VoucherType::Cheque => "CHEQUE",
            VoucherType::CreditNote => "CREDIT_NOTE",
            VoucherType::Other => "OTHER",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_prefixes() {
        assert_eq!(VoucherType::classify("CA99"), VoucherType::Cash);
        assert_eq!(VoucherType::classify("RV2024-001"), VoucherType::Cash);
        assert_eq!(VoucherType::classify("PDC0042"), VoucherType::Cheque);
        assert_eq!(VoucherType::classify("ICA123"), VoucherType::CreditNote);
        assert_eq!(VoucherType::classify("ISW77"), VoucherType::CreditNote);
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(VoucherType::classify("ca99"), VoucherType::Cash);
        assert_eq!(VoucherType::classify("pdc1"), VoucherType::Cheque);
        assert_eq!(VoucherType::classify("Ica5"), VoucherType::CreditNote);
    }

    #[test]
    fn test_classify_is_total() {
        // Anything that matches no rule is Other, including the empty string.
        assert_eq!(VoucherType::classify("XYZ"), VoucherType::Other);
        assert_eq!(VoucherType::classify(""), VoucherType::Other);
        assert_eq!(VoucherType::classify("REM001"), VoucherType::Other);
        assert_eq!(VoucherType::classify("SQP001"), VoucherType::Other);
        // "C" alone is not a CA prefix match.
        assert_eq!(VoucherType::classify("C1"), VoucherType::Other);
    }

    #[test]
    fn test_labels() {
        assert_eq!(VoucherType::Cash.label(), "CASH");
        assert_eq!(VoucherType::Cheque.label(), "CHEQUE");
        assert_eq!(VoucherType::CreditNote.label(), "CREDIT_NOTE");
        assert_eq!(VoucherType::Other.label(), "OTHER");
    }
}
