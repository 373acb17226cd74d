use rust_decimal::Decimal;
use serde::Serialize;

/// One order whose declared total disagrees with a detail sum.
///
/// `expected` is the rounded `total_amount`, `actual` the rounded detail
/// sum, `delta = actual - expected`.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct Mismatch {
    pub order_id: u64,
    pub expected: Decimal,
    pub actual: Decimal,
    pub delta: Decimal,
}

impl Mismatch {
    /// Builds a mismatch from already-rounded sides.
    pub fn new(order_id: u64, expected: Decimal, actual: Decimal) -> Self {
        Self {
            order_id,
            expected,
            actual,
            delta: actual - expected,
        }
    }
}

/// The combined result of the four checks. Pure data: it does not decide
/// pass/fail, that policy belongs to the caller.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct ValidationReport {
    pub orders_missing_customers: u64,
    pub payments_missing_orders: u64,
    pub order_item_mismatches: Vec<Mismatch>,
    pub order_item_mismatch_count: usize,
    pub payment_mismatches: Vec<Mismatch>,
    pub payment_mismatch_count: usize,
}

impl ValidationReport {
    /// Assembles the report. The counts are derived from the mismatch lists
    /// here, so they cannot disagree with the list lengths.
    pub fn new(
        orders_missing_customers: u64,
        payments_missing_orders: u64,
        order_item_mismatches: Vec<Mismatch>,
        payment_mismatches: Vec<Mismatch>,
    ) -> Self {
        Self {
            orders_missing_customers,
            payments_missing_orders,
            order_item_mismatch_count: order_item_mismatches.len(),
            order_item_mismatches,
            payment_mismatch_count: payment_mismatches.len(),
            payment_mismatches,
        }
    }

    /// True when every check came back clean. Convenience for callers; the
    /// report itself attaches no judgement to it.
    pub fn is_clean(&self) -> bool {
        self.orders_missing_customers == 0
            && self.payments_missing_orders == 0
            && self.order_item_mismatches.is_empty()
            && self.payment_mismatches.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_counts_track_lists() {
        let report = ValidationReport::new(
            0,
            1,
            vec![Mismatch::new(2, dec!(75.00), dec!(74.99))],
            vec![],
        );
        assert_eq!(report.order_item_mismatch_count, 1);
        assert_eq!(
            report.order_item_mismatch_count,
            report.order_item_mismatches.len()
        );
        assert_eq!(report.payment_mismatch_count, 0);
        assert!(!report.is_clean());
    }

    #[test]
    fn test_delta_is_actual_minus_expected() {
        let m = Mismatch::new(2, dec!(75.00), dec!(74.99));
        assert_eq!(m.delta, dec!(-0.01));
    }

    #[test]
    fn test_empty_report_is_clean() {
        let report = ValidationReport::new(0, 0, vec![], vec![]);
        assert!(report.is_clean());
    }
}
