use crate::domain::money::round_currency;
use crate::domain::ports::{DetailTable, FkEdge, OrderAggregate, SnapshotBox};
use crate::domain::report::{Mismatch, ValidationReport};
use crate::error::Result;

/// Runs the fixed battery of cross-entity consistency checks.
///
/// `ReconciliationEngine` holds a read-only snapshot of the relational
/// dataset and performs no mutation. The snapshot is injected at
/// construction time; there is no process-wide state.
pub struct ReconciliationEngine {
    snapshot: SnapshotBox,
}

impl ReconciliationEngine {
    /// Creates a new engine over the given snapshot.
    pub fn new(snapshot: SnapshotBox) -> Self {
        Self { snapshot }
    }

    /// Count of orders whose `customer_id` matches no customer.
    pub async fn orders_missing_customers(&self) -> Result<u64> {
        self.snapshot.unmatched_count(FkEdge::OrderToCustomer).await
    }

    /// Count of payments whose `order_id` matches no order.
    pub async fn payments_missing_orders(&self) -> Result<u64> {
        self.snapshot.unmatched_count(FkEdge::PaymentToOrder).await
    }

    /// Orders whose declared total disagrees with the sum of their line
    /// item subtotals, ascending by `order_id`.
    pub async fn reconcile_order_items(&self) -> Result<Vec<Mismatch>> {
        let aggregates = self.snapshot.order_detail_sums(DetailTable::OrderItems).await?;
        Ok(mismatches(aggregates))
    }

    /// Orders whose declared total disagrees with the sum of their
    /// payments, ascending by `order_id`.
    pub async fn reconcile_payments(&self) -> Result<Vec<Mismatch>> {
        let aggregates = self.snapshot.order_detail_sums(DetailTable::Payments).await?;
        Ok(mismatches(aggregates))
    }

    /// Runs all four checks and assembles the report.
    ///
    /// The checks are independent and read-only, so they run concurrently
    /// against the snapshot. Assembly attaches no pass/fail judgement.
    pub async fn run(&self) -> Result<ValidationReport> {
        let (orders_missing_customers, payments_missing_orders, item_mismatches, payment_mismatches) =
            tokio::try_join!(
                self.orders_missing_customers(),
                self.payments_missing_orders(),
                self.reconcile_order_items(),
                self.reconcile_payments(),
            )?;

        Ok(ValidationReport::new(
            orders_missing_customers,
            payments_missing_orders,
            item_mismatches,
            payment_mismatches,
        ))
    }
}

/// Rounds both sides of every aggregate and keeps the ones that disagree,
/// sorted ascending by `order_id` regardless of snapshot iteration order.
fn mismatches(aggregates: Vec<OrderAggregate>) -> Vec<Mismatch> {
    let mut out: Vec<Mismatch> = aggregates
        .into_iter()
        .filter_map(|agg| {
            let expected = round_currency(agg.total_amount);
            let actual = round_currency(agg.detail_sum);
            (expected != actual).then(|| Mismatch::new(agg.order_id, expected, actual))
        })
        .collect();
    out.sort_unstable_by_key(|m| m.order_id);
    out
}
