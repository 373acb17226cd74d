use crate::error::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// The two foreign-key edges the referential check covers. The relationship
/// set is fixed; this is deliberately not an extensible rule system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FkEdge {
    /// `orders.customer_id` → `customers.customer_id`
    OrderToCustomer,
    /// `payments.order_id` → `orders.order_id`
    PaymentToOrder,
}

/// The detail table summed per order by a reconciliation check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailTable {
    /// Sum of `quantity × unit_price` over the order's line items.
    OrderItems,
    /// Sum of `amount` over the order's payments.
    Payments,
}

/// One order with its declared total and the summed detail rows.
///
/// Produced with outer-join semantics: an order with no detail rows still
/// appears, with `detail_sum` zero. Both values are unrounded; the engine
/// applies the rounding rule before comparing.
#[derive(Debug, PartialEq, Clone)]
pub struct OrderAggregate {
    pub order_id: u64,
    pub total_amount: Decimal,
    pub detail_sum: Decimal,
}

/// Read-only, point-in-time view of the relational dataset.
///
/// The engine depends on exactly these two capabilities: a hash-join
/// membership count over a foreign-key edge, and a grouped sum of detail
/// rows per order. The backing store is swappable behind this trait.
#[async_trait]
pub trait RelationalSnapshot: Send + Sync {
    /// Count of dependent rows whose foreign key matches no row in the
    /// referenced table. Zero means full referential integrity for the edge.
    async fn unmatched_count(&self, edge: FkEdge) -> Result<u64>;

    /// One aggregate per order. Detail rows referencing an order that does
    /// not exist are excluded; those are `unmatched_count`'s concern.
    async fn order_detail_sums(&self, detail: DetailTable) -> Result<Vec<OrderAggregate>>;
}

pub type SnapshotBox = Box<dyn RelationalSnapshot>;
