use crate::domain::entity::Dataset;
use crate::domain::ports::{DetailTable, FkEdge, OrderAggregate, RelationalSnapshot};
use crate::error::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::{HashMap, HashSet};

/// An in-memory snapshot over a loaded `Dataset`.
///
/// Joins are hash-based: membership counts build a `HashSet` of referenced
/// keys, grouped sums build a `HashMap` keyed by `order_id`. Runs in time
/// proportional to the two sets combined.
pub struct InMemorySnapshot {
    dataset: Dataset,
}

impl InMemorySnapshot {
    /// Takes ownership of the dataset; the snapshot never mutates it.
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }

    fn order_ids(&self) -> HashSet<u64> {
        self.dataset.orders.iter().map(|o| o.order_id).collect()
    }
}

#[async_trait]
impl RelationalSnapshot for InMemorySnapshot {
    async fn unmatched_count(&self, edge: FkEdge) -> Result<u64> {
        let count = match edge {
            FkEdge::OrderToCustomer => {
                let customer_ids: HashSet<u64> = self
                    .dataset
                    .customers
                    .iter()
                    .map(|c| c.customer_id)
                    .collect();
                self.dataset
                    .orders
                    .iter()
                    .filter(|o| !customer_ids.contains(&o.customer_id))
                    .count()
            }
            FkEdge::PaymentToOrder => {
                let order_ids = self.order_ids();
                self.dataset
                    .payments
                    .iter()
                    .filter(|p| !order_ids.contains(&p.order_id))
                    .count()
            }
        };
        Ok(count as u64)
    }

    async fn order_detail_sums(&self, detail: DetailTable) -> Result<Vec<OrderAggregate>> {
        let order_ids = self.order_ids();

        // Group detail rows by order, dropping rows that reference no
        // order; those belong to the referential check.
        let mut sums: HashMap<u64, Decimal> = HashMap::new();
        match detail {
            DetailTable::OrderItems => {
                for item in &self.dataset.order_items {
                    if order_ids.contains(&item.order_id) {
                        *sums.entry(item.order_id).or_default() += item.subtotal();
                    }
                }
            }
            DetailTable::Payments => {
                for payment in &self.dataset.payments {
                    if order_ids.contains(&payment.order_id) {
                        *sums.entry(payment.order_id).or_default() += payment.amount;
                    }
                }
            }
        }

        // Outer-join shape: every order appears, detail-less ones at zero.
        Ok(self
            .dataset
            .orders
            .iter()
            .map(|o| OrderAggregate {
                order_id: o.order_id,
                total_amount: o.total_amount,
                detail_sum: sums.get(&o.order_id).copied().unwrap_or(Decimal::ZERO),
            })
            .collect())
    }
}
