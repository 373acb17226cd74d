use crate::domain::entity::Dataset;
use std::collections::HashMap;
use std::io::{self, Write};

/// Writes an inspection view of the dataset: per-table row counts, then one
/// combined line per order joining the customer's email, the distinct
/// product names on the order, and the first payment status.
///
/// Unresolvable joins render as `-`; they are only diagnosed by the
/// validation report, not here.
pub struct SummaryWriter<W: Write> {
    out: W,
}

impl<W: Write> SummaryWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn write_summary(&mut self, dataset: &Dataset) -> io::Result<()> {
        writeln!(self.out, "TABLES:")?;
        writeln!(self.out, "- customers: {} rows", dataset.customers.len())?;
        writeln!(self.out, "- products: {} rows", dataset.products.len())?;
        writeln!(self.out, "- orders: {} rows", dataset.orders.len())?;
        writeln!(self.out, "- order_items: {} rows", dataset.order_items.len())?;
        writeln!(self.out, "- payments: {} rows", dataset.payments.len())?;

        let emails: HashMap<u64, &str> = dataset
            .customers
            .iter()
            .map(|c| (c.customer_id, c.email.as_str()))
            .collect();
        let product_names: HashMap<u64, &str> = dataset
            .products
            .iter()
            .map(|p| (p.product_id, p.name.as_str()))
            .collect();

        let mut products_by_order: HashMap<u64, Vec<&str>> = HashMap::new();
        for item in &dataset.order_items {
            if let Some(name) = product_names.get(&item.product_id).copied() {
                products_by_order.entry(item.order_id).or_default().push(name);
            }
        }

        // First payment status per order, lexicographic like SQL MIN.
        let mut payment_status: HashMap<u64, &str> = HashMap::new();
        for payment in &dataset.payments {
            payment_status
                .entry(payment.order_id)
                .and_modify(|s| {
                    if payment.payment_status.as_str() < *s {
                        *s = payment.payment_status.as_str();
                    }
                })
                .or_insert(payment.payment_status.as_str());
        }

        let mut orders: Vec<_> = dataset.orders.iter().collect();
        orders.sort_unstable_by_key(|o| o.order_id);

        writeln!(self.out, "ORDERS:")?;
        for order in orders {
            let email = emails.get(&order.customer_id).copied().unwrap_or("-");
            let products = match products_by_order.get_mut(&order.order_id) {
                Some(names) => {
                    names.sort_unstable();
                    names.dedup();
                    names.join(", ")
                }
                None => "-".to_string(),
            };
            let status = payment_status.get(&order.order_id).copied().unwrap_or("-");
            writeln!(
                self.out,
                "    order {} | {} | {} | {} | {} | {} | {}",
                order.order_id,
                order.order_date,
                order.total_amount,
                order.status,
                email,
                products,
                status
            )?;
        }
        self.out.flush()
    }
}
