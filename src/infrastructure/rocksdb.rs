use crate::domain::entity::{Customer, Dataset, Order, OrderItem, Payment, TABLES};
use crate::domain::ports::{DetailTable, FkEdge, OrderAggregate, RelationalSnapshot};
use crate::error::{Result, ValidationError};
use async_trait::async_trait;
use rocksdb::{ColumnFamilyDescriptor, DB, Options};
use rust_decimal::Decimal;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

/// A persistent table store using RocksDB, one column family per table.
///
/// Rows are keyed by the big-endian bytes of their primary key and stored
/// as JSON. Ingesting a dataset replaces each table wholesale: the column
/// family is cleared before the new rows are written, so rows absent from
/// the incoming dataset do not linger in the store.
///
/// The store answers snapshot queries directly, which lets a previously
/// ingested database be validated without the source CSV files.
///
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>`).
#[derive(Clone)]
pub struct RocksDbStore {
    db: Arc<DB>,
}

impl RocksDbStore {
    /// Opens or creates a RocksDB instance at the specified path, ensuring
    /// the five table column families exist.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cfs: Vec<ColumnFamilyDescriptor> = TABLES
            .iter()
            .map(|name| ColumnFamilyDescriptor::new(*name, Options::default()))
            .collect();

        let db = DB::open_cf_descriptors(&opts, path, cfs)?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Replaces all five tables of the store with the dataset's contents.
    pub fn ingest(&self, dataset: &Dataset) -> Result<()> {
        self.put_rows("customers", &dataset.customers, |c| c.customer_id)?;
        self.put_rows("products", &dataset.products, |p| p.product_id)?;
        self.put_rows("orders", &dataset.orders, |o| o.order_id)?;
        self.put_rows("order_items", &dataset.order_items, |i| i.order_item_id)?;
        self.put_rows("payments", &dataset.payments, |p| p.payment_id)?;
        Ok(())
    }

    /// Reads all five tables back out of the store.
    pub fn load_dataset(&self) -> Result<Dataset> {
        Ok(Dataset {
            customers: self.scan("customers")?,
            products: self.scan("products")?,
            orders: self.scan("orders")?,
            order_items: self.scan("order_items")?,
            payments: self.scan("payments")?,
        })
    }

    fn cf(&self, name: &str) -> Result<&rocksdb::ColumnFamily> {
        self.db
            .cf_handle(name)
            .ok_or_else(|| ValidationError::Store(format!("column family `{name}` not found")))
    }

    fn put_rows<T: Serialize>(&self, table: &str, rows: &[T], key: impl Fn(&T) -> u64) -> Result<()> {
        let cf = self.cf(table)?;
        // Replace, not upsert: keys are fixed-width u64 big-endian bytes,
        // so a 9-byte upper bound clears every existing row first.
        let lower: &[u8] = &[];
        let upper: &[u8] = &[0xff; 9];
        self.db.delete_range_cf(cf, lower, upper)?;
        for row in rows {
            let value = serde_json::to_vec(row)
                .map_err(|e| ValidationError::Store(format!("serialization error: {e}")))?;
            self.db.put_cf(cf, key(row).to_be_bytes(), value)?;
        }
        Ok(())
    }

    fn scan<T: DeserializeOwned>(&self, table: &str) -> Result<Vec<T>> {
        let cf = self.cf(table)?;
        let mut rows = Vec::new();
        for item in self.db.iterator_cf(cf, rocksdb::IteratorMode::Start) {
            let (_key, value) = item?;
            let row = serde_json::from_slice(&value).map_err(|e| {
                ValidationError::Store(format!("corrupt row in `{table}`: {e}"))
            })?;
            rows.push(row);
        }
        Ok(rows)
    }

    fn order_ids(&self) -> Result<HashSet<u64>> {
        let orders: Vec<Order> = self.scan("orders")?;
        Ok(orders.into_iter().map(|o| o.order_id).collect())
    }
}

#[async_trait]
impl RelationalSnapshot for RocksDbStore {
    async fn unmatched_count(&self, edge: FkEdge) -> Result<u64> {
        let count = match edge {
            FkEdge::OrderToCustomer => {
                let customers: Vec<Customer> = self.scan("customers")?;
                let customer_ids: HashSet<u64> =
                    customers.into_iter().map(|c| c.customer_id).collect();
                let orders: Vec<Order> = self.scan("orders")?;
                orders
                    .iter()
                    .filter(|o| !customer_ids.contains(&o.customer_id))
                    .count()
            }
            FkEdge::PaymentToOrder => {
                let order_ids = self.order_ids()?;
                let payments: Vec<Payment> = self.scan("payments")?;
                payments
                    .iter()
                    .filter(|p| !order_ids.contains(&p.order_id))
                    .count()
            }
        };
        Ok(count as u64)
    }

    async fn order_detail_sums(&self, detail: DetailTable) -> Result<Vec<OrderAggregate>> {
        let orders: Vec<Order> = self.scan("orders")?;
        let order_ids: HashSet<u64> = orders.iter().map(|o| o.order_id).collect();

        let mut sums: HashMap<u64, Decimal> = HashMap::new();
        match detail {
            DetailTable::OrderItems => {
                let items: Vec<OrderItem> = self.scan("order_items")?;
                for item in items {
                    if order_ids.contains(&item.order_id) {
                        *sums.entry(item.order_id).or_default() += item.subtotal();
                    }
                }
            }
            DetailTable::Payments => {
                let payments: Vec<Payment> = self.scan("payments")?;
                for payment in payments {
                    if order_ids.contains(&payment.order_id) {
                        *sums.entry(payment.order_id).or_default() += payment.amount;
                    }
                }
            }
        }

        Ok(orders
            .iter()
            .map(|o| OrderAggregate {
                order_id: o.order_id,
                total_amount: o.total_amount,
                detail_sum: sums.get(&o.order_id).copied().unwrap_or(Decimal::ZERO),
            })
            .collect())
    }
}
