use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Table names in loading order. Each corresponds to a `<name>.csv` file
/// and, under the RocksDB backend, a column family.
pub const TABLES: [&str; 5] = [
    "customers",
    "products",
    "orders",
    "order_items",
    "payments",
];

/// A customer row. Attributes other than the key are opaque to the engine.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct Customer {
    pub customer_id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub signup_date: String,
    pub country: String,
}

/// A product row. Opaque to the engine beyond its key.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct Product {
    pub product_id: u64,
    pub sku: String,
    pub name: String,
    pub category: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
}

#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct Order {
    pub order_id: u64,
    pub customer_id: u64,
    pub order_date: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub total_amount: Decimal,
    pub status: String,
}

#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct OrderItem {
    pub order_item_id: u64,
    pub order_id: u64,
    pub product_id: u64,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub unit_price: Decimal,
}

impl OrderItem {
    /// Line subtotal, `quantity × unit_price`, unrounded.
    pub fn subtotal(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_price
    }
}

#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct Payment {
    pub payment_id: u64,
    pub order_id: u64,
    pub payment_method: String,
    pub payment_date: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub payment_status: String,
}

/// The five related tables, as loaded from one snapshot of the store.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Dataset {
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    pub order_items: Vec<OrderItem>,
    pub payments: Vec<Payment>,
}
