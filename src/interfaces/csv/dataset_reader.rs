use super::table_reader::TableReader;
use crate::domain::entity::Dataset;
use crate::error::{Result, ValidationError};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::path::Path;

/// Loads the five entity tables from `<dir>/<table>.csv` files.
///
/// Every table file must be present; a missing file is a distinct error
/// from a malformed row, and a malformed numeric field fails the load
/// rather than coercing to zero.
pub fn load_dataset(dir: &Path) -> Result<Dataset> {
    Ok(Dataset {
        customers: load_table(dir, "customers")?,
        products: load_table(dir, "products")?,
        orders: load_table(dir, "orders")?,
        order_items: load_table(dir, "order_items")?,
        payments: load_table(dir, "payments")?,
    })
}

fn load_table<T: DeserializeOwned>(dir: &Path, table: &'static str) -> Result<Vec<T>> {
    let path = dir.join(format!("{table}.csv"));
    if !path.exists() {
        return Err(ValidationError::MissingTable(path));
    }

    let file = File::open(&path)?;
    TableReader::new(file)
        .rows()
        .map(|row| row.map_err(|source| ValidationError::InvalidRow { table, source }))
        .collect()
}
