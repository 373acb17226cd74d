#![cfg(feature = "storage-rocksdb")]

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn test_ingest_then_validate_from_store() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("store");

    // 1. First run: ingest the CSVs into the store and validate.
    let mut ingest = Command::new(cargo_bin!());
    ingest
        .arg("tests/fixtures/storefront")
        .arg("--db-path")
        .arg(&db_path);

    ingest
        .assert()
        .success()
        .stdout(predicate::str::contains("- orders_missing_customers: 1"));

    // 2. Second run: validate the persisted store without the CSVs.
    let mut revalidate = Command::new(cargo_bin!());
    revalidate.arg("--db-path").arg(&db_path);

    revalidate
        .assert()
        .success()
        .stdout(predicate::str::contains("- orders_missing_customers: 1"))
        .stdout(predicate::str::contains("- payments_missing_orders: 1"))
        .stdout(predicate::str::contains(
            "order 2: expected 75.00, actual 74.99, delta -0.01",
        ));

    // 3. The summary view reads the tables back out of the store.
    let mut summarize = Command::new(cargo_bin!());
    summarize.arg("--db-path").arg(&db_path).arg("--summary");

    summarize
        .assert()
        .success()
        .stdout(predicate::str::contains("- orders: 5 rows"))
        .stdout(predicate::str::contains(
            "order 1 | 2026-01-10 | 100.00 | completed | user1@example.com | Product 1, Product 2 | settled",
        ));
}

#[test]
fn test_reingest_smaller_dataset_drops_stale_rows() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("store");
    let data_dir = dir.path().join("data");
    std::fs::create_dir(&data_dir).unwrap();

    for table in ["customers", "products", "orders", "order_items", "payments"] {
        std::fs::copy(
            format!("tests/fixtures/storefront/{table}.csv"),
            data_dir.join(format!("{table}.csv")),
        )
        .unwrap();
    }

    let mut first = Command::new(cargo_bin!());
    first.arg(&data_dir).arg("--db-path").arg(&db_path);
    first
        .assert()
        .success()
        .stdout(predicate::str::contains("- payments_missing_orders: 1"));

    // Shrink the dataset: drop the payment aimed at the missing order.
    std::fs::write(
        data_dir.join("payments.csv"),
        "payment_id,order_id,payment_method,payment_date,amount,payment_status\n\
         1,1,card,2026-01-10,100.00,settled\n\
         2,2,card,2026-01-11,75.00,settled\n\
         4,5,card,2026-01-14,5.00,settled\n",
    )
    .unwrap();

    let mut second = Command::new(cargo_bin!());
    second.arg(&data_dir).arg("--db-path").arg(&db_path);

    // The removed payment must not survive in the store.
    second
        .assert()
        .success()
        .stdout(predicate::str::contains("- payments_missing_orders: 0"));
}
