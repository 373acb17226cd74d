use rand::Rng;
use std::io::Error;
use std::path::Path;

/// Writes a synthetic five-table dataset that is consistent by
/// construction: order totals equal their item sums, and each order gets
/// one payment reusing the order total.
pub fn generate_dataset(
    dir: &Path,
    n_customers: u64,
    n_products: u64,
    n_orders: u64,
) -> Result<(), Error> {
    let mut rng = rand::thread_rng();

    let mut customers = csv::Writer::from_path(dir.join("customers.csv"))?;
    customers.write_record([
        "customer_id",
        "first_name",
        "last_name",
        "email",
        "signup_date",
        "country",
    ])?;
    for i in 1..=n_customers {
        let country = ["US", "GB", "CA", "DE", "FR"][rng.gen_range(0..5)];
        customers.write_record([
            i.to_string().as_str(),
            &format!("First{i}"),
            &format!("Last{i}"),
            &format!("user{i}@example.com"),
            "2025-11-01",
            country,
        ])?;
    }
    customers.flush()?;

    let mut products = csv::Writer::from_path(dir.join("products.csv"))?;
    products.write_record(["product_id", "sku", "name", "category", "price"])?;
    for i in 1..=n_products {
        let cents: u64 = rng.gen_range(500..20000);
        let category = ["Electronics", "Home", "Books", "Sports", "Beauty"][rng.gen_range(0..5)];
        products.write_record([
            i.to_string().as_str(),
            &format!("SKU-{i:04}"),
            &format!("Product {i}"),
            category,
            &format_cents(cents),
        ])?;
    }
    products.flush()?;

    let mut orders = csv::Writer::from_path(dir.join("orders.csv"))?;
    let mut items = csv::Writer::from_path(dir.join("order_items.csv"))?;
    let mut payments = csv::Writer::from_path(dir.join("payments.csv"))?;
    orders.write_record(["order_id", "customer_id", "order_date", "total_amount", "status"])?;
    items.write_record([
        "order_item_id",
        "order_id",
        "product_id",
        "quantity",
        "unit_price",
    ])?;
    payments.write_record([
        "payment_id",
        "order_id",
        "payment_method",
        "payment_date",
        "amount",
        "payment_status",
    ])?;

    let mut order_item_id: u64 = 1;
    for order_id in 1..=n_orders {
        let customer_id = rng.gen_range(1..=n_customers);
        let mut total_cents: u64 = 0;
        for _ in 0..rng.gen_range(1..=3) {
            let product_id = rng.gen_range(1..=n_products);
            let quantity: u64 = rng.gen_range(1..=4);
            let unit_cents: u64 = rng.gen_range(500..20000);
            total_cents += quantity * unit_cents;
            items.write_record([
                order_item_id.to_string().as_str(),
                &order_id.to_string(),
                &product_id.to_string(),
                &quantity.to_string(),
                &format_cents(unit_cents),
            ])?;
            order_item_id += 1;
        }

        orders.write_record([
            order_id.to_string().as_str(),
            &customer_id.to_string(),
            "2026-01-15",
            &format_cents(total_cents),
            "completed",
        ])?;

        // One payment per order, reusing the order total.
        payments.write_record([
            order_id.to_string().as_str(),
            &order_id.to_string(),
            "card",
            "2026-01-16",
            &format_cents(total_cents),
            "settled",
        ])?;
    }
    orders.flush()?;
    items.flush()?;
    payments.flush()?;
    Ok(())
}

fn format_cents(cents: u64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}
