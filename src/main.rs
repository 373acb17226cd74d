use clap::Parser;
use ecomcheck::application::engine::ReconciliationEngine;
use ecomcheck::domain::entity::Dataset;
use ecomcheck::domain::ports::SnapshotBox;
use ecomcheck::infrastructure::in_memory::InMemorySnapshot;
use ecomcheck::interfaces::csv::load_dataset;
use ecomcheck::interfaces::report_writer::ReportWriter;
use ecomcheck::interfaces::summary_writer::SummaryWriter;
use miette::{IntoDiagnostic, Result, bail};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory containing the five entity CSV files
    /// (customers, products, orders, order_items, payments).
    data_dir: Option<PathBuf>,

    /// Path to a persistent database (optional). If provided, uses RocksDB:
    /// the CSVs are ingested into the store and validation reads it back.
    /// With no data directory, validates an existing store.
    #[arg(long)]
    db_path: Option<PathBuf>,

    /// Emit the report as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Append per-table row counts and a combined per-order view
    /// (customer email, product names, payment status).
    #[arg(long)]
    summary: bool,
}

/// Opens the persistent store, ingesting a dataset first when one was
/// loaded, and hands it back as the validation snapshot. With `load_back`
/// the store's tables are also read out for the summary view.
#[cfg(feature = "storage-rocksdb")]
fn store_snapshot(
    db_path: &Path,
    dataset: Option<Dataset>,
    load_back: bool,
) -> ecomcheck::error::Result<(SnapshotBox, Option<Dataset>)> {
    let store = ecomcheck::infrastructure::rocksdb::RocksDbStore::open(db_path)?;
    if let Some(dataset) = &dataset {
        store.ingest(dataset)?;
    }
    let loaded = if load_back {
        Some(store.load_dataset()?)
    } else {
        None
    };
    Ok((Box::new(store), loaded))
}

#[cfg(not(feature = "storage-rocksdb"))]
fn store_snapshot(
    _db_path: &Path,
    _dataset: Option<Dataset>,
    _load_back: bool,
) -> ecomcheck::error::Result<(SnapshotBox, Option<Dataset>)> {
    Err(ecomcheck::error::ValidationError::Store(
        "this build does not include the `storage-rocksdb` feature".to_string(),
    ))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let snapshot: SnapshotBox;
    let summary_data: Option<Dataset>;
    match (&cli.data_dir, &cli.db_path) {
        (Some(dir), None) => {
            let dataset = load_dataset(dir).into_diagnostic()?;
            summary_data = cli.summary.then(|| dataset.clone());
            snapshot = Box::new(InMemorySnapshot::new(dataset));
        }
        (Some(dir), Some(db_path)) => {
            let dataset = load_dataset(dir).into_diagnostic()?;
            summary_data = cli.summary.then(|| dataset.clone());
            let (snap, _) = store_snapshot(db_path, Some(dataset), false).into_diagnostic()?;
            snapshot = snap;
        }
        (None, Some(db_path)) => {
            let (snap, loaded) = store_snapshot(db_path, None, cli.summary).into_diagnostic()?;
            snapshot = snap;
            summary_data = loaded;
        }
        (None, None) => bail!("provide a data directory, a --db-path, or both"),
    }

    let engine = ReconciliationEngine::new(snapshot);
    let report = engine.run().await.into_diagnostic()?;

    let stdout = io::stdout();
    if cli.json {
        serde_json::to_writer_pretty(stdout.lock(), &report).into_diagnostic()?;
        println!();
    } else {
        let mut writer = ReportWriter::new(stdout.lock());
        writer.write_report(&report).into_diagnostic()?;
    }

    if let Some(dataset) = &summary_data {
        let mut writer = SummaryWriter::new(stdout.lock());
        writer.write_summary(dataset).into_diagnostic()?;
    }

    Ok(())
}
