use std::path::{Path, PathBuf};

use rust_decimal_macros::dec;
use stockroom_core::{
    config::AppConfig,
    entities::UnitOfMeasurement,
    events::Event,
    services::{NewProduct, NewTransaction},
    Stores,
};
use tempfile::TempDir;
use tokio::sync::mpsc;

/// Helper harness for spinning up stores backed by a throwaway SQLite file.
///
/// A file-based database is used rather than `sqlite::memory:` because the
/// in-memory form does not share state across pooled connections.
pub struct TestStores {
    pub stores: Stores,
    pub events: mpsc::Receiver<Event>,
    dir: TempDir,
}

impl TestStores {
    /// Construct stores with fresh database state and default configuration.
    pub async fn new() -> Self {
        Self::with_config(|_| {}).await
    }

    /// Construct stores, letting the test adjust the configuration first.
    pub async fn with_config(adjust: impl FnOnce(&mut AppConfig)) -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let db_path = dir.path().join("stockroom_test.db");

        let mut cfg = AppConfig::new(
            format!("sqlite://{}?mode=rwc", db_path.display()),
            dir.path().join("product_images").display().to_string(),
        );
        cfg.db_max_connections = 1;
        cfg.db_min_connections = 1;
        adjust(&mut cfg);

        let (stores, events) = Stores::initialize(&cfg).await.expect("failed to initialize stores");

        Self { stores, events, dir }
    }

    /// The managed asset directory configured for this harness.
    #[allow(dead_code)]
    pub fn asset_dir(&self) -> PathBuf {
        self.dir.path().join("product_images")
    }

    /// Scratch space for test fixture files.
    #[allow(dead_code)]
    pub fn scratch_dir(&self) -> &Path {
        self.dir.path()
    }
}

/// A valid product input; tests override the fields under test.
#[allow(dead_code)]
pub fn sample_product(name: &str, barcode: &str, sku_id: &str) -> NewProduct {
    NewProduct {
        barcode: barcode.to_string(),
        sku_id: sku_id.to_string(),
        category: "Beverages".to_string(),
        subcategory: "Juices".to_string(),
        product_image_path: None,
        product_name: name.to_string(),
        description: Some("1 liter carton".to_string()),
        tax: dec!(5),
        price: dec!(3.20),
        default_unit_of_measurement: UnitOfMeasurement::Pcs,
    }
}

/// A valid transaction input; tests override the fields under test.
#[allow(dead_code)]
pub fn sample_transaction(product_name: &str, counterparty: &str) -> NewTransaction {
    NewTransaction {
        product_name: product_name.to_string(),
        counterparty_name: counterparty.to_string(),
        quantity: 3,
        unit_of_measurement: UnitOfMeasurement::Boxes,
        rate_per_unit: dec!(19.99),
        tax: dec!(7.5),
        total_rate: None,
    }
}
