use std::sync::Arc;

use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use serde::Deserialize;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::{
    db::DbPool,
    entities::{
        product_master::{self, Column as ProductColumn, Entity as ProductMaster},
        UnitOfMeasurement,
    },
    errors::StoreError,
    events::{Event, EventSender},
};

use super::{validate_positive_amount, validate_tax_percent};

/// Input for creating a product master record. Leading and trailing
/// whitespace on text fields is discarded before validation.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewProduct {
    #[validate(length(min = 1, message = "barcode is required"))]
    pub barcode: String,
    #[validate(length(min = 1, message = "SKU ID is required"))]
    pub sku_id: String,
    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,
    #[validate(length(min = 1, message = "subcategory is required"))]
    pub subcategory: String,
    /// Relative path produced by the asset linker, if an image was uploaded.
    pub product_image_path: Option<String>,
    #[validate(length(min = 1, message = "product name is required"))]
    pub product_name: String,
    pub description: Option<String>,
    #[validate(custom = "validate_tax_percent")]
    pub tax: Decimal,
    #[validate(custom = "validate_positive_amount")]
    pub price: Decimal,
    pub default_unit_of_measurement: UnitOfMeasurement,
}

impl NewProduct {
    fn trimmed(self) -> Self {
        Self {
            barcode: self.barcode.trim().to_string(),
            sku_id: self.sku_id.trim().to_string(),
            category: self.category.trim().to_string(),
            subcategory: self.subcategory.trim().to_string(),
            product_name: self.product_name.trim().to_string(),
            description: self
                .description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
            ..self
        }
    }
}

/// Service for the product master catalog. Create and read only; products
/// are never updated or deleted through the core.
#[derive(Clone)]
pub struct CatalogService {
    db: Arc<DbPool>,
    event_sender: Arc<EventSender>,
}

impl CatalogService {
    pub fn new(db: Arc<DbPool>, event_sender: Arc<EventSender>) -> Self {
        Self { db, event_sender }
    }

    /// Validates and inserts a product row.
    ///
    /// A uniqueness violation of `barcode`, `sku_id`, or `product_name` is
    /// reported as `DuplicateKey` naming the collided field; nothing is
    /// persisted on any failure path.
    #[instrument(skip(self, new))]
    pub async fn insert_product(
        &self,
        new: NewProduct,
    ) -> Result<product_master::Model, StoreError> {
        let db = &*self.db;

        let new = new.trimmed();
        new.validate()?;

        let product = product_master::ActiveModel {
            barcode: Set(new.barcode),
            sku_id: Set(new.sku_id),
            category: Set(new.category),
            subcategory: Set(new.subcategory),
            product_image_path: Set(new.product_image_path),
            product_name: Set(new.product_name),
            description: Set(new.description),
            tax: Set(new.tax),
            price: Set(new.price),
            default_unit_of_measurement: Set(new.default_unit_of_measurement),
            ..Default::default()
        };

        let row = product
            .insert(db)
            .await
            .map_err(StoreError::from_insert_err)?;

        if let Err(e) = self
            .event_sender
            .send(Event::ProductCreated {
                product_id: row.id,
                product_name: row.product_name.clone(),
            })
            .await
        {
            warn!(error = %e, "failed to publish product created event");
        }

        info!(product_id = row.id, product_name = %row.product_name, "product created");

        Ok(row)
    }

    /// All product names in ascending lexicographic order. Re-queries on
    /// every call; never cached.
    #[instrument(skip(self))]
    pub async fn list_product_names(&self) -> Result<Vec<String>, StoreError> {
        let db = &*self.db;

        ProductMaster::find()
            .select_only()
            .column(ProductColumn::ProductName)
            .order_by_asc(ProductColumn::ProductName)
            .into_tuple::<String>()
            .all(db)
            .await
            .map_err(StoreError::Storage)
    }

    /// Exact-match lookup by product name. Absence is `Ok(None)`, not an
    /// error.
    #[instrument(skip(self))]
    pub async fn get_product(
        &self,
        product_name: &str,
    ) -> Result<Option<product_master::Model>, StoreError> {
        let db = &*self.db;

        ProductMaster::find()
            .filter(ProductColumn::ProductName.eq(product_name))
            .one(db)
            .await
            .map_err(StoreError::Storage)
    }
}
