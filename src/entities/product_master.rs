use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::unit::UnitOfMeasurement;

/// A product master record.
///
/// `barcode`, `sku_id`, and `product_name` are each globally unique.
/// Transaction logs reference products by `product_name` as a free-text
/// label, so there is deliberately no relation to the log tables.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product_master")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub barcode: String,
    #[sea_orm(unique)]
    pub sku_id: String,
    pub category: String,
    pub subcategory: String,
    /// Relative path under the managed asset directory, if an image was linked.
    pub product_image_path: Option<String>,
    #[sea_orm(unique)]
    pub product_name: String,
    pub description: Option<String>,
    /// Tax percentage, 0..=100.
    pub tax: Decimal,
    pub price: Decimal,
    pub default_unit_of_measurement: UnitOfMeasurement,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
