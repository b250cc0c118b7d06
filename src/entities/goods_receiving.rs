use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::unit::UnitOfMeasurement;

/// One goods-receiving event. Append-only; rows are never updated or deleted.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "goods_receiving")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub product_name: String,
    pub supplier_name: String,
    pub quantity: i32,
    pub unit_of_measurement: UnitOfMeasurement,
    pub rate_per_unit: Decimal,
    /// Tax-inclusive total, stored at two fractional digits.
    pub total_rate: Decimal,
    pub tax: Decimal,
    /// Server-assigned at insertion; non-decreasing with insertion order.
    pub timestamp: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
