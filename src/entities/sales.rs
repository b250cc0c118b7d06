use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::unit::UnitOfMeasurement;

/// One sales event. Same shape as goods receiving with the counterparty being
/// a customer. Append-only.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sales")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub product_name: String,
    pub customer_name: String,
    pub quantity: i32,
    pub unit_of_measurement: UnitOfMeasurement,
    pub rate_per_unit: Decimal,
    /// Tax-inclusive total, stored at two fractional digits.
    pub total_rate: Decimal,
    pub tax: Decimal,
    pub timestamp: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
