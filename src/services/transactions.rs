use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};
use serde::Deserialize;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::{
    db::DbPool,
    entities::{
        goods_receiving,
        product_master::{Column as ProductColumn, Entity as ProductMaster},
        sales, UnitOfMeasurement,
    },
    errors::StoreError,
    events::{Event, EventSender},
};

use super::{totals, validate_positive_amount, validate_tax_percent};

/// Input for appending a transaction entry. Goods receiving and sales share
/// this shape; `counterparty_name` is the supplier for receiving and the
/// customer for sales.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewTransaction {
    #[validate(length(min = 1, message = "product name is required"))]
    pub product_name: String,
    #[validate(length(min = 1, message = "counterparty name is required"))]
    pub counterparty_name: String,
    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity: i32,
    pub unit_of_measurement: UnitOfMeasurement,
    #[validate(custom = "validate_positive_amount")]
    pub rate_per_unit: Decimal,
    #[validate(custom = "validate_tax_percent")]
    pub tax: Decimal,
    /// Caller-supplied total, if the caller precomputed one for display.
    /// Must agree with the computed total at storage rounding; the persisted
    /// value is always the computed one.
    pub total_rate: Option<Decimal>,
}

impl NewTransaction {
    fn trimmed(self) -> Self {
        Self {
            product_name: self.product_name.trim().to_string(),
            counterparty_name: self.counterparty_name.trim().to_string(),
            ..self
        }
    }
}

/// A validated entry with all derived fields assigned, ready to append.
struct PreparedEntry {
    product_name: String,
    counterparty_name: String,
    quantity: i32,
    unit_of_measurement: UnitOfMeasurement,
    rate_per_unit: Decimal,
    total_rate: Decimal,
    tax: Decimal,
    timestamp: DateTime<Utc>,
}

/// Service for the append-only goods-receiving and sales logs.
///
/// Both entry kinds run through one validation and computation path; only
/// the target table and counterparty column differ. No update or delete
/// operation exists on either log.
#[derive(Clone)]
pub struct TransactionLogService {
    db: Arc<DbPool>,
    event_sender: Arc<EventSender>,
    require_known_product: bool,
}

impl TransactionLogService {
    pub fn new(db: Arc<DbPool>, event_sender: Arc<EventSender>, require_known_product: bool) -> Self {
        Self {
            db,
            event_sender,
            require_known_product,
        }
    }

    /// Shared trim/validate/derive path for both entry kinds. Runs entirely
    /// before any write; a rejected entry mutates nothing.
    async fn prepare(&self, new: NewTransaction) -> Result<PreparedEntry, StoreError> {
        let db = &*self.db;

        let new = new.trimmed();
        new.validate()?;

        if self.require_known_product {
            let known = ProductMaster::find()
                .filter(ProductColumn::ProductName.eq(&new.product_name))
                .count(db)
                .await?;
            if known == 0 {
                return Err(StoreError::Validation(format!(
                    "unknown product '{}': not in the catalog",
                    new.product_name
                )));
            }
        }

        let computed = totals::round_for_storage(totals::compute_total(
            new.quantity,
            new.rate_per_unit,
            new.tax,
        ));
        if let Some(supplied) = new.total_rate {
            if totals::round_for_storage(supplied) != computed {
                return Err(StoreError::Validation(format!(
                    "supplied total_rate {} disagrees with computed total {}",
                    supplied, computed
                )));
            }
        }

        Ok(PreparedEntry {
            product_name: new.product_name,
            counterparty_name: new.counterparty_name,
            quantity: new.quantity,
            unit_of_measurement: new.unit_of_measurement,
            rate_per_unit: new.rate_per_unit,
            total_rate: computed,
            tax: new.tax,
            timestamp: Utc::now(),
        })
    }

    /// Appends a goods-receiving entry with a server-assigned timestamp.
    #[instrument(skip(self, new))]
    pub async fn insert_goods_receiving(
        &self,
        new: NewTransaction,
    ) -> Result<goods_receiving::Model, StoreError> {
        let entry = self.prepare(new).await?;

        let row = goods_receiving::ActiveModel {
            product_name: Set(entry.product_name),
            supplier_name: Set(entry.counterparty_name),
            quantity: Set(entry.quantity),
            unit_of_measurement: Set(entry.unit_of_measurement),
            rate_per_unit: Set(entry.rate_per_unit),
            total_rate: Set(entry.total_rate),
            tax: Set(entry.tax),
            timestamp: Set(entry.timestamp),
            ..Default::default()
        }
        .insert(&*self.db)
        .await
        .map_err(StoreError::Storage)?;

        if let Err(e) = self
            .event_sender
            .send(Event::GoodsReceived {
                entry_id: row.id,
                product_name: row.product_name.clone(),
            })
            .await
        {
            warn!(error = %e, "failed to publish goods received event");
        }

        info!(
            entry_id = row.id,
            product_name = %row.product_name,
            total_rate = %row.total_rate,
            "goods receiving entry recorded"
        );

        Ok(row)
    }

    /// Appends a sales entry with a server-assigned timestamp.
    #[instrument(skip(self, new))]
    pub async fn insert_sales(&self, new: NewTransaction) -> Result<sales::Model, StoreError> {
        let entry = self.prepare(new).await?;

        let row = sales::ActiveModel {
            product_name: Set(entry.product_name),
            customer_name: Set(entry.counterparty_name),
            quantity: Set(entry.quantity),
            unit_of_measurement: Set(entry.unit_of_measurement),
            rate_per_unit: Set(entry.rate_per_unit),
            total_rate: Set(entry.total_rate),
            tax: Set(entry.tax),
            timestamp: Set(entry.timestamp),
            ..Default::default()
        }
        .insert(&*self.db)
        .await
        .map_err(StoreError::Storage)?;

        if let Err(e) = self
            .event_sender
            .send(Event::SaleRecorded {
                entry_id: row.id,
                product_name: row.product_name.clone(),
            })
            .await
        {
            warn!(error = %e, "failed to publish sale recorded event");
        }

        info!(
            entry_id = row.id,
            product_name = %row.product_name,
            total_rate = %row.total_rate,
            "sales entry recorded"
        );

        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample() -> NewTransaction {
        NewTransaction {
            product_name: " Orange Juice 1L ".into(),
            counterparty_name: "Fresh Farms Ltd".into(),
            quantity: 3,
            unit_of_measurement: UnitOfMeasurement::Boxes,
            rate_per_unit: dec!(19.99),
            tax: dec!(7.5),
            total_rate: None,
        }
    }

    #[test]
    fn trimming_strips_name_whitespace() {
        let new = sample().trimmed();
        assert_eq!(new.product_name, "Orange Juice 1L");
    }

    #[test]
    fn zero_quantity_fails_validation() {
        let new = NewTransaction {
            quantity: 0,
            ..sample()
        };
        assert!(new.validate().is_err());
    }

    #[test]
    fn nonpositive_rate_fails_validation() {
        let new = NewTransaction {
            rate_per_unit: dec!(0),
            ..sample()
        };
        assert!(new.validate().is_err());
    }

    #[test]
    fn tax_above_hundred_fails_validation() {
        let new = NewTransaction {
            tax: dec!(101),
            ..sample()
        };
        assert!(new.validate().is_err());
    }
}
