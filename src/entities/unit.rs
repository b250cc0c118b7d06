use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Units a quantity can be recorded in. Persisted as the lowercase label.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum UnitOfMeasurement {
    #[sea_orm(string_value = "pcs")]
    Pcs,
    #[sea_orm(string_value = "kg")]
    Kg,
    #[sea_orm(string_value = "liters")]
    Liters,
    #[sea_orm(string_value = "boxes")]
    Boxes,
    #[sea_orm(string_value = "packs")]
    Packs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn round_trips_through_its_label() {
        for unit in [
            UnitOfMeasurement::Pcs,
            UnitOfMeasurement::Kg,
            UnitOfMeasurement::Liters,
            UnitOfMeasurement::Boxes,
            UnitOfMeasurement::Packs,
        ] {
            let label = unit.to_string();
            assert_eq!(UnitOfMeasurement::from_str(&label).unwrap(), unit);
        }
    }

    #[test]
    fn rejects_unknown_labels() {
        assert!(UnitOfMeasurement::from_str("pallets").is_err());
    }
}
