use rust_decimal::Decimal;
use validator::ValidationError;

pub mod assets;
pub mod catalog;
pub mod credentials;
pub mod totals;
pub mod transactions;

pub use assets::AssetLinker;
pub use catalog::{CatalogService, NewProduct};
pub use credentials::CredentialService;
pub use transactions::{NewTransaction, TransactionLogService};

/// Monetary amounts (price, rate per unit) must be strictly positive.
pub(crate) fn validate_positive_amount(value: &Decimal) -> Result<(), ValidationError> {
    if *value <= Decimal::ZERO {
        let mut err = ValidationError::new("positive_amount");
        err.message = Some("must be greater than zero".into());
        return Err(err);
    }
    Ok(())
}

/// Tax is a percentage in the closed range 0..=100.
pub(crate) fn validate_tax_percent(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::ZERO || *value > Decimal::ONE_HUNDRED {
        let mut err = ValidationError::new("tax_percent");
        err.message = Some("must be between 0 and 100".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn positive_amount_rejects_zero_and_negative() {
        assert!(validate_positive_amount(&dec!(0)).is_err());
        assert!(validate_positive_amount(&dec!(-1.50)).is_err());
        assert!(validate_positive_amount(&dec!(0.01)).is_ok());
    }

    #[test]
    fn tax_percent_bounds_are_inclusive() {
        assert!(validate_tax_percent(&dec!(0)).is_ok());
        assert!(validate_tax_percent(&dec!(100)).is_ok());
        assert!(validate_tax_percent(&dec!(100.01)).is_err());
        assert!(validate_tax_percent(&dec!(-0.01)).is_err());
    }
}
