use std::path::PathBuf;

use sea_orm::error::DbErr;
use sea_orm::SqlErr;

/// Which unique column a catalog insert collided on.
///
/// The product catalog carries three independent unique keys; a violation of
/// any one of them is reported as a single `DuplicateKey` failure naming the
/// offending field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateField {
    Barcode,
    SkuId,
    ProductName,
}

impl DuplicateField {
    /// Classify a unique-constraint violation by inspecting the constraint
    /// detail reported by the driver. SQLite phrases these as
    /// `UNIQUE constraint failed: product_master.barcode`.
    pub(crate) fn from_db_err(err: &DbErr) -> Option<Self> {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                Self::from_constraint_detail(&detail)
            }
            _ => None,
        }
    }

    fn from_constraint_detail(detail: &str) -> Option<Self> {
        if detail.contains("barcode") {
            Some(Self::Barcode)
        } else if detail.contains("sku_id") {
            Some(Self::SkuId)
        } else if detail.contains("product_name") {
            Some(Self::ProductName)
        } else {
            None
        }
    }

    /// The column name as persisted, for diagnostics.
    pub fn column_name(&self) -> &'static str {
        match self {
            Self::Barcode => "barcode",
            Self::SkuId => "sku_id",
            Self::ProductName => "product_name",
        }
    }
}

impl std::fmt::Display for DuplicateField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column_name())
    }
}

/// Failure to link a product image into the managed asset directory.
///
/// Asset failures are non-fatal: the caller is expected to surface a warning
/// and persist the product without an image path.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("source image {0} does not exist")]
    SourceMissing(PathBuf),

    #[error("failed to copy image: {0}")]
    Copy(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("duplicate {0}: a product with this value already exists")]
    DuplicateKey(DuplicateField),

    #[error("storage error: {0}")]
    Storage(#[from] DbErr),

    #[error("asset error: {0}")]
    Asset(#[from] AssetError),

    #[error("credential hash error: {0}")]
    Hash(String),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl From<validator::ValidationErrors> for StoreError {
    fn from(err: validator::ValidationErrors) -> Self {
        StoreError::Validation(err.to_string())
    }
}

impl StoreError {
    /// Wrap an insert failure, promoting unique-constraint violations to
    /// `DuplicateKey` so callers can tell which field collided.
    pub(crate) fn from_insert_err(err: DbErr) -> Self {
        match DuplicateField::from_db_err(&err) {
            Some(field) => StoreError::DuplicateKey(field),
            None => StoreError::Storage(err),
        }
    }

    /// True for failures caused by caller-supplied data rather than the store.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::DuplicateKey(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_constraint_detail_by_column() {
        assert_eq!(
            DuplicateField::from_constraint_detail(
                "UNIQUE constraint failed: product_master.barcode"
            ),
            Some(DuplicateField::Barcode)
        );
        assert_eq!(
            DuplicateField::from_constraint_detail(
                "UNIQUE constraint failed: product_master.sku_id"
            ),
            Some(DuplicateField::SkuId)
        );
        assert_eq!(
            DuplicateField::from_constraint_detail(
                "UNIQUE constraint failed: product_master.product_name"
            ),
            Some(DuplicateField::ProductName)
        );
        assert_eq!(
            DuplicateField::from_constraint_detail("UNIQUE constraint failed: operators.username"),
            None
        );
    }

    #[test]
    fn duplicate_key_message_names_the_field() {
        let err = StoreError::DuplicateKey(DuplicateField::SkuId);
        assert!(err.to_string().contains("sku_id"));
        assert!(err.is_rejection());
    }

    #[test]
    fn storage_errors_are_not_rejections() {
        let err = StoreError::Storage(DbErr::Custom("connection lost".into()));
        assert!(!err.is_rejection());
    }
}
