use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, instrument, warn};

use crate::errors::AssetError;

/// Copies uploaded product images into a managed directory and hands back the
/// relative path to record on the product row.
#[derive(Debug, Clone)]
pub struct AssetLinker {
    asset_dir: PathBuf,
}

impl AssetLinker {
    pub fn new(asset_dir: impl Into<PathBuf>) -> Self {
        Self {
            asset_dir: asset_dir.into(),
        }
    }

    pub fn asset_dir(&self) -> &Path {
        &self.asset_dir
    }

    /// Copies the source image into the asset directory as
    /// `<sku_id>.<ext>`, creating the directory if absent. The extension is
    /// preserved verbatim from the upload. A pre-existing file for the same
    /// SKU is overwritten (last-write-wins).
    ///
    /// Returns `Ok(None)` when no source path was provided. A nonexistent
    /// source or a failed copy is an `AssetError`; callers treat it as a
    /// non-fatal warning and may persist the product without an image. No
    /// partial destination file is left behind when the source is missing.
    #[instrument(skip(self))]
    pub async fn link_image(
        &self,
        source: Option<&Path>,
        sku_id: &str,
    ) -> Result<Option<String>, AssetError> {
        let Some(source) = source else {
            return Ok(None);
        };

        if !fs::try_exists(source).await.unwrap_or(false) {
            warn!(source = %source.display(), "image source does not exist");
            return Err(AssetError::SourceMissing(source.to_path_buf()));
        }

        fs::create_dir_all(&self.asset_dir).await?;

        let file_name = match source.extension() {
            Some(ext) => format!("{}.{}", sku_id, ext.to_string_lossy()),
            None => sku_id.to_string(),
        };
        let dest = self.asset_dir.join(&file_name);

        fs::copy(source, &dest).await?;
        debug!(dest = %dest.display(), "linked product image");

        Ok(Some(dest.to_string_lossy().into_owned()))
    }
}
