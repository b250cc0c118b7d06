//! Integration tests for product-image linking: naming, overwrite behavior,
//! and the missing-source paths.

mod common;

use std::path::Path;

use common::TestStores;
use stockroom_core::errors::AssetError;

#[tokio::test]
async fn links_an_image_under_the_sku_name() {
    let t = TestStores::new().await;

    let source = t.scratch_dir().join("upload.png");
    std::fs::write(&source, b"png bytes").expect("failed to write fixture");

    let linked = t
        .stores
        .assets
        .link_image(Some(source.as_path()), "SKU-001")
        .await
        .expect("link failed")
        .expect("expected a linked path");

    assert!(linked.ends_with("SKU-001.png"));
    let dest = t.asset_dir().join("SKU-001.png");
    assert_eq!(std::fs::read(dest).expect("dest missing"), b"png bytes");
}

#[tokio::test]
async fn relinking_overwrites_the_previous_image() {
    let t = TestStores::new().await;

    let first = t.scratch_dir().join("first.png");
    let second = t.scratch_dir().join("second.png");
    std::fs::write(&first, b"first").expect("failed to write fixture");
    std::fs::write(&second, b"second").expect("failed to write fixture");

    t.stores
        .assets
        .link_image(Some(first.as_path()), "SKU-001")
        .await
        .expect("link failed");
    t.stores
        .assets
        .link_image(Some(second.as_path()), "SKU-001")
        .await
        .expect("link failed");

    let dest = t.asset_dir().join("SKU-001.png");
    assert_eq!(std::fs::read(dest).expect("dest missing"), b"second");
}

#[tokio::test]
async fn no_source_means_no_path_and_no_error() {
    let t = TestStores::new().await;

    let linked = t
        .stores
        .assets
        .link_image(None, "SKU-001")
        .await
        .expect("link failed");
    assert!(linked.is_none());
}

#[tokio::test]
async fn missing_source_is_a_warning_and_leaves_no_partial_file() {
    let t = TestStores::new().await;

    let err = t
        .stores
        .assets
        .link_image(Some(Path::new("/nonexistent/upload.png")), "SKU-001")
        .await
        .expect_err("missing source must be reported");
    assert!(matches!(err, AssetError::SourceMissing(_)));

    // No partial or zero-byte destination file was created.
    assert!(!t.asset_dir().join("SKU-001.png").exists());
}

#[tokio::test]
async fn extensionless_sources_are_linked_under_the_bare_sku() {
    let t = TestStores::new().await;

    let source = t.scratch_dir().join("upload");
    std::fs::write(&source, b"raw bytes").expect("failed to write fixture");

    let linked = t
        .stores
        .assets
        .link_image(Some(source.as_path()), "SKU-001")
        .await
        .expect("link failed")
        .expect("expected a linked path");

    assert!(linked.ends_with("SKU-001"));
    assert!(t.asset_dir().join("SKU-001").exists());
}
