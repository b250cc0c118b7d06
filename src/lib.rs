//! Stockroom Core
//!
//! Persistence and validation core for a small retail/warehouse inventory
//! operation: product catalog, append-only goods-receiving and sales logs,
//! operator authentication, tax-inclusive total computation, and
//! product-image asset linkage. The presentation layer (forms, navigation,
//! user messaging) lives outside this crate and consumes [`Stores`].
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod events;
pub mod migrator;
pub mod services;

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::debug;

use crate::config::AppConfig;
use crate::db::DbPool;
use crate::errors::StoreError;
use crate::events::Event;
use crate::services::{AssetLinker, CatalogService, CredentialService, TransactionLogService};

/// The explicitly owned store aggregate.
///
/// Owns the database connection handle and the services built over it; there
/// is no process-wide state. Construct once at startup with
/// [`Stores::initialize`] and release with [`Stores::shutdown`].
pub struct Stores {
    db: Arc<DbPool>,
    pub catalog: CatalogService,
    pub transactions: TransactionLogService,
    pub credentials: CredentialService,
    pub assets: AssetLinker,
}

impl Stores {
    /// Connects to the backing store, runs migrations, and seeds the default
    /// operator accounts. Idempotent across restarts.
    ///
    /// Also returns the receiving end of the domain-event channel for the
    /// presentation layer to drive its reactive updates from.
    ///
    /// # Errors
    /// A connection or migration failure here is the one process-fatal
    /// condition in this crate; the host should terminate with the returned
    /// diagnostic.
    pub async fn initialize(
        config: &AppConfig,
    ) -> Result<(Self, mpsc::Receiver<Event>), StoreError> {
        let db = Arc::new(db::establish_connection_from_app_config(config).await?);
        db::run_migrations(&db).await?;

        let (event_sender, event_receiver) = events::channel(config.event_channel_capacity);
        let event_sender = Arc::new(event_sender);

        let credentials = CredentialService::new(db.clone());
        credentials.seed_default_operators().await?;

        let stores = Self {
            catalog: CatalogService::new(db.clone(), event_sender.clone()),
            transactions: TransactionLogService::new(
                db.clone(),
                event_sender,
                config.require_known_product,
            ),
            credentials,
            assets: AssetLinker::new(config.asset_dir.clone()),
            db,
        };

        Ok((stores, event_receiver))
    }

    /// Access to the underlying connection handle, for health checks.
    pub fn db(&self) -> &DbPool {
        &self.db
    }

    /// Releases the connection pool. Call at process shutdown.
    pub async fn shutdown(self) -> Result<(), StoreError> {
        let Self {
            db,
            catalog,
            transactions,
            credentials,
            assets,
        } = self;
        drop((catalog, transactions, credentials, assets));

        match Arc::try_unwrap(db) {
            Ok(pool) => db::close_pool(pool).await,
            Err(_) => {
                // Another handle is still alive; the pool closes when the
                // last clone drops.
                debug!("connection handle still shared at shutdown; deferring close");
                Ok(())
            }
        }
    }
}
