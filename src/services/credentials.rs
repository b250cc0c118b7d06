use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, SaltString},
    Argon2, PasswordHasher, PasswordVerifier,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};
use tracing::{info, instrument};

use crate::{
    db::DbPool,
    entities::operator_account::{self, Column as OperatorColumn, Entity as Operator},
    errors::StoreError,
};

/// The two fixed accounts seeded into an empty store. These are the
/// documented source credentials; only their Argon2 hashes are persisted.
const DEFAULT_OPERATORS: [(&str, &str); 2] =
    [("operator1", "password123"), ("operator2", "password123")];

/// Service for operator authentication
#[derive(Clone)]
pub struct CredentialService {
    db: Arc<DbPool>,
}

impl CredentialService {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    /// Inserts the default operator accounts iff the table is empty.
    /// Idempotent across repeated initializations.
    #[instrument(skip(self))]
    pub async fn seed_default_operators(&self) -> Result<(), StoreError> {
        let db = &*self.db;

        let count = Operator::find().count(db).await?;
        if count > 0 {
            return Ok(());
        }

        for (username, password) in DEFAULT_OPERATORS {
            let account = operator_account::ActiveModel {
                username: Set(username.to_string()),
                password_hash: Set(hash_password(password)?),
                created_at: Set(Utc::now()),
                ..Default::default()
            };
            account.insert(db).await?;
        }

        info!(
            accounts = DEFAULT_OPERATORS.len(),
            "seeded default operator accounts"
        );
        Ok(())
    }

    /// Returns true iff an account exists with this exact (case-sensitive)
    /// username and the password verifies against its stored hash.
    ///
    /// A storage or hash-parsing failure propagates as `Err`; callers MUST
    /// treat that as authentication denied, never as authenticated.
    #[instrument(skip(self, password))]
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<bool, StoreError> {
        let db = &*self.db;

        let Some(account) = Operator::find()
            .filter(OperatorColumn::Username.eq(username))
            .one(db)
            .await?
        else {
            return Ok(false);
        };

        let parsed =
            PasswordHash::new(&account.password_hash).map_err(|e| StoreError::Hash(e.to_string()))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

fn hash_password(password: &str) -> Result<String, StoreError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| StoreError::Hash(e.to_string()))
}
