// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Naming convention: Base* for trait names (e.g., BaseMemberStore)

use async_trait::async_trait;
use brasilapi::{models::CepResponse, CepError};
use chrono::NaiveDate;
use thiserror::Error;

use crate::common::MemberId;
use crate::domains::member::models::{Member, MemberFields};

// =============================================================================
// Store errors
// =============================================================================

#[derive(Debug, Error)]
pub enum StoreError {
    /// The unique login constraint was violated
    #[error("login already in use")]
    DuplicateLogin,

    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return StoreError::DuplicateLogin;
            }
        }
        StoreError::Database(err)
    }
}

// =============================================================================
// Member Store Trait (Infrastructure - persistence)
// =============================================================================

#[async_trait]
pub trait BaseMemberStore: Send + Sync {
    async fn find_by_id(&self, id: MemberId) -> Result<Option<Member>, StoreError>;

    /// Every member, ordered by full name
    async fn list_by_name(&self) -> Result<Vec<Member>, StoreError>;

    /// Case-insensitive exact login match
    async fn find_by_login(&self, login: &str) -> Result<Vec<Member>, StoreError>;

    async fn find_by_birth_date(&self, birth_date: NaiveDate) -> Result<Vec<Member>, StoreError>;

    async fn insert(&self, fields: &MemberFields) -> Result<Member, StoreError>;

    /// Returns `None` when no member has this id
    async fn update(
        &self,
        id: MemberId,
        fields: &MemberFields,
    ) -> Result<Option<Member>, StoreError>;

    async fn delete(&self, id: MemberId) -> Result<bool, StoreError>;

    /// Connectivity probe
    async fn ping(&self) -> Result<(), StoreError>;
}

// =============================================================================
// CEP Lookup Trait (Infrastructure - postal code service)
// =============================================================================

#[async_trait]
pub trait BaseCepLookup: Send + Sync {
    async fn lookup(&self, cep: &str) -> Result<CepResponse, CepError>;
}
