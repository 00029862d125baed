//! Server dependencies (using traits for testability)
//!
//! Central dependency container handed to every domain action. External
//! services sit behind `Base*` traits so tests can swap them out.

use async_trait::async_trait;
use brasilapi::{models::CepResponse, BrasilApiService, CepError};
use chrono::NaiveDate;
use sqlx::PgPool;
use std::sync::Arc;

use crate::common::MemberId;
use crate::domains::auth::JwtService;
use crate::domains::member::models::{Member, MemberFields};
use crate::kernel::{BaseCepLookup, BaseMemberStore, ErrorLog, StoreError};

// =============================================================================
// Postgres member store (implements BaseMemberStore trait)
// =============================================================================

/// Member persistence backed by the `members` table
#[derive(Clone)]
pub struct PostgresMemberStore {
    pool: PgPool,
}

impl PostgresMemberStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BaseMemberStore for PostgresMemberStore {
    async fn find_by_id(&self, id: MemberId) -> Result<Option<Member>, StoreError> {
        Member::find_by_id(id, &self.pool).await
    }

    async fn list_by_name(&self) -> Result<Vec<Member>, StoreError> {
        Member::find_all_by_name(&self.pool).await
    }

    async fn find_by_login(&self, login: &str) -> Result<Vec<Member>, StoreError> {
        Member::find_by_login(login, &self.pool).await
    }

    async fn find_by_birth_date(&self, birth_date: NaiveDate) -> Result<Vec<Member>, StoreError> {
        Member::find_by_birth_date(birth_date, &self.pool).await
    }

    async fn insert(&self, fields: &MemberFields) -> Result<Member, StoreError> {
        Member::insert(fields, &self.pool).await
    }

    async fn update(
        &self,
        id: MemberId,
        fields: &MemberFields,
    ) -> Result<Option<Member>, StoreError> {
        Member::update(id, fields, &self.pool).await
    }

    async fn delete(&self, id: MemberId) -> Result<bool, StoreError> {
        Member::delete(id, &self.pool).await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Member::ping(&self.pool).await
    }
}

// =============================================================================
// BrasilApiService Adapter (implements BaseCepLookup trait)
// =============================================================================

/// Wrapper around BrasilApiService that implements BaseCepLookup trait
pub struct BrasilApiAdapter(pub Arc<BrasilApiService>);

impl BrasilApiAdapter {
    pub fn new(service: Arc<BrasilApiService>) -> Self {
        Self(service)
    }
}

#[async_trait]
impl BaseCepLookup for BrasilApiAdapter {
    async fn lookup(&self, cep: &str) -> Result<CepResponse, CepError> {
        self.0.lookup_cep(cep).await
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to actions
#[derive(Clone)]
pub struct ServerDeps {
    pub members: Arc<dyn BaseMemberStore>,
    pub cep_lookup: Arc<dyn BaseCepLookup>,
    /// JWT service for session tokens
    pub jwt_service: Arc<JwtService>,
    /// Errors shown to users during this process lifetime
    pub error_log: ErrorLog,
    /// PNG/JPEG printed in PDF headers, if configured
    pub report_logo: Option<Arc<Vec<u8>>>,
    /// Database location printed in the error log (no credentials)
    pub database_label: String,
}

impl ServerDeps {
    pub fn new(
        members: Arc<dyn BaseMemberStore>,
        cep_lookup: Arc<dyn BaseCepLookup>,
        jwt_service: Arc<JwtService>,
        report_logo: Option<Arc<Vec<u8>>>,
        database_label: String,
    ) -> Self {
        Self {
            members,
            cep_lookup,
            jwt_service,
            error_log: ErrorLog::new(),
            report_logo,
            database_label,
        }
    }
}
