// TestDependencies - mock implementations for testing
//
// Provides in-memory services that can be injected into ServerDeps for tests.

use async_trait::async_trait;
use brasilapi::{models::CepResponse, normalize_cep, CepError};
use chrono::{NaiveDate, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use super::{BaseCepLookup, BaseMemberStore, ServerDeps, StoreError};
use crate::common::MemberId;
use crate::domains::auth::JwtService;
use crate::domains::member::models::{Member, MemberFields};

pub const TEST_JWT_SECRET: &str = "test_secret_key";
pub const TEST_JWT_ISSUER: &str = "test_issuer";

// =============================================================================
// In-memory member store
// =============================================================================

/// Member store kept in a vector. Enforces the unique login like the table does.
#[derive(Default)]
pub struct InMemoryMemberStore {
    members: Mutex<Vec<Member>>,
    fail_login_lookup: AtomicBool,
    fail_everything: AtomicBool,
}

impl InMemoryMemberStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a member directly, bypassing validation
    pub fn with_member(self, fields: MemberFields) -> Self {
        self.members
            .lock()
            .unwrap()
            .push(Member::from_fields(MemberId::new(), fields, Utc::now()));
        self
    }

    /// Make `find_by_login` fail (exercises the login fallback)
    pub fn failing_login_lookup(self) -> Self {
        self.fail_login_lookup.store(true, Ordering::SeqCst);
        self
    }

    /// Make every call fail, as if the database were down
    pub fn unavailable(self) -> Self {
        self.fail_everything.store(true, Ordering::SeqCst);
        self
    }

    pub fn snapshot(&self) -> Vec<Member> {
        self.members.lock().unwrap().clone()
    }

    pub fn find_login(&self, login: &str) -> Option<Member> {
        self.snapshot()
            .into_iter()
            .find(|m| m.login.eq_ignore_ascii_case(login))
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.fail_everything.load(Ordering::SeqCst) {
            return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    fn login_taken(members: &[Member], login: &str, except: Option<MemberId>) -> bool {
        members
            .iter()
            .any(|m| Some(m.id) != except && m.login.to_lowercase() == login.to_lowercase())
    }
}

#[async_trait]
impl BaseMemberStore for InMemoryMemberStore {
    async fn find_by_id(&self, id: MemberId) -> Result<Option<Member>, StoreError> {
        self.check_available()?;
        Ok(self.snapshot().into_iter().find(|m| m.id == id))
    }

    async fn list_by_name(&self) -> Result<Vec<Member>, StoreError> {
        self.check_available()?;
        let mut members = self.snapshot();
        members.sort_by(|a, b| a.full_name.cmp(&b.full_name));
        Ok(members)
    }

    async fn find_by_login(&self, login: &str) -> Result<Vec<Member>, StoreError> {
        self.check_available()?;
        if self.fail_login_lookup.load(Ordering::SeqCst) {
            return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
        }
        let wanted = login.to_lowercase();
        Ok(self
            .snapshot()
            .into_iter()
            .filter(|m| m.login.to_lowercase() == wanted)
            .collect())
    }

    async fn find_by_birth_date(&self, birth_date: NaiveDate) -> Result<Vec<Member>, StoreError> {
        self.check_available()?;
        Ok(self
            .snapshot()
            .into_iter()
            .filter(|m| m.birth_date == birth_date)
            .collect())
    }

    async fn insert(&self, fields: &MemberFields) -> Result<Member, StoreError> {
        self.check_available()?;
        let mut members = self.members.lock().unwrap();
        if Self::login_taken(&members, &fields.login, None) {
            return Err(StoreError::DuplicateLogin);
        }
        let member = Member::from_fields(MemberId::new(), fields.clone(), Utc::now());
        members.push(member.clone());
        Ok(member)
    }

    async fn update(
        &self,
        id: MemberId,
        fields: &MemberFields,
    ) -> Result<Option<Member>, StoreError> {
        self.check_available()?;
        let mut members = self.members.lock().unwrap();
        if Self::login_taken(&members, &fields.login, Some(id)) {
            return Err(StoreError::DuplicateLogin);
        }
        let Some(existing) = members.iter_mut().find(|m| m.id == id) else {
            return Ok(None);
        };
        let mut updated = Member::from_fields(id, fields.clone(), Utc::now());
        updated.created_at = existing.created_at;
        *existing = updated.clone();
        Ok(Some(updated))
    }

    async fn delete(&self, id: MemberId) -> Result<bool, StoreError> {
        self.check_available()?;
        let mut members = self.members.lock().unwrap();
        let before = members.len();
        members.retain(|m| m.id != id);
        Ok(members.len() < before)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check_available()
    }
}

// =============================================================================
// Mock CEP lookup
// =============================================================================

pub struct MockCepLookup {
    addresses: Mutex<HashMap<String, CepResponse>>,
    calls: Mutex<Vec<String>>,
    unavailable: AtomicBool,
}

impl MockCepLookup {
    pub fn new() -> Self {
        Self {
            addresses: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
            unavailable: AtomicBool::new(false),
        }
    }

    pub fn with_address(self, address: CepResponse) -> Self {
        self.addresses
            .lock()
            .unwrap()
            .insert(address.cep.clone(), address);
        self
    }

    pub fn unavailable(self) -> Self {
        self.unavailable.store(true, Ordering::SeqCst);
        self
    }

    /// CEPs that reached the service (after normalization)
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockCepLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseCepLookup for MockCepLookup {
    async fn lookup(&self, cep: &str) -> Result<CepResponse, CepError> {
        let cep = normalize_cep(cep)?;
        self.calls.lock().unwrap().push(cep.clone());

        if self.unavailable.load(Ordering::SeqCst) {
            return Err(CepError::Unavailable);
        }

        self.addresses
            .lock()
            .unwrap()
            .get(&cep)
            .cloned()
            .ok_or(CepError::NotFound)
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

pub struct TestDependencies {
    pub members: Arc<InMemoryMemberStore>,
    pub cep_lookup: Arc<MockCepLookup>,
    pub report_logo: Option<Arc<Vec<u8>>>,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            members: Arc::new(InMemoryMemberStore::new()),
            cep_lookup: Arc::new(MockCepLookup::new()),
            report_logo: None,
        }
    }

    /// Set the member store
    pub fn mock_members(mut self, store: InMemoryMemberStore) -> Self {
        self.members = Arc::new(store);
        self
    }

    /// Set the CEP lookup
    pub fn mock_cep(mut self, lookup: MockCepLookup) -> Self {
        self.cep_lookup = Arc::new(lookup);
        self
    }

    pub fn jwt_service() -> JwtService {
        JwtService::new(TEST_JWT_SECRET, TEST_JWT_ISSUER)
    }

    /// Convert into ServerDeps for testing
    pub fn into_server_deps(self) -> ServerDeps {
        ServerDeps::new(
            self.members,
            self.cep_lookup,
            Arc::new(Self::jwt_service()),
            self.report_logo,
            "memory".to_string(),
        )
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
