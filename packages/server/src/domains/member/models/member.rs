use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use super::enums::{MaritalStatus, Role, Sector};
use crate::common::MemberId;
use crate::kernel::StoreError;

/// Member model - SQL persistence layer for the `members` table
#[derive(sqlx::FromRow, Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    /// Unique, stored trimmed and upper-cased
    pub login: String,
    /// `data:image/...;base64,` data URL
    pub photo: Option<String>,
    pub full_name: String,
    pub birth_date: NaiveDate,
    pub marital_status: MaritalStatus,
    pub spouse_name: Option<String>,
    pub wedding_date: Option<NaiveDate>,
    pub phone: String,
    pub email: String,

    // Address
    pub cep: String,
    pub street: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,

    pub has_vehicle: bool,
    pub vehicle_model: Option<String>,

    // Pastoral
    pub parish: String,
    pub community: String,
    pub sector: Sector,
    pub role: Role,
    pub join_date: NaiveDate,
    pub notes: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Writable columns of a member, already normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberFields {
    pub login: String,
    pub photo: Option<String>,
    pub full_name: String,
    pub birth_date: NaiveDate,
    pub marital_status: MaritalStatus,
    pub spouse_name: Option<String>,
    pub wedding_date: Option<NaiveDate>,
    pub phone: String,
    pub email: String,
    pub cep: String,
    pub street: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub has_vehicle: bool,
    pub vehicle_model: Option<String>,
    pub parish: String,
    pub community: String,
    pub sector: Sector,
    pub role: Role,
    pub join_date: NaiveDate,
    pub notes: Option<String>,
}

impl Member {
    pub fn is_coordinator(&self) -> bool {
        self.role.is_coordinator()
    }

    /// First word of the full name, used in greetings and messages
    pub fn first_name(&self) -> &str {
        self.full_name.split_whitespace().next().unwrap_or("")
    }

    /// Build a member from its writable fields (used by the in-memory store).
    pub fn from_fields(id: MemberId, fields: MemberFields, now: DateTime<Utc>) -> Self {
        Self {
            id,
            login: fields.login,
            photo: fields.photo,
            full_name: fields.full_name,
            birth_date: fields.birth_date,
            marital_status: fields.marital_status,
            spouse_name: fields.spouse_name,
            wedding_date: fields.wedding_date,
            phone: fields.phone,
            email: fields.email,
            cep: fields.cep,
            street: fields.street,
            neighborhood: fields.neighborhood,
            city: fields.city,
            state: fields.state,
            has_vehicle: fields.has_vehicle,
            vehicle_model: fields.vehicle_model,
            parish: fields.parish,
            community: fields.community,
            sector: fields.sector,
            role: fields.role,
            join_date: fields.join_date,
            notes: fields.notes,
            created_at: now,
            updated_at: now,
        }
    }

    /// Writable fields of an existing member
    pub fn fields(&self) -> MemberFields {
        MemberFields {
            login: self.login.clone(),
            photo: self.photo.clone(),
            full_name: self.full_name.clone(),
            birth_date: self.birth_date,
            marital_status: self.marital_status,
            spouse_name: self.spouse_name.clone(),
            wedding_date: self.wedding_date,
            phone: self.phone.clone(),
            email: self.email.clone(),
            cep: self.cep.clone(),
            street: self.street.clone(),
            neighborhood: self.neighborhood.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            has_vehicle: self.has_vehicle,
            vehicle_model: self.vehicle_model.clone(),
            parish: self.parish.clone(),
            community: self.community.clone(),
            sector: self.sector,
            role: self.role,
            join_date: self.join_date,
            notes: self.notes.clone(),
        }
    }

    /// Find member by ID
    pub async fn find_by_id(id: MemberId, pool: &PgPool) -> Result<Option<Self>, StoreError> {
        sqlx::query_as::<_, Self>("SELECT * FROM members WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// All members, alphabetical by full name
    pub async fn find_all_by_name(pool: &PgPool) -> Result<Vec<Self>, StoreError> {
        sqlx::query_as::<_, Self>("SELECT * FROM members ORDER BY full_name ASC")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    /// Case-insensitive exact login match
    pub async fn find_by_login(login: &str, pool: &PgPool) -> Result<Vec<Self>, StoreError> {
        sqlx::query_as::<_, Self>("SELECT * FROM members WHERE LOWER(login) = LOWER($1)")
            .bind(login)
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn find_by_birth_date(
        birth_date: NaiveDate,
        pool: &PgPool,
    ) -> Result<Vec<Self>, StoreError> {
        sqlx::query_as::<_, Self>("SELECT * FROM members WHERE birth_date = $1")
            .bind(birth_date)
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    /// Insert new member
    pub async fn insert(fields: &MemberFields, pool: &PgPool) -> Result<Self, StoreError> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO members (
                id, login, photo, full_name, birth_date, marital_status,
                spouse_name, wedding_date, phone, email, cep, street,
                neighborhood, city, state, has_vehicle, vehicle_model,
                parish, community, sector, role, join_date, notes
             )
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12,
                     $13, $14, $15, $16, $17, $18, $19, $20, $21, $22, $23)
             RETURNING *",
        )
        .bind(MemberId::new())
        .bind(&fields.login)
        .bind(&fields.photo)
        .bind(&fields.full_name)
        .bind(fields.birth_date)
        .bind(fields.marital_status)
        .bind(&fields.spouse_name)
        .bind(fields.wedding_date)
        .bind(&fields.phone)
        .bind(&fields.email)
        .bind(&fields.cep)
        .bind(&fields.street)
        .bind(&fields.neighborhood)
        .bind(&fields.city)
        .bind(&fields.state)
        .bind(fields.has_vehicle)
        .bind(&fields.vehicle_model)
        .bind(&fields.parish)
        .bind(&fields.community)
        .bind(fields.sector)
        .bind(fields.role)
        .bind(fields.join_date)
        .bind(&fields.notes)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Replace every writable column. Returns `None` when the id is unknown.
    pub async fn update(
        id: MemberId,
        fields: &MemberFields,
        pool: &PgPool,
    ) -> Result<Option<Self>, StoreError> {
        sqlx::query_as::<_, Self>(
            "UPDATE members SET
                login = $2, photo = $3, full_name = $4, birth_date = $5,
                marital_status = $6, spouse_name = $7, wedding_date = $8,
                phone = $9, email = $10, cep = $11, street = $12,
                neighborhood = $13, city = $14, state = $15, has_vehicle = $16,
                vehicle_model = $17, parish = $18, community = $19,
                sector = $20, role = $21, join_date = $22, notes = $23,
                updated_at = NOW()
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(&fields.login)
        .bind(&fields.photo)
        .bind(&fields.full_name)
        .bind(fields.birth_date)
        .bind(fields.marital_status)
        .bind(&fields.spouse_name)
        .bind(fields.wedding_date)
        .bind(&fields.phone)
        .bind(&fields.email)
        .bind(&fields.cep)
        .bind(&fields.street)
        .bind(&fields.neighborhood)
        .bind(&fields.city)
        .bind(&fields.state)
        .bind(fields.has_vehicle)
        .bind(&fields.vehicle_model)
        .bind(&fields.parish)
        .bind(&fields.community)
        .bind(fields.sector)
        .bind(fields.role)
        .bind(fields.join_date)
        .bind(&fields.notes)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    /// Set the role of the member with the given login (CLI promotion)
    pub async fn set_role_by_login(
        login: &str,
        role: Role,
        pool: &PgPool,
    ) -> Result<Option<Self>, StoreError> {
        sqlx::query_as::<_, Self>(
            "UPDATE members SET role = $2, updated_at = NOW()
             WHERE LOWER(TRIM(login)) = LOWER(TRIM($1))
             RETURNING *",
        )
        .bind(login)
        .bind(role)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    /// Delete member. Returns whether a row was removed.
    pub async fn delete(id: MemberId, pool: &PgPool) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Cheap connectivity probe against the members table
    pub async fn ping(pool: &PgPool) -> Result<(), StoreError> {
        sqlx::query("SELECT id FROM members LIMIT 1")
            .execute(pool)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// A single agent with every required field filled in.
    pub fn sample_fields(login: &str, full_name: &str) -> MemberFields {
        MemberFields {
            login: login.to_string(),
            photo: None,
            full_name: full_name.to_string(),
            birth_date: NaiveDate::from_ymd_opt(1980, 5, 17).unwrap(),
            marital_status: MaritalStatus::Solteiro,
            spouse_name: None,
            wedding_date: None,
            phone: "(11) 98765-4321".to_string(),
            email: "agente@paroquia.org".to_string(),
            cep: "01001-000".to_string(),
            street: "Praça da Sé".to_string(),
            neighborhood: "Sé".to_string(),
            city: "São Paulo".to_string(),
            state: "SP".to_string(),
            has_vehicle: false,
            vehicle_model: None,
            parish: "Catedral da Sé".to_string(),
            community: "Centro".to_string(),
            sector: Sector::PreMatrimonial,
            role: Role::Agente,
            join_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            notes: None,
        }
    }

    pub fn sample_member(login: &str, full_name: &str) -> Member {
        Member::from_fields(MemberId::new(), sample_fields(login, full_name), Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::sample_member;

    #[test]
    fn test_first_name() {
        let member = sample_member("MARIA", "  Maria José da Silva");
        assert_eq!(member.first_name(), "Maria");
    }

    #[test]
    fn test_fields_round_trip_through_from_fields() {
        let member = sample_member("JOAO", "João Batista");
        let rebuilt = super::Member::from_fields(member.id, member.fields(), member.created_at);
        assert_eq!(rebuilt.fields(), member.fields());
    }
}
