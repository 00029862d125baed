//! Test fixtures for creating test data.

use anyhow::Result;
use chrono::NaiveDate;
use serde_json::{json, Value};
use server_core::domains::member::models::{MaritalStatus, Member, MemberFields, Role, Sector};
use sqlx::PgPool;

/// Fields of a valid agent, born 17/05/1980
pub fn member_fields(login: &str, full_name: &str) -> MemberFields {
    MemberFields {
        login: login.to_string(),
        photo: None,
        full_name: full_name.to_string(),
        birth_date: NaiveDate::from_ymd_opt(1980, 5, 17).unwrap(),
        marital_status: MaritalStatus::Solteiro,
        spouse_name: None,
        wedding_date: None,
        phone: "(11) 98765-4321".to_string(),
        email: format!("{}@paroquia.org", login.to_lowercase()),
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

pub fn coordinator_fields(login: &str, full_name: &str) -> MemberFields {
    MemberFields {
        role: Role::Coordenador,
        sector: Sector::CoordenadorParoquial,
        ..member_fields(login, full_name)
    }
}

/// `MemberInput` as GraphQL variables expect it
pub fn member_input(login: &str, full_name: &str, birth_date: &str) -> Value {
    json!({
        "login": login,
        "fullName": full_name,
        "birthDate": birth_date,
        "maritalStatus": "CASADO",
        "spouseName": "Carlos",
        "weddingDate": "2000-06-10",
        "phone": "11987654321",
        "email": "agente@paroquia.org",
        "cep": "01001000",
        "street": "Praça da Sé",
        "neighborhood": "Sé",
        "city": "São Paulo",
        "state": "sp",
        "hasVehicle": false,
        "parish": "Catedral da Sé",
        "community": "Centro",
        "sector": "POS_MATRIMONIAL",
        "role": "AGENTE",
        "joinDate": "2021-03-01",
        "notes": "   "
    })
}

/// Insert a member straight into the database
pub async fn create_test_member(pool: &PgPool, fields: MemberFields) -> Result<Member> {
    Ok(Member::insert(&fields, pool).await?)
}
