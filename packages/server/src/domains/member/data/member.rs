use chrono::{NaiveDate, Utc};
use juniper::{GraphQLInputObject, GraphQLObject};
use serde::{Deserialize, Serialize};

use crate::common::dates::parse_date_input;
use crate::common::MemberId;
use crate::domains::member::anniversary::{current_bodas, marriage_years};
use crate::domains::member::errors::MemberError;
use crate::domains::member::filter::MemberFilter;
use crate::domains::member::formatting::{format_cep, format_phone, non_blank, normalize_login};
use crate::domains::member::models::{MaritalStatus, Member, MemberFields, Role, Sector};

/// Member GraphQL data type
#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(description = "A Pastoral Familiar agent")]
pub struct MemberData {
    pub id: String,
    pub login: String,
    /// Photo as a `data:image/...;base64,` URL
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

    /// Completed years since the wedding date
    pub marriage_years: Option<i32>,

    /// Anniversary name for `marriage_years`, e.g. "Bodas de Prata"
    pub anniversary: Option<String>,
}

impl MemberData {
    pub fn from_member(member: Member, today: NaiveDate) -> Self {
        let years = member
            .wedding_date
            .map(|wedding| marriage_years(wedding, today) as i32);
        let anniversary = member
            .wedding_date
            .and_then(|wedding| current_bodas(wedding, today));

        Self {
            id: member.id.to_string(),
            login: member.login,
            photo: member.photo,
            full_name: member.full_name,
            birth_date: member.birth_date,
            marital_status: member.marital_status,
            spouse_name: member.spouse_name,
            wedding_date: member.wedding_date,
            phone: member.phone,
            email: member.email,
            cep: member.cep,
            street: member.street,
            neighborhood: member.neighborhood,
            city: member.city,
            state: member.state,
            has_vehicle: member.has_vehicle,
            vehicle_model: member.vehicle_model,
            parish: member.parish,
            community: member.community,
            sector: member.sector,
            role: member.role,
            join_date: member.join_date,
            notes: member.notes,
            marriage_years: years,
            anniversary,
        }
    }
}

impl From<Member> for MemberData {
    fn from(member: Member) -> Self {
        Self::from_member(member, Utc::now().date_naive())
    }
}

/// Form payload for registering or editing a member.
///
/// Dates accept `YYYY-MM-DD` or `DD/MM/YYYY`.
#[derive(Debug, Clone, Default, GraphQLInputObject)]
pub struct MemberInput {
    pub login: String,
    pub photo: Option<String>,
    pub full_name: String,
    pub birth_date: String,
    pub marital_status: Option<MaritalStatus>,
    pub spouse_name: Option<String>,
    pub wedding_date: Option<String>,
    pub phone: String,
    pub email: String,
    pub cep: Option<String>,
    pub street: Option<String>,
    pub neighborhood: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub has_vehicle: Option<bool>,
    pub vehicle_model: Option<String>,
    pub parish: Option<String>,
    pub community: Option<String>,
    pub sector: Option<Sector>,
    pub role: Option<Role>,
    pub join_date: String,
    pub notes: Option<String>,
}

fn required(value: &str, label: &'static str) -> Result<String, MemberError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(MemberError::MissingField(label));
    }
    Ok(trimmed.to_string())
}

fn required_date(value: &str, label: &'static str) -> Result<NaiveDate, MemberError> {
    let raw = required(value, label)?;
    parse_date_input(&raw)
        .ok_or_else(|| MemberError::Invalid(format!("Data inválida no campo {}.", label)))
}

fn optional_date(value: Option<String>, label: &'static str) -> Result<Option<NaiveDate>, MemberError> {
    match non_blank(value) {
        None => Ok(None),
        Some(raw) => parse_date_input(&raw)
            .map(Some)
            .ok_or_else(|| MemberError::Invalid(format!("Data inválida no campo {}.", label))),
    }
}

fn text(value: Option<String>) -> String {
    non_blank(value).unwrap_or_default()
}

impl MemberInput {
    /// Validate and normalize into storable fields.
    pub fn into_fields(self) -> Result<MemberFields, MemberError> {
        let full_name = required(&self.full_name, "Nome Completo")?;
        let login = normalize_login(&required(&self.login, "Login")?);
        let birth_date = required_date(&self.birth_date, "Data de Nascimento")?;
        let marital_status = self
            .marital_status
            .ok_or(MemberError::MissingField("Estado Civil"))?;
        let phone = format_phone(&required(&self.phone, "Telefone / WhatsApp")?);
        let email = required(&self.email, "E-mail")?;
        let sector = self.sector.ok_or(MemberError::MissingField("Setor Pastoral"))?;
        let role = self.role.ok_or(MemberError::MissingField("Função"))?;
        let join_date = required_date(&self.join_date, "Data de Ingresso")?;

        let photo = non_blank(self.photo);
        if let Some(photo) = &photo {
            if !photo.starts_with("data:image/") {
                return Err(MemberError::Invalid(
                    "Foto inválida. Envie um arquivo de imagem.".to_string(),
                ));
            }
        }

        Ok(MemberFields {
            login,
            photo,
            full_name,
            birth_date,
            marital_status,
            spouse_name: non_blank(self.spouse_name),
            wedding_date: optional_date(self.wedding_date, "Data de Casamento")?,
            phone,
            email,
            cep: self.cep.as_deref().map(format_cep).unwrap_or_default(),
            street: text(self.street),
            neighborhood: text(self.neighborhood),
            city: text(self.city),
            state: text(self.state).to_uppercase(),
            has_vehicle: self.has_vehicle.unwrap_or(false),
            vehicle_model: non_blank(self.vehicle_model),
            parish: text(self.parish),
            community: text(self.community),
            sector,
            role,
            join_date,
            notes: non_blank(self.notes),
        })
    }
}

/// Optional list filters. Omitted values mean "all".
#[derive(Debug, Clone, Default, GraphQLInputObject)]
pub struct MemberFilterInput {
    pub search: Option<String>,
    pub sector: Option<Sector>,
    pub marital_status: Option<MaritalStatus>,
    pub role: Option<Role>,
}

impl From<MemberFilterInput> for MemberFilter {
    fn from(input: MemberFilterInput) -> Self {
        Self {
            search: non_blank(input.search),
            sector: input.sector,
            marital_status: input.marital_status,
            role: input.role,
        }
    }
}

/// Parse a member id received from a client
pub fn parse_member_id(id: &str) -> Result<MemberId, MemberError> {
    MemberId::parse(id).map_err(|_| MemberError::Invalid("Identificador de agente inválido.".to_string()))
}

/// Result of a save, with the confirmation shown to the user
#[derive(Debug, Clone, GraphQLObject)]
pub struct SaveMemberPayload {
    pub member: MemberData,
    pub message: String,
}

#[derive(Debug, Clone, GraphQLObject)]
pub struct DeleteMemberPayload {
    pub id: String,
    pub message: String,
}
