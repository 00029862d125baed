//! Label enums stored as their Portuguese labels.
//!
//! The label is what the database holds and what reports print. The GraphQL
//! name (SCREAMING_SNAKE_CASE of the variant) is what the API exchanges.
//! Parsing accepts either, ignoring case and surrounding whitespace, because
//! older rows were typed in by hand.

use serde::{Deserialize, Serialize};
use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::postgres::{PgArgumentBuffer, PgTypeInfo, PgValueRef, Postgres};
use sqlx::{Decode, Encode, Type};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid {kind}: {value}")]
pub struct ParseLabelError {
    pub kind: &'static str,
    pub value: String,
}

macro_rules! label_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => ($label:literal, $graphql:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            Serialize, Deserialize, juniper::GraphQLEnum,
        )]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            fn graphql_name(&self) -> &'static str {
                match self {
                    $($name::$variant => $graphql,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl std::str::FromStr for $name {
            type Err = ParseLabelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().to_lowercase();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| {
                        v.label().to_lowercase() == wanted
                            || v.graphql_name().to_lowercase() == wanted
                    })
                    .ok_or_else(|| ParseLabelError {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }

        impl Type<Postgres> for $name {
            fn type_info() -> PgTypeInfo {
                <String as Type<Postgres>>::type_info()
            }

            fn compatible(ty: &PgTypeInfo) -> bool {
                <String as Type<Postgres>>::compatible(ty)
            }
        }

        impl Encode<'_, Postgres> for $name {
            fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
                <&str as Encode<Postgres>>::encode_by_ref(&self.label(), buf)
            }
        }

        impl<'r> Decode<'r, Postgres> for $name {
            fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
                let raw = <&str as Decode<'r, Postgres>>::decode(value)?;
                raw.parse::<Self>().map_err(Into::into)
            }
        }
    };
}

label_enum! {
    /// Estado civil
    MaritalStatus, "marital status" {
        Solteiro => ("Solteiro(a)", "SOLTEIRO"),
        Casado => ("Casado(a)", "CASADO"),
        Viuvo => ("Viúvo(a)", "VIUVO"),
        Separado => ("Separado(a)", "SEPARADO"),
    }
}

label_enum! {
    /// Pastoral sector the member serves in
    Sector, "sector" {
        PreMatrimonial => ("Pré-matrimonial", "PRE_MATRIMONIAL"),
        PosMatrimonial => ("Pós-matrimonial", "POS_MATRIMONIAL"),
        CasosEspeciais => ("Casos Especiais", "CASOS_ESPECIAIS"),
        ServicoAVida => ("Serviço à Vida", "SERVICO_A_VIDA"),
        CoordenadorParoquial => ("Coordenador Paróquial", "COORDENADOR_PAROQUIAL"),
    }
}

label_enum! {
    /// Access role. Coordinators manage every record, agents only their own.
    Role, "role" {
        Agente => ("Agente", "AGENTE"),
        Coordenador => ("Coordenador", "COORDENADOR"),
    }
}

impl Role {
    pub fn is_coordinator(&self) -> bool {
        matches!(self, Role::Coordenador)
    }
}

impl Default for MaritalStatus {
    fn default() -> Self {
        MaritalStatus::Solteiro
    }
}

impl Default for Sector {
    fn default() -> Self {
        Sector::PreMatrimonial
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Agente
    }
}
