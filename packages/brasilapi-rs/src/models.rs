use serde::{Deserialize, Serialize};

/// Address returned by `GET /api/cep/v1/{cep}`.
///
/// City-wide CEPs come back without street or neighborhood.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CepResponse {
    pub cep: String,
    pub state: String,
    pub city: String,
    #[serde(default)]
    pub neighborhood: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
}
