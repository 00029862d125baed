use brasilapi::models::CepResponse;
use juniper::GraphQLObject;

use crate::domains::member::formatting::format_cep;

/// Address found for a CEP, used to prefill the member form
#[derive(Debug, Clone, PartialEq, Eq, GraphQLObject)]
pub struct AddressData {
    /// `NNNNN-NNN`
    pub cep: String,
    pub street: String,
    pub neighborhood: String,
    pub city: String,
    /// Two-letter UF
    pub state: String,
}

impl From<CepResponse> for AddressData {
    fn from(response: CepResponse) -> Self {
        Self {
            cep: format_cep(&response.cep),
            street: response.street.unwrap_or_default(),
            neighborhood: response.neighborhood.unwrap_or_default(),
            city: response.city,
            state: response.state,
        }
    }
}
