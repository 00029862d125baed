use brasilapi::CepError;
use tracing::{debug, warn};

use crate::domains::address::data::AddressData;
use crate::kernel::ServerDeps;

/// Look a CEP up so the form can fill in the address.
pub async fn lookup_cep(cep: &str, deps: &ServerDeps) -> Result<AddressData, CepError> {
    match deps.cep_lookup.lookup(cep).await {
        Ok(response) => {
            debug!(cep = %response.cep, city = %response.city, "CEP resolved");
            Ok(AddressData::from(response))
        }
        Err(e) => {
            warn!(cep = %cep, error = %e, "CEP lookup failed");
            Err(e)
        }
    }
}
