use juniper::{FieldError, FieldResult, Value};

use crate::domains::address::{actions, data::AddressData};
use crate::server::graphql::context::GraphQLContext;

/// CEP lookup. Public, since the registration form uses it.
///
/// Failures are shown next to the field and are not written to the error log.
pub async fn lookup_cep(cep: String, ctx: &GraphQLContext) -> FieldResult<AddressData> {
    actions::lookup_cep(&cep, &ctx.deps)
        .await
        .map_err(|e| FieldError::new(e.to_string(), Value::null()))
}
